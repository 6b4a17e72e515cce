mod surface;

use super::messages::Message;
use super::update::Effect;
use crate::config::AppConfig;
use crate::theme::Theme;
use flipbook_core::{BookSession, Direction, LayoutMode, PageIndex, PageResources};
use iced::widget::image::Handle;
use iced::{Point, Rectangle, Size, Task};
use std::collections::HashMap;
use std::time::{Duration, Instant};
use tracing::info;

pub(in crate::app) use surface::BookSurface;

/// Turns frame timestamps into deltas. The first frame after a pause yields
/// zero so an idle gap is never counted as animation time.
#[derive(Debug, Default)]
pub(in crate::app) struct FrameClock {
    last: Option<Instant>,
}

impl FrameClock {
    pub(in crate::app) fn delta(&mut self, now: Instant) -> Duration {
        let dt = self
            .last
            .map(|last| now.saturating_duration_since(last))
            .unwrap_or(Duration::ZERO);
        self.last = Some(now);
        dt
    }

    pub(in crate::app) fn reset(&mut self) {
        self.last = None;
    }
}

/// Application state: the page-turn session plus everything the view needs.
pub struct App {
    pub(super) config: AppConfig,
    pub(super) theme: Theme,
    pub(super) resources: PageResources,
    pub(super) session: BookSession,
    pub(super) surface: BookSurface,
    pub(super) pages: HashMap<PageIndex, Handle>,
    pub(super) cursor: Option<Point>,
    /// Click zone under the last press inside the book.
    pub(super) pressed_zone: Option<Direction>,
    pub(super) window: Size,
    pub(super) clock: FrameClock,
}

impl App {
    pub fn bootstrap(
        config: AppConfig,
        resources: PageResources,
        mut session: BookSession,
    ) -> (App, Task<Message>) {
        let mut surface = BookSurface::default();
        session.attach(&mut surface);
        info!(
            pages = resources.page_count(),
            states = session.states().len(),
            theme = %config.theme,
            "Opened book"
        );
        let mut app = App {
            theme: Theme::from(config.theme),
            window: Size::new(config.window_width, config.window_height),
            config,
            resources,
            session,
            surface,
            pages: HashMap::new(),
            cursor: None,
            pressed_zone: None,
            clock: FrameClock::default(),
        };
        let task = app.run_effect(Effect::PreloadPages);
        (app, task)
    }

    pub(super) fn book_width(&self) -> f32 {
        match self.session.layout() {
            LayoutMode::Single => self.config.page_width,
            LayoutMode::Spread => self.config.page_width * 2.0,
        }
    }

    /// Window-space rectangle of the book, centered in the window.
    pub(super) fn book_bounds(&self) -> Rectangle {
        let width = self.book_width();
        let height = self.config.page_height;
        Rectangle {
            x: ((self.window.width - width) / 2.0).max(0.0),
            y: ((self.window.height - height) / 2.0).max(0.0),
            width,
            height,
        }
    }

    /// Pointer x relative to the book's left edge.
    pub(super) fn book_x(&self, point: Point) -> f32 {
        point.x - self.book_bounds().x
    }

    /// Image for `page`, preferring the preloaded handle.
    pub(super) fn page_handle(&self, page: PageIndex) -> Handle {
        self.pages
            .get(&page)
            .cloned()
            .unwrap_or_else(|| Handle::from_path(self.resources.uri(page)))
    }
}
