mod messages;
mod state;
mod update;
mod view;

pub use state::App;

use crate::config::AppConfig;
use flipbook_core::{BookSession, PageResources};
use iced::{Size, Theme, window};

/// Launch the viewer for an already validated book.
pub fn run_app(
    config: AppConfig,
    resources: PageResources,
    session: BookSession,
) -> iced::Result {
    let window_settings = window::Settings {
        size: Size::new(config.window_width, config.window_height),
        ..window::Settings::default()
    };

    iced::application("Flipbook", App::update, App::view)
        .window(window_settings)
        .subscription(App::subscription)
        .theme(|app: &App| Theme::from(app.theme))
        .run_with(move || App::bootstrap(config, resources, session))
}
