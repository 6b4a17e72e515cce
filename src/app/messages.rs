use flipbook_core::PageIndex;
use iced::Point;
use iced::keyboard::{Key, Modifiers};
use iced::widget::image::Handle;
use std::time::Instant;

/// Messages emitted by the runtime and the view.
#[derive(Debug, Clone)]
pub enum Message {
    FlipForward,
    FlipBackward,
    /// Primary button or finger down. Mouse presses carry no position, so
    /// `None` means "use the last known cursor".
    PointerDown(Option<Point>),
    PointerMoved(Point),
    PointerUp(Option<Point>),
    Frame(Instant),
    WindowResized {
        width: f32,
        height: f32,
    },
    KeyPressed {
        key: Key,
        modifiers: Modifiers,
    },
    PagesPreloaded(Vec<(PageIndex, Handle)>),
    Quit,
}
