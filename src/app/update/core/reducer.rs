use super::super::super::messages::Message;
use super::super::super::state::App;
use super::super::Effect;
use iced::Size;
use tracing::{debug, info};

impl App {
    pub(super) fn reduce(&mut self, message: Message) -> Vec<Effect> {
        let mut effects = Vec::new();

        match message {
            Message::FlipForward => self.handle_flip_forward(),
            Message::FlipBackward => self.handle_flip_backward(),
            Message::PointerDown(point) => self.handle_pointer_down(point),
            Message::PointerMoved(point) => self.handle_pointer_moved(point),
            Message::PointerUp(point) => self.handle_pointer_up(point),
            Message::Frame(now) => self.handle_frame(now),
            Message::WindowResized { width, height } => {
                debug!(width, height, "Window resized");
                self.window = Size::new(width, height);
            }
            Message::KeyPressed { key, modifiers } => {
                if let Some(shortcut) = self.shortcut_message_for_key(key, modifiers) {
                    effects.extend(self.reduce(shortcut));
                }
            }
            Message::PagesPreloaded(pages) => {
                info!(count = pages.len(), "Page images ready");
                self.pages.extend(pages);
            }
            Message::Quit => {
                info!("Quit requested");
                effects.push(Effect::Quit);
            }
        }

        effects
    }
}
