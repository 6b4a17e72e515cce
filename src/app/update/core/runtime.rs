use super::super::super::messages::Message;
use super::super::super::state::App;
use super::super::Effect;
use crate::preload::decode_pages;
use iced::Event;
use iced::Task;
use iced::event;
use iced::keyboard;
use iced::mouse;
use iced::touch;
use iced::window;
use tracing::info;

impl App {
    pub(in crate::app) fn run_effect(&mut self, effect: Effect) -> Task<Message> {
        match effect {
            Effect::PreloadPages => {
                let resources = self.resources.clone();
                info!(pages = resources.page_count(), "Dispatching page preload task");
                Task::perform(
                    async move { decode_pages(&resources) },
                    Message::PagesPreloaded,
                )
            }
            Effect::Quit => iced::exit(),
        }
    }
}

pub(super) fn runtime_event_to_message(
    event: Event,
    status: event::Status,
    _window_id: window::Id,
) -> Option<Message> {
    if status == event::Status::Captured {
        return None;
    }
    match event {
        Event::Window(window::Event::Resized(size)) => Some(Message::WindowResized {
            width: size.width,
            height: size.height,
        }),
        Event::Mouse(mouse::Event::CursorMoved { position }) => {
            Some(Message::PointerMoved(position))
        }
        Event::Mouse(mouse::Event::ButtonPressed(mouse::Button::Left)) => {
            Some(Message::PointerDown(None))
        }
        Event::Mouse(mouse::Event::ButtonReleased(mouse::Button::Left)) => {
            Some(Message::PointerUp(None))
        }
        Event::Touch(touch::Event::FingerPressed { position, .. }) => {
            Some(Message::PointerDown(Some(position)))
        }
        Event::Touch(touch::Event::FingerMoved { position, .. }) => {
            Some(Message::PointerMoved(position))
        }
        Event::Touch(
            touch::Event::FingerLifted { position, .. } | touch::Event::FingerLost { position, .. },
        ) => Some(Message::PointerUp(Some(position))),
        Event::Keyboard(keyboard::Event::KeyPressed { key, modifiers, .. }) => {
            Some(Message::KeyPressed { key, modifiers })
        }
        _ => None,
    }
}
