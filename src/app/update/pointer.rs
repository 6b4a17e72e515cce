use super::super::state::App;
use flipbook_core::gesture::click_direction;
use flipbook_core::{BookCommand, Direction};
use iced::Point;

impl App {
    pub(super) fn handle_pointer_down(&mut self, point: Option<Point>) {
        let Some(point) = point.or(self.cursor) else {
            return;
        };
        self.cursor = Some(point);
        self.pressed_zone = self.click_zone(point);
        if self.pressed_zone.is_none() {
            return;
        }
        let x = self.book_x(point);
        let book_width = self.book_width();
        self.dispatch(BookCommand::PointerDown { x, book_width });
    }

    /// Moves keep driving a drag after the pointer leaves the book.
    pub(super) fn handle_pointer_moved(&mut self, point: Point) {
        self.cursor = Some(point);
        if !self.session.is_dragging() {
            return;
        }
        let x = self.book_x(point);
        let book_width = self.book_width();
        self.dispatch(BookCommand::PointerMove { x, book_width });
    }

    /// A release ends any drag first. Press and release on the same half of
    /// the book also count as a click, which the session refuses while the
    /// release animation runs.
    pub(super) fn handle_pointer_up(&mut self, point: Option<Point>) {
        let pressed_zone = self.pressed_zone.take();
        let Some(point) = point.or(self.cursor) else {
            return;
        };
        self.cursor = Some(point);
        let x = self.book_x(point);
        let book_width = self.book_width();

        if self.session.is_dragging() {
            self.dispatch(BookCommand::PointerUp { x, book_width });
        }
        if pressed_zone.is_some() && pressed_zone == self.click_zone(point) {
            self.dispatch(BookCommand::Click { x, book_width });
        }
    }

    fn click_zone(&self, point: Point) -> Option<Direction> {
        if !self.book_bounds().contains(point) {
            return None;
        }
        click_direction(self.book_x(point), self.book_width())
    }
}
