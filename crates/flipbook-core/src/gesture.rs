//! Drag-to-peel geometry.
//!
//! Pure helpers that turn pointer coordinates (relative to the book's left
//! edge) into grab decisions, peel progress and the release decision. The
//! session owns the [`GestureSession`] between pointer down and pointer up.

use crate::model::LayoutMode;
use crate::transition::{Direction, FlipPlan};

/// Outer fraction of a spread that accepts a grab on each side.
pub const SPREAD_GRAB_ZONE: f32 = 0.25;
/// Share of the book width a drag must cover for a full turn.
pub const DRAG_WIDTH_FRACTION: f32 = 0.45;
/// Release progress that must be exceeded to commit a turn.
pub const COMMIT_THRESHOLD: f32 = 0.35;

fn ratio(x: f32, book_width: f32) -> Option<f32> {
    (book_width > 0.0 && x.is_finite()).then(|| x / book_width)
}

/// Which turn a pointer-down at `x` would grab, if any.
pub fn grab_direction(x: f32, book_width: f32, layout: LayoutMode) -> Option<Direction> {
    let ratio = ratio(x, book_width)?;
    match layout {
        LayoutMode::Spread if ratio > 1.0 - SPREAD_GRAB_ZONE => Some(Direction::Forward),
        LayoutMode::Spread if ratio < SPREAD_GRAB_ZONE => Some(Direction::Backward),
        LayoutMode::Spread => None,
        LayoutMode::Single if ratio > 0.5 => Some(Direction::Forward),
        LayoutMode::Single => None,
    }
}

/// Which hit zone a click at `x` falls in: left half goes back, right half
/// goes forward. Clicks outside the book are dropped.
pub fn click_direction(x: f32, book_width: f32) -> Option<Direction> {
    let ratio = ratio(x, book_width)?;
    if !(0.0..=1.0).contains(&ratio) {
        return None;
    }
    if ratio < 0.5 {
        Some(Direction::Backward)
    } else {
        Some(Direction::Forward)
    }
}

/// Peel progress in `[0, 1]` for a horizontal displacement `dx`.
///
/// Forward turns progress as the pointer moves left, backward turns as it
/// moves right.
pub fn drag_progress(direction: Direction, dx: f32, book_width: f32, width_fraction: f32) -> f32 {
    let span = book_width * width_fraction;
    if span.is_nan() || span <= 0.0 || !dx.is_finite() {
        return 0.0;
    }
    let signed = match direction {
        Direction::Forward => -dx,
        Direction::Backward => dx,
    };
    (signed / span).clamp(0.0, 1.0)
}

/// Page angle that tracks `progress` directly (no easing).
pub fn drag_angle(direction: Direction, progress: f32) -> f32 {
    direction.full_turn() * progress
}

/// Whether a release at `progress` completes the turn.
pub fn should_commit(progress: f32, threshold: f32) -> bool {
    progress > threshold
}

/// State held from pointer down to pointer up.
#[derive(Debug, Clone)]
pub struct GestureSession {
    pub direction: Direction,
    pub start_x: f32,
    pub progress: f32,
    pub plan: FlipPlan,
}

impl GestureSession {
    pub fn new(plan: FlipPlan, start_x: f32) -> Self {
        Self {
            direction: plan.direction,
            start_x,
            progress: 0.0,
            plan,
        }
    }

    pub fn angle(&self) -> f32 {
        drag_angle(self.direction, self.progress)
    }
}
