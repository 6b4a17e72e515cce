//! Peel overlay parameters.
//!
//! [`render_curl`] is a pure function of side and progress. [`OverlayState`]
//! holds what the overlay layers currently show and keeps the two curl sides
//! mutually exclusive.

use serde::Serialize;
use std::fmt;

/// Page edge the peel starts from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CurlSide {
    Left,
    Right,
}

/// A size relative to the page, rendered as `"<n>%"`.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize)]
#[serde(transparent)]
pub struct Percent(pub f32);

impl Percent {
    pub const ZERO: Percent = Percent(0.0);

    pub fn fraction(self) -> f32 {
        self.0 / 100.0
    }
}

impl fmt::Display for Percent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.0)
    }
}

const CURL_SEED: f32 = 6.0;
const CURL_SPAN: f32 = 58.0;
const MAX_OVERLAY_ALPHA: f32 = 0.98;
const OVERLAY_GAIN: f32 = 1.2;
const SHADE_GAIN: f32 = 0.55;
const SHINE_GAIN: f32 = 0.35;

/// Overlay parameters for one peel position.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CurlFrame {
    pub side: CurlSide,
    pub size: Percent,
    pub overlay_alpha: f32,
    pub shade: f32,
    pub shine: f32,
}

/// Compute the peel overlay for `side` at `progress` (clamped to `[0, 1]`).
pub fn render_curl(side: CurlSide, progress: f32) -> CurlFrame {
    let progress = progress.clamp(0.0, 1.0);
    CurlFrame {
        side,
        size: Percent(CURL_SEED + progress * CURL_SPAN),
        overlay_alpha: MAX_OVERLAY_ALPHA.min(progress * OVERLAY_GAIN),
        shade: SHADE_GAIN * progress,
        shine: SHINE_GAIN * progress,
    }
}

/// What a frame asks of the overlay layers.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CurlUpdate {
    Show(CurlFrame),
    Clear,
}

/// One curl layer (left or right corner).
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct CurlLayer {
    pub size: Percent,
    pub alpha: f32,
}

/// Current values of the shade, shine and both curl layers.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct OverlayState {
    pub shade: f32,
    pub shine: f32,
    pub left: CurlLayer,
    pub right: CurlLayer,
}

impl OverlayState {
    pub fn apply(&mut self, frame: &CurlFrame) {
        self.shade = frame.shade;
        self.shine = frame.shine;
        let (active, idle) = match frame.side {
            CurlSide::Left => (&mut self.left, &mut self.right),
            CurlSide::Right => (&mut self.right, &mut self.left),
        };
        active.size = frame.size;
        active.alpha = frame.overlay_alpha;
        idle.alpha = 0.0;
    }

    pub fn update(&mut self, update: CurlUpdate) {
        match update {
            CurlUpdate::Show(frame) => self.apply(&frame),
            CurlUpdate::Clear => self.clear(),
        }
    }

    pub fn clear(&mut self) {
        *self = OverlayState::default();
    }

    pub fn layer(&self, side: CurlSide) -> &CurlLayer {
        match side {
            CurlSide::Left => &self.left,
            CurlSide::Right => &self.right,
        }
    }

    pub fn is_clear(&self) -> bool {
        *self == OverlayState::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn seed_size_at_zero_progress() {
        let frame = render_curl(CurlSide::Right, 0.0);
        assert_eq!(frame.size.to_string(), "6%");
        assert_eq!(frame.overlay_alpha, 0.0);
        assert_eq!(frame.shade, 0.0);
        assert_eq!(frame.shine, 0.0);
    }

    #[test]
    fn overlay_alpha_saturates_below_one() {
        let frame = render_curl(CurlSide::Left, 1.0);
        assert_eq!(frame.overlay_alpha, 0.98);
        assert_eq!(frame.size, Percent(64.0));
        assert!((frame.shade - 0.55).abs() < f32::EPSILON);
        assert!((frame.shine - 0.35).abs() < f32::EPSILON);
    }

    #[test]
    fn progress_outside_unit_range_is_clamped() {
        assert_eq!(
            render_curl(CurlSide::Right, 3.0),
            render_curl(CurlSide::Right, 1.0)
        );
        assert_eq!(
            render_curl(CurlSide::Right, -1.0),
            render_curl(CurlSide::Right, 0.0)
        );
    }

    #[test]
    fn activating_one_side_hides_the_other() {
        let mut overlay = OverlayState::default();
        overlay.apply(&render_curl(CurlSide::Right, 0.5));
        assert!(overlay.right.alpha > 0.0);

        overlay.apply(&render_curl(CurlSide::Left, 0.25));
        assert_eq!(overlay.right.alpha, 0.0);
        assert!(overlay.left.alpha > 0.0);
        assert_eq!(overlay.left.size, Percent(6.0 + 0.25 * 58.0));
    }

    #[test]
    fn clear_is_idempotent() {
        let mut overlay = OverlayState::default();
        overlay.apply(&render_curl(CurlSide::Right, 0.8));
        overlay.clear();
        let once = overlay;
        overlay.clear();
        assert_eq!(overlay, once);
        assert!(overlay.is_clear());
        assert_eq!(overlay.layer(CurlSide::Right).size, Percent::ZERO);
    }

    proptest! {
        #[test]
        fn outputs_stay_in_range(progress in -2.0f32..3.0) {
            let frame = render_curl(CurlSide::Right, progress);
            prop_assert!(frame.size.0 >= 6.0 && frame.size.0 <= 64.0);
            prop_assert!(frame.overlay_alpha >= 0.0 && frame.overlay_alpha <= 0.98);
            prop_assert!(frame.shade >= 0.0 && frame.shade <= 0.55);
            prop_assert!(frame.shine >= 0.0 && frame.shine <= 0.35);
        }

        #[test]
        fn size_grows_with_progress(a in 0.0f32..1.0, b in 0.0f32..1.0) {
            let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
            let small = render_curl(CurlSide::Left, lo);
            let large = render_curl(CurlSide::Left, hi);
            prop_assert!(small.size <= large.size);
            prop_assert!(small.overlay_alpha <= large.overlay_alpha);
        }
    }
}
