//! Timed flip animation.
//!
//! A [`FlipAnimation`] accumulates frame deltas as a [`Duration`] and turns the
//! elapsed fraction into a page angle (eased) and a curl update (linear,
//! first half only). It never cancels; the owner keeps advancing it until it
//! reports [`FlipStep::Finished`].

use crate::curl::{CurlSide, CurlUpdate, render_curl};
use std::time::Duration;

/// Default length of a programmatic or release flip.
pub const FLIP_DURATION: Duration = Duration::from_millis(650);

/// Cubic ease-in-out over `[0, 1]`.
#[inline]
pub fn ease_in_out(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    if t < 0.5 {
        4.0 * t * t * t
    } else {
        1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
    }
}

/// Visual state for one in-progress frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FlipFrame {
    pub angle: f32,
    pub curl: CurlUpdate,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FlipStep {
    Frame(FlipFrame),
    Finished,
}

#[derive(Debug, Clone)]
pub struct FlipAnimation {
    start_angle: f32,
    end_angle: f32,
    side: CurlSide,
    elapsed: Duration,
    duration: Duration,
    finished: bool,
}

impl FlipAnimation {
    pub fn new(start_angle: f32, end_angle: f32, side: CurlSide, duration: Duration) -> Self {
        Self {
            start_angle,
            end_angle,
            side,
            elapsed: Duration::ZERO,
            duration: if duration.is_zero() {
                Duration::from_nanos(1)
            } else {
                duration
            },
            finished: false,
        }
    }

    /// Elapsed fraction before easing, in `[0, 1]`.
    pub fn raw_progress(&self) -> f32 {
        let t = self.elapsed.as_secs_f64() / self.duration.as_secs_f64();
        (t as f32).clamp(0.0, 1.0)
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// The frame for the current elapsed time.
    pub fn frame(&self) -> FlipFrame {
        let raw = self.raw_progress();
        let t = ease_in_out(raw);
        let angle = self.start_angle + (self.end_angle - self.start_angle) * t;
        let curl = if raw < 0.5 {
            CurlUpdate::Show(render_curl(self.side, (raw * 2.0).clamp(0.0, 1.0)))
        } else {
            CurlUpdate::Clear
        };
        FlipFrame { angle, curl }
    }

    /// Advance by one frame delta.
    ///
    /// Returns [`FlipStep::Finished`] from the frame where the elapsed time
    /// reaches the duration onward. No frame is produced for that last step.
    pub fn advance(&mut self, dt: Duration) -> FlipStep {
        if self.finished {
            return FlipStep::Finished;
        }
        self.elapsed = self.elapsed.saturating_add(dt);
        if self.elapsed >= self.duration {
            self.finished = true;
            FlipStep::Finished
        } else {
            FlipStep::Frame(self.frame())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::curl::CurlFrame;
    use proptest::prelude::*;

    const MS_65: Duration = Duration::from_millis(65);

    #[test]
    fn ease_in_out_boundaries() {
        assert_eq!(ease_in_out(0.0), 0.0);
        assert_eq!(ease_in_out(1.0), 1.0);
        assert_eq!(ease_in_out(0.5), 0.5);
    }

    #[test]
    fn ease_in_out_is_continuous_at_midpoint() {
        let below = ease_in_out(0.5 - 1e-4);
        let above = ease_in_out(0.5 + 1e-4);
        assert!((below - 0.5).abs() < 1e-3);
        assert!((above - 0.5).abs() < 1e-3);
    }

    #[test]
    fn angle_follows_eased_progress() {
        let mut anim = FlipAnimation::new(0.0, -180.0, CurlSide::Right, FLIP_DURATION);
        // 4 * 65ms = 260ms, raw = 0.4
        for _ in 0..3 {
            anim.advance(MS_65);
        }
        let FlipStep::Frame(frame) = anim.advance(MS_65) else {
            panic!("animation should still be running");
        };
        let expected = -180.0 * ease_in_out(0.4);
        assert!((frame.angle - expected).abs() < 1e-3);
        assert!(frame.angle > -180.0 * 0.4, "eased angle lags linear early on");
    }

    #[test]
    fn curl_shows_only_during_first_half() {
        let mut anim = FlipAnimation::new(0.0, 180.0, CurlSide::Left, FLIP_DURATION);
        let FlipStep::Frame(early) = anim.advance(MS_65) else {
            panic!("expected frame");
        };
        match early.curl {
            CurlUpdate::Show(CurlFrame { side, size, .. }) => {
                assert_eq!(side, CurlSide::Left);
                // raw = 0.1, curl progress = 0.2
                assert!((size.0 - (6.0 + 0.2 * 58.0)).abs() < 1e-3);
            }
            CurlUpdate::Clear => panic!("curl should be visible early"),
        }

        anim.advance(Duration::from_millis(260));
        let FlipStep::Frame(late) = anim.advance(Duration::from_millis(10)) else {
            panic!("expected frame");
        };
        assert_eq!(late.curl, CurlUpdate::Clear);
    }

    #[test]
    fn finishes_exactly_once_then_stays_finished() {
        let mut anim = FlipAnimation::new(-72.0, 0.0, CurlSide::Right, FLIP_DURATION);
        let steps: Vec<FlipStep> = (0..10).map(|_| anim.advance(MS_65)).collect();
        let finished = steps
            .iter()
            .filter(|step| matches!(step, FlipStep::Finished))
            .count();
        assert_eq!(finished, 1, "10 x 65ms lands exactly on the duration");
        assert_eq!(steps.last(), Some(&FlipStep::Finished));
        assert!(anim.is_finished());
        assert_eq!(anim.advance(MS_65), FlipStep::Finished);
    }

    #[test]
    fn zero_duration_finishes_on_first_frame() {
        let mut anim = FlipAnimation::new(0.0, -180.0, CurlSide::Right, Duration::ZERO);
        assert_eq!(anim.advance(Duration::from_millis(1)), FlipStep::Finished);
    }

    proptest! {
        #[test]
        fn ease_stays_in_unit_range(t in -1.0f32..2.0) {
            let v = ease_in_out(t);
            prop_assert!((0.0..=1.0).contains(&v));
        }

        #[test]
        fn ease_is_monotonic(a in 0.0f32..1.0, b in 0.0f32..1.0) {
            let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
            prop_assert!(ease_in_out(lo) <= ease_in_out(hi) + 1e-6);
        }

        #[test]
        fn angle_stays_between_endpoints(ms in 0u64..650, start in -180.0f32..0.0) {
            let mut anim = FlipAnimation::new(start, 0.0, CurlSide::Right, FLIP_DURATION);
            if let FlipStep::Frame(frame) = anim.advance(Duration::from_millis(ms)) {
                prop_assert!(frame.angle >= start - 1e-3 && frame.angle <= 1e-3);
            }
        }
    }
}
