//! Transition table.
//!
//! Covers switch layout instantly; spread-to-spread moves animate. The
//! decision depends only on where the current state sits in the sequence
//! ([`Boundary`]) and the requested [`Direction`].

use crate::curl::CurlSide;
use crate::model::{LayoutMode, PageIndex, Spread};
use crate::sink::{FlipFaces, FlipSetup, Slot};
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    Forward,
    Backward,
}

impl Direction {
    pub fn curl_side(self) -> CurlSide {
        match self {
            Direction::Forward => CurlSide::Right,
            Direction::Backward => CurlSide::Left,
        }
    }

    /// Angle of a completed turn in this direction.
    pub fn full_turn(self) -> f32 {
        match self {
            Direction::Forward => -180.0,
            Direction::Backward => 180.0,
        }
    }
}

/// Position of a state index within the sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Boundary {
    FrontCover,
    /// Index 1 when more spreads follow.
    FirstSpread,
    /// Index 1 when it is also the last spread.
    OnlySpread,
    /// Index `len - 2` when more spreads precede it.
    LastSpread,
    BackCover,
    Interior,
}

impl Boundary {
    pub fn classify(index: usize, len: usize) -> Self {
        let last = len.saturating_sub(1);
        if index == 0 {
            Boundary::FrontCover
        } else if index >= last {
            Boundary::BackCover
        } else if index == 1 && index + 2 == len {
            Boundary::OnlySpread
        } else if index == 1 {
            Boundary::FirstSpread
        } else if index + 2 == len {
            Boundary::LastSpread
        } else {
            Boundary::Interior
        }
    }
}

/// Knobs the table consults.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TransitionRules {
    /// Forward from the back cover jumps to the front cover.
    pub loop_to_cover: bool,
    /// Horizontal placement of a forward flip (one page width).
    pub flip_offset: f32,
}

impl Default for TransitionRules {
    fn default() -> Self {
        Self {
            loop_to_cover: true,
            flip_offset: 504.0,
        }
    }
}

/// Everything needed to run an animated spread-to-spread turn.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FlipPlan {
    pub direction: Direction,
    pub from_state: usize,
    pub to_state: usize,
    /// Slot updated before the turn starts, exposing the page underneath.
    pub reveal: (Slot, Option<PageIndex>),
    pub setup: FlipSetup,
}

impl FlipPlan {
    pub fn end_angle(&self) -> f32 {
        self.direction.full_turn()
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Transition {
    Ignored,
    Instant { to_state: usize, layout: LayoutMode },
    Animated(FlipPlan),
}

/// Decide what `direction` does from `current`.
pub fn plan_transition(
    states: &[Spread],
    current: usize,
    direction: Direction,
    rules: &TransitionRules,
) -> Transition {
    let len = states.len();
    if len == 0 {
        return Transition::Ignored;
    }
    let instant = |to_state: usize| Transition::Instant {
        to_state,
        layout: states[to_state].layout(),
    };

    use Boundary::*;
    use Direction::*;
    match (Boundary::classify(current, len), direction) {
        (BackCover, Forward) if rules.loop_to_cover => instant(0),
        (BackCover, Forward) => Transition::Ignored,
        (FrontCover, Forward) => instant(1.min(len - 1)),
        (LastSpread | OnlySpread, Forward) => instant(len - 1),
        (FirstSpread | Interior, Forward) => {
            Transition::Animated(animated(states, current, Forward, rules))
        }
        (FrontCover, Backward) => Transition::Ignored,
        (BackCover, Backward) => instant(len.saturating_sub(2)),
        (FirstSpread | OnlySpread, Backward) => instant(0),
        (LastSpread | Interior, Backward) => {
            Transition::Animated(animated(states, current, Backward, rules))
        }
    }
}

fn animated(
    states: &[Spread],
    current: usize,
    direction: Direction,
    rules: &TransitionRules,
) -> FlipPlan {
    let from = states[current];
    match direction {
        Direction::Forward => {
            let to = states[current + 1];
            FlipPlan {
                direction,
                from_state: current,
                to_state: current + 1,
                reveal: (Slot::Right, Some(to.right)),
                setup: FlipSetup {
                    side: CurlSide::Right,
                    faces: FlipFaces {
                        front: Some(from.right),
                        back: to.left,
                    },
                    offset: rules.flip_offset,
                },
            }
        }
        Direction::Backward => {
            let to = states[current - 1];
            FlipPlan {
                direction,
                from_state: current,
                to_state: current - 1,
                reveal: (Slot::Left, to.left),
                setup: FlipSetup {
                    side: CurlSide::Left,
                    faces: FlipFaces {
                        front: from.left,
                        back: Some(to.right),
                    },
                    offset: 0.0,
                },
            }
        }
    }
}
