use crate::animator::{FLIP_DURATION, FlipAnimation, FlipStep};
use crate::curl::{CurlUpdate, OverlayState, render_curl};
use crate::error::{BookError, Result};
use crate::gesture::{self, COMMIT_THRESHOLD, DRAG_WIDTH_FRACTION, GestureSession};
use crate::model::{LayoutMode, Spread, build_states};
use crate::sink::{RenderSink, Slot};
use crate::transition::{Direction, FlipPlan, Transition, TransitionRules, plan_transition};
use serde::Serialize;
use std::time::Duration;
use tracing::{debug, info, trace};

/// Timing and gesture tunables.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FlipTuning {
    pub duration: Duration,
    pub drag_width_fraction: f32,
    pub commit_threshold: f32,
    pub flip_offset: f32,
    pub loop_to_cover: bool,
}

impl Default for FlipTuning {
    fn default() -> Self {
        let rules = TransitionRules::default();
        Self {
            duration: FLIP_DURATION,
            drag_width_fraction: DRAG_WIDTH_FRACTION,
            commit_threshold: COMMIT_THRESHOLD,
            flip_offset: rules.flip_offset,
            loop_to_cover: rules.loop_to_cover,
        }
    }
}

impl FlipTuning {
    pub fn validate(&self) -> Result<()> {
        if self.duration.is_zero() {
            return Err(BookError::InvalidTuning("flip duration must be positive"));
        }
        if !(self.drag_width_fraction > 0.0 && self.drag_width_fraction <= 1.0) {
            return Err(BookError::InvalidTuning(
                "drag width fraction must be in (0, 1]",
            ));
        }
        if !(0.0..=1.0).contains(&self.commit_threshold) {
            return Err(BookError::InvalidTuning("commit threshold must be in [0, 1]"));
        }
        if !self.flip_offset.is_finite() || self.flip_offset < 0.0 {
            return Err(BookError::InvalidTuning(
                "flip offset must be a non-negative number",
            ));
        }
        Ok(())
    }

    fn rules(&self) -> TransitionRules {
        TransitionRules {
            loop_to_cover: self.loop_to_cover,
            flip_offset: self.flip_offset,
        }
    }
}

/// Why an input had no effect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum IgnoreReason {
    /// A flip or drag already owns the book.
    Busy,
    /// No state exists in the requested direction, or dragging is disabled here.
    Boundary,
    /// Press landed where no page can be grabbed.
    OutsideGrabZone,
    /// Click landed outside the book.
    OutsideBook,
    NotDragging,
    /// Frame delivered with nothing to animate.
    Idle,
}

/// Result of feeding one input to the session.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Outcome {
    Ignored(IgnoreReason),
    /// Instant layout switch; the committed state already changed.
    Moved { to_state: usize },
    /// An animation is running and will settle on `to_state`.
    AnimationStarted { to_state: usize },
    DragStarted { direction: Direction },
    DragUpdated { progress: f32 },
    Frame { angle: f32 },
    Settled { state: usize, committed: bool },
}

impl Outcome {
    pub fn is_ignored(&self) -> bool {
        matches!(self, Outcome::Ignored(_))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PhaseLabel {
    Idle,
    Dragging,
    Animating,
}

#[derive(Debug, Clone)]
struct Settle {
    animation: FlipAnimation,
    settle_to: usize,
    committed: bool,
}

#[derive(Debug, Clone, Default)]
enum Phase {
    #[default]
    Idle,
    Dragging(GestureSession),
    Animating(Settle),
}

#[derive(Debug, Clone, Serialize)]
pub struct BookSnapshot {
    pub current_state: usize,
    pub total_states: usize,
    pub layout: LayoutMode,
    pub spread: Spread,
    pub phase: PhaseLabel,
    pub busy: bool,
    pub drag_progress: Option<f32>,
}

/// Pointer coordinates are relative to the book's left edge.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum BookCommand {
    FlipForward,
    FlipBackward,
    Click { x: f32, book_width: f32 },
    PointerDown { x: f32, book_width: f32 },
    PointerMove { x: f32, book_width: f32 },
    PointerUp { x: f32, book_width: f32 },
    Frame { dt: Duration },
}

impl BookCommand {
    pub fn action(&self) -> &'static str {
        match self {
            Self::FlipForward => "book_flip_forward",
            Self::FlipBackward => "book_flip_backward",
            Self::Click { .. } => "book_click",
            Self::PointerDown { .. } => "book_pointer_down",
            Self::PointerMove { .. } => "book_pointer_move",
            Self::PointerUp { .. } => "book_pointer_up",
            Self::Frame { .. } => "book_frame",
        }
    }
}

#[derive(Debug, Clone)]
pub struct SessionEvent {
    pub action: &'static str,
    pub outcome: Outcome,
    pub snapshot: BookSnapshot,
}

/// One open book: the committed state, the in-flight flip or drag, and the
/// overlay values last pushed to the surface.
///
/// The phase doubles as the busy flag. Only `Idle` accepts a new flip or
/// grab, and the committed state changes only when an instant jump runs or an
/// animation reports that it finished.
#[derive(Debug, Clone)]
pub struct BookSession {
    states: Vec<Spread>,
    current: usize,
    layout: LayoutMode,
    phase: Phase,
    overlay: OverlayState,
    tuning: FlipTuning,
    restore_layout_transitions: bool,
}

impl BookSession {
    pub fn new(page_count: u32, tuning: FlipTuning) -> Result<Self> {
        tuning.validate()?;
        let states = build_states(page_count)?;
        let layout = states[0].layout();
        debug!(page_count, states = states.len(), "Built book states");
        Ok(Self {
            states,
            current: 0,
            layout,
            phase: Phase::Idle,
            overlay: OverlayState::default(),
            tuning,
            restore_layout_transitions: false,
        })
    }

    pub fn states(&self) -> &[Spread] {
        &self.states
    }

    pub fn current_state(&self) -> usize {
        self.current
    }

    pub fn current_spread(&self) -> Spread {
        self.states[self.current]
    }

    pub fn layout(&self) -> LayoutMode {
        self.layout
    }

    pub fn overlay(&self) -> &OverlayState {
        &self.overlay
    }

    pub fn is_busy(&self) -> bool {
        !matches!(self.phase, Phase::Idle)
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self.phase, Phase::Dragging(_))
    }

    /// Whether the caller should keep delivering frames.
    pub fn needs_frames(&self) -> bool {
        matches!(self.phase, Phase::Animating(_)) || self.restore_layout_transitions
    }

    pub fn phase(&self) -> PhaseLabel {
        match self.phase {
            Phase::Idle => PhaseLabel::Idle,
            Phase::Dragging(_) => PhaseLabel::Dragging,
            Phase::Animating(_) => PhaseLabel::Animating,
        }
    }

    /// Push the full current state to a freshly created surface.
    pub fn attach(&mut self, sink: &mut impl RenderSink) {
        sink.set_layout_mode(self.layout);
        self.refresh_slots(sink);
        sink.hide_flip();
        self.set_curl(CurlUpdate::Clear, sink);
    }

    pub fn flip_forward(&mut self, sink: &mut impl RenderSink) -> Outcome {
        self.flip(Direction::Forward, sink)
    }

    pub fn flip_backward(&mut self, sink: &mut impl RenderSink) -> Outcome {
        self.flip(Direction::Backward, sink)
    }

    pub fn flip(&mut self, direction: Direction, sink: &mut impl RenderSink) -> Outcome {
        if self.is_busy() {
            debug!(?direction, phase = ?self.phase(), "Ignoring flip while busy");
            return Outcome::Ignored(IgnoreReason::Busy);
        }
        match plan_transition(&self.states, self.current, direction, &self.tuning.rules()) {
            Transition::Ignored => {
                debug!(?direction, state = self.current, "No state in that direction");
                Outcome::Ignored(IgnoreReason::Boundary)
            }
            Transition::Instant { to_state, layout } => {
                self.jump_to(to_state, layout, sink);
                Outcome::Moved { to_state }
            }
            Transition::Animated(plan) => {
                self.begin_turn(&plan, sink);
                let animation = FlipAnimation::new(
                    0.0,
                    plan.end_angle(),
                    plan.setup.side,
                    self.tuning.duration,
                );
                self.phase = Phase::Animating(Settle {
                    animation,
                    settle_to: plan.to_state,
                    committed: true,
                });
                info!(
                    ?direction,
                    from = plan.from_state,
                    to = plan.to_state,
                    "Started page turn"
                );
                Outcome::AnimationStarted {
                    to_state: plan.to_state,
                }
            }
        }
    }

    /// Route a click on the book to the hit zone under it.
    pub fn click(&mut self, x: f32, book_width: f32, sink: &mut impl RenderSink) -> Outcome {
        match gesture::click_direction(x, book_width) {
            Some(direction) => self.flip(direction, sink),
            None => Outcome::Ignored(IgnoreReason::OutsideBook),
        }
    }

    pub fn pointer_down(&mut self, x: f32, book_width: f32, sink: &mut impl RenderSink) -> Outcome {
        if self.is_busy() {
            return Outcome::Ignored(IgnoreReason::Busy);
        }
        let Some(direction) = gesture::grab_direction(x, book_width, self.layout) else {
            return Outcome::Ignored(IgnoreReason::OutsideGrabZone);
        };
        let Transition::Animated(plan) =
            plan_transition(&self.states, self.current, direction, &self.tuning.rules())
        else {
            debug!(?direction, state = self.current, "Drag disabled at this state");
            return Outcome::Ignored(IgnoreReason::Boundary);
        };
        self.begin_turn(&plan, sink);
        self.phase = Phase::Dragging(GestureSession::new(plan, x));
        debug!(?direction, x, state = self.current, "Grabbed page");
        Outcome::DragStarted { direction }
    }

    pub fn pointer_move(&mut self, x: f32, book_width: f32, sink: &mut impl RenderSink) -> Outcome {
        let fraction = self.tuning.drag_width_fraction;
        let Phase::Dragging(drag) = &mut self.phase else {
            return Outcome::Ignored(IgnoreReason::NotDragging);
        };
        drag.progress = gesture::drag_progress(drag.direction, x - drag.start_x, book_width, fraction);
        let progress = drag.progress;
        let angle = drag.angle();
        let side = drag.plan.setup.side;

        sink.set_flip_angle(angle);
        let curl = if progress < 0.5 {
            CurlUpdate::Show(render_curl(side, progress * 2.0))
        } else {
            CurlUpdate::Clear
        };
        self.set_curl(curl, sink);
        trace!(progress, angle, "Drag moved");
        Outcome::DragUpdated { progress }
    }

    /// Resolve the drag. The page is placed at the release angle right away so
    /// nothing jumps before the first animation frame arrives.
    pub fn pointer_up(&mut self, x: f32, book_width: f32, sink: &mut impl RenderSink) -> Outcome {
        let drag = match std::mem::take(&mut self.phase) {
            Phase::Dragging(drag) => drag,
            other => {
                self.phase = other;
                return Outcome::Ignored(IgnoreReason::NotDragging);
            }
        };
        let direction = drag.direction;
        let progress = gesture::drag_progress(
            direction,
            x - drag.start_x,
            book_width,
            self.tuning.drag_width_fraction,
        );
        let committed = gesture::should_commit(progress, self.tuning.commit_threshold);
        let start_angle = gesture::drag_angle(direction, progress);
        let end_angle = if committed { direction.full_turn() } else { 0.0 };
        let settle_to = if committed {
            drag.plan.to_state
        } else {
            drag.plan.from_state
        };
        let animation = FlipAnimation::new(
            start_angle,
            end_angle,
            drag.plan.setup.side,
            self.tuning.duration,
        );
        let first = animation.frame();
        sink.set_flip_angle(first.angle);
        self.set_curl(first.curl, sink);
        self.phase = Phase::Animating(Settle {
            animation,
            settle_to,
            committed,
        });
        debug!(?direction, progress, committed, "Released page");
        Outcome::AnimationStarted {
            to_state: settle_to,
        }
    }

    /// Advance the running animation by one frame.
    pub fn tick(&mut self, dt: Duration, sink: &mut impl RenderSink) -> Outcome {
        if std::mem::take(&mut self.restore_layout_transitions) {
            sink.set_layout_transitions(true);
        }
        let step = match &mut self.phase {
            Phase::Animating(settle) => settle.animation.advance(dt),
            _ => return Outcome::Ignored(IgnoreReason::Idle),
        };
        match step {
            FlipStep::Frame(frame) => {
                sink.set_flip_angle(frame.angle);
                self.set_curl(frame.curl, sink);
                trace!(angle = frame.angle, "Flip frame");
                Outcome::Frame { angle: frame.angle }
            }
            FlipStep::Finished => self.finish_turn(sink),
        }
    }

    pub fn snapshot(&self) -> BookSnapshot {
        let drag_progress = match &self.phase {
            Phase::Dragging(drag) => Some(drag.progress),
            _ => None,
        };
        BookSnapshot {
            current_state: self.current,
            total_states: self.states.len(),
            layout: self.layout,
            spread: self.current_spread(),
            phase: self.phase(),
            busy: self.is_busy(),
            drag_progress,
        }
    }

    pub fn apply_command(
        &mut self,
        command: BookCommand,
        sink: &mut impl RenderSink,
    ) -> SessionEvent {
        let action = command.action();
        let outcome = match command {
            BookCommand::FlipForward => self.flip_forward(sink),
            BookCommand::FlipBackward => self.flip_backward(sink),
            BookCommand::Click { x, book_width } => self.click(x, book_width, sink),
            BookCommand::PointerDown { x, book_width } => self.pointer_down(x, book_width, sink),
            BookCommand::PointerMove { x, book_width } => self.pointer_move(x, book_width, sink),
            BookCommand::PointerUp { x, book_width } => self.pointer_up(x, book_width, sink),
            BookCommand::Frame { dt } => self.tick(dt, sink),
        };
        SessionEvent {
            action,
            outcome,
            snapshot: self.snapshot(),
        }
    }

    fn jump_to(&mut self, to_state: usize, layout: LayoutMode, sink: &mut impl RenderSink) {
        sink.set_layout_transitions(false);
        self.layout = layout;
        sink.set_layout_mode(layout);
        self.current = to_state;
        self.refresh_slots(sink);
        self.restore_layout_transitions = true;
        info!(state = to_state, %layout, "Jumped to state");
    }

    fn begin_turn(&mut self, plan: &FlipPlan, sink: &mut impl RenderSink) {
        let (slot, page) = plan.reveal;
        sink.set_slot(slot, page);
        sink.set_flip_faces(&plan.setup);
        self.set_curl(CurlUpdate::Clear, sink);
    }

    fn finish_turn(&mut self, sink: &mut impl RenderSink) -> Outcome {
        let Phase::Animating(settle) = std::mem::take(&mut self.phase) else {
            return Outcome::Ignored(IgnoreReason::Idle);
        };
        sink.hide_flip();
        self.set_curl(CurlUpdate::Clear, sink);
        self.current = settle.settle_to;
        self.refresh_slots(sink);
        info!(
            state = self.current,
            committed = settle.committed,
            "Page turn settled"
        );
        Outcome::Settled {
            state: self.current,
            committed: settle.committed,
        }
    }

    fn refresh_slots(&self, sink: &mut impl RenderSink) {
        let spread = self.states[self.current];
        sink.set_slot(Slot::Left, spread.left);
        sink.set_slot(Slot::Right, Some(spread.right));
    }

    fn set_curl(&mut self, update: CurlUpdate, sink: &mut impl RenderSink) {
        self.overlay.update(update);
        sink.set_overlay(&self.overlay);
    }
}
