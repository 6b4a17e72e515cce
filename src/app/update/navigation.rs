use super::super::state::App;
use flipbook_core::{BookCommand, Outcome, SessionEvent};
use std::time::Instant;
use tracing::{debug, trace};

impl App {
    pub(super) fn handle_flip_forward(&mut self) {
        self.dispatch(BookCommand::FlipForward);
    }

    pub(super) fn handle_flip_backward(&mut self) {
        self.dispatch(BookCommand::FlipBackward);
    }

    pub(super) fn handle_frame(&mut self, now: Instant) {
        let dt = self.clock.delta(now);
        self.dispatch(BookCommand::Frame { dt });
        if !self.session.needs_frames() {
            self.clock.reset();
        }
    }

    /// Feed one command to the session and log what it did.
    pub(super) fn dispatch(&mut self, command: BookCommand) {
        let event = self.session.apply_command(command, &mut self.surface);
        Self::log_event(&event);
    }

    fn log_event(event: &SessionEvent) {
        let snapshot = &event.snapshot;
        match event.outcome {
            Outcome::Frame { .. } | Outcome::DragUpdated { .. } => trace!(
                action = event.action,
                outcome = ?event.outcome,
                "Session updated"
            ),
            Outcome::Ignored(reason) => debug!(
                action = event.action,
                ?reason,
                phase = ?snapshot.phase,
                state = snapshot.current_state,
                "Input ignored"
            ),
            outcome => debug!(
                action = event.action,
                ?outcome,
                state = snapshot.current_state,
                layout = %snapshot.layout,
                busy = snapshot.busy,
                "Input applied"
            ),
        }
    }
}
