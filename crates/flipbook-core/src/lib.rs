//! Page-turn engine for a fixed-layout picture book.
//!
//! The crate has no GUI dependency. A [`BookSession`] owns the committed
//! spread index and the in-flight flip or drag, and pushes every visual change
//! through a caller-supplied [`RenderSink`].

pub mod animator;
pub mod curl;
pub mod error;
pub mod gesture;
pub mod model;
pub mod session;
pub mod sink;
pub mod transition;

pub use animator::{FLIP_DURATION, FlipAnimation, FlipFrame, FlipStep, ease_in_out};
pub use curl::{CurlFrame, CurlLayer, CurlSide, CurlUpdate, OverlayState, Percent, render_curl};
pub use error::{BookError, Result};
pub use gesture::GestureSession;
pub use model::{LayoutMode, PageIndex, PageResources, Spread, build_states};
pub use session::{
    BookCommand, BookSession, BookSnapshot, FlipTuning, IgnoreReason, Outcome, PhaseLabel,
    SessionEvent,
};
pub use sink::{FlipFaces, FlipSetup, RecordingSink, RenderSink, SinkCall, Slot};
pub use transition::{Boundary, Direction, FlipPlan, Transition, TransitionRules, plan_transition};
