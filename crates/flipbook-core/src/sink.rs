//! Render surface capability.
//!
//! The session never touches a widget tree directly. Every visual change goes
//! through [`RenderSink`], so the GUI surface and the test double are
//! interchangeable.

use crate::curl::{CurlSide, OverlayState};
use crate::model::{LayoutMode, PageIndex};
use serde::Serialize;

/// One of the two static page slots.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Slot {
    Left,
    Right,
}

/// Images on the two faces of the turning page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FlipFaces {
    pub front: Option<PageIndex>,
    pub back: Option<PageIndex>,
}

/// Placement of the turning page.
///
/// A right-side flip hinges on its left edge and sits `offset` units from the
/// book origin (one page width); a left-side flip hinges on its right edge at
/// offset 0.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FlipSetup {
    pub side: CurlSide,
    pub faces: FlipFaces,
    pub offset: f32,
}

impl FlipSetup {
    /// Book x coordinate of the hinge (the spine).
    pub fn hinge_x(&self, page_width: f32) -> f32 {
        match self.side {
            CurlSide::Right => self.offset,
            CurlSide::Left => self.offset + page_width,
        }
    }
}

pub trait RenderSink {
    fn set_slot(&mut self, slot: Slot, page: Option<PageIndex>);

    fn set_layout_mode(&mut self, mode: LayoutMode);

    /// Enable or suppress the surface's own layout-change transition.
    fn set_layout_transitions(&mut self, enabled: bool);

    /// Show the turning page with the given faces at angle 0.
    fn set_flip_faces(&mut self, setup: &FlipSetup);

    fn set_flip_angle(&mut self, degrees: f32);

    /// Hide the turning page and reset its angle.
    fn hide_flip(&mut self);

    fn set_overlay(&mut self, overlay: &OverlayState);
}

/// A call received by [`RecordingSink`].
#[derive(Debug, Clone, PartialEq)]
pub enum SinkCall {
    Slot(Slot, Option<PageIndex>),
    Layout(LayoutMode),
    LayoutTransitions(bool),
    FlipFaces(FlipSetup),
    FlipAngle(f32),
    HideFlip,
    Overlay(OverlayState),
}

/// Sink that records every call and mirrors the resulting surface state.
#[derive(Debug, Clone)]
pub struct RecordingSink {
    pub calls: Vec<SinkCall>,
    pub left: Option<PageIndex>,
    pub right: Option<PageIndex>,
    pub layout: LayoutMode,
    pub layout_transitions: bool,
    pub flip: Option<FlipSetup>,
    pub angle: f32,
    pub overlay: OverlayState,
}

impl Default for RecordingSink {
    fn default() -> Self {
        Self {
            calls: Vec::new(),
            left: None,
            right: None,
            layout: LayoutMode::Single,
            layout_transitions: true,
            flip: None,
            angle: 0.0,
            overlay: OverlayState::default(),
        }
    }
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn slots(&self) -> (Option<PageIndex>, Option<PageIndex>) {
        (self.left, self.right)
    }

    pub fn take_calls(&mut self) -> Vec<SinkCall> {
        std::mem::take(&mut self.calls)
    }
}

impl RenderSink for RecordingSink {
    fn set_slot(&mut self, slot: Slot, page: Option<PageIndex>) {
        match slot {
            Slot::Left => self.left = page,
            Slot::Right => self.right = page,
        }
        self.calls.push(SinkCall::Slot(slot, page));
    }

    fn set_layout_mode(&mut self, mode: LayoutMode) {
        self.layout = mode;
        self.calls.push(SinkCall::Layout(mode));
    }

    fn set_layout_transitions(&mut self, enabled: bool) {
        self.layout_transitions = enabled;
        self.calls.push(SinkCall::LayoutTransitions(enabled));
    }

    fn set_flip_faces(&mut self, setup: &FlipSetup) {
        self.flip = Some(*setup);
        self.angle = 0.0;
        self.calls.push(SinkCall::FlipFaces(*setup));
    }

    fn set_flip_angle(&mut self, degrees: f32) {
        self.angle = degrees;
        self.calls.push(SinkCall::FlipAngle(degrees));
    }

    fn hide_flip(&mut self) {
        self.flip = None;
        self.angle = 0.0;
        self.calls.push(SinkCall::HideFlip);
    }

    fn set_overlay(&mut self, overlay: &OverlayState) {
        self.overlay = *overlay;
        self.calls.push(SinkCall::Overlay(*overlay));
    }
}
