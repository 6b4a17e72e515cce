use flipbook_core::{FlipSetup, LayoutMode, OverlayState, PageIndex, RenderSink, Slot};
use tracing::trace;

/// What the view draws. The session mutates it only through [`RenderSink`].
#[derive(Debug, Clone)]
pub struct BookSurface {
    pub left: Option<PageIndex>,
    pub right: Option<PageIndex>,
    pub layout: LayoutMode,
    /// iced has no implicit layout animation; the flag is tracked so layout
    /// switches made while suppressed can be told apart in traces.
    pub layout_transitions: bool,
    pub flip: Option<FlipSetup>,
    pub angle: f32,
    pub overlay: OverlayState,
}

impl Default for BookSurface {
    fn default() -> Self {
        Self {
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

impl BookSurface {
    /// Page on the currently visible face of the turning page.
    pub fn visible_face(&self) -> Option<PageIndex> {
        let flip = self.flip?;
        if self.angle.to_radians().cos() >= 0.0 {
            flip.faces.front
        } else {
            flip.faces.back
        }
    }
}

impl RenderSink for BookSurface {
    fn set_slot(&mut self, slot: Slot, page: Option<PageIndex>) {
        match slot {
            Slot::Left => self.left = page,
            Slot::Right => self.right = page,
        }
    }

    fn set_layout_mode(&mut self, mode: LayoutMode) {
        trace!(%mode, animated = self.layout_transitions, "Layout mode changed");
        self.layout = mode;
    }

    fn set_layout_transitions(&mut self, enabled: bool) {
        self.layout_transitions = enabled;
    }

    fn set_flip_faces(&mut self, setup: &FlipSetup) {
        self.flip = Some(*setup);
        self.angle = 0.0;
    }

    fn set_flip_angle(&mut self, degrees: f32) {
        self.angle = degrees;
    }

    fn hide_flip(&mut self) {
        self.flip = None;
        self.angle = 0.0;
    }

    fn set_overlay(&mut self, overlay: &OverlayState) {
        self.overlay = *overlay;
    }
}
