use glam::DVec2;

/// Pointer state machine states.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PointerState {
    /// No button held over the viewport.
    #[default]
    Idle,
    /// A button went down over the viewport and has not been released.
    Dragging,
}

/// Tracks whether a drag is in progress and where the pointer was last seen.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct DragState {
    /// Whether a drag is in progress.
    pub active: bool,
    /// Last observed absolute pointer position.
    pub last_pointer: DVec2,
}

impl DragState {
    /// Start a drag at `pos`.
    pub fn begin(&mut self, pos: DVec2) {
        self.active = true;
        self.last_pointer = pos;
    }

    /// Record a pointer move and return the delta from the last position.
    ///
    /// The position is recorded whether or not a drag is active so that a
    /// later drag does not jump.
    pub fn advance(&mut self, pos: DVec2) -> DVec2 {
        let delta = pos - self.last_pointer;
        self.last_pointer = pos;
        delta
    }

    /// End the drag.
    pub fn end(&mut self) {
        self.active = false;
    }

    /// Current state machine state.
    #[must_use]
    pub fn state(&self) -> PointerState {
        if self.active {
            PointerState::Dragging
        } else {
            PointerState::Idle
        }
    }
}
