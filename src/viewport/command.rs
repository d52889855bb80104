//! The viewport's complete interactive vocabulary.
//!
//! Every user-facing operation, whether triggered by a key press, a mouse
//! gesture or a programmatic call, is represented as a `ViewCommand`.
//! Consumers construct commands and pass them to
//! [`Viewport::execute`](super::Viewport::execute).

use glam::DVec2;

use super::Viewport;

/// A discrete or parameterized operation the viewport can perform.
///
/// ```ignore
/// viewport.execute(ViewCommand::ToggleAxes);
/// viewport.execute(ViewCommand::Zoom { steps: 1.0 });
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ViewCommand {
    // ── Camera ──────────────────────────────────────────────────────
    /// Rotate the camera by `delta` pixels of pointer movement.
    RotateCamera {
        /// Horizontal and vertical drag delta.
        delta: DVec2,
        /// Horizontal motion yaws instead of rolling.
        yaw: bool,
    },

    /// Pan the camera by `delta` pixels of pointer movement.
    PanCamera {
        /// Horizontal and vertical drag delta.
        delta: DVec2,
        /// Vertical motion moves along Y and horizontal motion is dropped.
        vertical: bool,
    },

    /// Zoom by a number of zoom steps (positive = zoom in).
    Zoom {
        /// Key presses or wheel notches; fractional for smooth scrolling.
        steps: f64,
    },

    /// Return the camera to its initial placement.
    ResetView,

    // ── Display ─────────────────────────────────────────────────────
    /// Switch between perspective and orthographic projection.
    ToggleOrtho,

    /// Show or hide the axis cross and corner axes.
    ToggleAxes,

    /// Show or hide the crosshair.
    ToggleCrosshairs,
}

impl ViewCommand {
    /// Whether this command mutates the camera state.
    #[must_use]
    pub fn moves_camera(&self) -> bool {
        !matches!(self, Self::ToggleAxes | Self::ToggleCrosshairs)
    }
}

impl Viewport {
    /// Execute a command and notify observers.
    ///
    /// Every command requests a frame. Observers hear about the camera only
    /// when its state actually differs afterwards, so a zoom pinned at the
    /// distance limit or a zero-length drag does not count as a change.
    ///
    /// Returns `true` if the camera state changed.
    pub fn execute(&mut self, cmd: ViewCommand) -> bool {
        log::trace!("execute {cmd:?}");
        let before = *self.camera.state();
        match cmd {
            ViewCommand::RotateCamera { delta, yaw } => {
                self.camera.rotate(delta, yaw);
            }
            ViewCommand::PanCamera { delta, vertical } => {
                self.camera.pan(delta, vertical);
            }
            ViewCommand::Zoom { steps } => self.camera.zoom_steps(steps),
            ViewCommand::ResetView => self.camera.reset(),
            ViewCommand::ToggleOrtho => self.camera.toggle_ortho(),
            ViewCommand::ToggleAxes => {
                self.display.show_axes = !self.display.show_axes;
            }
            ViewCommand::ToggleCrosshairs => {
                self.display.show_crosshairs = !self.display.show_crosshairs;
            }
        }

        let changed = cmd.moves_camera() && *self.camera.state() != before;
        if changed {
            self.notify_camera_changed();
        }
        self.request_frame();
        changed
    }
}
