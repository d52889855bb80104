use serde::{Deserialize, Serialize};

/// Viewport actions that can be bound to keys.
///
/// Serde serializes as `snake_case` strings so TOML presets stay readable:
/// ```toml
/// [keybindings.bindings]
/// zoom_in = ["+", "="]
/// toggle_ortho = ["KeyO"]
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum KeyAction {
    /// One zoom step toward the origin.
    ZoomIn,
    /// One zoom step away from the origin.
    ZoomOut,
    /// Switch between perspective and orthographic projection.
    ToggleOrtho,
    /// Show or hide the axis cross and corner axes.
    ToggleAxes,
    /// Show or hide the crosshair.
    ToggleCrosshairs,
    /// Return the camera to its initial placement.
    ResetView,
}
