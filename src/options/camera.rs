use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Camera", inline)]
#[serde(default)]
/// Initial camera placement and interaction sensitivity.
pub struct CameraOptions {
    /// Initial eye distance from the origin.
    #[schemars(title = "Initial Distance", range(min = 0.001, max = 10000000.0))]
    pub distance: f64,
    /// Initial rotation `[rx, ry, rz]` in degrees.
    #[schemars(skip)]
    pub rotation: [f64; 3],
    /// Initial translation offset.
    #[schemars(skip)]
    pub translation: [f64; 3],
    /// Start in orthographic projection.
    #[schemars(title = "Orthographic")]
    pub orthographic: bool,
    /// Degrees of rotation per pixel of drag.
    #[schemars(title = "Rotate Speed", range(min = 0.1, max = 2.0), extend("step" = 0.05))]
    pub rotate_speed: f64,
    /// Pan moves `distance / pan_divisor` world units per pixel of drag.
    #[schemars(title = "Pan Divisor", range(min = 100.0, max = 10000.0), extend("step" = 50.0))]
    pub pan_divisor: f64,
    /// Distance multiplier for one zoom-in step (one key press or wheel
    /// notch).
    #[schemars(title = "Zoom Step", range(min = 0.5, max = 0.99), extend("step" = 0.01))]
    pub zoom_step: f64,
}

impl Default for CameraOptions {
    fn default() -> Self {
        Self {
            distance: 500.0,
            rotation: [35.0, 0.0, 25.0],
            translation: [0.0; 3],
            orthographic: false,
            rotate_speed: 0.7,
            pan_divisor: 1000.0,
            zoom_step: 0.9,
        }
    }
}
