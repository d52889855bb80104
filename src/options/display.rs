use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(
    Debug, Clone, Serialize, Deserialize, PartialEq, Default, JsonSchema,
)]
#[schemars(title = "Display", inline)]
#[serde(default)]
/// On-screen decoration toggles.
pub struct DisplayOptions {
    /// Draw the large axis cross and the small corner axes with labels.
    #[schemars(title = "Show Axes")]
    pub show_axes: bool,
    /// Draw the diagonal crosshair through the rotation center.
    #[schemars(title = "Show Crosshairs")]
    pub show_crosshairs: bool,
}
