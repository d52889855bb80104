use serde::{Deserialize, Serialize};

/// Color palette for the viewport background and decorations.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ColorOptions {
    /// RGB clear color.
    pub background: [f32; 3],
    /// RGB color of the crosshair lines.
    pub crosshair: [f32; 3],
    /// RGB color of the large axis cross.
    pub axes: [f32; 3],
    /// RGB color of the corner axes, X then Y then Z.
    pub corner_axes: [[f32; 3]; 3],
    /// RGB color for scene lines that do not set their own.
    pub default_line: [f32; 3],
}

impl Default for ColorOptions {
    fn default() -> Self {
        Self {
            background: [1.0, 1.0, 0.898],
            crosshair: [0.5, 0.0, 0.0],
            axes: [0.5, 0.5, 0.5],
            corner_axes: [[1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]],
            default_line: [1.0, 0.0, 0.0],
        }
    }
}

impl ColorOptions {
    /// Label color: the inverse of the background so glyphs stay visible.
    #[must_use]
    pub fn label(&self) -> [f32; 3] {
        self.background.map(|c| 1.0 - c)
    }
}
