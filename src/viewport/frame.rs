//! Per-frame rendering for [`Viewport`].

use super::Viewport;
use crate::camera::{DirectionalLight, FrameSetup};
use crate::decoration::Decorations;

/// Everything the host needs to finish drawing a frame.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderedFrame {
    /// Frame matrices.
    pub setup: FrameSetup,
    /// RGB clear color.
    pub clear_color: [f32; 3],
    /// RGB color for scene lines that do not set their own.
    pub default_line_color: [f32; 3],
    /// Width in pixels for scene lines that do not set their own.
    pub default_line_width: f32,
    /// Directional lights the scene is shaded with.
    pub lights: [DirectionalLight; 2],
    /// Decoration line batches.
    pub decorations: Decorations,
    /// Status line text.
    pub status: String,
}

impl Viewport {
    /// Compute the frame matrices, run the scene renderer, and build the
    /// decorations.
    ///
    /// The host clears with `clear_color`, draws the underlay batches, lets
    /// the scene renderer's output land, then draws the overlay batches on
    /// top.
    pub fn render_frame(&mut self) -> RenderedFrame {
        let camera = *self.camera.state();
        let setup = FrameSetup::new(&camera, self.size);
        let decorations =
            Decorations::build(&setup, &camera, &self.display, &self.colors);

        self.renderer.render(&setup);

        RenderedFrame {
            setup,
            clear_color: self.colors.background,
            default_line_color: self.colors.default_line,
            default_line_width: setup.line_width,
            lights: setup.lights,
            decorations,
            status: camera.status().to_string(),
        }
    }
}
