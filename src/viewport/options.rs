//! Options methods for [`Viewport`].

use super::Viewport;
use crate::options::{DisplayOptions, Options};

impl Viewport {
    /// Replace options and apply them to every subsystem.
    ///
    /// Sensitivities, colors, key bindings and display toggles take effect
    /// immediately; the current camera placement is kept.
    pub fn set_options(&mut self, options: &Options) {
        self.camera.apply_options(&options.camera);
        self.interaction.set_key_bindings(options.keybindings.clone());
        self.display = options.display.clone();
        self.colors = options.colors.clone();
        self.request_frame();
    }

    /// Current decoration toggles.
    #[must_use]
    pub fn display(&self) -> &DisplayOptions {
        &self.display
    }

    /// Show or hide the axis cross and corner axes.
    pub fn set_show_axes(&mut self, show: bool) {
        self.display.show_axes = show;
        self.request_frame();
    }

    /// Show or hide the crosshair.
    pub fn set_show_crosshairs(&mut self, show: bool) {
        self.display.show_crosshairs = show;
        self.request_frame();
    }

    /// Select orthographic (`true`) or perspective projection.
    pub fn set_ortho(&mut self, ortho: bool) {
        if self.camera.state().ortho != ortho {
            self.camera.set_ortho(ortho);
            self.notify_camera_changed();
        }
        self.request_frame();
    }
}
