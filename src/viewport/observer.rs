use crate::camera::{CameraState, FrameSetup};

/// Receives viewport notifications.
///
/// All methods default to no-ops so observers implement only what they need.
/// Hosts typically forward `on_frame_requested` to their redraw primitive
/// and `on_pointer_capture` to their pointer grab API.
pub trait ViewportObserver {
    /// The camera moved, zoomed, reset or switched projection.
    fn on_camera_changed(&mut self, _camera: &CameraState) {}

    /// The viewport needs to be redrawn.
    fn on_frame_requested(&mut self) {}

    /// A drag started (`true`) or ended (`false`); the host should route
    /// pointer events exclusively to the viewport while captured.
    fn on_pointer_capture(&mut self, _captured: bool) {}
}

/// Draws the scene content once per frame.
///
/// Invoked by [`Viewport::render_frame`](super::Viewport::render_frame)
/// after the frame matrices are computed and before the overlay
/// decorations. Closures taking `&FrameSetup` implement this trait.
pub trait SceneRenderer {
    /// Draw the scene with the given frame matrices.
    fn render(&mut self, frame: &FrameSetup);
}

impl<F> SceneRenderer for F
where
    F: FnMut(&FrameSetup),
{
    fn render(&mut self, frame: &FrameSetup) {
        self(frame);
    }
}
