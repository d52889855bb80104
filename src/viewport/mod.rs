//! The viewport component: camera, interaction, decorations and the
//! injected scene renderer under one owner.

mod command;
mod frame;
mod input;
mod observer;
mod options;

pub use command::ViewCommand;
pub use frame::RenderedFrame;
pub use observer::{SceneRenderer, ViewportObserver};

use crate::camera::{CameraController, CameraState, ViewportStatus};
use crate::input::{InteractionEngine, PointerState};
use crate::options::{ColorOptions, DisplayOptions, Options};

/// Initial surface size until the host reports one.
const DEFAULT_SIZE: (u32, u32) = (800, 600);

/// An interactive 3D viewport.
///
/// Single-threaded and event driven: the host forwards each input event to
/// [`handle_input`](Self::handle_input), redraws when an observer hears
/// [`on_frame_requested`](ViewportObserver::on_frame_requested), and calls
/// [`render_frame`](Self::render_frame) from its paint callback.
pub struct Viewport {
    camera: CameraController,
    interaction: InteractionEngine,
    display: DisplayOptions,
    colors: ColorOptions,
    size: (u32, u32),
    renderer: Box<dyn SceneRenderer>,
    observers: Vec<Box<dyn ViewportObserver>>,
}

impl Viewport {
    /// Create a viewport configured by `options`, drawing its scene with
    /// `renderer`.
    #[must_use]
    pub fn new(options: &Options, renderer: impl SceneRenderer + 'static) -> Self {
        log::debug!(
            "viewport created: distance {}, ortho {}",
            options.camera.distance,
            options.camera.orthographic
        );
        Self {
            camera: CameraController::new(&options.camera),
            interaction: InteractionEngine::with_key_bindings(
                options.keybindings.clone(),
            ),
            display: options.display.clone(),
            colors: options.colors.clone(),
            size: DEFAULT_SIZE,
            renderer: Box::new(renderer),
            observers: Vec::new(),
        }
    }

    /// Register an observer.
    pub fn add_observer(&mut self, observer: impl ViewportObserver + 'static) {
        self.observers.push(Box::new(observer));
    }

    /// Current camera state.
    #[must_use]
    pub fn camera(&self) -> &CameraState {
        self.camera.state()
    }

    /// Replace the camera state (e.g. restoring a saved view).
    pub fn set_camera(&mut self, camera: CameraState) {
        self.camera.set_state(camera);
        self.notify_camera_changed();
        self.request_frame();
    }

    /// Current pointer state.
    #[must_use]
    pub fn pointer_state(&self) -> PointerState {
        self.interaction.state()
    }

    /// Surface size in pixels.
    #[must_use]
    pub fn size(&self) -> (u32, u32) {
        self.size
    }

    /// Record a new surface size.
    pub fn resize(&mut self, width: u32, height: u32) {
        log::debug!("viewport resized to {width}x{height}");
        self.size = (width, height);
        self.request_frame();
    }

    /// One-line status readout of the camera.
    #[must_use]
    pub fn status(&self) -> ViewportStatus {
        self.camera.state().status()
    }

    /// Ask observers for a redraw.
    pub fn request_frame(&mut self) {
        for observer in &mut self.observers {
            observer.on_frame_requested();
        }
    }

    fn notify_camera_changed(&mut self) {
        let camera = *self.camera.state();
        for observer in &mut self.observers {
            observer.on_camera_changed(&camera);
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use glam::DVec3;

    use super::*;
    use crate::camera::FrameSetup;
    use crate::input::{InputEvent, Modifiers, MouseButton};

    #[derive(Debug, Clone, PartialEq)]
    enum Note {
        Camera(DVec3),
        Frame,
        Capture(bool),
    }

    #[derive(Clone, Default)]
    struct Recorder(Rc<RefCell<Vec<Note>>>);

    impl Recorder {
        fn take(&self) -> Vec<Note> {
            std::mem::take(&mut *self.0.borrow_mut())
        }
    }

    impl ViewportObserver for Recorder {
        fn on_camera_changed(&mut self, camera: &CameraState) {
            self.0.borrow_mut().push(Note::Camera(camera.rotation));
        }

        fn on_frame_requested(&mut self) {
            self.0.borrow_mut().push(Note::Frame);
        }

        fn on_pointer_capture(&mut self, captured: bool) {
            self.0.borrow_mut().push(Note::Capture(captured));
        }
    }

    fn viewport() -> (Viewport, Recorder) {
        let mut vp = Viewport::new(&Options::default(), |_: &FrameSetup| {});
        let recorder = Recorder::default();
        vp.add_observer(recorder.clone());
        (vp, recorder)
    }

    #[test]
    fn click_without_motion_changes_nothing() {
        let (mut vp, rec) = viewport();
        let before = *vp.camera();
        assert!(!vp.handle_input(&InputEvent::PointerDown {
            x: 10.0,
            y: 10.0,
            button: MouseButton::Left,
        }));
        assert_eq!(vp.pointer_state(), PointerState::Dragging);
        assert!(!vp.handle_input(&InputEvent::PointerUp {
            button: MouseButton::Left,
        }));
        assert_eq!(vp.pointer_state(), PointerState::Idle);
        assert_eq!(*vp.camera(), before);
        assert_eq!(rec.take(), vec![Note::Capture(true), Note::Capture(false)]);
    }

    #[test]
    fn drag_notifies_camera_and_frame() {
        let (mut vp, rec) = viewport();
        let _ = vp.handle_input(&InputEvent::PointerDown {
            x: 0.0,
            y: 0.0,
            button: MouseButton::Left,
        });
        assert!(vp.handle_input(&InputEvent::PointerMove {
            x: 10.0,
            y: 0.0,
            buttons: MouseButton::Left.into(),
            modifiers: Modifiers::default(),
        }));
        let notes = rec.take();
        assert_eq!(notes.len(), 3);
        assert_eq!(notes[2], Note::Frame);
        assert!(matches!(notes[1], Note::Camera(r) if (r.z - 32.0).abs() < 1e-9));
    }

    #[test]
    fn toggles_only_request_frames() {
        let (mut vp, rec) = viewport();
        assert!(!vp.execute(ViewCommand::ToggleAxes));
        assert!(vp.display().show_axes);
        assert_eq!(rec.take(), vec![Note::Frame]);
    }

    #[test]
    fn scroll_zooms_outside_of_drag() {
        let (mut vp, _rec) = viewport();
        assert!(vp.handle_input(&InputEvent::Scroll { delta: 240.0 }));
        assert!((vp.camera().distance - 500.0 * 0.81).abs() < 1e-9);
    }

    #[test]
    fn zoom_pinned_at_limit_is_not_a_change() {
        let (mut vp, rec) = viewport();
        vp.set_camera(CameraState {
            distance: crate::camera::state::MIN_DISTANCE,
            ..CameraState::default()
        });
        let _ = rec.take();
        assert!(!vp.handle_input(&InputEvent::Scroll { delta: 1200.0 }));
        assert_eq!(vp.camera().distance, crate::camera::state::MIN_DISTANCE);
        assert_eq!(rec.take(), vec![Note::Frame]);
        assert!(vp.handle_input(&InputEvent::Scroll { delta: -120.0 }));
    }

    #[test]
    fn bindings_edited_in_code_are_live() {
        let mut opts = Options::default();
        let _ = opts
            .keybindings
            .bindings
            .insert(crate::input::KeyAction::ZoomIn, vec!["PageUp".into()]);
        let mut vp = Viewport::new(&opts, |_: &FrameSetup| {});
        assert!(vp.handle_input(&InputEvent::Key {
            key: "PageUp".into(),
        }));
        assert!((vp.camera().distance - 450.0).abs() < 1e-9);

        let _ = opts.keybindings.bindings.insert(
            crate::input::KeyAction::ResetView,
            vec!["KeyR".into()],
        );
        vp.set_options(&opts);
        assert!(vp.handle_input(&InputEvent::Key { key: "KeyR".into() }));
        assert!((vp.camera().distance - 500.0).abs() < 1e-9);
    }

    #[test]
    fn set_ortho_is_idempotent() {
        let (mut vp, rec) = viewport();
        vp.set_ortho(true);
        vp.set_ortho(true);
        assert!(vp.camera().ortho);
        let cameras = rec
            .take()
            .into_iter()
            .filter(|n| matches!(n, Note::Camera(_)))
            .count();
        assert_eq!(cameras, 1);
    }
}
