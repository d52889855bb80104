use glam::{DVec2, DVec3};

use super::matrix::{identity, rotation, Mat4};
use super::state::CameraState;
use crate::options::CameraOptions;

/// Applies rotate, pan and zoom gestures to a [`CameraState`].
#[derive(Debug, Clone)]
pub struct CameraController {
    state: CameraState,
    initial: CameraState,
    rotate_speed: f64,
    pan_divisor: f64,
    zoom_step: f64,
}

impl Default for CameraController {
    fn default() -> Self {
        Self::new(&CameraOptions::default())
    }
}

impl CameraController {
    /// Create a controller placed according to `options`.
    #[must_use]
    pub fn new(options: &CameraOptions) -> Self {
        let mut initial = CameraState {
            rotation: DVec3::ZERO,
            translation: DVec3::from_array(options.translation),
            distance: 1.0,
            ortho: options.orthographic,
        };
        initial.add_rotation(DVec3::from_array(options.rotation));
        initial.zoom(options.distance);

        Self {
            state: initial,
            initial,
            rotate_speed: options.rotate_speed,
            pan_divisor: options.pan_divisor,
            zoom_step: options.zoom_step,
        }
    }

    /// Current camera state.
    #[must_use]
    pub fn state(&self) -> &CameraState {
        &self.state
    }

    /// Replace the camera state wholesale (e.g. restoring a saved view).
    ///
    /// Angles are re-normalized and the distance re-clamped.
    pub fn set_state(&mut self, state: CameraState) {
        let mut next = CameraState {
            rotation: DVec3::ZERO,
            distance: 1.0,
            ..state
        };
        next.add_rotation(state.rotation);
        next.zoom(state.distance);
        self.state = next;
    }

    /// Update sensitivities from `options`; the current view is kept.
    pub fn apply_options(&mut self, options: &CameraOptions) {
        let placed = Self::new(options);
        self.initial = placed.initial;
        self.rotate_speed = placed.rotate_speed;
        self.pan_divisor = placed.pan_divisor;
        self.zoom_step = placed.zoom_step;
    }

    /// Return to the initial placement.
    pub fn reset(&mut self) {
        self.state = self.initial;
    }

    /// Switch between perspective and orthographic projection.
    pub fn toggle_ortho(&mut self) {
        self.state.ortho = !self.state.ortho;
    }

    /// Set the projection mode.
    pub fn set_ortho(&mut self, ortho: bool) {
        self.state.ortho = ortho;
    }

    /// Multiply the distance by `factor` (`< 1` zooms in).
    pub fn zoom(&mut self, factor: f64) {
        self.state.zoom(factor);
    }

    /// Zoom by `steps` zoom steps; positive zooms in.
    ///
    /// One key press is one step and one wheel notch is one step, so a
    /// scroll delta of `d` units is `d / 120` steps.
    pub fn zoom_steps(&mut self, steps: f64) {
        self.state.zoom(self.zoom_step.powf(steps));
    }

    /// Rotate by a drag of `delta` pixels.
    ///
    /// Vertical motion always pitches (`rx`). Horizontal motion rolls about
    /// the view axis (`rz`), or yaws (`ry`) when `yaw` is set.
    pub fn rotate(&mut self, delta: DVec2, yaw: bool) {
        let pitch = delta.y * self.rotate_speed;
        let turn = delta.x * self.rotate_speed;
        let step = if yaw {
            DVec3::new(pitch, turn, 0.0)
        } else {
            DVec3::new(pitch, 0.0, turn)
        };
        self.state.add_rotation(step);
    }

    /// Pan by a drag of `delta` pixels, relative to the current orientation.
    ///
    /// Horizontal motion maps to the X slot and vertical motion to the Z
    /// slot. With `vertical` set, X is dropped and vertical motion goes to
    /// the Y slot instead. The offset is carried back through the inverse
    /// of the scene rotation before it is added to the translation.
    pub fn pan(&mut self, delta: DVec2, vertical: bool) {
        let scale = self.state.distance / self.pan_divisor;
        let mx = delta.x * scale;
        // Screen Y grows downward.
        let my = -delta.y * scale;

        let offset = if vertical {
            DVec3::new(0.0, my, 0.0)
        } else {
            DVec3::new(mx, 0.0, my)
        };

        let moved = self.inverse_rotation() * Mat4::translation(offset);
        self.state.add_translation(moved.translation_part());
    }

    /// Inverse of the model rotation `Rx · Ry · Rz`.
    #[must_use]
    pub fn inverse_rotation(&self) -> Mat4 {
        let r = self.state.rotation;
        let mut tm = identity();
        tm = rotation(-r.x, 1.0, 0.0, 0.0) * tm;
        tm = rotation(-r.y, 0.0, 1.0, 0.0) * tm;
        tm = rotation(-r.z, 0.0, 0.0, 1.0) * tm;
        tm
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    fn level() -> CameraController {
        let options = CameraOptions {
            rotation: [0.0; 3],
            ..CameraOptions::default()
        };
        CameraController::new(&options)
    }

    #[test]
    fn new_uses_option_placement() {
        let cam = CameraController::default();
        assert_eq!(*cam.state(), CameraState::default());
    }

    #[test]
    fn pan_at_identity_moves_x_and_z() {
        let mut cam = level();
        let d = cam.state().distance;
        cam.pan(DVec2::new(12.0, 5.0), false);
        let t = cam.state().translation;
        assert!((t.x - 12.0 * d / 1000.0).abs() < EPS);
        assert!((t.z + 5.0 * d / 1000.0).abs() < EPS);
        assert_eq!(t.y, 0.0);
    }

    #[test]
    fn vertical_pan_at_identity_moves_only_y() {
        let mut cam = level();
        let d = cam.state().distance;
        cam.pan(DVec2::new(12.0, 5.0), true);
        let t = cam.state().translation;
        assert_eq!(t.x, 0.0);
        assert_eq!(t.z, 0.0);
        assert!((t.y + 5.0 * d / 1000.0).abs() < EPS);
    }

    #[test]
    fn pan_follows_current_orientation() {
        // Pitched by 90°, dragging up the screen moves along +Y instead of +Z.
        let mut cam = level();
        cam.rotate(DVec2::new(0.0, 90.0 / 0.7), false);
        assert!((cam.state().rotation.x - 90.0).abs() < EPS);
        cam.pan(DVec2::new(0.0, -10.0), false);
        let t = cam.state().translation;
        assert!(t.x.abs() < EPS);
        assert!((t.y - 5.0).abs() < EPS);
        assert!(t.z.abs() < EPS);
    }

    #[test]
    fn pan_offset_survives_model_rotation() {
        // Rotating the panned offset forward by the model rotation gives back
        // the screen-plane offset.
        let mut cam = CameraController::default();
        cam.pan(DVec2::new(20.0, -8.0), false);
        let t = cam.state().translation;
        let r = cam.state().rotation;
        let model = rotation(r.x, 1.0, 0.0, 0.0)
            * rotation(r.y, 0.0, 1.0, 0.0)
            * rotation(r.z, 0.0, 0.0, 1.0);
        let back = (model * Mat4::translation(t)).translation_part();
        assert!((back - DVec3::new(10.0, 0.0, 4.0)).length() < EPS);
    }

    #[test]
    fn rotate_pitches_and_rolls() {
        let mut cam = level();
        cam.rotate(DVec2::new(10.0, -20.0), false);
        let r = cam.state().rotation;
        assert!((r.x - (360.0 - 14.0)).abs() < EPS);
        assert_eq!(r.y, 0.0);
        assert!((r.z - 7.0).abs() < EPS);
    }

    #[test]
    fn rotate_with_modifier_yaws() {
        let mut cam = level();
        cam.rotate(DVec2::new(10.0, 0.0), true);
        let r = cam.state().rotation;
        assert!((r.y - 7.0).abs() < EPS);
        assert_eq!(r.z, 0.0);
    }

    #[test]
    fn two_notches_out_scale_distance() {
        let mut cam = CameraController::default();
        let before = cam.state().distance;
        cam.zoom_steps(-240.0 / 120.0);
        let expected = before * (1.0 / 0.9) * (1.0 / 0.9);
        assert!((cam.state().distance - expected).abs() < 1e-9);
    }

    #[test]
    fn reset_restores_initial_view() {
        let mut cam = CameraController::default();
        cam.rotate(DVec2::new(3.0, 4.0), false);
        cam.pan(DVec2::new(3.0, 4.0), true);
        cam.zoom_steps(3.0);
        cam.toggle_ortho();
        cam.reset();
        assert_eq!(*cam.state(), CameraState::default());
    }

    #[test]
    fn set_state_normalizes() {
        let mut cam = CameraController::default();
        cam.set_state(CameraState {
            rotation: DVec3::new(-90.0, 720.0, 10.0),
            translation: DVec3::ONE,
            distance: 0.0,
            ortho: true,
        });
        let s = cam.state();
        assert_eq!(s.rotation, DVec3::new(270.0, 0.0, 10.0));
        assert!(s.distance > 0.0);
        assert!(s.ortho);
    }
}
