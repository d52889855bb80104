use std::fmt;

use glam::DVec3;
use serde::{Deserialize, Serialize};

/// Smallest distance the camera may zoom in to.
pub const MIN_DISTANCE: f64 = 1e-3;
/// Largest distance the camera may zoom out to.
pub const MAX_DISTANCE: f64 = 1e7;

/// Wrap an angle in degrees into `[0, 360)`.
///
/// Runs in constant time for any finite input, however many turns it spans.
#[must_use]
pub fn wrap_degrees(angle: f64) -> f64 {
    let wrapped = angle.rem_euclid(360.0);
    // rem_euclid rounds tiny negatives up to exactly 360.0
    if wrapped >= 360.0 {
        0.0
    } else {
        wrapped
    }
}

/// Orientation, offset and zoom of the viewport camera.
///
/// The camera sits on the -Y axis at `distance` from the origin, looking at
/// the origin with +Z up. The scene is rotated by `rotation` (applied X, then
/// Y, then Z in the model matrix) and then shifted by `translation`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CameraState {
    /// Rotation angles `(rx, ry, rz)` in degrees, each in `[0, 360)`.
    pub rotation: DVec3,
    /// World-space offset applied after rotation.
    pub translation: DVec3,
    /// Distance from the eye to the origin. Always positive.
    pub distance: f64,
    /// Orthographic projection instead of perspective.
    pub ortho: bool,
}

impl Default for CameraState {
    fn default() -> Self {
        Self {
            rotation: DVec3::new(35.0, 0.0, 25.0),
            translation: DVec3::ZERO,
            distance: 500.0,
            ortho: false,
        }
    }
}

impl CameraState {
    /// Multiply the distance by `factor` (`< 1` zooms in).
    ///
    /// The result is clamped into [`MIN_DISTANCE`]..=[`MAX_DISTANCE`].
    pub fn zoom(&mut self, factor: f64) {
        self.distance = (self.distance * factor).clamp(MIN_DISTANCE, MAX_DISTANCE);
    }

    /// Add `delta` degrees to the rotation and re-normalize every angle.
    pub fn add_rotation(&mut self, delta: DVec3) {
        let r = self.rotation + delta;
        self.rotation = DVec3::new(wrap_degrees(r.x), wrap_degrees(r.y), wrap_degrees(r.z));
    }

    /// Add `delta` to the translation.
    pub fn add_translation(&mut self, delta: DVec3) {
        self.translation += delta;
    }

    /// Values shown in the status line: `(translate, rotate, distance)`.
    ///
    /// Translate is the negated offset; rotate is reported as the viewer's
    /// orientation rather than the scene's.
    #[must_use]
    pub fn readout(&self) -> (DVec3, DVec3, f64) {
        // Adding 0.0 turns -0.0 into 0.0 so idle cameras print cleanly.
        let translate = -self.translation + DVec3::ZERO;
        let r = self.rotation;
        let rotate = DVec3::new(
            (360.0 - r.x + 90.0).rem_euclid(360.0),
            (360.0 - r.y).rem_euclid(360.0),
            (360.0 - r.z).rem_euclid(360.0),
        );
        (translate, rotate, self.distance)
    }

    /// Formatter for the one-line status readout.
    #[must_use]
    pub fn status(&self) -> ViewportStatus {
        ViewportStatus(*self)
    }
}

/// Displays as the viewport status line, e.g.
/// `Viewport: translate = [ 0.00 0.00 0.00 ], rotate = [ 55.00 0.00 335.00 ], distance = 500.00`.
#[derive(Debug, Clone, Copy)]
pub struct ViewportStatus(CameraState);

impl fmt::Display for ViewportStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (t, r, d) = self.0.readout();
        write!(
            f,
            "Viewport: translate = [ {:.2} {:.2} {:.2} ], rotate = [ {:.2} {:.2} {:.2} ], distance = {:.2}",
            t.x, t.y, t.z, r.x, r.y, r.z, d
        )
    }
}
