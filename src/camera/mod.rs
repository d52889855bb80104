//! Camera system for the 3D viewport.
//!
//! Provides the camera state (rotation, translation, zoom, projection mode),
//! the controller that applies drag and zoom gestures to it, the small
//! row-major matrix toolkit the pan gesture is built on, and the render-time
//! projection setup.

/// Rotate, pan and zoom gestures applied to the camera state.
pub mod controller;
/// Row-major 4×4 matrix utilities used to compose interaction deltas.
pub mod matrix;
/// Projection and model matrices for a frame.
pub mod projection;
/// Camera state, angle wrapping and the status readout.
pub mod state;

pub use controller::CameraController;
pub use projection::{DirectionalLight, FrameSetup, ViewUniform};
pub use state::{CameraState, ViewportStatus};
