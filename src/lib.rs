// -- Lint policy ---------------------------------------------------------
// This is the single source of truth for crate-wide lints.

// Broad lint groups
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![deny(clippy::nursery)]
// Documentation
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]
#![deny(rustdoc::bare_urls)]
// No panicking in library code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![deny(clippy::todo)]
#![deny(clippy::unimplemented)]
// No debug/print artifacts
#![deny(clippy::dbg_macro)]
#![deny(clippy::print_stdout)]
#![deny(clippy::print_stderr)]
// Import hygiene
#![deny(clippy::wildcard_imports)]
// Complexity limits (thresholds in clippy.toml)
#![deny(clippy::cognitive_complexity)]
#![deny(clippy::too_many_lines)]
#![deny(clippy::excessive_nesting)]
// Function signature hygiene
#![deny(clippy::too_many_arguments)]
#![deny(clippy::fn_params_excessive_bools)]
// Clone / pass-by-value hygiene
#![deny(clippy::needless_pass_by_value)]
#![deny(clippy::implicit_clone)]
// String hygiene
#![deny(clippy::inefficient_to_string)]
#![deny(clippy::redundant_closure_for_method_calls)]
#![deny(clippy::manual_string_new)]
#![deny(clippy::str_to_string)]
// Cargo lints (warn, not deny since cargo lints can be noisy)
#![warn(clippy::cargo)]
// Unused / redundant code
#![deny(unused_results)]
#![deny(unused_qualifications)]
// Cast hygiene
#![deny(trivial_casts)]
#![deny(trivial_numeric_casts)]

//! Toolkit-independent core of an interactive 3D viewport.
//!
//! Glview owns the camera of a 3D view (rotation, translation, zoom and
//! projection mode), turns pointer drags, key presses and wheel scrolls into
//! camera updates, and produces the per-frame matrices and decoration
//! geometry (crosshair, axes, axis labels, status line) a host renderer
//! needs. It never touches a window or a graphics API itself.
//!
//! # Key entry points
//!
//! - [`viewport::Viewport`] - the owning component hosts talk to
//! - [`camera::CameraState`] - rotation, translation, distance and projection
//! - [`input::InteractionEngine`] - the pointer drag state machine
//! - [`camera::matrix`] - row-major 4×4 helpers behind orientation-relative
//!   panning
//! - [`options::Options`] - runtime configuration with TOML presets
//!
//! # Architecture
//!
//! Everything runs on the host's UI thread. Input events go through the
//! interaction engine, which emits [`viewport::ViewCommand`]s; the viewport
//! applies them to its camera controller and notifies
//! [`viewport::ViewportObserver`]s. At paint time the viewport builds a
//! [`camera::FrameSetup`], hands it to the injected
//! [`viewport::SceneRenderer`], and returns decorations as line batches.

pub mod camera;
pub mod decoration;
pub mod error;
pub mod input;
pub mod options;
pub mod replay;
pub mod viewport;

pub use error::ViewError;
