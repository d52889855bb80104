//! Input handling: event types, the pointer drag state machine, and the
//! interaction engine that converts raw window events into viewport
//! commands.

/// Drag tracking and pointer state machine states.
pub mod drag;
/// Platform-agnostic input events.
pub mod event;
/// Bindable keyboard actions.
pub mod keyboard;
/// Converts raw events into viewport commands.
pub mod processor;

pub use drag::{DragState, PointerState};
pub use event::{ButtonSet, InputEvent, Modifiers, MouseButton, WHEEL_NOTCH};
pub use keyboard::KeyAction;
pub use processor::InteractionEngine;
