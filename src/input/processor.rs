//! Converts raw platform events into viewport commands.
//!
//! The `InteractionEngine` owns all transient input state (drag tracking,
//! last pointer position) and the key-binding map. It is the only thing
//! that sits between raw window events and
//! [`Viewport::execute`](crate::viewport::Viewport::execute).

use glam::DVec2;

use super::drag::{DragState, PointerState};
use super::event::{InputEvent, MouseButton, WHEEL_NOTCH};
use super::keyboard::KeyAction;
use crate::options::KeybindingOptions;
use crate::viewport::ViewCommand;

impl KeyAction {
    /// Convert to the corresponding [`ViewCommand`].
    fn to_command(self) -> ViewCommand {
        match self {
            Self::ZoomIn => ViewCommand::Zoom { steps: 1.0 },
            Self::ZoomOut => ViewCommand::Zoom { steps: -1.0 },
            Self::ToggleOrtho => ViewCommand::ToggleOrtho,
            Self::ToggleAxes => ViewCommand::ToggleAxes,
            Self::ToggleCrosshairs => ViewCommand::ToggleCrosshairs,
            Self::ResetView => ViewCommand::ResetView,
        }
    }
}

/// Converts raw input events into [`ViewCommand`]s.
///
/// Pointer events drive a two-state machine:
///
/// - `Idle → Dragging` on pointer-down (the host should capture the pointer)
/// - `Dragging → Dragging` on pointer-move, producing a rotate command when
///   the primary button is held and a pan command otherwise
/// - `Dragging → Idle` on pointer-up (the host should release capture)
///
/// Key and scroll events do not depend on the drag state.
///
/// ```ignore
/// if let Some(cmd) = interaction.handle_event(&event) {
///     viewport.execute(cmd);
/// }
/// ```
#[derive(Debug, Clone, Default)]
pub struct InteractionEngine {
    drag: DragState,
    key_bindings: KeybindingOptions,
}

impl InteractionEngine {
    /// Create an engine with default key bindings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an engine with custom key bindings.
    #[must_use]
    pub fn with_key_bindings(key_bindings: KeybindingOptions) -> Self {
        let mut engine = Self::new();
        engine.set_key_bindings(key_bindings);
        engine
    }

    /// Current pointer state.
    #[must_use]
    pub fn state(&self) -> PointerState {
        self.drag.state()
    }

    /// Drag tracking state.
    #[must_use]
    pub fn drag(&self) -> &DragState {
        &self.drag
    }

    /// Read-only access to the key bindings.
    #[must_use]
    pub fn key_bindings(&self) -> &KeybindingOptions {
        &self.key_bindings
    }

    /// Replace the key bindings. The reverse lookup is rebuilt, so edits
    /// made to `bindings` before handing them over take effect.
    pub fn set_key_bindings(&mut self, mut key_bindings: KeybindingOptions) {
        key_bindings.rebuild_reverse_map();
        self.key_bindings = key_bindings;
    }

    /// Look up a key press and return the corresponding command, if bound.
    #[must_use]
    pub fn handle_key_press(&self, key: &str) -> Option<ViewCommand> {
        let action = self.key_bindings.lookup(key);
        if action.is_none() {
            log::trace!("unbound key {key:?}");
        }
        action.map(KeyAction::to_command)
    }

    /// Process a raw input event and return zero or one commands.
    pub fn handle_event(&mut self, event: &InputEvent) -> Option<ViewCommand> {
        match *event {
            InputEvent::PointerDown { x, y, button } => {
                log::trace!("pointer down {button:?} at ({x}, {y})");
                self.drag.begin(DVec2::new(x, y));
                None
            }
            InputEvent::PointerMove {
                x,
                y,
                buttons,
                modifiers,
            } => {
                let delta = self.drag.advance(DVec2::new(x, y));
                if !self.drag.active {
                    return None;
                }
                if buttons.contains(MouseButton::Left) {
                    Some(ViewCommand::RotateCamera {
                        delta,
                        yaw: modifiers.shift,
                    })
                } else {
                    Some(ViewCommand::PanCamera {
                        delta,
                        vertical: modifiers.shift,
                    })
                }
            }
            InputEvent::PointerUp { button } => {
                log::trace!("pointer up {button:?}");
                self.drag.end();
                None
            }
            InputEvent::Key { ref key } => self.handle_key_press(key),
            InputEvent::Scroll { delta } => Some(ViewCommand::Zoom {
                steps: delta / WHEEL_NOTCH,
            }),
        }
    }
}
