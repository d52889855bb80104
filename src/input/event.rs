use serde::{Deserialize, Serialize};

/// Scroll units in one wheel notch.
pub const WHEEL_NOTCH: f64 = 120.0;

/// Platform-agnostic input events.
///
/// These are fed into an [`InteractionEngine`](super::InteractionEngine)
/// which converts them into [`ViewCommand`](crate::viewport::ViewCommand)
/// values. Serde uses an internally tagged form so replay traces read as
/// one JSON object per line:
///
/// ```json
/// {"type":"pointer_down","x":10,"y":20,"button":"left"}
/// {"type":"pointer_move","x":14,"y":20,"buttons":["left"]}
/// {"type":"scroll","delta":-240}
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum InputEvent {
    /// A pointer button was pressed.
    PointerDown {
        /// Absolute horizontal position.
        x: f64,
        /// Absolute vertical position (grows downward).
        y: f64,
        /// Which button went down.
        button: MouseButton,
    },
    /// The pointer moved to an absolute position.
    PointerMove {
        /// Absolute horizontal position.
        x: f64,
        /// Absolute vertical position (grows downward).
        y: f64,
        /// Buttons held during the move.
        #[serde(default)]
        buttons: ButtonSet,
        /// Modifier keys held during the move.
        #[serde(default)]
        modifiers: Modifiers,
    },
    /// A pointer button was released.
    PointerUp {
        /// Which button went up.
        button: MouseButton,
    },
    /// A key was pressed.
    Key {
        /// Key string, either the typed character (`"+"`) or a
        /// `winit::keyboard::KeyCode` debug name (`"KeyO"`).
        key: String,
    },
    /// Scroll wheel; positive zooms in. [`WHEEL_NOTCH`] units per notch.
    Scroll {
        /// Signed scroll amount.
        delta: f64,
    },
}

/// Platform-agnostic mouse button identifier.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum MouseButton {
    /// Primary (left) mouse button.
    Left,
    /// Secondary (right) mouse button.
    Right,
    /// Middle mouse button (wheel click).
    Middle,
    /// Any further button (back, forward, vendor extras). Never primary.
    Other,
}

impl MouseButton {
    const fn bit(self) -> u8 {
        match self {
            Self::Left => 1,
            Self::Right => 2,
            Self::Middle => 4,
            Self::Other => 8,
        }
    }
}

/// Set of mouse buttons held at the time of an event.
///
/// Serializes as a list of button names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "Vec<MouseButton>", into = "Vec<MouseButton>")]
pub struct ButtonSet(u8);

impl ButtonSet {
    /// No buttons held.
    pub const NONE: Self = Self(0);

    /// This set plus `button`.
    #[must_use]
    pub const fn with(self, button: MouseButton) -> Self {
        Self(self.0 | button.bit())
    }

    /// Whether `button` is held.
    #[must_use]
    pub const fn contains(self, button: MouseButton) -> bool {
        self.0 & button.bit() != 0
    }

    /// Whether no button is held.
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }
}

impl From<MouseButton> for ButtonSet {
    fn from(button: MouseButton) -> Self {
        Self::NONE.with(button)
    }
}

impl From<Vec<MouseButton>> for ButtonSet {
    fn from(buttons: Vec<MouseButton>) -> Self {
        buttons.into_iter().fold(Self::NONE, Self::with)
    }
}

impl From<ButtonSet> for Vec<MouseButton> {
    fn from(set: ButtonSet) -> Self {
        [
            MouseButton::Left,
            MouseButton::Right,
            MouseButton::Middle,
            MouseButton::Other,
        ]
        .into_iter()
        .filter(|b| set.contains(*b))
        .collect()
    }
}

/// Modifier keys held at the time of an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Modifiers {
    /// Whether the shift key is held. Shift selects yaw while rotating and
    /// vertical pan while panning.
    pub shift: bool,
}

#[cfg(feature = "viewer")]
impl From<winit::event::MouseButton> for MouseButton {
    fn from(button: winit::event::MouseButton) -> Self {
        match button {
            winit::event::MouseButton::Left => Self::Left,
            winit::event::MouseButton::Right => Self::Right,
            winit::event::MouseButton::Middle => Self::Middle,
            winit::event::MouseButton::Back
            | winit::event::MouseButton::Forward
            | winit::event::MouseButton::Other(_) => Self::Other,
        }
    }
}

#[cfg(feature = "viewer")]
impl From<winit::keyboard::ModifiersState> for Modifiers {
    fn from(state: winit::keyboard::ModifiersState) -> Self {
        Self {
            shift: state.shift_key(),
        }
    }
}
