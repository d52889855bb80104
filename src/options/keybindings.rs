use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::input::KeyAction;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(from = "BindingTable")]
/// Configurable keyboard bindings mapping actions to key strings.
///
/// After editing [`bindings`](Self::bindings) directly, call
/// [`rebuild_reverse_map`](Self::rebuild_reverse_map). The interaction
/// engine rebuilds it whenever it is handed a set of bindings.
pub struct KeybindingOptions {
    /// Maps action → key strings (e.g. `ZoomIn` → `["+", "="]`).
    pub bindings: HashMap<KeyAction, Vec<String>>,
    /// Reverse lookup cache (key string → action).
    #[serde(skip)]
    key_to_action: HashMap<String, KeyAction>,
}

/// Serialized form; every deserialization goes through here so the
/// lookup cache is always built from what was read.
#[derive(Deserialize)]
#[serde(default)]
struct BindingTable {
    bindings: HashMap<KeyAction, Vec<String>>,
}

impl Default for BindingTable {
    fn default() -> Self {
        Self {
            bindings: HashMap::from([
                (KeyAction::ZoomIn, vec!["+".into(), "=".into()]),
                (KeyAction::ZoomOut, vec!["-".into()]),
                (KeyAction::ToggleOrtho, vec!["KeyO".into()]),
                (KeyAction::ToggleAxes, vec!["KeyA".into()]),
                (KeyAction::ToggleCrosshairs, vec!["KeyC".into()]),
                (KeyAction::ResetView, vec!["Home".into()]),
            ]),
        }
    }
}

impl From<BindingTable> for KeybindingOptions {
    fn from(table: BindingTable) -> Self {
        let mut opts = Self {
            bindings: table.bindings,
            key_to_action: HashMap::new(),
        };
        opts.rebuild_reverse_map();
        opts
    }
}

impl Default for KeybindingOptions {
    fn default() -> Self {
        BindingTable::default().into()
    }
}

impl KeybindingOptions {
    /// Rebuild the reverse lookup map (key string → action).
    ///
    /// A key bound to several actions goes to the one declared first in
    /// [`KeyAction`]; the others are logged and ignored.
    pub fn rebuild_reverse_map(&mut self) {
        self.key_to_action.clear();
        let mut actions: Vec<_> = self.bindings.iter().collect();
        actions.sort_by_key(|(action, _)| **action);
        for (action, keys) in actions {
            for key in keys {
                match self.key_to_action.get(key).copied() {
                    Some(existing) if existing != *action => log::warn!(
                        "key {key:?} bound to both {existing:?} and {action:?}; keeping {existing:?}"
                    ),
                    Some(_) => {}
                    None => {
                        let _ = self.key_to_action.insert(key.clone(), *action);
                    }
                }
            }
        }
    }

    /// Look up the action for a key string.
    #[must_use]
    pub fn lookup(&self, key: &str) -> Option<KeyAction> {
        self.key_to_action.get(key).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn edited_bindings_take_effect_after_rebuild() {
        let mut opts = KeybindingOptions::default();
        let _ = opts
            .bindings
            .insert(KeyAction::ZoomIn, vec!["PageUp".into()]);
        opts.rebuild_reverse_map();
        assert_eq!(opts.lookup("PageUp"), Some(KeyAction::ZoomIn));
        assert_eq!(opts.lookup("+"), None);
    }

    #[test]
    fn shared_key_goes_to_first_declared_action() {
        let mut opts = KeybindingOptions::default();
        let _ = opts
            .bindings
            .insert(KeyAction::ResetView, vec!["KeyO".into()]);
        opts.rebuild_reverse_map();
        assert_eq!(opts.lookup("KeyO"), Some(KeyAction::ToggleOrtho));
    }

    #[test]
    fn json_deserialization_builds_lookup() {
        let opts: KeybindingOptions =
            serde_json::from_str(r#"{"bindings":{"reset_view":["KeyR"]}}"#)
                .unwrap();
        assert_eq!(opts.lookup("KeyR"), Some(KeyAction::ResetView));
        assert_eq!(opts.lookup("Home"), None);

        let empty: KeybindingOptions = serde_json::from_str("{}").unwrap();
        assert_eq!(empty.lookup("+"), Some(KeyAction::ZoomIn));
    }
}
