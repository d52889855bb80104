//! Centralized viewport options with TOML preset support.
//!
//! Camera defaults and sensitivities, decoration toggles, colors and key
//! bindings are consolidated here. Options serialize to/from TOML so hosts
//! can persist a viewport preset alongside their own settings.

mod camera;
mod colors;
mod display;
mod keybindings;

use std::path::Path;

pub use camera::CameraOptions;
pub use colors::ColorOptions;
pub use display::DisplayOptions;
pub use keybindings::KeybindingOptions;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::ViewError;

/// Top-level options container. All sub-structs use `#[serde(default)]` so
/// partial TOML files (e.g. only overriding `[display]`) work correctly.
#[derive(
    Debug, Clone, Serialize, Deserialize, PartialEq, Default, JsonSchema,
)]
#[serde(default)]
pub struct Options {
    /// Initial camera placement and interaction sensitivity.
    pub camera: CameraOptions,
    /// Decoration toggles.
    pub display: DisplayOptions,
    /// Color palette options.
    #[schemars(skip)]
    pub colors: ColorOptions,
    /// Keyboard binding options.
    #[schemars(skip)]
    pub keybindings: KeybindingOptions,
}

impl Options {
    /// Generate JSON Schema describing the UI-exposed options.
    #[must_use]
    pub fn json_schema() -> schemars::Schema {
        schemars::schema_for!(Options)
    }

    /// Parse options from a TOML string. Missing fields use defaults.
    pub fn from_toml(content: &str) -> Result<Self, ViewError> {
        toml::from_str(content).map_err(|e| ViewError::OptionsParse(e.to_string()))
    }

    /// Load options from a TOML file. Missing fields use defaults.
    pub fn load(path: &Path) -> Result<Self, ViewError> {
        let content = std::fs::read_to_string(path).map_err(ViewError::Io)?;
        Self::from_toml(&content)
    }

    /// Save options to a TOML file (pretty-printed).
    pub fn save(&self, path: &Path) -> Result<(), ViewError> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| ViewError::OptionsParse(e.to_string()))?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(ViewError::Io)?;
        }
        std::fs::write(path, content).map_err(ViewError::Io)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::KeyAction;

    #[test]
    fn default_round_trips_through_toml() {
        let opts = Options::default();
        let toml_str = toml::to_string_pretty(&opts).unwrap();
        let parsed = Options::from_toml(&toml_str).unwrap();
        assert_eq!(opts, parsed);
    }

    #[test]
    fn partial_toml_fills_defaults() {
        let toml_str = r"
[display]
show_axes = true
";
        let opts = Options::from_toml(toml_str).unwrap();
        assert!(opts.display.show_axes);
        // Everything else should be default
        assert!(!opts.display.show_crosshairs);
        assert_eq!(opts.camera.distance, 500.0);
        assert_eq!(opts.camera.zoom_step, 0.9);
    }

    #[test]
    fn keybinding_lookup() {
        let opts = Options::default();
        assert_eq!(opts.keybindings.lookup("+"), Some(KeyAction::ZoomIn));
        assert_eq!(opts.keybindings.lookup("="), Some(KeyAction::ZoomIn));
        assert_eq!(opts.keybindings.lookup("-"), Some(KeyAction::ZoomOut));
        assert_eq!(opts.keybindings.lookup("KeyZ"), None);
    }

    #[test]
    fn custom_bindings_rebuild_reverse_map() {
        let toml_str = r#"
[keybindings.bindings]
zoom_in = ["PageUp"]
"#;
        let opts = Options::from_toml(toml_str).unwrap();
        assert_eq!(opts.keybindings.lookup("PageUp"), Some(KeyAction::ZoomIn));
        assert_eq!(opts.keybindings.lookup("+"), None);
    }

    #[test]
    fn malformed_toml_is_an_options_error() {
        let err = Options::from_toml("[camera]\ndistance = \"far\"").unwrap_err();
        assert!(matches!(err, ViewError::OptionsParse(_)));
    }

    #[test]
    fn label_color_inverts_background() {
        let colors = ColorOptions {
            background: [1.0, 0.25, 0.0],
            ..ColorOptions::default()
        };
        assert_eq!(colors.label(), [0.0, 0.75, 1.0]);
    }

    #[test]
    fn schema_has_expected_properties() {
        let schema_value =
            serde_json::to_value(Options::json_schema()).unwrap();
        let props = schema_value["properties"].as_object().unwrap();
        assert!(props.contains_key("camera"));
        assert!(props.contains_key("display"));
        assert!(!props.contains_key("colors"));
        assert!(!props.contains_key("keybindings"));
    }
}
