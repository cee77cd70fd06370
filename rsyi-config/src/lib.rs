//! # RSYI config
//!
//! Loads `keyboard.toml`: the optional firmware features, tri-layer rules, muse settings
//! and an optional keymap written as text. The user file is merged over an embedded
//! default config, then validated.

use std::collections::HashMap;
use std::path::Path;

use config::{Config, File, FileFormat};
use rsyi_types::action::KeyAction;
use rsyi_types::behavior::{MuseConfig, TriLayer};
use rsyi_types::feature::FeatureConfig;
use serde_derive::Deserialize;
use serde_inline_default::serde_inline_default;

pub mod error;
mod keymap;
pub mod validation;

pub use error::{ConfigError, ConfigResult};

/// Defaults for every field of `keyboard.toml`
pub const DEFAULT_CONFIG: &str = include_str!("default_config.toml");

/// Configurations for the keymap, read from `keyboard.toml`
#[derive(Clone, Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct KeyboardTomlConfig {
    /// Optional firmware features
    #[serde(default)]
    features: FeatureConfig,
    /// Behavior config
    #[serde(default)]
    behavior: BehaviorTomlConfig,
    /// Muse sequencer defaults
    #[serde(default)]
    muse: MuseConfig,
    /// Dimensions of the keymap
    #[serde(default)]
    layout: LayoutTomlConfig,
    /// Layers of key maps
    #[serde(default)]
    layer: Vec<LayerTomlConfig>,
}

/// Configurations for layer behavior
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BehaviorTomlConfig {
    /// `[lower, upper, adjust]` rules, applied in order
    #[serde(default)]
    pub tri_layers: Vec<TriLayer>,
}

/// Configurations for the keymap dimensions
#[serde_inline_default]
#[derive(Clone, Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LayoutTomlConfig {
    #[serde_inline_default(4)]
    pub rows: u8,
    #[serde_inline_default(12)]
    pub cols: u8,
    #[serde_inline_default(6)]
    pub layers: u8,
}

impl Default for LayoutTomlConfig {
    fn default() -> Self {
        Self {
            rows: 4,
            cols: 12,
            layers: 6,
        }
    }
}

/// A layer of the keymap, `keys` lists `rows * cols` keys in row-major order
#[derive(Clone, Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LayerTomlConfig {
    pub name: Option<String>,
    pub keys: String,
}

impl KeyboardTomlConfig {
    /// Read, merge and validate a `keyboard.toml` file
    pub fn new_from_toml_path<P: AsRef<Path>>(config_toml_path: P) -> ConfigResult<Self> {
        let path = config_toml_path.as_ref().display().to_string();
        let content = std::fs::read_to_string(config_toml_path.as_ref()).map_err(|e| ConfigError::FileRead {
            path: path.clone(),
            message: e.to_string(),
        })?;
        Self::parse(&content, &path)
    }

    /// Merge and validate the content of a `keyboard.toml`
    pub fn new_from_toml_str(content: &str) -> ConfigResult<Self> {
        Self::parse(content, "<string>")
    }

    fn parse(content: &str, path: &str) -> ConfigResult<Self> {
        // The first run only checks the syntax, for a readable error
        toml::from_str::<toml::Table>(content).map_err(|e| ConfigError::TomlParse {
            path: path.to_string(),
            message: e.message().to_string(),
        })?;

        // The second run, load the user config and merge with the default config
        let config: KeyboardTomlConfig = Config::builder()
            .add_source(File::from_str(DEFAULT_CONFIG, FileFormat::Toml))
            .add_source(File::from_str(content, FileFormat::Toml))
            .build()
            .and_then(|c| c.try_deserialize())
            .map_err(|e| ConfigError::TomlParse {
                path: path.to_string(),
                message: e.to_string(),
            })?;

        validation::validate_config(&config)?;
        Ok(config)
    }

    pub fn features(&self) -> FeatureConfig {
        self.features
    }

    pub fn tri_layers(&self) -> &[TriLayer] {
        &self.behavior.tri_layers
    }

    pub fn muse(&self) -> MuseConfig {
        self.muse
    }

    pub fn layout(&self) -> &LayoutTomlConfig {
        &self.layout
    }

    pub fn layers(&self) -> &[LayerTomlConfig] {
        &self.layer
    }

    /// Index of every named layer
    pub(crate) fn layer_names(&self) -> HashMap<String, u8> {
        self.layer
            .iter()
            .enumerate()
            .filter_map(|(i, l)| l.name.clone().map(|name| (name, i as u8)))
            .collect()
    }

    /// Build the keymap table. Layers missing from the file are transparent.
    ///
    /// `ROW`, `COL` and `NUM_LAYER` must match the `[layout]` section.
    pub fn keymap<const ROW: usize, const COL: usize, const NUM_LAYER: usize>(
        &self,
    ) -> ConfigResult<[[[KeyAction; COL]; ROW]; NUM_LAYER]> {
        for (field, value, expected) in [
            ("layout.rows", self.layout.rows as usize, ROW),
            ("layout.cols", self.layout.cols as usize, COL),
            ("layout.layers", self.layout.layers as usize, NUM_LAYER),
        ] {
            if value != expected {
                return Err(ConfigError::InvalidValue {
                    field: field.to_string(),
                    value: value.to_string(),
                    expected: expected.to_string(),
                });
            }
        }

        let layer_names = self.layer_names();
        let mut keymap = [[[KeyAction::Transparent; COL]; ROW]; NUM_LAYER];
        for (layer_idx, layer) in self.layer.iter().enumerate() {
            let actions = keymap::parse_layer(layer_idx, &layer.keys, &layer_names, self.layout.layers)?;
            if actions.len() != ROW * COL {
                return Err(ConfigError::Validation {
                    field: format!("layer[{}].keys", layer_idx),
                    message: format!("expected {} keys, got {}", ROW * COL, actions.len()),
                });
            }
            let Some(rows) = keymap.get_mut(layer_idx) else {
                return Err(ConfigError::Validation {
                    field: "layer".to_string(),
                    message: format!("at most {} layers are supported", NUM_LAYER),
                });
            };
            for (i, action) in actions.into_iter().enumerate() {
                rows[i / COL][i % COL] = action;
            }
        }
        Ok(keymap)
    }
}
