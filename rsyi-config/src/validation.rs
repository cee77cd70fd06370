//! Validation of `keyboard.toml`, run after the file is merged with the defaults

use std::collections::HashSet;

use rsyi_types::behavior::MAX_TRI_LAYERS;
use rsyi_types::layer::MAX_LAYERS;

use crate::KeyboardTomlConfig;
use crate::error::{ConfigError, ConfigResult};
use crate::keymap::parse_layer;

/// Validates the entire keyboard configuration
pub fn validate_config(config: &KeyboardTomlConfig) -> ConfigResult<()> {
    validate_layout_section(config)?;
    validate_layer_section(config)?;
    validate_behavior_section(config)?;
    validate_muse_section(config)?;
    Ok(())
}

/// Validates the [layout] section
fn validate_layout_section(config: &KeyboardTomlConfig) -> ConfigResult<()> {
    let layout = &config.layout;
    if layout.rows == 0 || layout.cols == 0 {
        return Err(ConfigError::Validation {
            field: "layout".to_string(),
            message: "rows and cols must be positive".to_string(),
        });
    }
    if layout.layers == 0 || layout.layers > MAX_LAYERS {
        return Err(ConfigError::InvalidValue {
            field: "layout.layers".to_string(),
            value: layout.layers.to_string(),
            expected: format!("1 to {}", MAX_LAYERS),
        });
    }
    Ok(())
}

/// Validates every [[layer]]
fn validate_layer_section(config: &KeyboardTomlConfig) -> ConfigResult<()> {
    let layout = &config.layout;
    if config.layer.len() > layout.layers as usize {
        return Err(ConfigError::Validation {
            field: "layer".to_string(),
            message: format!(
                "{} layers defined, but layout.layers is {}",
                config.layer.len(),
                layout.layers
            ),
        });
    }

    let mut names = HashSet::new();
    for name in config.layer.iter().filter_map(|l| l.name.as_ref()) {
        if !names.insert(name) {
            return Err(ConfigError::Validation {
                field: "layer.name".to_string(),
                message: format!("Duplicate layer name: {}", name),
            });
        }
    }

    let layer_names = config.layer_names();
    let expected = layout.rows as usize * layout.cols as usize;
    for (idx, layer) in config.layer.iter().enumerate() {
        let keys = parse_layer(idx, &layer.keys, &layer_names, layout.layers)?;
        if keys.len() != expected {
            return Err(ConfigError::Validation {
                field: format!("layer[{}].keys", idx),
                message: format!("expected {} keys, got {}", expected, keys.len()),
            });
        }
    }
    Ok(())
}

/// Validates the [behavior] section
fn validate_behavior_section(config: &KeyboardTomlConfig) -> ConfigResult<()> {
    let tri_layers = &config.behavior.tri_layers;
    if tri_layers.len() > MAX_TRI_LAYERS {
        return Err(ConfigError::InvalidValue {
            field: "behavior.tri_layers".to_string(),
            value: tri_layers.len().to_string(),
            expected: format!("at most {} rules", MAX_TRI_LAYERS),
        });
    }
    for rule in tri_layers {
        let [lower, upper, adjust] = rule.layers();
        if rule.layers().iter().any(|l| *l >= config.layout.layers) {
            return Err(ConfigError::InvalidValue {
                field: "behavior.tri_layers".to_string(),
                value: format!("[{}, {}, {}]", lower, upper, adjust),
                expected: format!("layers below {}", config.layout.layers),
            });
        }
        if !rule.is_distinct() {
            return Err(ConfigError::Validation {
                field: "behavior.tri_layers".to_string(),
                message: format!("[{}, {}, {}] must use three different layers", lower, upper, adjust),
            });
        }
    }
    Ok(())
}

/// Validates the [muse] section
fn validate_muse_section(config: &KeyboardTomlConfig) -> ConfigResult<()> {
    if config.muse.tempo == 0 {
        return Err(ConfigError::InvalidValue {
            field: "muse.tempo".to_string(),
            value: "0".to_string(),
            expected: "a positive number of scan ticks".to_string(),
        });
    }
    Ok(())
}
