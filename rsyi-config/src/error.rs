//! Errors reported while loading `keyboard.toml`

use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// The file couldn't be read
    FileRead { path: String, message: String },
    /// Bad TOML syntax, or a value of the wrong type
    TomlParse { path: String, message: String },
    /// A section is inconsistent with the rest of the file
    Validation { field: String, message: String },
    /// A value outside of its accepted range
    InvalidValue {
        field: String,
        value: String,
        expected: String,
    },
    /// A token in `[[layer]].keys` that is neither a keycode nor an action
    UnknownKeycode { layer: usize, token: String },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::FileRead { path, message } => {
                write!(f, "Failed to read config file '{}': {}", path, message)
            }
            ConfigError::TomlParse { path, message } => write!(f, "{} is not a valid keyboard.toml: {}", path, message),
            ConfigError::Validation { field, message } => write!(f, "{}: {}", field, message),
            ConfigError::InvalidValue { field, value, expected } => {
                write!(f, "{} = {} is invalid, expected {}", field, value, expected)
            }
            ConfigError::UnknownKeycode { layer, token } => {
                write!(f, "Unknown key '{}' in layer {}", token, layer)
            }
        }
    }
}

impl std::error::Error for ConfigError {}

pub type ConfigResult<T> = Result<T, ConfigError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let err = ConfigError::InvalidValue {
            field: "muse.tempo".to_string(),
            value: "0".to_string(),
            expected: "a positive number of scan ticks".to_string(),
        };
        assert_eq!(err.to_string(), "muse.tempo = 0 is invalid, expected a positive number of scan ticks");
        assert_eq!(
            ConfigError::UnknownKeycode {
                layer: 2,
                token: "Hyper".to_string()
            }
            .to_string(),
            "Unknown key 'Hyper' in layer 2"
        );
    }
}
