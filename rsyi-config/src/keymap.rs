use std::collections::HashMap;
use std::str::FromStr;

use pest::Parser;
use pest::iterators::Pair;
use pest_derive::Parser;
use rsyi_types::action::{Action, KeyAction};
use rsyi_types::dvorak;
use rsyi_types::keycode::KeyCode;
use rsyi_types::modifier::SHIFT;
use rsyi_types::planck::CustomKeycode;

use crate::error::{ConfigError, ConfigResult};

// Pest parser using the grammar file
#[derive(Parser)]
#[grammar = "keymap.pest"]
struct KeymapParser;

/// Parse the `keys` of the layer at `layer` into actions, in row-major order
pub(crate) fn parse_layer(
    layer: usize,
    keys: &str,
    layer_names: &HashMap<String, u8>,
    num_layers: u8,
) -> ConfigResult<Vec<KeyAction>> {
    let pairs = KeymapParser::parse(Rule::key_map, keys).map_err(|e| ConfigError::Validation {
        field: format!("layer[{}].keys", layer),
        message: format!("Invalid keymap format: {}", e),
    })?;

    let mut actions = Vec::new();
    for pair in pairs {
        // Should only be one pair matching Rule::key_map
        if pair.as_rule() != Rule::key_map {
            continue;
        }
        for inner_pair in pair.into_inner() {
            let action = match inner_pair.as_rule() {
                Rule::transparent_action => KeyAction::Transparent,
                Rule::no_action => KeyAction::No,
                Rule::simple_keycode => KeyAction::Single(Action::Key(parse_keycode(layer, inner_pair.as_str())?)),
                Rule::shifted_action => {
                    let keycode = parse_keycode(layer, first_inner(&inner_pair))?;
                    KeyAction::Single(Action::KeyWithModifier(keycode, SHIFT))
                }
                Rule::dvorak_action => {
                    dvorak::from_name(first_inner(&inner_pair)).ok_or_else(|| unknown(layer, &inner_pair))?
                }
                Rule::custom_action => CustomKeycode::from_str(first_inner(&inner_pair))
                    .map(CustomKeycode::action)
                    .map_err(|_| unknown(layer, &inner_pair))?,
                Rule::mo_action => {
                    let target = parse_layer_ref(layer, &inner_pair, layer_names)?;
                    if target >= num_layers {
                        return Err(ConfigError::InvalidValue {
                            field: format!("layer[{}].keys", layer),
                            value: inner_pair.as_str().to_string(),
                            expected: format!("a layer below {}", num_layers),
                        });
                    }
                    KeyAction::Single(Action::LayerOn(target))
                }
                Rule::EOI => continue,
                _ => return Err(unknown(layer, &inner_pair)),
            };
            actions.push(action);
        }
    }
    Ok(actions)
}

fn first_inner<'a>(pair: &Pair<'a, Rule>) -> &'a str {
    pair.clone().into_inner().next().map(|p| p.as_str()).unwrap_or_default()
}

fn unknown(layer: usize, pair: &Pair<'_, Rule>) -> ConfigError {
    ConfigError::UnknownKeycode {
        layer,
        token: pair.as_str().to_string(),
    }
}

/// Keycode by its variant name, a single digit is the number row key
fn parse_keycode(layer: usize, name: &str) -> ConfigResult<KeyCode> {
    let name = match name {
        "0" | "1" | "2" | "3" | "4" | "5" | "6" | "7" | "8" | "9" => format!("Kc{}", name),
        _ => name.to_string(),
    };
    KeyCode::from_str(&name).map_err(|_| ConfigError::UnknownKeycode { layer, token: name })
}

/// `MO(3)` or `MO(lower)`, names come from the `name` of each [[layer]]
fn parse_layer_ref(layer: usize, pair: &Pair<'_, Rule>, layer_names: &HashMap<String, u8>) -> ConfigResult<u8> {
    let Some(inner) = pair.clone().into_inner().next() else {
        return Err(unknown(layer, pair));
    };
    match inner.as_rule() {
        Rule::layer_number => inner.as_str().parse::<u8>().map_err(|_| unknown(layer, pair)),
        _ => layer_names.get(inner.as_str()).copied().ok_or(ConfigError::Validation {
            field: format!("layer[{}].keys", layer),
            message: format!("Invalid layer name: {}", inner.as_str()),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(keys: &str) -> ConfigResult<Vec<KeyAction>> {
        let names = HashMap::from([("lower".to_string(), 3)]);
        parse_layer(0, keys, &names, 6)
    }

    #[test]
    fn test_parse_tokens() {
        let actions = parse("A  Kc1 1\n____ Trns No MO(4) MO(lower) S(Grave) S(9) DV(QUOTE) Custom(Backlit)").unwrap();
        assert_eq!(
            actions,
            vec![
                KeyAction::Single(Action::Key(KeyCode::A)),
                KeyAction::Single(Action::Key(KeyCode::Kc1)),
                KeyAction::Single(Action::Key(KeyCode::Kc1)),
                KeyAction::Transparent,
                KeyAction::Transparent,
                KeyAction::No,
                KeyAction::Single(Action::LayerOn(4)),
                KeyAction::Single(Action::LayerOn(3)),
                KeyAction::Single(Action::KeyWithModifier(KeyCode::Grave, SHIFT)),
                KeyAction::Single(Action::KeyWithModifier(KeyCode::Kc9, SHIFT)),
                dvorak::QUOTE,
                CustomKeycode::Backlit.action(),
            ]
        );
    }

    #[test]
    fn test_keycode_prefixes_are_not_actions() {
        // `No` and `S` prefixes of longer keycode names
        let actions = parse("NonusHash Space S").unwrap();
        assert_eq!(
            actions,
            vec![
                KeyAction::Single(Action::Key(KeyCode::NonusHash)),
                KeyAction::Single(Action::Key(KeyCode::Space)),
                KeyAction::Single(Action::Key(KeyCode::S)),
            ]
        );
    }

    #[test]
    fn test_unknown_tokens() {
        assert_eq!(
            parse("A Foo").unwrap_err(),
            ConfigError::UnknownKeycode {
                layer: 0,
                token: "Foo".to_string()
            }
        );
        assert!(matches!(
            parse("Custom(Nope)").unwrap_err(),
            ConfigError::UnknownKeycode { .. }
        ));
        assert!(matches!(parse("DV(AE)").unwrap_err(), ConfigError::UnknownKeycode { .. }));
        assert!(matches!(parse("MO(raise)").unwrap_err(), ConfigError::Validation { .. }));
        assert!(matches!(parse("MO(6)").unwrap_err(), ConfigError::InvalidValue { .. }));
        assert!(matches!(parse("S(A").unwrap_err(), ConfigError::Validation { .. }));
    }
}
