//! Keyboard actions.
//!
//! - [`Action`] - Single operations that a key sends or executes
//! - [`KeyAction`] - What a key position in the keymap does
//! - [`EncoderAction`] - Rotary encoder actions

use serde::{Deserialize, Serialize};

use crate::keycode::KeyCode;
use crate::modifier::ModifierCombination;

/// A KeyAction is the action at a keyboard position, stored in keymap.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum KeyAction {
    /// No action.
    #[default]
    No,
    /// Transparent action, next active layer below will be checked.
    Transparent,
    /// A single action. Triggered when pressed and cancelled when released.
    Single(Action),
}

impl KeyAction {
    /// The keycode sent by this action, if any
    pub fn keycode(&self) -> Option<KeyCode> {
        match self {
            KeyAction::Single(Action::Key(k)) | KeyAction::Single(Action::KeyWithModifier(k, _)) => Some(*k),
            _ => None,
        }
    }

    /// The layer activated while this key is held, if any
    pub fn momentary_layer(&self) -> Option<u8> {
        match self {
            KeyAction::Single(Action::LayerOn(layer)) => Some(*layer),
            _ => None,
        }
    }
}

/// A single basic action that a keyboard can execute.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Action {
    /// A normal key stroke
    Key(KeyCode),
    /// Key stroke with modifier combination held, e.g. `~` is shifted grave
    KeyWithModifier(KeyCode, ModifierCombination),
    /// Activate a layer while the key is held
    LayerOn(u8),
}

/// EncoderAction is the action at an encoder position, as `(clockwise, counter_clockwise)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct EncoderAction {
    clockwise: KeyCode,
    counter_clockwise: KeyCode,
}

impl EncoderAction {
    pub const fn new(clockwise: KeyCode, counter_clockwise: KeyCode) -> Self {
        Self {
            clockwise,
            counter_clockwise,
        }
    }

    pub fn clockwise(&self) -> KeyCode {
        self.clockwise
    }

    pub fn counter_clockwise(&self) -> KeyCode {
        self.counter_clockwise
    }
}
