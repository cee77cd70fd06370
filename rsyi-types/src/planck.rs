//! Layers and custom keycodes of the Planck layout.

use strum::{EnumString, FromRepr};

use crate::action::{Action, KeyAction};
use crate::keycode::KeyCode;

#[derive(Clone, Copy, Debug, PartialEq, Eq, FromRepr, EnumString)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum PlanckLayer {
    Qwerty = 0,
    /// Dvorak typed on a host set to Dvorak, the keys are remapped in software
    Sdrk = 1,
    Dvorak = 2,
    Lower = 3,
    Raise = 4,
    Adjust = 5,
}

impl PlanckLayer {
    pub const fn index(self) -> u8 {
        self as u8
    }

    pub fn from_index(index: u8) -> Option<Self> {
        Self::from_repr(index)
    }
}

/// Keycodes handled by the keymap itself, mapped onto the user keycode range
#[derive(Clone, Copy, Debug, PartialEq, Eq, EnumString)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum CustomKeycode {
    /// Make qwerty the default layer
    Qwerty,
    /// Make software dvorak the default layer
    Sdrk,
    /// Make dvorak the default layer
    Dvorak,
    /// Right shift while held, also steps the backlight and drives the rev5 indicator
    Backlit,
}

impl CustomKeycode {
    pub const fn keycode(self) -> KeyCode {
        match self {
            CustomKeycode::Qwerty => KeyCode::User0,
            CustomKeycode::Sdrk => KeyCode::User1,
            CustomKeycode::Dvorak => KeyCode::User2,
            CustomKeycode::Backlit => KeyCode::User3,
        }
    }

    pub const fn action(self) -> KeyAction {
        KeyAction::Single(Action::Key(self.keycode()))
    }

    pub fn from_keycode(keycode: KeyCode) -> Option<Self> {
        match keycode.user_index()? {
            0 => Some(CustomKeycode::Qwerty),
            1 => Some(CustomKeycode::Sdrk),
            2 => Some(CustomKeycode::Dvorak),
            3 => Some(CustomKeycode::Backlit),
            _ => None,
        }
    }

    /// The layer this key makes default, if it is a layer switch
    pub const fn default_layer(self) -> Option<PlanckLayer> {
        match self {
            CustomKeycode::Qwerty => Some(PlanckLayer::Qwerty),
            CustomKeycode::Sdrk => Some(PlanckLayer::Sdrk),
            CustomKeycode::Dvorak => Some(PlanckLayer::Dvorak),
            CustomKeycode::Backlit => None,
        }
    }
}
