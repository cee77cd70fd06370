//! Software Dvorak aliases.
//!
//! Each constant is the action that types the named character on a host whose OS
//! keyboard layout is set to Dvorak, e.g. [`QUOTE`] presses the QWERTY `Q` position.

use crate::action::{Action, KeyAction};
use crate::keycode::KeyCode;
use crate::modifier::SHIFT;

const fn key(k: KeyCode) -> KeyAction {
    KeyAction::Single(Action::Key(k))
}

const fn shifted(k: KeyCode) -> KeyAction {
    KeyAction::Single(Action::KeyWithModifier(k, SHIFT))
}

// Number row
pub const GRAVE: KeyAction = key(KeyCode::Grave);
pub const LEFT_BRACKET: KeyAction = key(KeyCode::Minus);
pub const RIGHT_BRACKET: KeyAction = key(KeyCode::Equal);

// Top row
pub const QUOTE: KeyAction = key(KeyCode::Q);
pub const COMMA: KeyAction = key(KeyCode::W);
pub const DOT: KeyAction = key(KeyCode::E);
pub const P: KeyAction = key(KeyCode::R);
pub const Y: KeyAction = key(KeyCode::T);
pub const F: KeyAction = key(KeyCode::Y);
pub const G: KeyAction = key(KeyCode::U);
pub const C: KeyAction = key(KeyCode::I);
pub const R: KeyAction = key(KeyCode::O);
pub const L: KeyAction = key(KeyCode::P);
pub const SLASH: KeyAction = key(KeyCode::LeftBracket);
pub const EQUAL: KeyAction = key(KeyCode::RightBracket);
pub const BACKSLASH: KeyAction = key(KeyCode::Backslash);

// Home row
pub const A: KeyAction = key(KeyCode::A);
pub const O: KeyAction = key(KeyCode::S);
pub const E: KeyAction = key(KeyCode::D);
pub const U: KeyAction = key(KeyCode::F);
pub const I: KeyAction = key(KeyCode::G);
pub const D: KeyAction = key(KeyCode::H);
pub const H: KeyAction = key(KeyCode::J);
pub const T: KeyAction = key(KeyCode::K);
pub const N: KeyAction = key(KeyCode::L);
pub const S: KeyAction = key(KeyCode::Semicolon);
pub const MINUS: KeyAction = key(KeyCode::Quote);

// Bottom row
pub const SEMICOLON: KeyAction = key(KeyCode::Z);
pub const Q: KeyAction = key(KeyCode::X);
pub const J: KeyAction = key(KeyCode::C);
pub const K: KeyAction = key(KeyCode::V);
pub const X: KeyAction = key(KeyCode::B);
pub const B: KeyAction = key(KeyCode::N);
pub const M: KeyAction = key(KeyCode::M);
pub const W: KeyAction = key(KeyCode::Comma);
pub const V: KeyAction = key(KeyCode::Dot);
pub const Z: KeyAction = key(KeyCode::Slash);

// Shifted symbols
pub const TILDE: KeyAction = shifted(KeyCode::Grave);
pub const LEFT_CURLY: KeyAction = shifted(KeyCode::Minus);
pub const RIGHT_CURLY: KeyAction = shifted(KeyCode::Equal);
pub const DOUBLE_QUOTE: KeyAction = shifted(KeyCode::Q);
pub const LESS_THAN: KeyAction = shifted(KeyCode::W);
pub const GREATER_THAN: KeyAction = shifted(KeyCode::E);
pub const QUESTION: KeyAction = shifted(KeyCode::LeftBracket);
pub const PLUS: KeyAction = shifted(KeyCode::RightBracket);
pub const PIPE: KeyAction = shifted(KeyCode::Backslash);
pub const UNDERSCORE: KeyAction = shifted(KeyCode::Quote);
pub const COLON: KeyAction = shifted(KeyCode::Z);

/// Every alias with its name, as written in `keyboard.toml` (`DV(QUOTE)`)
pub const ALIASES: [(&str, KeyAction); 48] = [
    ("GRAVE", GRAVE),
    ("LEFT_BRACKET", LEFT_BRACKET),
    ("RIGHT_BRACKET", RIGHT_BRACKET),
    ("QUOTE", QUOTE),
    ("COMMA", COMMA),
    ("DOT", DOT),
    ("P", P),
    ("Y", Y),
    ("F", F),
    ("G", G),
    ("C", C),
    ("R", R),
    ("L", L),
    ("SLASH", SLASH),
    ("EQUAL", EQUAL),
    ("BACKSLASH", BACKSLASH),
    ("A", A),
    ("O", O),
    ("E", E),
    ("U", U),
    ("I", I),
    ("D", D),
    ("H", H),
    ("T", T),
    ("N", N),
    ("S", S),
    ("MINUS", MINUS),
    ("SEMICOLON", SEMICOLON),
    ("Q", Q),
    ("J", J),
    ("K", K),
    ("X", X),
    ("B", B),
    ("M", M),
    ("W", W),
    ("V", V),
    ("Z", Z),
    ("TILDE", TILDE),
    ("LEFT_CURLY", LEFT_CURLY),
    ("RIGHT_CURLY", RIGHT_CURLY),
    ("DOUBLE_QUOTE", DOUBLE_QUOTE),
    ("LESS_THAN", LESS_THAN),
    ("GREATER_THAN", GREATER_THAN),
    ("QUESTION", QUESTION),
    ("PLUS", PLUS),
    ("PIPE", PIPE),
    ("UNDERSCORE", UNDERSCORE),
    ("COLON", COLON),
];

/// Look an alias up by name
pub fn from_name(name: &str) -> Option<KeyAction> {
    ALIASES.iter().find(|(n, _)| *n == name).map(|(_, action)| *action)
}
