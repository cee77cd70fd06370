//! The Planck layout: six 4x12 layers, custom keycodes and layer rules.

use crate::config::BehaviorConfig;
use crate::keymap::{KeyMap, KeymapError};
use crate::layer::LayerCombinator;
pub use crate::types::planck::{CustomKeycode, PlanckLayer};
use crate::types::action::{EncoderAction, KeyAction};
use crate::types::behavior::{MuseConfig, TriLayer};
use crate::types::keycode::KeyCode;
use crate::types::layer::LayerState;
use crate::{a, custom, dv, k, layer, mo, s};

pub const ROW: usize = 4;
pub const COL: usize = 12;
pub const NUM_LAYER: usize = 6;

pub type PlanckKeyMap<'a> = KeyMap<'a, ROW, COL, NUM_LAYER>;

/// Lower + Raise = Adjust
pub const TRI_LAYERS: [TriLayer; 1] = [TriLayer::new(
    PlanckLayer::Lower as u8,
    PlanckLayer::Raise as u8,
    PlanckLayer::Adjust as u8,
)];

/// Layers the layer switch keys can make default
pub const BASE_LAYERS: LayerState = LayerState::EMPTY
    .with(PlanckLayer::Qwerty as u8)
    .with(PlanckLayer::Sdrk as u8)
    .with(PlanckLayer::Dvorak as u8);

/// Encoder keys when the muse is off
pub const PAGE_ENCODER: EncoderAction = EncoderAction::new(KeyCode::PageDown, KeyCode::PageUp);
/// Encoder keys when the muse is off and mouse keys are available
pub const SCROLL_ENCODER: EncoderAction = EncoderAction::new(KeyCode::MouseWheelDown, KeyCode::MouseWheelUp);

#[rustfmt::skip]
pub const KEYMAP: [[[KeyAction; COL]; ROW]; NUM_LAYER] = [
    // Qwerty
    layer!([
        [k!(Tab), k!(Q), k!(W), k!(E), k!(R), k!(T), k!(Y), k!(U), k!(I), k!(O), k!(P), k!(Backspace)],
        [k!(LCtrl), k!(A), k!(S), k!(D), k!(F), k!(G), k!(H), k!(J), k!(K), k!(L), k!(Semicolon), k!(Quote)],
        [k!(LShift), k!(Z), k!(X), k!(C), k!(V), k!(B), k!(N), k!(M), k!(Comma), k!(Dot), k!(Slash), k!(Enter)],
        [custom!(Backlit), k!(LCtrl), k!(LAlt), k!(LGui), mo!(PlanckLayer::Lower), k!(Space), k!(Backspace), mo!(PlanckLayer::Raise), k!(Left), k!(Down), k!(Up), k!(Right)]
    ]),
    // Sdrk
    layer!([
        [k!(Tab), dv!(QUOTE), dv!(COMMA), dv!(DOT), dv!(P), dv!(Y), dv!(F), dv!(G), dv!(C), dv!(R), dv!(L), dv!(SLASH)],
        [k!(LCtrl), dv!(A), dv!(O), dv!(E), dv!(U), dv!(I), dv!(D), dv!(H), dv!(T), dv!(N), dv!(S), dv!(MINUS)],
        [k!(LShift), dv!(SEMICOLON), dv!(Q), dv!(J), dv!(K), dv!(X), dv!(B), dv!(M), dv!(W), dv!(V), dv!(Z), k!(Enter)],
        [custom!(Backlit), k!(LCtrl), k!(LAlt), k!(LGui), mo!(PlanckLayer::Lower), k!(Space), k!(Backspace), mo!(PlanckLayer::Raise), k!(Left), k!(Down), k!(Up), k!(Right)]
    ]),
    // Dvorak
    layer!([
        [k!(Tab), k!(Quote), k!(Comma), k!(Dot), k!(P), k!(Y), k!(F), k!(G), k!(C), k!(R), k!(L), k!(Slash)],
        [k!(LCtrl), k!(A), k!(O), k!(E), k!(U), k!(I), k!(D), k!(H), k!(T), k!(N), k!(S), k!(Minus)],
        [k!(LShift), k!(Semicolon), k!(Q), k!(J), k!(K), k!(X), k!(B), k!(M), k!(W), k!(V), k!(Z), k!(Enter)],
        [custom!(Backlit), k!(LCtrl), k!(LAlt), k!(LGui), mo!(PlanckLayer::Lower), k!(Space), k!(Backspace), mo!(PlanckLayer::Raise), k!(Left), k!(Down), k!(Up), k!(Right)]
    ]),
    // Lower, symbols for a host set to Dvorak
    layer!([
        [s!(Grave), s!(1), s!(2), s!(3), s!(4), s!(5), s!(6), s!(7), s!(8), s!(9), dv!(QUESTION), k!(Backspace)],
        [k!(Delete), a!(Transparent), dv!(LEFT_CURLY), dv!(LEFT_BRACKET), s!(9), dv!(MINUS), dv!(UNDERSCORE), s!(0), dv!(RIGHT_BRACKET), dv!(RIGHT_CURLY), a!(Transparent), dv!(UNDERSCORE)],
        [a!(Transparent), a!(Transparent), dv!(PIPE), a!(Transparent), dv!(EQUAL), dv!(SLASH), k!(Backslash), dv!(PLUS), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent)],
        [a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), k!(Space), k!(Backspace), a!(Transparent), k!(Home), k!(PageUp), k!(PageDown), k!(End)]
    ]),
    // Raise
    layer!([
        [k!(Grave), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), dv!(SLASH), k!(Backspace)],
        [k!(Delete), k!(1), k!(2), k!(3), k!(4), k!(5), k!(6), k!(7), k!(8), k!(9), k!(0), dv!(MINUS)],
        [k!(F1), k!(F2), k!(F3), k!(F4), k!(F5), k!(F6), k!(F7), k!(F8), k!(F9), k!(F10), k!(F11), k!(F12)],
        [a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), k!(Space), k!(Backspace), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent)]
    ]),
    // Adjust
    layer!([
        [a!(Transparent), k!(Bootloader), k!(DebugToggle), k!(RgbTog), k!(RgbModeForward), k!(RgbHui), k!(RgbHud), k!(RgbSai), k!(RgbSad), k!(RgbVai), k!(RgbVad), k!(Delete)],
        [k!(AudioVoicePrevious), k!(AudioVoiceNext), k!(MusicModeNext), k!(AudioOn), k!(AudioOff), k!(MagicUnswapAltGui), k!(MagicSwapAltGui), custom!(Qwerty), custom!(Sdrk), custom!(Dvorak), k!(MidiOn), k!(MidiOff)],
        [a!(Transparent), a!(Transparent), k!(MediaPlayPause), k!(MediaPrevTrack), k!(MediaNextTrack), k!(BrightnessDown), k!(BrightnessUp), k!(AudioVolDown), k!(AudioVolUp), k!(AudioMute), a!(Transparent), a!(Transparent)],
        [a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), k!(MusicOn), k!(MusicOff), k!(TerminalOn), k!(TerminalOff)]
    ]),
];

/// Behavior of the Planck layout: one tri-layer rule, default muse and the three base layers
pub fn planck_behavior() -> Result<BehaviorConfig, KeymapError> {
    Ok(BehaviorConfig {
        tri_layers: LayerCombinator::from_rules(&TRI_LAYERS)?,
        muse: MuseConfig::default(),
        base_layers: BASE_LAYERS,
    })
}

/// Build the checked Planck keymap
pub fn planck_keymap(behavior: &BehaviorConfig) -> Result<PlanckKeyMap<'static>, KeymapError> {
    KeyMap::new(&KEYMAP, behavior)
}
