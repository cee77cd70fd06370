use serde::{Deserialize, Serialize};
use strum::{EnumString, FromRepr};

/// KeyCode is the internal representation of all keycodes used by the keymap.
///
/// The numbering follows QMK: HID keyboard page codes first, then the quantum ranges
/// (magic, midi, audio, backlight/rgb, internal functions, user keycodes).
/// Variant names double as the tokens accepted in `keyboard.toml` keymaps.
#[repr(u16)]
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, FromRepr, EnumString)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum KeyCode {
    /// Reserved, no-key.
    No = 0x0000,
    A = 0x0004,
    B = 0x0005,
    C = 0x0006,
    D = 0x0007,
    E = 0x0008,
    F = 0x0009,
    G = 0x000A,
    H = 0x000B,
    I = 0x000C,
    J = 0x000D,
    K = 0x000E,
    L = 0x000F,
    M = 0x0010,
    N = 0x0011,
    O = 0x0012,
    P = 0x0013,
    Q = 0x0014,
    R = 0x0015,
    S = 0x0016,
    T = 0x0017,
    U = 0x0018,
    V = 0x0019,
    W = 0x001A,
    X = 0x001B,
    Y = 0x001C,
    Z = 0x001D,
    Kc1 = 0x001E,
    Kc2 = 0x001F,
    Kc3 = 0x0020,
    Kc4 = 0x0021,
    Kc5 = 0x0022,
    Kc6 = 0x0023,
    Kc7 = 0x0024,
    Kc8 = 0x0025,
    Kc9 = 0x0026,
    Kc0 = 0x0027,
    Enter = 0x0028,
    Escape = 0x0029,
    Backspace = 0x002A,
    Tab = 0x002B,
    Space = 0x002C,
    /// `-` and `_`
    Minus = 0x002D,
    /// `=` and `+`
    Equal = 0x002E,
    /// `[` and `{`
    LeftBracket = 0x002F,
    /// `]` and `}`
    RightBracket = 0x0030,
    /// `\` and `|`
    Backslash = 0x0031,
    NonusHash = 0x0032,
    /// `;` and `:`
    Semicolon = 0x0033,
    /// `'` and `"`
    Quote = 0x0034,
    /// `` ` `` and `~`
    Grave = 0x0035,
    /// `,` and `<`
    Comma = 0x0036,
    /// `.` and `>`
    Dot = 0x0037,
    /// `/` and `?`
    Slash = 0x0038,
    CapsLock = 0x0039,
    F1 = 0x003A,
    F2 = 0x003B,
    F3 = 0x003C,
    F4 = 0x003D,
    F5 = 0x003E,
    F6 = 0x003F,
    F7 = 0x0040,
    F8 = 0x0041,
    F9 = 0x0042,
    F10 = 0x0043,
    F11 = 0x0044,
    F12 = 0x0045,
    PrintScreen = 0x0046,
    ScrollLock = 0x0047,
    Pause = 0x0048,
    Insert = 0x0049,
    Home = 0x004A,
    PageUp = 0x004B,
    Delete = 0x004C,
    End = 0x004D,
    PageDown = 0x004E,
    Right = 0x004F,
    Left = 0x0050,
    Down = 0x0051,
    Up = 0x0052,
    NumLock = 0x0053,
    NonusBackslash = 0x0064,
    Application = 0x0065,
    F13 = 0x0068,
    F14 = 0x0069,
    F15 = 0x006A,
    F16 = 0x006B,
    F17 = 0x006C,
    F18 = 0x006D,
    F19 = 0x006E,
    F20 = 0x006F,
    F21 = 0x0070,
    F22 = 0x0071,
    F23 = 0x0072,
    F24 = 0x0073,
    SystemPower = 0x00A5,
    SystemSleep = 0x00A6,
    SystemWake = 0x00A7,
    // Consumer page
    AudioMute = 0x00A8,
    AudioVolUp = 0x00A9,
    AudioVolDown = 0x00AA,
    MediaNextTrack = 0x00AB,
    MediaPrevTrack = 0x00AC,
    MediaStop = 0x00AD,
    MediaPlayPause = 0x00AE,
    MediaSelect = 0x00AF,
    MediaEject = 0x00B0,
    MediaFastForward = 0x00BB,
    MediaRewind = 0x00BC,
    BrightnessUp = 0x00BD,
    BrightnessDown = 0x00BE,
    // Mouse keys
    MouseUp = 0x00CD,
    MouseDown = 0x00CE,
    MouseLeft = 0x00CF,
    MouseRight = 0x00D0,
    MouseBtn1 = 0x00D1,
    MouseBtn2 = 0x00D2,
    MouseBtn3 = 0x00D3,
    MouseWheelUp = 0x00D9,
    MouseWheelDown = 0x00DA,
    MouseWheelLeft = 0x00DB,
    MouseWheelRight = 0x00DC,
    // Modifiers
    LCtrl = 0x00E0,
    LShift = 0x00E1,
    LAlt = 0x00E2,
    LGui = 0x00E3,
    RCtrl = 0x00E4,
    RShift = 0x00E5,
    RAlt = 0x00E6,
    RGui = 0x00E7,
    // Magic keycodes, 0x100 ~ 0x1FF
    MagicSwapAltGui = 0x114,
    MagicUnswapAltGui = 0x115,
    MagicToggleAltGui = 0x116,
    // Midi keycodes, 0x200 ~ 0x2FF
    MidiOn = 0x200,
    MidiOff = 0x201,
    MidiToggle = 0x202,
    // Audio keycodes, 0x460 ~ 0x47F
    AudioOn = 0x460,
    AudioOff = 0x461,
    AudioToggle = 0x462,
    MusicOn = 0x470,
    MusicOff = 0x471,
    MusicToggle = 0x472,
    MusicModeNext = 0x473,
    AudioVoiceNext = 0x474,
    AudioVoicePrevious = 0x475,
    // Backlight and RGB keycodes, 0x600 ~ 0x6FF
    BacklightOn = 0x600,
    BacklightOff = 0x601,
    BacklightToggle = 0x602,
    BacklightDown = 0x603,
    BacklightUp = 0x604,
    BacklightStep = 0x605,
    RgbTog = 0x620,
    RgbModeForward = 0x621,
    RgbModeReverse = 0x622,
    RgbHui = 0x623,
    RgbHud = 0x624,
    RgbSai = 0x625,
    RgbSad = 0x626,
    RgbVai = 0x627,
    RgbVad = 0x628,
    // Internal functional keycodes, 0x700 ~ 0x7FF
    Bootloader = 0x700,
    Reboot = 0x701,
    DebugToggle = 0x702,
    ClearEeprom = 0x703,
    /// Enable the serial terminal of the firmware
    TerminalOn = 0x77B,
    /// Disable the serial terminal of the firmware
    TerminalOff = 0x77C,
    // User keycodes, 0x840 ~ 0x85F
    User0 = 0x840,
    User1 = 0x841,
    User2 = 0x842,
    User3 = 0x843,
    User4 = 0x844,
    User5 = 0x845,
    User6 = 0x846,
    User7 = 0x847,
    User8 = 0x848,
    User9 = 0x849,
    User10 = 0x84A,
    User11 = 0x84B,
    User12 = 0x84C,
    User13 = 0x84D,
    User14 = 0x84E,
    User15 = 0x84F,
}

impl KeyCode {
    /// Returns `true` if the keycode is free for the keymap to define
    pub fn is_user(self) -> bool {
        KeyCode::User0 <= self && self <= KeyCode::User15
    }

    /// Index of a user keycode, `User0` is 0
    pub fn user_index(self) -> Option<u8> {
        if self.is_user() {
            Some((self as u16 - KeyCode::User0 as u16) as u8)
        } else {
            None
        }
    }
}

impl From<u16> for KeyCode {
    fn from(value: u16) -> Self {
        KeyCode::from_repr(value).unwrap_or(KeyCode::No)
    }
}

#[cfg(test)]
mod tests {
    use core::str::FromStr;

    use super::*;

    #[test]
    fn test_user_keycodes() {
        assert_eq!(KeyCode::User3.user_index(), Some(3));
        assert_eq!(KeyCode::A.user_index(), None);
        assert_eq!(KeyCode::User15.user_index(), Some(15));
        assert!(!KeyCode::MusicOn.is_user());
    }

    #[test]
    fn test_parse_and_convert() {
        assert_eq!(KeyCode::from_str("PageDown"), Ok(KeyCode::PageDown));
        assert!(KeyCode::from_str("NotAKey").is_err());
        assert_eq!(KeyCode::from(0x0004), KeyCode::A);
        assert_eq!(KeyCode::from(0x0003), KeyCode::No);
    }
}
