use bitfield_struct::bitfield;
use serde::{Deserialize, Serialize};

/// Modifiers held together with a key, e.g. the shift behind `~` or `S(/)`.
///
/// | bit4 | bit3 | bit2 | bit1 | bit0 |
/// | --- | --- | --- | --- | --- |
/// | L/R | GUI | ALT |SHIFT| CTRL|
#[bitfield(u8, order = Lsb, defmt = cfg(feature = "defmt"))]
#[derive(Serialize, Deserialize, Eq, PartialEq)]
pub struct ModifierCombination {
    #[bits(1)]
    pub ctrl: bool,
    #[bits(1)]
    pub shift: bool,
    #[bits(1)]
    pub alt: bool,
    #[bits(1)]
    pub gui: bool,
    #[bits(1)]
    pub right: bool,
    #[bits(3)]
    _reserved: u8,
}

/// Left shift, used by shifted keys
pub const SHIFT: ModifierCombination = ModifierCombination::new().with_shift(true);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shift() {
        assert_eq!(SHIFT.into_bits(), 0b10);
        assert!(SHIFT.shift());
        assert!(!SHIFT.right());
        assert_ne!(SHIFT, ModifierCombination::new());
    }
}
