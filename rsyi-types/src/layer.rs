use core::fmt;

use serde::{Deserialize, Serialize};

/// Maximum number of layers a [`LayerState`] can describe
pub const MAX_LAYERS: u8 = 32;

/// Bitset of the currently active layers, bit `n` set means layer `n` is on.
///
/// The value is owned by the firmware; the keymap only derives new states from it.
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[serde(transparent)]
pub struct LayerState(u32);

impl LayerState {
    /// No layer active
    pub const EMPTY: LayerState = LayerState(0);

    pub const fn from_bits(bits: u32) -> Self {
        Self(bits)
    }

    pub const fn bits(self) -> u32 {
        self.0
    }

    /// Returns `true` if `layer` is active. Layers beyond [`MAX_LAYERS`] are never active.
    pub const fn is_on(self, layer: u8) -> bool {
        layer < MAX_LAYERS && self.0 & (1 << layer) != 0
    }

    /// Copy of this state with `layer` turned on
    #[must_use]
    pub const fn with(self, layer: u8) -> Self {
        if layer < MAX_LAYERS { Self(self.0 | (1 << layer)) } else { self }
    }

    /// Copy of this state with `layer` turned off
    #[must_use]
    pub const fn without(self, layer: u8) -> Self {
        if layer < MAX_LAYERS { Self(self.0 & !(1 << layer)) } else { self }
    }

    /// Copy of this state with `layer` set to `on`
    #[must_use]
    pub const fn set(self, layer: u8, on: bool) -> Self {
        if on { self.with(layer) } else { self.without(layer) }
    }

    /// Iterate active layers from the highest to the lowest
    pub fn iter_active(self) -> impl Iterator<Item = u8> {
        (0..MAX_LAYERS).rev().filter(move |l| self.is_on(*l))
    }
}

impl From<u32> for LayerState {
    fn from(bits: u32) -> Self {
        Self(bits)
    }
}

impl fmt::Debug for LayerState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "LayerState({:#034b})", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_on_off() {
        let state = LayerState::EMPTY.with(3).with(4);
        assert!(state.is_on(3));
        assert!(state.is_on(4));
        assert!(!state.is_on(5));
        assert_eq!(state.bits(), 0b11000);
        assert_eq!(state.without(3).bits(), 0b10000);
        assert_eq!(state.set(5, true).bits(), 0b111000);
        assert_eq!(state.set(4, false).bits(), 0b01000);
    }

    #[test]
    fn test_out_of_range_layer() {
        let state = LayerState::from_bits(1);
        assert_eq!(state.with(32), state);
        assert!(!state.is_on(40));
    }

    #[test]
    fn test_iter_active() {
        assert_eq!(LayerState::EMPTY.iter_active().next(), None);
        let state = LayerState::from_bits(0b100101);
        let mut active = state.iter_active();
        assert_eq!(active.next(), Some(5));
        assert_eq!(active.next(), Some(2));
        assert_eq!(active.next(), Some(0));
        assert_eq!(active.next(), None);
    }
}
