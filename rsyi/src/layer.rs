//! Tri-layer combination of the active layer state.

use heapless::Vec;

use crate::keymap::KeymapError;
pub use crate::types::behavior::MAX_TRI_LAYERS;
use crate::types::behavior::TriLayer;
use crate::types::layer::LayerState;

/// Turn `adjust` on if both `lower` and `upper` are on, off otherwise.
///
/// All other bits of `state` are kept.
pub const fn update_tri_layer_state(state: LayerState, lower: u8, upper: u8, adjust: u8) -> LayerState {
    state.set(adjust, state.is_on(lower) && state.is_on(upper))
}

/// Apply the tri-layer rules in order, each rule sees the output of the previous one
pub fn apply_tri_layers(state: LayerState, rules: &[TriLayer]) -> LayerState {
    rules.iter().fold(state, |state, rule| {
        update_tri_layer_state(state, rule.lower, rule.upper, rule.adjust)
    })
}

/// Ordered list of tri-layer rules, applied on every layer state change
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LayerCombinator {
    rules: Vec<TriLayer, MAX_TRI_LAYERS>,
}

impl LayerCombinator {
    pub const fn new() -> Self {
        Self { rules: Vec::new() }
    }

    pub fn from_rules(rules: &[TriLayer]) -> Result<Self, KeymapError> {
        let mut combinator = Self::new();
        for rule in rules {
            combinator.push(*rule)?;
        }
        Ok(combinator)
    }

    /// Append a rule after the existing ones
    pub fn push(&mut self, rule: TriLayer) -> Result<(), KeymapError> {
        self.rules.push(rule).map_err(|_| KeymapError::TooManyTriLayers)
    }

    pub fn rules(&self) -> &[TriLayer] {
        &self.rules
    }

    pub fn apply(&self, state: LayerState) -> LayerState {
        apply_tri_layers(state, &self.rules)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const LOWER: u8 = 3;
    const RAISE: u8 = 4;
    const ADJUST: u8 = 5;

    #[test]
    fn test_tri_layer_truth_table() {
        let cases = [
            (0b000, false),
            (1 << LOWER, false),
            (1 << RAISE, false),
            ((1 << LOWER) | (1 << RAISE), true),
        ];
        for (bits, adjust_on) in cases {
            let state = update_tri_layer_state(LayerState::from_bits(bits), LOWER, RAISE, ADJUST);
            assert_eq!(state.is_on(ADJUST), adjust_on, "state {:#b}", bits);
            // Stale adjust bit is overwritten too
            let state = update_tri_layer_state(LayerState::from_bits(bits | (1 << ADJUST)), LOWER, RAISE, ADJUST);
            assert_eq!(state.is_on(ADJUST), adjust_on, "state {:#b}", bits);
        }
    }

    #[test]
    fn test_tri_layer_keeps_other_bits() {
        let state = LayerState::from_bits(0b1100_0000_0001 | (1 << LOWER));
        let updated = update_tri_layer_state(state, LOWER, RAISE, ADJUST);
        assert_eq!(updated, state);

        let state = state.with(RAISE);
        let updated = update_tri_layer_state(state, LOWER, RAISE, ADJUST);
        assert_eq!(updated.bits(), state.bits() | (1 << ADJUST));
    }

    #[test]
    fn test_tri_layer_idempotent() {
        for bits in 0..64u32 {
            let once = update_tri_layer_state(LayerState::from_bits(bits), LOWER, RAISE, ADJUST);
            let twice = update_tri_layer_state(once, LOWER, RAISE, ADJUST);
            assert_eq!(once, twice);
        }
    }

    #[test]
    fn test_chained_rules() {
        // Shift pair first, then the main pair
        let combinator = LayerCombinator::from_rules(&[TriLayer::new(6, 7, 8), TriLayer::new(LOWER, RAISE, ADJUST)])
            .unwrap();
        let state = LayerState::EMPTY.with(6).with(7).with(LOWER);
        let applied = combinator.apply(state);
        assert!(applied.is_on(8));
        assert!(!applied.is_on(ADJUST));

        let applied = combinator.apply(applied.with(RAISE));
        assert!(applied.is_on(8));
        assert!(applied.is_on(ADJUST));
        assert_eq!(combinator.apply(applied), applied);
    }

    #[test]
    fn test_too_many_rules() {
        let rules = [TriLayer::new(0, 1, 2); MAX_TRI_LAYERS + 1];
        assert_eq!(
            LayerCombinator::from_rules(&rules),
            Err(KeymapError::TooManyTriLayers)
        );
        assert!(LayerCombinator::from_rules(&rules[..MAX_TRI_LAYERS]).is_ok());
        assert_eq!(LayerCombinator::new().apply(LayerState::from_bits(0b11000)).bits(), 0b11000);
    }
}
