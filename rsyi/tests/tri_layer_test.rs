pub mod common;

use rsyi::event::KeyEvent;
use rsyi::layer::{LayerCombinator, update_tri_layer_state};
use rsyi::layout::PlanckLayer;
use rsyi::types::behavior::TriLayer;
use rsyi::types::layer::LayerState;

use crate::common::{create_keyboard, features};

const LOWER: u8 = PlanckLayer::Lower as u8;
const RAISE: u8 = PlanckLayer::Raise as u8;
const ADJUST: u8 = PlanckLayer::Adjust as u8;

#[test]
fn test_layer_state_set_adjust() {
    let keyboard = create_keyboard(features(true, false, false));
    let state = keyboard.layer_state_set(LayerState::EMPTY.with(LOWER));
    assert_eq!(state, LayerState::EMPTY.with(LOWER));

    let state = keyboard.layer_state_set(state.with(RAISE));
    assert!(state.is_on(ADJUST));

    // Releasing one trigger turns adjust off again
    let state = keyboard.layer_state_set(state.without(LOWER));
    assert_eq!(state, LayerState::EMPTY.with(RAISE));
}

#[test]
fn test_layer_state_set_is_idempotent() {
    let keyboard = create_keyboard(features(true, false, false));
    for bits in 0..64u32 {
        let once = keyboard.layer_state_set(LayerState::from_bits(bits));
        assert_eq!(keyboard.layer_state_set(once), once);
        // Only the adjust bit can change
        assert_eq!(once.bits() & !(1 << ADJUST), bits & !(1 << ADJUST));
        assert_eq!(once.is_on(ADJUST), once.is_on(LOWER) && once.is_on(RAISE));
    }
}

#[test]
fn test_adjust_keys_reachable_through_lower_and_raise() {
    let mut keyboard = create_keyboard(features(true, false, false));

    // Hold lower and raise the way the firmware does: layer on, then the hook
    for layer in [LOWER, RAISE] {
        let state = keyboard.host().layer_state.with(layer);
        let state = keyboard.layer_state_set(state);
        keyboard.host_mut().layer_state = state;
    }
    assert!(keyboard.host().layer_state.is_on(ADJUST));

    // The Sdrk switch lives on adjust
    let (action, _) = keyboard.process_key_event(KeyEvent::press(1, 8));
    assert_eq!(action, rsyi::custom!(Sdrk));
    assert_eq!(keyboard.host().default_layer, PlanckLayer::Sdrk as u8);
}

#[test]
fn test_two_pair_combinator() {
    // Revision with an extra shift pair evaluated before the main pair
    let combinator = LayerCombinator::from_rules(&[TriLayer::new(6, 7, 8), TriLayer::new(LOWER, RAISE, ADJUST)]).unwrap();
    let state = LayerState::EMPTY.with(6).with(7).with(LOWER).with(RAISE);
    let applied = combinator.apply(state);
    assert_eq!(applied, state.with(8).with(ADJUST));
    assert_eq!(
        update_tri_layer_state(applied.without(6), 6, 7, 8),
        applied.without(6).without(8)
    );
}
