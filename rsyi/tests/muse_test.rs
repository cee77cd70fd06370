pub mod common;

use rsyi::audio::midi_note_frequency;
use rsyi::config::{KeyboardConfig, NoPin};
use rsyi::keyboard::{Keyboard, MUSE_SWITCH};
use rsyi::layout::{KEYMAP, planck_behavior};
use rsyi::muse::{MUSE_VOLUME, Muse};
use rsyi::types::behavior::MuseConfig;

use crate::common::{HostCall, TestHost, create_keyboard, features};

fn create_muse_keyboard(muse: MuseConfig) -> Keyboard<'static, TestHost> {
    let mut behavior = planck_behavior().unwrap();
    behavior.muse = muse;
    let config: KeyboardConfig<NoPin> = KeyboardConfig {
        features: features(true, false, false),
        behavior,
        ..Default::default()
    };
    let mut keyboard = Keyboard::new(&KEYMAP, TestHost::default(), config).unwrap();
    keyboard.dip_switch_update(MUSE_SWITCH, true);
    keyboard
}

/// Notes the muse is expected to play over `pulses` note changes, starting from a fresh clock
fn expected_notes(muse: &Muse, pulses: usize) -> Vec<u8> {
    let mut clock = muse.clock().clone();
    (0..pulses).map(|_| muse.note_at(clock.pulse())).collect()
}

#[test]
fn test_first_note() {
    let mut keyboard = create_muse_keyboard(MuseConfig::default());
    let note = expected_notes(keyboard.muse(), 1)[0];

    keyboard.matrix_scan();
    assert_eq!(
        keyboard.host_mut().take_calls(),
        vec![
            HostCall::StopNote(midi_note_frequency(0)),
            HostCall::PlayNote(midi_note_frequency(note), MUSE_VOLUME)
        ]
    );
    assert_eq!(keyboard.muse().last_note(), note);
    assert_eq!(keyboard.muse().counter(), 1);
}

#[test]
fn test_note_every_tempo_ticks() {
    let tempo = 3;
    let mut keyboard = create_muse_keyboard(MuseConfig { offset: 70, tempo });
    let notes = expected_notes(keyboard.muse(), 8);

    let mut last = 0;
    for (i, note) in notes.iter().enumerate() {
        for tick in 0..tempo {
            keyboard.matrix_scan();
            let calls = keyboard.host_mut().take_calls();
            if tick == 0 && *note != last {
                assert_eq!(
                    calls,
                    vec![
                        HostCall::StopNote(midi_note_frequency(last)),
                        HostCall::PlayNote(midi_note_frequency(*note), MUSE_VOLUME)
                    ],
                    "note {}",
                    i
                );
                last = *note;
            } else {
                // Same note keeps sounding, other ticks are silent
                assert!(calls.is_empty(), "note {} tick {}", i, tick);
            }
        }
        assert_eq!(keyboard.muse().counter(), 0);
    }
}

#[test]
fn test_disable_stops_notes_once() {
    let mut keyboard = create_muse_keyboard(MuseConfig::default());
    keyboard.matrix_scan();
    keyboard.matrix_scan();
    keyboard.host_mut().take_calls();

    keyboard.dip_switch_update(MUSE_SWITCH, false);
    keyboard.matrix_scan();
    assert_eq!(keyboard.host_mut().take_calls(), vec![HostCall::StopAllNotes]);
    assert_eq!(keyboard.muse().counter(), 0);

    keyboard.matrix_scan();
    assert!(keyboard.host().calls.is_empty());
}

#[test]
fn test_zero_tempo_plays_every_tick() {
    let mut keyboard = create_muse_keyboard(MuseConfig { offset: 70, tempo: 0 });
    for _ in 0..5 {
        keyboard.matrix_scan();
        assert_eq!(keyboard.muse().counter(), 0);
    }
}

#[test]
fn test_matrix_scan_without_audio() {
    let mut keyboard = create_keyboard(features(false, false, false));
    keyboard.dip_switch_update(MUSE_SWITCH, true);
    for _ in 0..100 {
        keyboard.matrix_scan();
    }
    assert!(keyboard.host().calls.is_empty());
    assert_eq!(keyboard.muse().counter(), 0);
}

#[test]
fn test_same_note_is_not_restarted() {
    // Offset 70 and scale step 3 make note 75
    let muse = Muse::new(MuseConfig::default());
    assert_eq!(muse.note_at(3), 75);

    let mut keyboard = create_muse_keyboard(MuseConfig { offset: 70, tempo: 1 });
    let notes = expected_notes(keyboard.muse(), 64);
    let mut last = 0;
    for note in notes {
        keyboard.matrix_scan();
        let calls = keyboard.host_mut().take_calls();
        if note == last {
            assert!(calls.is_empty());
        } else {
            assert_eq!(calls.len(), 2);
            last = note;
        }
    }
}
