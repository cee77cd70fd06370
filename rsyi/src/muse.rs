//! Muse, a generative step sequencer played on every scan tick.
//!
//! A small pseudo random clock picks a step of a five octave major scale, the muse
//! offset transposes it and the tempo sets how many scan ticks each note lasts.

use crate::audio::midi_note_frequency;
use crate::event::Direction;
use crate::host::Host;
use crate::types::behavior::MuseConfig;

/// Volume of every muse note
pub const MUSE_VOLUME: u8 = 0xF;

/// Major scale over five octaves, in semitones above the muse offset
pub const SCALE: [u8; 35] = [
    0, 2, 4, 5, 7, 9, 11, //
    12, 14, 16, 17, 19, 21, 23, //
    24, 26, 28, 29, 31, 33, 35, //
    36, 38, 40, 41, 43, 45, 47, //
    48, 50, 52, 53, 55, 57, 59,
];

/// Parity of the number of ones in a nibble, inverted
const NUMBER_OF_ONES_TO_BOOL: [bool; 16] = [
    true, false, false, true, false, true, true, false, false, true, true, false, true, false, false, true,
];

// Bits of the long timer sampled for the output step and for the feedback bit
const INTERVAL_BITS: [u8; 4] = [7, 19, 3, 28];
const THEME_BITS: [u8; 4] = [8, 23, 18, 17];

/// Clock of the muse sequencer.
///
/// A shift register is clocked every second pulse, feeding back the parity of four of its
/// bits. Four other bits form the returned step, so the sequence is deterministic.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MuseClock {
    half: bool,
    shift_register: u32,
}

impl MuseClock {
    pub const fn new() -> Self {
        Self {
            half: false,
            shift_register: 0,
        }
    }

    /// `n` is 1-based, like the bit names of the muse
    fn bit(&self, n: u8) -> u8 {
        ((self.shift_register >> (n - 1)) & 1) as u8
    }

    fn nibble(&self, bits: &[u8; 4]) -> u8 {
        bits.iter()
            .enumerate()
            .fold(0, |acc, (i, n)| acc | (self.bit(*n) << i))
    }

    /// Advance the clock, returning a step in `0..16`
    pub fn pulse(&mut self) -> u8 {
        let top = NUMBER_OF_ONES_TO_BOOL[self.nibble(&THEME_BITS) as usize];
        if !self.half {
            self.shift_register = (self.shift_register << 1) | top as u32;
        }
        self.half = !self.half;
        self.nibble(&INTERVAL_BITS)
    }
}

/// State of the muse sequencer
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Muse {
    enabled: bool,
    last_note: u8,
    counter: u16,
    offset: u8,
    tempo: u16,
    clock: MuseClock,
}

impl Default for Muse {
    fn default() -> Self {
        Self::new(MuseConfig::default())
    }
}

impl Muse {
    pub fn new(config: MuseConfig) -> Self {
        Self {
            enabled: false,
            last_note: 0,
            counter: 0,
            offset: config.offset,
            tempo: config.tempo,
            clock: MuseClock::new(),
        }
    }

    pub fn enabled(&self) -> bool {
        self.enabled
    }

    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    /// MIDI note currently sounding, 0 before the first note
    pub fn last_note(&self) -> u8 {
        self.last_note
    }

    /// Ticks elapsed in the current note
    pub fn counter(&self) -> u16 {
        self.counter
    }

    pub fn offset(&self) -> u8 {
        self.offset
    }

    pub fn tempo(&self) -> u16 {
        self.tempo
    }

    pub fn clock(&self) -> &MuseClock {
        &self.clock
    }

    /// Transpose by one semitone, wrapping
    pub fn nudge_offset(&mut self, direction: Direction) {
        self.offset = match direction {
            Direction::Clockwise => self.offset.wrapping_add(1),
            Direction::CounterClockwise => self.offset.wrapping_sub(1),
        };
    }

    /// Change the number of ticks per note by one, wrapping
    pub fn nudge_tempo(&mut self, direction: Direction) {
        self.tempo = match direction {
            Direction::Clockwise => self.tempo.wrapping_add(1),
            Direction::CounterClockwise => self.tempo.wrapping_sub(1),
        };
    }

    /// MIDI note of a scale step, transposed by the offset
    pub fn note_at(&self, step: u8) -> u8 {
        self.offset.wrapping_add(SCALE[step as usize % SCALE.len()])
    }

    /// Run one scan tick
    pub fn tick<H: Host>(&mut self, host: &mut H) {
        if self.enabled {
            if self.counter == 0 {
                let step = self.clock.pulse();
                let note = self.note_at(step);
                if note != self.last_note {
                    trace!("Muse note {} -> {}", self.last_note, note);
                    host.stop_note(midi_note_frequency(self.last_note));
                    host.play_note(midi_note_frequency(note), MUSE_VOLUME);
                    self.last_note = note;
                }
            }
            // A zero tempo plays a new step on every tick
            self.counter = (self.counter + 1) % self.tempo.max(1);
        } else if self.counter != 0 {
            host.stop_all_notes();
            self.counter = 0;
        }
    }
}
