//! Notes and songs played through the firmware's speaker driver.

/// Frequency ratio of each semitone above the octave base
const SEMITONE_RATIOS: [f32; 12] = [
    1.0, 1.059_463_1, 1.122_462, 1.189_207_1, 1.259_921, 1.334_839_8, 1.414_213_6, 1.498_307_1, 1.587_401,
    1.681_792_8, 1.781_797_4, 1.887_748_6,
];

/// MIDI note of A4, 440 Hz
pub const A4: u8 = 69;

/// Frequency in Hz of a MIDI note, equal temperament tuned to A4 = 440 Hz
pub const fn midi_note_frequency(note: u8) -> f32 {
    let semitones = note as i32 - A4 as i32;
    let mut octaves = semitones.div_euclid(12);
    let mut freq = 440.0 * SEMITONE_RATIOS[semitones.rem_euclid(12) as usize];
    while octaves > 0 {
        freq *= 2.0;
        octaves -= 1;
    }
    while octaves < 0 {
        freq /= 2.0;
        octaves += 1;
    }
    freq
}

/// One step of a song
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Note {
    /// A MIDI note held for `beats` sixteenth notes
    Tone { note: u8, beats: u8 },
    Rest { beats: u8 },
}

impl Note {
    pub const fn frequency(&self) -> Option<f32> {
        match self {
            Note::Tone { note, .. } => Some(midi_note_frequency(*note)),
            Note::Rest { .. } => None,
        }
    }

    pub const fn beats(&self) -> u8 {
        match self {
            Note::Tone { beats, .. } | Note::Rest { beats } => *beats,
        }
    }
}

/// A fixed melody
#[derive(Debug, PartialEq)]
pub struct Song {
    pub name: &'static str,
    pub notes: &'static [Note],
}

impl Song {
    /// Length of the song in sixteenth notes
    pub fn beats(&self) -> u32 {
        self.notes.iter().map(|n| n.beats() as u32).sum()
    }
}

const fn tone(note: u8, beats: u8) -> Note {
    Note::Tone { note, beats }
}

// MIDI numbers of the notes used below
const FS5: u8 = 78;
const G5: u8 = 79;
const A5: u8 = 81;
const B5: u8 = 83;
const D6: u8 = 86;
const E6: u8 = 88;
const FS6: u8 = 90;

/// Played when the adjust dip switch is turned on
pub static PLOVER_SONG: Song = Song {
    name: "plover",
    notes: &[
        tone(FS5, 2),
        tone(G5, 2),
        tone(A5, 2),
        tone(B5, 2),
        tone(D6, 4),
        Note::Rest { beats: 2 },
        tone(FS6, 8),
    ],
};

/// Played when the adjust dip switch is turned off
pub static PLOVER_GOODBYE_SONG: Song = Song {
    name: "plover goodbye",
    notes: &[
        tone(E6, 2),
        tone(D6, 2),
        tone(B5, 2),
        tone(A5, 2),
        tone(G5, 4),
        Note::Rest { beats: 2 },
        tone(FS5, 8),
    ],
};

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f32, b: f32) -> bool {
        (a - b).abs() < 0.01
    }

    #[test]
    fn test_midi_note_frequency() {
        assert!(close(midi_note_frequency(69), 440.0));
        assert!(close(midi_note_frequency(81), 880.0));
        assert!(close(midi_note_frequency(57), 220.0));
        // C4
        assert!(close(midi_note_frequency(60), 261.63));
        // D#5, the muse offset plus a fourth
        assert!(close(midi_note_frequency(75), 622.25));
        assert!(close(midi_note_frequency(0), 8.18));
    }

    #[test]
    fn test_songs() {
        assert_eq!(PLOVER_SONG.beats(), 22);
        assert_eq!(PLOVER_GOODBYE_SONG.beats(), 22);
        assert_ne!(PLOVER_SONG, PLOVER_GOODBYE_SONG);
        assert_eq!(Note::Rest { beats: 2 }.frequency(), None);
        assert!(close(tone(A5, 1).frequency().unwrap_or_default(), 880.0));
    }
}
