use serde::{Deserialize, Serialize};

/// Maximum number of tri-layer rules a keymap can chain
pub const MAX_TRI_LAYERS: usize = 4;

/// Tri layer rule: `adjust` is on exactly when both `lower` and `upper` are on.
///
/// Serialized as `[lower, upper, adjust]`, the same shape as `tri_layers` in `keyboard.toml`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[serde(from = "[u8; 3]", into = "[u8; 3]")]
pub struct TriLayer {
    pub lower: u8,
    pub upper: u8,
    pub adjust: u8,
}

impl TriLayer {
    pub const fn new(lower: u8, upper: u8, adjust: u8) -> Self {
        Self { lower, upper, adjust }
    }

    pub const fn layers(&self) -> [u8; 3] {
        [self.lower, self.upper, self.adjust]
    }

    /// All three layers are different
    pub const fn is_distinct(&self) -> bool {
        self.lower != self.upper && self.lower != self.adjust && self.upper != self.adjust
    }
}

impl From<[u8; 3]> for TriLayer {
    fn from([lower, upper, adjust]: [u8; 3]) -> Self {
        Self::new(lower, upper, adjust)
    }
}

impl From<TriLayer> for [u8; 3] {
    fn from(tri_layer: TriLayer) -> Self {
        tri_layer.layers()
    }
}

/// Starting point of the muse sequencer
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[serde(default)]
pub struct MuseConfig {
    /// MIDI note added to every scale step
    pub offset: u8,
    /// Number of scan ticks per note
    pub tempo: u16,
}

impl Default for MuseConfig {
    fn default() -> Self {
        Self { offset: 70, tempo: 50 }
    }
}
