use serde::{Deserialize, Serialize};

/// Revision of the Planck PCB the keymap runs on
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[serde(rename_all = "lowercase")]
pub enum HardwareRevision {
    Rev4,
    /// Rev5 routes an indicator to a spare pin, driven by the backlight/shift key
    Rev5,
    #[default]
    Rev6,
}

/// Optional firmware features the keymap adapts to.
///
/// A disabled feature removes the corresponding branch of every handler.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[serde(default)]
pub struct FeatureConfig {
    /// Speaker available: songs, muse sequencer
    pub audio: bool,
    /// Backlight available: the backlit key steps brightness
    pub backlight: bool,
    /// Mouse keys available: the encoder scrolls instead of paging
    pub mouse_keys: bool,
    pub revision: HardwareRevision,
}

impl Default for FeatureConfig {
    fn default() -> Self {
        Self {
            audio: true,
            backlight: false,
            mouse_keys: false,
            revision: HardwareRevision::default(),
        }
    }
}

impl FeatureConfig {
    /// Whether the backlit key also drives the rev5 indicator pin
    pub fn has_indicator_pin(&self) -> bool {
        self.revision == HardwareRevision::Rev5
    }
}
