use embedded_hal::digital::OutputPin;

use super::Keyboard;
use crate::audio::{PLOVER_GOODBYE_SONG, PLOVER_SONG};
use crate::host::Host;
use crate::layout::PlanckLayer;

/// Dip switch mirroring the adjust layer
pub const ADJUST_SWITCH: u8 = 0;
/// Dip switch turning the muse on and off
pub const MUSE_SWITCH: u8 = 1;

/// State kept across dip switch events
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DipSwitch {
    /// Set after the first adjust switch event. That first event is the switch position
    /// reported at power up, it toggles the layer without playing a song.
    play_sound: bool,
}

impl DipSwitch {
    pub fn play_sound(&self) -> bool {
        self.play_sound
    }
}

impl<H: Host, O: OutputPin> Keyboard<'_, H, O> {
    /// Dip switch handler, called whenever a switch changes and once at power up
    pub fn dip_switch_update(&mut self, index: u8, active: bool) {
        match index {
            ADJUST_SWITCH => {
                if self.features.audio && self.dip_switch.play_sound {
                    let song = if active { &PLOVER_SONG } else { &PLOVER_GOODBYE_SONG };
                    self.host.play_song(song);
                }
                if active {
                    self.host.layer_on(PlanckLayer::Adjust as u8);
                } else {
                    self.host.layer_off(PlanckLayer::Adjust as u8);
                }
                self.dip_switch.play_sound = true;
            }
            MUSE_SWITCH => {
                self.muse.set_enabled(active);
                info!("Muse {}", if active { "on" } else { "off" });
            }
            _ => debug!("Unknown dip switch {}", index),
        }
    }
}
