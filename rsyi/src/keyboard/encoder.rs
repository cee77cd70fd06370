use embedded_hal::digital::OutputPin;

use super::Keyboard;
use crate::event::Direction;
use crate::host::Host;
use crate::layout::{PAGE_ENCODER, PlanckLayer, SCROLL_ENCODER};

impl<H: Host, O: OutputPin> Keyboard<'_, H, O> {
    /// Rotary encoder handler, called once per detent.
    ///
    /// With the muse on, the encoder transposes it while Raise is held and changes its
    /// tempo otherwise. With the muse off it pages, or scrolls if mouse keys are available.
    pub fn encoder_update(&mut self, direction: Direction) {
        if self.muse.enabled() {
            if self.host.is_layer_on(PlanckLayer::Raise as u8) {
                self.muse.nudge_offset(direction);
                debug!("Muse offset: {}", self.muse.offset());
            } else {
                self.muse.nudge_tempo(direction);
                debug!("Muse tempo: {}", self.muse.tempo());
            }
            return;
        }

        let encoder = if self.features.mouse_keys {
            SCROLL_ENCODER
        } else {
            PAGE_ENCODER
        };
        let keycode = match direction {
            Direction::Clockwise => encoder.clockwise(),
            Direction::CounterClockwise => encoder.counter_clockwise(),
        };
        self.host.tap_code(keycode);
    }
}
