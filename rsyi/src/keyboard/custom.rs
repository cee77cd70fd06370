use embedded_hal::digital::OutputPin;

use super::{Keyboard, ProcessResult};
use crate::host::Host;
use crate::layout::CustomKeycode;
use crate::types::keycode::KeyCode;

impl<H: Host, O: OutputPin> Keyboard<'_, H, O> {
    /// Custom keycode handler, called for every key press and release.
    ///
    /// Returns [`ProcessResult::Stop`] for the keycodes the keymap handles itself.
    pub fn process_record(&mut self, keycode: KeyCode, pressed: bool) -> ProcessResult {
        let Some(custom) = CustomKeycode::from_keycode(keycode) else {
            return ProcessResult::Continue;
        };

        match custom {
            CustomKeycode::Qwerty | CustomKeycode::Sdrk | CustomKeycode::Dvorak => {
                if pressed {
                    if let Some(layer) = custom.default_layer() {
                        if custom == CustomKeycode::Qwerty {
                            info!("Mode just switched to qwerty");
                        }
                        self.host.set_single_persistent_default_layer(layer as u8);
                    }
                }
            }
            CustomKeycode::Backlit => self.process_backlit(pressed),
        }
        ProcessResult::Stop
    }

    fn process_backlit(&mut self, pressed: bool) {
        if pressed {
            self.host.register_code(KeyCode::RShift);
            if self.features.backlight {
                self.host.backlight_step();
            }
        } else {
            self.host.unregister_code(KeyCode::RShift);
        }

        if self.features.has_indicator_pin() {
            if let Some(indicator) = self.indicator.as_mut() {
                if indicator.set_active(pressed).is_err() {
                    warn!("Failed to set the indicator pin");
                }
            }
        }
    }
}
