use crate::audio::Song;
use crate::types::keycode::KeyCode;
use crate::types::layer::LayerState;

/// Services of the surrounding firmware that the keymap drives.
///
/// The firmware owns matrix scanning, HID reporting, the layer state, persistent
/// storage and the audio/backlight drivers. Every method must return promptly, they
/// are called from the scan loop.
pub trait Host {
    /// Hold a key until [`Host::unregister_code`] is called
    fn register_code(&mut self, keycode: KeyCode);

    fn unregister_code(&mut self, keycode: KeyCode);

    /// Press and release a key
    fn tap_code(&mut self, keycode: KeyCode);

    /// Advance the backlight to its next brightness level
    fn backlight_step(&mut self);

    /// Make `layer` the default layer and persist it across power cycles
    fn set_single_persistent_default_layer(&mut self, layer: u8);

    fn default_layer(&self) -> u8;

    fn layer_on(&mut self, layer: u8);

    fn layer_off(&mut self, layer: u8);

    /// Currently active layers, excluding the default layer
    fn layer_state(&self) -> LayerState;

    fn is_layer_on(&self, layer: u8) -> bool {
        self.layer_state().is_on(layer)
    }

    /// Start a tone, `volume` ranges 0 ~ 15
    fn play_note(&mut self, frequency: f32, volume: u8);

    fn stop_note(&mut self, frequency: f32);

    fn stop_all_notes(&mut self);

    fn play_song(&mut self, song: &'static Song);
}
