#![allow(dead_code)]

use rsyi::audio::Song;
use rsyi::config::{KeyboardConfig, NoPin};
use rsyi::host::Host;
use rsyi::keyboard::Keyboard;
use rsyi::layout::{KEYMAP, planck_behavior};
use rsyi::types::feature::FeatureConfig;
use rsyi::types::keycode::KeyCode;
use rsyi::types::layer::LayerState;

// Init logger for tests
#[ctor::ctor]
pub fn init_log() {
    let _ = env_logger::builder()
        .filter_level(log::LevelFilter::Debug)
        .is_test(true)
        .try_init();
}

/// A call the keymap made on the host
#[derive(Clone, Debug, PartialEq)]
pub enum HostCall {
    Register(KeyCode),
    Unregister(KeyCode),
    Tap(KeyCode),
    BacklightStep,
    SetDefaultLayer(u8),
    LayerOn(u8),
    LayerOff(u8),
    PlayNote(f32, u8),
    StopNote(f32),
    StopAllNotes,
    PlaySong(&'static str),
}

/// Host recording every call, with a real layer state
#[derive(Debug, Default)]
pub struct TestHost {
    pub calls: Vec<HostCall>,
    pub layer_state: LayerState,
    pub default_layer: u8,
}

impl TestHost {
    pub fn take_calls(&mut self) -> Vec<HostCall> {
        std::mem::take(&mut self.calls)
    }
}

impl Host for TestHost {
    fn register_code(&mut self, keycode: KeyCode) {
        self.calls.push(HostCall::Register(keycode));
    }

    fn unregister_code(&mut self, keycode: KeyCode) {
        self.calls.push(HostCall::Unregister(keycode));
    }

    fn tap_code(&mut self, keycode: KeyCode) {
        self.calls.push(HostCall::Tap(keycode));
    }

    fn backlight_step(&mut self) {
        self.calls.push(HostCall::BacklightStep);
    }

    fn set_single_persistent_default_layer(&mut self, layer: u8) {
        self.default_layer = layer;
        self.calls.push(HostCall::SetDefaultLayer(layer));
    }

    fn default_layer(&self) -> u8 {
        self.default_layer
    }

    fn layer_on(&mut self, layer: u8) {
        self.layer_state = self.layer_state.with(layer);
        self.calls.push(HostCall::LayerOn(layer));
    }

    fn layer_off(&mut self, layer: u8) {
        self.layer_state = self.layer_state.without(layer);
        self.calls.push(HostCall::LayerOff(layer));
    }

    fn layer_state(&self) -> LayerState {
        self.layer_state
    }

    fn play_note(&mut self, frequency: f32, volume: u8) {
        self.calls.push(HostCall::PlayNote(frequency, volume));
    }

    fn stop_note(&mut self, frequency: f32) {
        self.calls.push(HostCall::StopNote(frequency));
    }

    fn stop_all_notes(&mut self) {
        self.calls.push(HostCall::StopAllNotes);
    }

    fn play_song(&mut self, song: &'static Song) {
        self.calls.push(HostCall::PlaySong(song.name));
    }
}

pub fn features(audio: bool, backlight: bool, mouse_keys: bool) -> FeatureConfig {
    FeatureConfig {
        audio,
        backlight,
        mouse_keys,
        ..Default::default()
    }
}

/// Planck keyboard on a recording host
pub fn create_keyboard(features: FeatureConfig) -> Keyboard<'static, TestHost> {
    let config: KeyboardConfig<NoPin> = KeyboardConfig {
        features,
        behavior: planck_behavior().unwrap(),
        ..Default::default()
    };
    Keyboard::new(&KEYMAP, TestHost::default(), config).unwrap()
}
