mod custom;
mod dip_switch;
mod encoder;

pub use dip_switch::{ADJUST_SWITCH, DipSwitch, MUSE_SWITCH};
use embedded_hal::digital::OutputPin;

use crate::config::{IndicatorPinConfig, KeyboardConfig, NoPin};
use crate::event::KeyEvent;
use crate::host::Host;
use crate::keymap::{KeyMap, KeymapError};
use crate::layer::LayerCombinator;
use crate::layout::{COL, NUM_LAYER, PlanckKeyMap, PlanckLayer, ROW};
use crate::muse::Muse;
use crate::types::action::KeyAction;
use crate::types::feature::FeatureConfig;
use crate::types::layer::LayerState;

/// Whether the firmware should keep processing a key record
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ProcessResult {
    /// The keymap ignored the key, the firmware applies its default behavior
    Continue,
    /// The keymap handled the key, default processing is suppressed
    Stop,
}

/// Owner of the keymap state and of the callbacks the firmware invokes
pub struct Keyboard<'a, H: Host, O: OutputPin = NoPin> {
    keymap: PlanckKeyMap<'a>,
    host: H,
    features: FeatureConfig,
    tri_layers: LayerCombinator,
    indicator: Option<IndicatorPinConfig<O>>,
    muse: Muse,
    dip_switch: DipSwitch,
    /// Layer a pressed key was resolved on, so that its release uses the same action
    layer_cache: [[u8; COL]; ROW],
}

impl<'a, H: Host, O: OutputPin> Keyboard<'a, H, O> {
    pub fn new(
        layers: &'a [[[KeyAction; COL]; ROW]; NUM_LAYER],
        host: H,
        config: KeyboardConfig<O>,
    ) -> Result<Self, KeymapError> {
        let keymap = KeyMap::new(layers, &config.behavior)?;
        Ok(Self {
            keymap,
            host,
            features: config.features,
            tri_layers: config.behavior.tri_layers,
            indicator: config.controller_config.indicator,
            muse: Muse::new(config.behavior.muse),
            dip_switch: DipSwitch::default(),
            layer_cache: [[0; COL]; ROW],
        })
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    pub fn keymap(&self) -> &PlanckKeyMap<'a> {
        &self.keymap
    }

    pub fn features(&self) -> &FeatureConfig {
        &self.features
    }

    pub fn muse(&self) -> &Muse {
        &self.muse
    }

    pub fn dip_switch(&self) -> &DipSwitch {
        &self.dip_switch
    }

    /// Layer state hook, called by the firmware on every layer change.
    ///
    /// Returns the state with all tri-layer rules applied.
    pub fn layer_state_set(&self, state: LayerState) -> LayerState {
        let new_state = self.tri_layers.apply(state);
        if new_state != state {
            debug!("Tri layer: {:?} -> {:?}", state, new_state);
        }
        new_state
    }

    /// Action of a key under the host's current layer state
    pub fn key_action(&self, row: u8, col: u8) -> Option<KeyAction> {
        self.keymap
            .resolve(self.host.layer_state(), self.host.default_layer(), row, col)
    }

    /// Resolve a matrix event and run the custom keycode handler on it.
    ///
    /// A release resolves on the layer its press was found on. Returns the resolved
    /// action and whether the firmware should keep processing it.
    pub fn process_key_event(&mut self, event: KeyEvent) -> (KeyAction, ProcessResult) {
        let (row, col) = (event.row as usize, event.col as usize);
        if row >= ROW || col >= COL {
            warn!("Key event out of the matrix: ({}, {})", event.row, event.col);
            return (KeyAction::No, ProcessResult::Continue);
        }

        let action = if event.pressed {
            let Some((layer, action)) = self.keymap.resolve_with_layer(
                self.host.layer_state(),
                self.host.default_layer(),
                event.row,
                event.col,
            ) else {
                return (KeyAction::No, ProcessResult::Continue);
            };
            self.layer_cache[row][col] = layer;
            action
        } else {
            let layer = self.layer_cache[row][col];
            self.keymap
                .action_at(layer, event.row, event.col)
                .unwrap_or_default()
        };

        let result = match action.keycode() {
            Some(keycode) => self.process_record(keycode, event.pressed),
            None => ProcessResult::Continue,
        };
        (action, result)
    }

    /// Scan tick hook, drives the muse sequencer when audio is available
    pub fn matrix_scan(&mut self) {
        if self.features.audio {
            self.muse.tick(&mut self.host);
        }
    }

    /// Whether a key reaches the music mode when it is on.
    ///
    /// The Lower and Raise keys keep switching layers, everything else is played.
    pub fn music_mask(&self, action: KeyAction) -> bool {
        !matches!(
            action.momentary_layer().and_then(PlanckLayer::from_index),
            Some(PlanckLayer::Lower | PlanckLayer::Raise)
        )
    }
}

