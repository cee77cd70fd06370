use core::fmt;

use crate::config::BehaviorConfig;
use crate::types::action::{Action, KeyAction};
use crate::types::behavior::TriLayer;
use crate::types::layer::{LayerState, MAX_LAYERS};

/// Errors found while building a [`KeyMap`]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum KeymapError {
    /// A momentary layer key points outside the keymap
    InvalidLayerTarget { layer: u8, row: u8, col: u8, target: u8 },
    /// A layer usable as default layer has a transparent key, which has nothing to fall through to
    TransparentBaseKey { layer: u8, row: u8, col: u8 },
    /// A tri-layer rule references a missing layer or repeats a layer
    InvalidTriLayer(TriLayer),
    /// A base layer is outside the keymap
    InvalidBaseLayer(u8),
    /// More layers than a layer state can hold
    TooManyLayers,
    /// More tri-layer rules than can be chained
    TooManyTriLayers,
}

impl fmt::Display for KeymapError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KeymapError::InvalidLayerTarget { layer, row, col, target } => write!(
                f,
                "key ({}, {}) on layer {} activates layer {}, which doesn't exist",
                row, col, layer, target
            ),
            KeymapError::TransparentBaseKey { layer, row, col } => {
                write!(f, "key ({}, {}) on base layer {} is transparent", row, col, layer)
            }
            KeymapError::InvalidTriLayer(rule) => write!(
                f,
                "invalid tri layer [{}, {}, {}]",
                rule.lower, rule.upper, rule.adjust
            ),
            KeymapError::InvalidBaseLayer(layer) => write!(f, "base layer {} doesn't exist", layer),
            KeymapError::TooManyLayers => write!(f, "at most {} layers are supported", MAX_LAYERS),
            KeymapError::TooManyTriLayers => write!(f, "too many tri layer rules"),
        }
    }
}

/// Keymap represents the stack of layers.
///
/// The conception of Keymap is borrowed from qmk: <https://docs.qmk.fm/#/keymap>.
///
/// A key stroke at `(row, col)` is looked up from the highest active layer down to
/// the default layer. The table is checked once in [`KeyMap::new`] and never changes.
#[derive(Clone, Copy, Debug)]
pub struct KeyMap<'a, const ROW: usize, const COL: usize, const NUM_LAYER: usize> {
    layers: &'a [[[KeyAction; COL]; ROW]; NUM_LAYER],
}

impl<'a, const ROW: usize, const COL: usize, const NUM_LAYER: usize> KeyMap<'a, ROW, COL, NUM_LAYER> {
    pub fn new(
        layers: &'a [[[KeyAction; COL]; ROW]; NUM_LAYER],
        behavior: &BehaviorConfig,
    ) -> Result<Self, KeymapError> {
        if NUM_LAYER > MAX_LAYERS as usize {
            return Err(KeymapError::TooManyLayers);
        }
        let keymap = Self { layers };
        keymap.check_layer_targets()?;
        for rule in behavior.tri_layers.rules() {
            keymap.check_tri_layer(rule)?;
        }
        keymap.check_base_layers(behavior.base_layers)?;
        Ok(keymap)
    }

    fn check_layer_targets(&self) -> Result<(), KeymapError> {
        for (layer, rows) in self.layers.iter().enumerate() {
            for (row, cols) in rows.iter().enumerate() {
                for (col, action) in cols.iter().enumerate() {
                    if let KeyAction::Single(Action::LayerOn(target)) = action {
                        if *target as usize >= NUM_LAYER {
                            return Err(KeymapError::InvalidLayerTarget {
                                layer: layer as u8,
                                row: row as u8,
                                col: col as u8,
                                target: *target,
                            });
                        }
                    }
                }
            }
        }
        Ok(())
    }

    fn check_tri_layer(&self, rule: &TriLayer) -> Result<(), KeymapError> {
        if !rule.is_distinct() || rule.layers().iter().any(|l| *l as usize >= NUM_LAYER) {
            return Err(KeymapError::InvalidTriLayer(*rule));
        }
        Ok(())
    }

    fn check_base_layers(&self, base_layers: LayerState) -> Result<(), KeymapError> {
        for layer in base_layers.iter_active() {
            let rows = self
                .layers
                .get(layer as usize)
                .ok_or(KeymapError::InvalidBaseLayer(layer))?;
            for (row, cols) in rows.iter().enumerate() {
                if let Some(col) = cols.iter().position(|a| *a == KeyAction::Transparent) {
                    return Err(KeymapError::TransparentBaseKey {
                        layer,
                        row: row as u8,
                        col: col as u8,
                    });
                }
            }
        }
        Ok(())
    }

    /// Returns (row, col, layer) dimensions of the keymap
    pub fn dimensions(&self) -> (usize, usize, usize) {
        (ROW, COL, NUM_LAYER)
    }

    /// The action stored at a position, `None` if out of range
    pub fn action_at(&self, layer: u8, row: u8, col: u8) -> Option<KeyAction> {
        self.layers
            .get(layer as usize)?
            .get(row as usize)?
            .get(col as usize)
            .copied()
    }

    /// Resolve the action of a key under the given layer state.
    ///
    /// Layers that are active or default are checked from the highest down to layer 0,
    /// like QMK's `layer_state | default_layer_state` lookup. An active layer below the
    /// default layer is still reached. Transparent keys fall through, `KeyAction::No` on
    /// the default layer is returned if nothing matches. `None` if `(row, col)` is out of range.
    pub fn resolve(&self, state: LayerState, default_layer: u8, row: u8, col: u8) -> Option<KeyAction> {
        self.resolve_with_layer(state, default_layer, row, col)
            .map(|(_, action)| action)
    }

    /// Same as [`KeyMap::resolve`], also returning the layer the action was found on
    pub fn resolve_with_layer(
        &self,
        state: LayerState,
        default_layer: u8,
        row: u8,
        col: u8,
    ) -> Option<(u8, KeyAction)> {
        if row as usize >= ROW || col as usize >= COL {
            return None;
        }

        // Iterate from higher layer to lower layer
        for (layer_idx, layer) in self.layers.iter().enumerate().rev() {
            let layer_idx = layer_idx as u8;
            if state.is_on(layer_idx) || layer_idx == default_layer {
                let action = layer[row as usize][col as usize];
                if action != KeyAction::Transparent {
                    return Some((layer_idx, action));
                }
            }
        }

        Some((default_layer, KeyAction::No))
    }
}
