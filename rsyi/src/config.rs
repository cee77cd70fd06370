use core::convert::Infallible;

use embedded_hal::digital::{ErrorType, OutputPin};

use crate::layer::LayerCombinator;
use crate::types::behavior::MuseConfig;
use crate::types::feature::{FeatureConfig, HardwareRevision};
use crate::types::layer::LayerState;

/// The config struct for the keymap.
///
/// There are 3 parts:
/// 1. `FeatureConfig`: Optional firmware features the handlers adapt to.
/// 2. `BehaviorConfig`: Tri-layer rules, muse defaults and the layers usable as default layer.
/// 3. `ControllerConfig`: Devices on the board driven by the keymap, like the rev5 indicator.
pub struct KeyboardConfig<O: OutputPin> {
    pub features: FeatureConfig,
    pub behavior: BehaviorConfig,
    pub controller_config: ControllerConfig<O>,
}

impl<O: OutputPin> Default for KeyboardConfig<O> {
    fn default() -> Self {
        Self {
            features: default_features(),
            behavior: BehaviorConfig::default(),
            controller_config: ControllerConfig::default(),
        }
    }
}

/// Feature flags selected by the cargo features of this crate
pub fn default_features() -> FeatureConfig {
    features_from_flags(
        cfg!(feature = "audio"),
        cfg!(feature = "backlight"),
        cfg!(feature = "mousekey"),
        cfg!(feature = "planck_rev5"),
    )
}

/// Map the `audio`, `backlight`, `mousekey` and `planck_rev5` flags to a feature config
pub const fn features_from_flags(audio: bool, backlight: bool, mousekey: bool, planck_rev5: bool) -> FeatureConfig {
    FeatureConfig {
        audio,
        backlight,
        mouse_keys: mousekey,
        revision: if planck_rev5 {
            HardwareRevision::Rev5
        } else {
            HardwareRevision::Rev6
        },
    }
}

/// Config for configurable keymap behavior
#[derive(Clone, Debug, Default)]
pub struct BehaviorConfig {
    pub tri_layers: LayerCombinator,
    pub muse: MuseConfig,
    /// Layers that can become the default layer, they must not contain transparent keys
    pub base_layers: LayerState,
}

/// Config for controllers.
pub struct ControllerConfig<O: OutputPin> {
    pub indicator: Option<IndicatorPinConfig<O>>,
}

impl<O: OutputPin> Default for ControllerConfig<O> {
    fn default() -> Self {
        Self { indicator: None }
    }
}

pub struct IndicatorPinConfig<O: OutputPin> {
    pub pin: O,
    pub low_active: bool,
}

impl<O: OutputPin> IndicatorPinConfig<O> {
    pub fn new(pin: O, low_active: bool) -> Self {
        Self { pin, low_active }
    }

    /// Drive the pin to its active or inactive level
    pub(crate) fn set_active(&mut self, active: bool) -> Result<(), O::Error> {
        if active != self.low_active {
            self.pin.set_high()
        } else {
            self.pin.set_low()
        }
    }
}

/// Placeholder for boards without an indicator pin
#[derive(Clone, Copy, Debug, Default)]
pub struct NoPin;

impl ErrorType for NoPin {
    type Error = Infallible;
}

impl OutputPin for NoPin {
    fn set_low(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }

    fn set_high(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }
}
