//! # RSYI
//!
//! rsyi's Planck keymap, written against a firmware-agnostic [`Host`](host::Host) trait.
//!
//! The crate owns the static keymap tables and the callbacks a keyboard firmware
//! invokes: the tri-layer combinator, the custom keycode dispatcher, the rotary
//! encoder, the dip switches, the muse step sequencer and the music-mode mask.
//! Matrix scanning, HID reporting, storage and the audio/backlight drivers stay in
//! the firmware.

#![cfg_attr(not(test), no_std)]

// This mod MUST go first, so that the others see its macros.
pub(crate) mod fmt;

pub use rsyi_types as types;

#[doc(hidden)]
pub use paste::paste;

pub mod audio;
pub mod config;
pub mod event;
pub mod host;
pub mod keyboard;
pub mod keymap;
pub mod layer;
pub mod layout;
pub mod layout_macro;
pub mod muse;
