//! # RSYI Types
//!
//! Type definitions shared by the rsyi keymap crates.
//!
//! - [`action`] - What a key position does (keys, shifted keys, momentary layers)
//! - [`keycode`] - QMK compatible keycode numbering
//! - [`modifier`] - Modifier combinations
//! - [`layer`] - The active-layer bitset
//! - [`behavior`] - Tri layer rules and muse settings
//! - [`feature`] - Optional firmware features the keymap adapts to
//! - [`dvorak`] - Software Dvorak aliases
//! - [`planck`] - Layers and custom keycodes of the Planck layout

#![no_std]

pub mod action;
pub mod behavior;
pub mod dvorak;
pub mod feature;
pub mod keycode;
pub mod layer;
pub mod modifier;
pub mod planck;
