//! Debounced button press counter for the STM32F103 "Blue Pill" training board.
//!
//! The library is `no_std` and hardware independent; the `press_counter`
//! binary (feature `board`) wires it to real pins.

#![cfg_attr(not(test), no_std)]

// Must come first so the logging macros are visible to the other modules.
mod fmt;

pub mod app;
pub mod error;
pub mod hardware;
pub mod input;

pub use error::ConfigError;
