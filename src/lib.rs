#![cfg_attr(not(feature = "std"), no_std)]
#![doc = include_str!("../README.md")]

//! # Core Concepts
//!
//! - **`OutputBank`**: Trait to implement for your bank of on/off output lines
//! - **`PinBank`**: `OutputBank` over an array of `embedded-hal` output pins
//! - **`ActivationInput`**: Trait for a single-shot "pressed" event source
//! - **`DebouncedButton`**: Active-low push button with press and release debouncing
//! - **`SliceableDelay`**: Blocking wait that polls the input between short slices
//! - **`Frame`**: On/off assignment for every line plus a hold time
//! - **`AlternatingPhase`** / **`Scanner`**: The two patterns
//! - **`Controller`**: Owns the `PatternSelector` and runs the pattern loop
//! - **`Timing`**: Every duration the controller uses
//!
//! The crate is `no_std` and allocation-free. Sleeping goes through
//! `embedded_hal::delay::DelayNs`, pins through `embedded_hal::digital`.

pub mod button;
pub mod config;
pub mod controller;
pub mod delay;
pub mod frame;
pub mod output;
pub mod pattern;
pub mod types;

pub use button::{ActivationInput, DebouncedButton};
pub use config::{ConfigError, Timing};
pub use controller::Controller;
pub use delay::SliceableDelay;
pub use frame::{Frame, FrameSequence, MAX_FRAMES_PER_TICK};
pub use output::{OutputBank, PinBank};
pub use pattern::{AlternatingPhase, Scanner};
pub use types::{Direction, PatternSelector, ScannerState, TickOutcome};

/// Number of LEDs on the reference board.
pub const DEFAULT_LINES: usize = 8;
