//! Digital output bank abstraction.
//!
//! Defines the [`OutputBank`] trait the controller drives, and [`PinBank`], an
//! implementation over an array of `embedded-hal` output pins.

use embedded_hal::digital::OutputPin;

/// Trait for abstracting a fixed, ordered bank of `N` on/off output lines.
///
/// Implement this for your LED hardware (GPIO, shift register, port expander,
/// etc.). Lines are addressed by index in `0..N`. The controller never reads a
/// line back, so implementations don't need to track state. Handle any
/// hardware errors internally - these methods cannot fail.
pub trait OutputBank<const N: usize> {
    /// Drives line `index` to its "on" level.
    fn set(&mut self, index: usize);

    /// Drives line `index` to its "off" level.
    fn clear(&mut self, index: usize);

    /// Turns every line off.
    fn clear_all(&mut self) {
        for index in 0..N {
            self.clear(index);
        }
    }
}

/// Output bank built from `N` GPIO pins.
///
/// Handles active-high (LED between pin and ground) and active-low (LED
/// between supply and pin) wiring.
pub struct PinBank<P: OutputPin, const N: usize> {
    pins: [P; N],
    active_low: bool,
}

impl<P: OutputPin, const N: usize> PinBank<P, N> {
    /// Creates an active-high bank and turns every line off.
    pub fn new(pins: [P; N]) -> Self {
        Self::with_polarity(pins, false)
    }

    /// Creates an active-low bank and turns every line off.
    pub fn new_active_low(pins: [P; N]) -> Self {
        Self::with_polarity(pins, true)
    }

    fn with_polarity(pins: [P; N], active_low: bool) -> Self {
        let mut bank = Self { pins, active_low };
        bank.clear_all();
        bank
    }

    /// Returns true if "on" is driven as a low level.
    pub fn is_active_low(&self) -> bool {
        self.active_low
    }

    /// Releases the underlying pins.
    pub fn release(self) -> [P; N] {
        self.pins
    }

    fn drive(&mut self, index: usize, on: bool) {
        let Some(pin) = self.pins.get_mut(index) else {
            return;
        };

        // Write errors are dropped; a line that fails to switch has no recovery path.
        if on != self.active_low {
            let _ = pin.set_high();
        } else {
            let _ = pin.set_low();
        }
    }
}

impl<P: OutputPin, const N: usize> OutputBank<N> for PinBank<P, N> {
    fn set(&mut self, index: usize) {
        self.drive(index, true);
    }

    fn clear(&mut self, index: usize) {
        self.drive(index, false);
    }
}
