//! Debounced single-button input.
//!
//! Provides [`DebouncedButton`], which turns a bouncing active-low push button
//! into one clean activation per physical press, and the [`ActivationInput`]
//! trait the interruptible delay polls.

use crate::config::Timing;
use embedded_hal::delay::DelayNs;
use embedded_hal::digital::InputPin;

/// Trait for anything that can report a single-shot "activated" event.
///
/// Polled between delay slices, never from an interrupt. Implementations may
/// block using `delay` while they confirm an event.
pub trait ActivationInput {
    /// Returns true once per validated activation.
    fn poll_activation<D: DelayNs>(&mut self, delay: &mut D) -> bool;
}

/// Push button on a pulled-up input pin, pressed = low.
///
/// Every poll starts from scratch: there is no state carried between calls.
/// A press is confirmed by sampling again after the settle interval; the call
/// then blocks until the button is released and the release edge has settled.
/// Holding the button therefore stalls the caller for as long as it is held,
/// and a line stuck low stalls it forever. There is no auto-repeat.
pub struct DebouncedButton<P: InputPin> {
    pin: P,
    settle_ms: u32,
    release_poll_ms: u32,
}

impl<P: InputPin> DebouncedButton<P> {
    /// Creates a button using the stock 30 ms settle interval.
    pub fn new(pin: P) -> Self {
        Self::with_timing(pin, &Timing::DEFAULT)
    }

    /// Creates a button using the settle and release-poll values of `timing`.
    pub fn with_timing(pin: P, timing: &Timing) -> Self {
        Self {
            pin,
            settle_ms: timing.settle_ms,
            release_poll_ms: timing.release_poll_ms,
        }
    }

    /// Samples the pin once. Read errors count as not pressed.
    pub fn is_pressed(&mut self) -> bool {
        self.pin.is_low().unwrap_or(false)
    }

    /// Releases the underlying pin.
    pub fn release(self) -> P {
        self.pin
    }
}

impl<P: InputPin> ActivationInput for DebouncedButton<P> {
    fn poll_activation<D: DelayNs>(&mut self, delay: &mut D) -> bool {
        if !self.is_pressed() {
            return false;
        }

        delay.delay_ms(self.settle_ms);
        if !self.is_pressed() {
            // Shorter than the settle interval: contact bounce or noise
            return false;
        }

        while self.is_pressed() {
            delay.delay_ms(self.release_poll_ms);
        }
        delay.delay_ms(self.settle_ms);

        #[cfg(feature = "defmt")]
        defmt::debug!("button activation");

        true
    }
}
