//! Interruptible delay built from short polling slices.
//!
//! Provides [`SliceableDelay`], which owns the output bank, the activation
//! input and the blocking sleep primitive, and waits in fixed-width slices so a
//! button press is noticed within one slice no matter how long the hold is.

use crate::button::ActivationInput;
use crate::config::{ConfigError, Timing};
use crate::frame::Frame;
use crate::output::OutputBank;
use embedded_hal::delay::DelayNs;

/// Blocking wait that polls an [`ActivationInput`] between slices.
///
/// # Type Parameters
/// * `O` - Output bank implementation
/// * `A` - Activation input implementation
/// * `D` - Blocking delay implementation
/// * `N` - Number of output lines
pub struct SliceableDelay<O, A, D, const N: usize>
where
    O: OutputBank<N>,
    A: ActivationInput,
    D: DelayNs,
{
    outputs: O,
    input: A,
    delay: D,
    slice_ms: u32,
    acknowledge_ms: u32,
}

impl<O, A, D, const N: usize> SliceableDelay<O, A, D, N>
where
    O: OutputBank<N>,
    A: ActivationInput,
    D: DelayNs,
{
    /// Creates a sliceable delay from its peripherals.
    ///
    /// # Errors
    /// * `ZeroSliceDuration` - `timing.slice_ms` is zero
    pub fn new(outputs: O, input: A, delay: D, timing: &Timing) -> Result<Self, ConfigError> {
        timing.validate()?;

        Ok(Self {
            outputs,
            input,
            delay,
            slice_ms: timing.slice_ms,
            acknowledge_ms: timing.acknowledge_ms,
        })
    }

    /// Waits `total_ms`, polling the input after every full slice.
    ///
    /// On activation every line is cleared, the dark bank is held for the
    /// acknowledge period and the wait ends early; the rest of `total_ms` is
    /// skipped. The sub-slice remainder at the end is slept without polling,
    /// so a wait shorter than one slice never sees a press.
    ///
    /// # Returns
    /// * `true` - An activation ended the wait early
    /// * `false` - The full duration elapsed
    pub fn wait_with_interrupt(&mut self, total_ms: u32) -> bool {
        let chunks = total_ms / self.slice_ms;
        let remainder = total_ms % self.slice_ms;

        for _ in 0..chunks {
            self.delay.delay_ms(self.slice_ms);

            if self.input.poll_activation(&mut self.delay) {
                self.outputs.clear_all();
                self.delay.delay_ms(self.acknowledge_ms);
                return true;
            }
        }

        if remainder > 0 {
            self.delay.delay_ms(remainder);
        }

        false
    }

    /// Writes `frame` to the output bank.
    pub fn show(&mut self, frame: &Frame<N>) {
        frame.apply(&mut self.outputs);
    }

    /// Turns every output line off.
    pub fn clear_outputs(&mut self) {
        self.outputs.clear_all();
    }

    /// Returns a reference to the output bank.
    pub fn outputs(&self) -> &O {
        &self.outputs
    }

    /// Returns a mutable reference to the output bank.
    pub fn outputs_mut(&mut self) -> &mut O {
        &mut self.outputs
    }

    /// Returns a reference to the activation input.
    pub fn input(&self) -> &A {
        &self.input
    }

    /// Releases the peripherals.
    pub fn release(self) -> (O, A, D) {
        (self.outputs, self.input, self.delay)
    }
}
