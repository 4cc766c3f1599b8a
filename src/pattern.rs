//! The two LED patterns.
//!
//! Each pattern renders its frames through a [`SliceableDelay`] one tick at a
//! time and reports whether an activation cut the tick short.

use crate::button::ActivationInput;
use crate::config::ConfigError;
use crate::delay::SliceableDelay;
use crate::frame::{Frame, FrameSequence};
use crate::output::OutputBank;
use crate::types::{ScannerState, TickOutcome};
use embedded_hal::delay::DelayNs;

/// Even lines, then odd lines.
///
/// Holds no state between ticks: every tick starts again with the even frame,
/// wherever the previous tick was interrupted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AlternatingPhase {
    hold_ms: u32,
}

impl AlternatingPhase {
    /// Creates the pattern with the given per-frame hold.
    pub const fn new(hold_ms: u32) -> Self {
        Self { hold_ms }
    }

    /// The frames of one tick: evens on, then odds on.
    pub fn frames<const N: usize>(&self) -> FrameSequence<N> {
        let mut frames = FrameSequence::new();
        frames.extend([Frame::evens(self.hold_ms), Frame::odds(self.hold_ms)]);
        frames
    }

    /// Renders one tick, stopping at the first interrupted hold.
    pub fn tick<O, A, D, const N: usize>(
        &self,
        io: &mut SliceableDelay<O, A, D, N>,
    ) -> TickOutcome
    where
        O: OutputBank<N>,
        A: ActivationInput,
        D: DelayNs,
    {
        for frame in self.frames::<N>().iter() {
            io.show(frame);
            if io.wait_with_interrupt(frame.hold_ms()) {
                return TickOutcome::Interrupted;
            }
        }
        TickOutcome::Completed
    }
}

/// One lit line bouncing between both ends of the bank.
///
/// The position and direction persist across ticks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Scanner<const N: usize> {
    state: ScannerState,
    hold_ms: u32,
}

impl<const N: usize> Scanner<N> {
    /// Creates a scanner at line 0 moving up.
    ///
    /// # Errors
    /// * `BankTooNarrow` - `N` is less than 2
    pub fn new(hold_ms: u32) -> Result<Self, ConfigError> {
        if N < 2 {
            return Err(ConfigError::BankTooNarrow { lines: N });
        }

        Ok(Self {
            state: ScannerState::START,
            hold_ms,
        })
    }

    /// Current position and direction.
    pub fn state(&self) -> ScannerState {
        self.state
    }

    /// The frame the next tick will show.
    pub fn frame(&self) -> Frame<N> {
        Frame::single(self.state.pos(), self.hold_ms)
    }

    /// Renders one tick.
    ///
    /// When the hold is interrupted the position is left as is, and the lit
    /// line stays on the bank until the delay's acknowledge clears it.
    pub fn tick<O, A, D>(&mut self, io: &mut SliceableDelay<O, A, D, N>) -> TickOutcome
    where
        O: OutputBank<N>,
        A: ActivationInput,
        D: DelayNs,
    {
        let frame = self.frame();
        io.clear_outputs();
        io.show(&frame);

        if io.wait_with_interrupt(frame.hold_ms()) {
            return TickOutcome::Interrupted;
        }

        self.state.advance(N);
        TickOutcome::Completed
    }
}
