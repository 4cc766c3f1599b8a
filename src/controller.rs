//! Top-level controller: owns the pattern selector and runs the pattern loop.

use crate::button::ActivationInput;
use crate::config::{ConfigError, Timing};
use crate::delay::SliceableDelay;
use crate::output::OutputBank;
use crate::pattern::{AlternatingPhase, Scanner};
use crate::types::{PatternSelector, ScannerState, TickOutcome};
use embedded_hal::delay::DelayNs;

/// Drives an `N`-line output bank through the two patterns, switching on each
/// button activation.
///
/// Everything is single-threaded and cooperative: a tick renders frames and
/// blocks in the sliceable delay, which is also where the button is polled.
///
/// # Type Parameters
/// * `O` - Output bank implementation
/// * `A` - Activation input implementation (usually a [`DebouncedButton`](crate::DebouncedButton))
/// * `D` - Blocking delay implementation
/// * `N` - Number of output lines, at least 2
pub struct Controller<O, A, D, const N: usize>
where
    O: OutputBank<N>,
    A: ActivationInput,
    D: DelayNs,
{
    io: SliceableDelay<O, A, D, N>,
    selector: PatternSelector,
    alternating: AlternatingPhase,
    scanner: Scanner<N>,
}

impl<O, A, D, const N: usize> Controller<O, A, D, N>
where
    O: OutputBank<N>,
    A: ActivationInput,
    D: DelayNs,
{
    /// Creates a controller showing the alternating pattern, with every line off.
    ///
    /// # Errors
    /// * `ZeroSliceDuration` - `timing.slice_ms` is zero
    /// * `BankTooNarrow` - `N` is less than 2
    pub fn new(outputs: O, input: A, delay: D, timing: &Timing) -> Result<Self, ConfigError> {
        let scanner = Scanner::new(timing.scanner_hold_ms)?;
        let mut io = SliceableDelay::new(outputs, input, delay, timing)?;
        io.clear_outputs();

        #[cfg(feature = "defmt")]
        defmt::debug!("controller ready: {} lines, {}", N, timing);

        Ok(Self {
            io,
            selector: PatternSelector::default(),
            alternating: AlternatingPhase::new(timing.alternating_hold_ms),
            scanner,
        })
    }

    /// Runs one invocation of the selected pattern.
    ///
    /// If an activation interrupted it, the selector has already been flipped
    /// when this returns, so the next tick renders the other pattern.
    pub fn tick(&mut self) -> TickOutcome {
        let outcome = match self.selector {
            PatternSelector::AlternatingPhase => self.alternating.tick(&mut self.io),
            PatternSelector::Scanner => self.scanner.tick(&mut self.io),
        };

        if outcome.is_interrupted() {
            self.selector.toggle();

            #[cfg(feature = "defmt")]
            defmt::info!("pattern switched to {}", self.selector);
        }

        outcome
    }

    /// Ticks forever.
    pub fn run(&mut self) -> ! {
        loop {
            self.tick();
        }
    }

    /// Pattern the next tick renders.
    pub fn selector(&self) -> PatternSelector {
        self.selector
    }

    /// Scanner position and direction, kept while the other pattern runs.
    pub fn scanner_state(&self) -> ScannerState {
        self.scanner.state()
    }

    /// Returns a reference to the output bank.
    pub fn outputs(&self) -> &O {
        self.io.outputs()
    }

    /// Returns a reference to the activation input.
    pub fn input(&self) -> &A {
        self.io.input()
    }

    /// Releases the peripherals.
    pub fn release(self) -> (O, A, D) {
        self.io.release()
    }
}
