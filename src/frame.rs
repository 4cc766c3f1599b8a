//! Output frames: a complete on/off assignment for the bank plus a hold time.

use crate::output::OutputBank;
use heapless::Vec;

/// Largest number of frames a single pattern tick renders.
pub const MAX_FRAMES_PER_TICK: usize = 2;

/// Frames rendered by one pattern tick, in order.
pub type FrameSequence<const N: usize> = Vec<Frame<N>, MAX_FRAMES_PER_TICK>;

/// A desired on/off state for every line of an `N`-line bank, held for
/// `hold_ms` milliseconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Frame<const N: usize> {
    lines: [bool; N],
    hold_ms: u32,
}

impl<const N: usize> Frame<N> {
    /// Creates a frame from an explicit line assignment.
    #[inline]
    pub const fn new(lines: [bool; N], hold_ms: u32) -> Self {
        Self { lines, hold_ms }
    }

    /// All lines off.
    pub const fn dark(hold_ms: u32) -> Self {
        Self::new([false; N], hold_ms)
    }

    /// Even-indexed lines on, odd-indexed lines off.
    pub fn evens(hold_ms: u32) -> Self {
        Self::new(core::array::from_fn(|i| i % 2 == 0), hold_ms)
    }

    /// Odd-indexed lines on, even-indexed lines off.
    pub fn odds(hold_ms: u32) -> Self {
        Self::new(core::array::from_fn(|i| i % 2 == 1), hold_ms)
    }

    /// Only line `index` on. An index outside the bank yields a dark frame.
    pub fn single(index: usize, hold_ms: u32) -> Self {
        Self::new(core::array::from_fn(|i| i == index), hold_ms)
    }

    /// Returns the line assignment.
    pub fn lines(&self) -> &[bool; N] {
        &self.lines
    }

    /// Returns true if line `index` is on in this frame.
    pub fn is_lit(&self, index: usize) -> bool {
        self.lines.get(index).copied().unwrap_or(false)
    }

    /// Number of lit lines.
    pub fn lit_count(&self) -> usize {
        self.lines.iter().filter(|&&on| on).count()
    }

    /// How long the frame stands before the pattern moves on.
    pub fn hold_ms(&self) -> u32 {
        self.hold_ms
    }

    /// Writes every line of the frame to `outputs`.
    pub fn apply<O: OutputBank<N>>(&self, outputs: &mut O) {
        for (index, &on) in self.lines.iter().enumerate() {
            if on {
                outputs.set(index);
            } else {
                outputs.clear(index);
            }
        }
    }
}
