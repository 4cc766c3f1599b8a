//! Shared test infrastructure for led-pattern-toggle integration tests

#![allow(dead_code)] // Items used across multiple test files; Rust analyzes per-file

use core::cell::{Cell, RefCell};
use core::convert::Infallible;
use embedded_hal::delay::DelayNs;
use embedded_hal::digital::{ErrorType, InputPin};
use led_pattern_toggle::{ActivationInput, Frame, OutputBank};

pub use led_pattern_toggle::DEFAULT_LINES;

const NS_PER_MS: u64 = 1_000_000;

// ============================================================================
// Simulated board
// ============================================================================

/// A stretch of simulated time during which the bank showed `lines`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Hold<const N: usize> {
    pub lines: [bool; N],
    pub ns: u64,
}

impl<const N: usize> Hold<N> {
    pub fn ms(&self) -> u64 {
        self.ns / NS_PER_MS
    }

    /// Index of the only lit line, if exactly one is lit
    pub fn single_lit(&self) -> Option<usize> {
        let mut lit = self.lines.iter().enumerate().filter(|(_, on)| **on);
        match (lit.next(), lit.next()) {
            (Some((index, _)), None) => Some(index),
            _ => None,
        }
    }

    pub fn is_dark(&self) -> bool {
        self.lines.iter().all(|on| !on)
    }
}

/// Shared state behind the mock peripherals: a clock, the current line
/// levels, the button press windows and a log of what was displayed while
/// time passed.
pub struct SimBoard<const N: usize> {
    now_ns: Cell<u64>,
    lines: Cell<[bool; N]>,
    presses: RefCell<heapless::Vec<(u64, u64), 8>>,
    holds: RefCell<heapless::Vec<Hold<N>, 128>>,
}

impl<const N: usize> SimBoard<N> {
    pub fn new() -> Self {
        Self::with_lines([false; N])
    }

    pub fn with_lines(lines: [bool; N]) -> Self {
        Self {
            now_ns: Cell::new(0),
            lines: Cell::new(lines),
            presses: RefCell::new(heapless::Vec::new()),
            holds: RefCell::new(heapless::Vec::new()),
        }
    }

    /// Holds the button down from `start_ms` until just before `end_ms`
    pub fn press(&self, start_ms: u64, end_ms: u64) {
        let _ = self.presses.borrow_mut().push((start_ms, end_ms));
    }

    pub fn now_ms(&self) -> u64 {
        self.now_ns.get() / NS_PER_MS
    }

    pub fn lines(&self) -> [bool; N] {
        self.lines.get()
    }

    pub fn all_clear(&self) -> bool {
        self.lines.get().iter().all(|on| !on)
    }

    /// What the bank displayed, with consecutive identical displays merged
    pub fn holds(&self) -> heapless::Vec<Hold<N>, 128> {
        self.holds.borrow().clone()
    }

    pub fn last_hold(&self) -> Option<Hold<N>> {
        self.holds.borrow().last().copied()
    }

    /// Positions of single-lit holds, in display order
    pub fn scanner_positions(&self) -> heapless::Vec<usize, 64> {
        self.holds
            .borrow()
            .iter()
            .filter_map(|hold| hold.single_lit())
            .collect()
    }

    fn is_pressed_now(&self) -> bool {
        let now = self.now_ms();
        self.presses
            .borrow()
            .iter()
            .any(|&(start, end)| start <= now && now < end)
    }

    fn write_line(&self, index: usize, on: bool) {
        let mut lines = self.lines.get();
        lines[index] = on;
        self.lines.set(lines);
    }

    fn pass(&self, ns: u64) {
        if ns == 0 {
            return;
        }

        let lines = self.lines.get();
        let mut holds = self.holds.borrow_mut();
        match holds.last_mut() {
            Some(last) if last.lines == lines => last.ns += ns,
            _ => {
                let _ = holds.push(Hold { lines, ns });
            }
        }
        self.now_ns.set(self.now_ns.get() + ns);
    }
}

// ============================================================================
// Mock peripherals
// ============================================================================

/// Output bank writing into the simulated board
pub struct MockBank<'a, const N: usize> {
    board: &'a SimBoard<N>,
}

impl<'a, const N: usize> MockBank<'a, N> {
    pub fn new(board: &'a SimBoard<N>) -> Self {
        Self { board }
    }
}

impl<const N: usize> OutputBank<N> for MockBank<'_, N> {
    fn set(&mut self, index: usize) {
        self.board.write_line(index, true);
    }

    fn clear(&mut self, index: usize) {
        self.board.write_line(index, false);
    }
}

/// Delay that advances the simulated clock instead of sleeping
pub struct MockDelay<'a, const N: usize> {
    board: &'a SimBoard<N>,
}

impl<'a, const N: usize> MockDelay<'a, N> {
    pub fn new(board: &'a SimBoard<N>) -> Self {
        Self { board }
    }
}

impl<const N: usize> DelayNs for MockDelay<'_, N> {
    fn delay_ns(&mut self, ns: u32) {
        self.board.pass(ns as u64);
    }

    fn delay_ms(&mut self, ms: u32) {
        self.board.pass(ms as u64 * NS_PER_MS);
    }
}

/// Active-low button pin following the board's press windows
pub struct ScriptedPin<'a, const N: usize> {
    board: &'a SimBoard<N>,
}

impl<'a, const N: usize> ScriptedPin<'a, N> {
    pub fn new(board: &'a SimBoard<N>) -> Self {
        Self { board }
    }
}

impl<const N: usize> ErrorType for ScriptedPin<'_, N> {
    type Error = Infallible;
}

impl<const N: usize> InputPin for ScriptedPin<'_, N> {
    fn is_high(&mut self) -> Result<bool, Self::Error> {
        Ok(!self.board.is_pressed_now())
    }

    fn is_low(&mut self) -> Result<bool, Self::Error> {
        Ok(self.board.is_pressed_now())
    }
}

/// Activation source that fires on chosen poll numbers without taking any time
pub struct InjectedActivation {
    fire_on: heapless::Vec<u32, 8>,
    polls: u32,
}

impl InjectedActivation {
    pub fn never() -> Self {
        Self::at_polls(&[])
    }

    /// Fires on each listed poll, counting from 0 across all calls
    pub fn at_polls(polls: &[u32]) -> Self {
        Self {
            fire_on: heapless::Vec::from_slice(polls).unwrap(),
            polls: 0,
        }
    }

    pub fn polls(&self) -> u32 {
        self.polls
    }
}

impl ActivationInput for InjectedActivation {
    fn poll_activation<D: DelayNs>(&mut self, _delay: &mut D) -> bool {
        let fire = self.fire_on.contains(&self.polls);
        self.polls += 1;
        fire
    }
}

// ============================================================================
// Test Helper Functions
// ============================================================================

pub fn evens<const N: usize>() -> [bool; N] {
    *Frame::<N>::evens(0).lines()
}

pub fn odds<const N: usize>() -> [bool; N] {
    *Frame::<N>::odds(0).lines()
}

pub fn single<const N: usize>(index: usize) -> [bool; N] {
    *Frame::<N>::single(index, 0).lines()
}

pub fn hold<const N: usize>(lines: [bool; N], ms: u64) -> Hold<N> {
    Hold {
        lines,
        ns: ms * NS_PER_MS,
    }
}
