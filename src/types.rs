//! Core state types shared by the pattern engine and the controller.

/// Which pattern the controller renders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PatternSelector {
    /// Even and odd lines light in turn.
    #[default]
    AlternatingPhase,

    /// A single lit line bouncing end to end.
    Scanner,
}

impl PatternSelector {
    /// Returns the other pattern.
    #[inline]
    pub fn toggled(self) -> Self {
        match self {
            PatternSelector::AlternatingPhase => PatternSelector::Scanner,
            PatternSelector::Scanner => PatternSelector::AlternatingPhase,
        }
    }

    /// Switches to the other pattern. This is the only way the selector changes.
    #[inline]
    pub fn toggle(&mut self) {
        *self = self.toggled();
    }
}

/// Direction the scanner moves in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Direction {
    /// Towards line 0.
    Down,

    /// Towards line `N - 1`.
    Up,
}

impl Direction {
    /// Signed step applied to the position: -1 or +1.
    pub fn step(self) -> isize {
        match self {
            Direction::Down => -1,
            Direction::Up => 1,
        }
    }
}

/// Position and direction of the scanner.
///
/// Survives across scanner ticks and is not reset when the scanner is
/// deselected, so a reselected scanner resumes where it stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ScannerState {
    pos: usize,
    dir: Direction,
}

impl ScannerState {
    /// Line 0, moving up.
    pub const START: Self = Self {
        pos: 0,
        dir: Direction::Up,
    };

    /// Currently lit line.
    pub fn pos(&self) -> usize {
        self.pos
    }

    /// Direction of the next move.
    pub fn dir(&self) -> Direction {
        self.dir
    }

    /// Moves one line in the current direction, then turns around at either end
    /// of a `lines`-wide bank.
    ///
    /// The turn only affects the following move, so the end lines are each shown
    /// once per sweep.
    ///
    /// # Preconditions
    /// `lines` must be at least 2. A narrower bank has no room to move, so the
    /// state is left unchanged.
    pub fn advance(&mut self, lines: usize) {
        if lines < 2 {
            return;
        }

        self.pos = self.pos.saturating_add_signed(self.dir.step());

        if self.pos == lines - 1 {
            self.dir = Direction::Down;
        }
        if self.pos == 0 {
            self.dir = Direction::Up;
        }
    }
}

impl Default for ScannerState {
    fn default() -> Self {
        Self::START
    }
}

/// Result of one pattern tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TickOutcome {
    /// Every frame was held for its full duration.
    Completed,

    /// An activation cut a hold short.
    Interrupted,
}

impl TickOutcome {
    /// Returns true if an activation ended the tick.
    pub fn is_interrupted(self) -> bool {
        self == TickOutcome::Interrupted
    }
}
