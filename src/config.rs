//! Timing configuration and construction-time validation.

/// Width of one polling slice in milliseconds.
pub const DEFAULT_SLICE_MS: u32 = 50;

/// Settle interval used to confirm both the press and the release edge.
pub const DEFAULT_SETTLE_MS: u32 = 30;

/// Sleep between samples while waiting for the button to be released.
pub const DEFAULT_RELEASE_POLL_MS: u32 = 1;

/// How long the bank stays dark after an activation before the next pattern starts.
pub const DEFAULT_ACKNOWLEDGE_MS: u32 = 200;

/// Hold time of each alternating-phase frame.
pub const DEFAULT_ALTERNATING_HOLD_MS: u32 = 400;

/// Hold time of each scanner frame.
pub const DEFAULT_SCANNER_HOLD_MS: u32 = 120;

/// All durations used by the controller, in milliseconds.
///
/// Start from [`Timing::DEFAULT`] and override individual values with the
/// `with_*` setters:
///
/// ```
/// use led_pattern_toggle::Timing;
///
/// let timing = Timing::DEFAULT.with_scanner_hold_ms(80).with_slice_ms(20);
/// assert!(timing.validate().is_ok());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Timing {
    /// Granularity of the interruptible delay. Must be non-zero.
    pub slice_ms: u32,
    /// Debounce settle interval for press and release.
    pub settle_ms: u32,
    /// Sleep between samples in the release wait. Zero spins on the pin.
    pub release_poll_ms: u32,
    /// Dark period shown after an activation.
    pub acknowledge_ms: u32,
    /// Hold of each alternating-phase frame.
    pub alternating_hold_ms: u32,
    /// Hold of each scanner frame.
    pub scanner_hold_ms: u32,
}

impl Timing {
    /// The stock timing: 50 ms slices, 30 ms settle, 200 ms acknowledge,
    /// 400 ms alternating frames and 120 ms scanner frames.
    pub const DEFAULT: Self = Self {
        slice_ms: DEFAULT_SLICE_MS,
        settle_ms: DEFAULT_SETTLE_MS,
        release_poll_ms: DEFAULT_RELEASE_POLL_MS,
        acknowledge_ms: DEFAULT_ACKNOWLEDGE_MS,
        alternating_hold_ms: DEFAULT_ALTERNATING_HOLD_MS,
        scanner_hold_ms: DEFAULT_SCANNER_HOLD_MS,
    };

    /// Sets the width of one polling slice.
    pub const fn with_slice_ms(mut self, ms: u32) -> Self {
        self.slice_ms = ms;
        self
    }

    /// Sets the debounce settle interval used for both press and release.
    pub const fn with_settle_ms(mut self, ms: u32) -> Self {
        self.settle_ms = ms;
        self
    }

    /// Sets the sleep between samples while waiting for release. Zero spins on the pin.
    pub const fn with_release_poll_ms(mut self, ms: u32) -> Self {
        self.release_poll_ms = ms;
        self
    }

    /// Sets how long the bank stays dark after an activation.
    pub const fn with_acknowledge_ms(mut self, ms: u32) -> Self {
        self.acknowledge_ms = ms;
        self
    }

    /// Sets the hold of each alternating-phase frame.
    pub const fn with_alternating_hold_ms(mut self, ms: u32) -> Self {
        self.alternating_hold_ms = ms;
        self
    }

    /// Sets the hold of each scanner frame.
    pub const fn with_scanner_hold_ms(mut self, ms: u32) -> Self {
        self.scanner_hold_ms = ms;
        self
    }

    /// Checks the configuration.
    ///
    /// # Errors
    /// * `ZeroSliceDuration` - `slice_ms` is zero
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.slice_ms == 0 {
            return Err(ConfigError::ZeroSliceDuration);
        }
        Ok(())
    }
}

impl Default for Timing {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Errors reported when building a controller or one of its parts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// `slice_ms` of zero would never poll the button.
    ZeroSliceDuration,

    /// The scanner needs at least two lines to bounce between.
    BankTooNarrow {
        /// Number of lines in the rejected bank.
        lines: usize,
    },
}

impl core::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            ConfigError::ZeroSliceDuration => {
                write!(f, "slice duration must be greater than zero")
            }
            ConfigError::BankTooNarrow { lines } => {
                write!(
                    f,
                    "output bank has {} line(s), the scanner needs at least 2",
                    lines
                )
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ConfigError {}
