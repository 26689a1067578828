//! Time abstraction traits for platform-agnostic timing.
//!
//! Every component observes time only through [`TimeSource::now`]. Progress is
//! derived from the difference between two instants, never from accumulated
//! frame deltas.

/// Trait for abstracting time sources.
pub trait TimeSource<I: TimeInstant> {
    /// Returns the current time instant.
    fn now(&self) -> I;
}

/// Trait abstraction for duration types.
pub trait TimeDuration: Copy + PartialEq {
    /// Zero duration constant.
    const ZERO: Self;

    /// Converts duration to milliseconds.
    fn as_millis(&self) -> u64;

    /// Creates duration from milliseconds.
    fn from_millis(millis: u64) -> Self;
}

/// Trait abstraction for instant types.
///
/// Instants must be ordered so deadlines can be compared against "now".
pub trait TimeInstant: Copy + PartialOrd {
    /// Duration type for this instant.
    type Duration: TimeDuration;

    /// Calculates duration since an earlier instant.
    ///
    /// Implementations should saturate to zero when `earlier` is later than `self`.
    fn duration_since(&self, earlier: Self) -> Self::Duration;

    /// Adds duration to instant, returns None on overflow.
    fn checked_add(self, duration: Self::Duration) -> Option<Self>;
}

impl TimeDuration for core::time::Duration {
    const ZERO: Self = core::time::Duration::ZERO;

    fn as_millis(&self) -> u64 {
        u64::try_from(core::time::Duration::as_millis(self)).unwrap_or(u64::MAX)
    }

    fn from_millis(millis: u64) -> Self {
        core::time::Duration::from_millis(millis)
    }
}

#[cfg(feature = "std")]
impl TimeInstant for std::time::Instant {
    type Duration = core::time::Duration;

    fn duration_since(&self, earlier: Self) -> Self::Duration {
        self.saturating_duration_since(earlier)
    }

    fn checked_add(self, duration: Self::Duration) -> Option<Self> {
        std::time::Instant::checked_add(&self, duration)
    }
}

/// Monotonic clock backed by [`std::time::Instant`].
#[cfg(feature = "std")]
#[derive(Debug, Clone, Copy, Default)]
pub struct StdTimeSource;

#[cfg(feature = "std")]
impl StdTimeSource {
    /// Creates a new monotonic time source.
    pub fn new() -> Self {
        Self
    }
}

#[cfg(feature = "std")]
impl TimeSource<std::time::Instant> for StdTimeSource {
    fn now(&self) -> std::time::Instant {
        std::time::Instant::now()
    }
}
