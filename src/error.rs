//! Error types for counter configuration.
//!
//! The `CounterError` enum represents every way a configuration request can be
//! rejected. The interrupt handler never produces one.

use core::fmt;

/// Counter error type.
///
/// Returned synchronously by the configuration operations. Nothing is retried
/// internally; retry policy belongs to the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum CounterError {
    /// Conflicting configuration already active (e.g. alarm pending)
    Busy,

    /// Channel id outside the supported alarm channels
    UnsupportedChannel,

    /// Requested top period already elapsed and the reset policy forbids a silent reset
    TimingViolation,

    /// Alarm target beyond the active top boundary, or a zero top period
    InvalidTiming,

    /// Hardware counter is stopped
    NotRunning,
}

impl fmt::Display for CounterError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CounterError::Busy => write!(f, "Counter busy"),
            CounterError::UnsupportedChannel => write!(f, "Unsupported channel"),
            CounterError::TimingViolation => write!(f, "Top value already elapsed"),
            CounterError::InvalidTiming => write!(f, "Invalid timing"),
            CounterError::NotRunning => write!(f, "Counter not started"),
        }
    }
}
