//! Logical event descriptions: the recurring top event and the one-shot alarm.
//!
//! Both carry borrowed callbacks. Callbacks run in interrupt context with the
//! scheduler locked: they must return promptly and must not call back into the
//! counter's configuration operations.

use crate::ticks::TOP_VALUE;

/// Top (period) callback. Receives the counter value at the boundary.
pub type TopCallback<'a> = &'a (dyn Fn(u32) + Sync);

/// Alarm callback. Receives the channel id and the counter value at expiry.
pub type AlarmCallback<'a> = &'a (dyn Fn(u8, u32) + Sync);

/// What `set_top` does when the counter has already passed the new period.
#[repr(u8)]
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ResetPolicy {
    /// Always reset the counter to 0 when the top is configured
    #[default]
    ResetAlways = 0,

    /// Keep the counter running; reject with `TimingViolation` if late
    PreserveIfNotLate = 1,

    /// Keep the counter running; if late, reset it and still reject
    PreserveAndResetIfLate = 2,
}

/// Recurring top event configuration.
///
/// A period of `TOP_VALUE` or a missing callback disables top tracking; the
/// period is still reported by `get_top()`.
#[derive(Clone, Copy)]
pub struct TopConfig<'a> {
    /// Ticks between consecutive top events
    pub period_ticks: u32,

    /// Invoked on every period boundary
    pub callback: Option<TopCallback<'a>>,

    /// Behavior when the counter is already past `period_ticks`
    pub reset_policy: ResetPolicy,
}

impl<'a> TopConfig<'a> {
    /// Periodic event every `period_ticks`, resetting the counter on configure.
    pub const fn new(period_ticks: u32, callback: TopCallback<'a>) -> Self {
        Self {
            period_ticks,
            callback: Some(callback),
            reset_policy: ResetPolicy::ResetAlways,
        }
    }

    /// No top tracking; the counter only wraps at `TOP_VALUE`.
    pub const fn disabled() -> Self {
        Self {
            period_ticks: TOP_VALUE,
            callback: None,
            reset_policy: ResetPolicy::ResetAlways,
        }
    }

    /// Replace the reset policy.
    pub const fn with_policy(mut self, reset_policy: ResetPolicy) -> Self {
        self.reset_policy = reset_policy;
        self
    }

    /// Whether this configuration produces top events.
    pub fn is_tracked(&self) -> bool {
        self.period_ticks != TOP_VALUE && self.callback.is_some()
    }
}

impl core::fmt::Debug for TopConfig<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("TopConfig")
            .field("period_ticks", &self.period_ticks)
            .field("callback", &self.callback.map(|_| "<dyn Fn>"))
            .field("reset_policy", &self.reset_policy)
            .finish()
    }
}

/// One-shot alarm request.
#[derive(Clone, Copy)]
pub struct AlarmConfig<'a> {
    /// Target tick (absolute) or offset from the current value (relative)
    pub ticks: u32,

    /// Interpret `ticks` as an absolute counter value
    pub absolute: bool,

    /// Invoked once when the alarm expires
    pub callback: Option<AlarmCallback<'a>>,
}

impl<'a> AlarmConfig<'a> {
    /// Alarm `ticks` after the value at configuration time.
    pub const fn relative(ticks: u32, callback: AlarmCallback<'a>) -> Self {
        Self {
            ticks,
            absolute: false,
            callback: Some(callback),
        }
    }

    /// Alarm when the counter reaches `ticks`.
    pub const fn absolute(ticks: u32, callback: AlarmCallback<'a>) -> Self {
        Self {
            ticks,
            absolute: true,
            callback: Some(callback),
        }
    }
}

impl core::fmt::Debug for AlarmConfig<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("AlarmConfig")
            .field("ticks", &self.ticks)
            .field("absolute", &self.absolute)
            .field("callback", &self.callback.map(|_| "<dyn Fn>"))
            .finish()
    }
}

/// An armed alarm: channel, resolved absolute target and callback.
#[derive(Clone, Copy)]
pub(crate) struct PendingAlarm<'a> {
    pub channel: u8,
    pub target: u32,
    pub callback: Option<AlarmCallback<'a>>,
}
