//! Event scheduling over a single hardware counter.
//!
//! `EventScheduler` multiplexes one compare register between a recurring top
//! event, a one-shot alarm and the counter wraparound. Configuration
//! operations live here; the interrupt handler lives in [`isr`].
//!
//! The scheduler itself is not synchronized. Wrap it in
//! [`Counter`](crate::device::Counter) (or an equivalent interrupt-masking
//! discipline) when configuration calls and the interrupt can interleave.

use crate::config::{ALARM_CHANNELS, CounterConfig, CounterInfo};
use crate::error::CounterError;
use crate::event::{AlarmConfig, PendingAlarm, ResetPolicy, TopConfig};
use crate::hw::CounterHardware;
use crate::ticks::{self, TOP_VALUE};
use core::marker::PhantomData;

mod isr;

/// Top-and-alarm scheduler for one hardware counter.
///
/// Generic over:
/// - `'a`: Lifetime of the callbacks (typically `'static`)
/// - `H`: CounterHardware implementation
/// - `C`: CounterConfig implementation
pub struct EventScheduler<'a, H, C>
where
    H: CounterHardware,
    C: CounterConfig,
{
    /// Hardware counter
    hw: H,

    /// Last configured top event (reported by `get_top()` even when inactive)
    top: TopConfig<'a>,

    /// Top events are being tracked
    top_active: bool,

    /// Counter value at which the current period began
    last_top: u32,

    /// Absolute tick of the next top event
    next_top: u32,

    /// Pending alarm, if any (single channel)
    alarm: Option<PendingAlarm<'a>>,

    /// Config type marker (zero-size)
    _config: PhantomData<C>,
}

impl<H, C> core::fmt::Debug for EventScheduler<'_, H, C>
where
    H: CounterHardware,
    C: CounterConfig,
{
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("EventScheduler")
            .field("top", &self.top)
            .field("top_active", &self.top_active)
            .field("last_top", &self.last_top)
            .field("next_top", &self.next_top)
            .field("alarm_target", &self.alarm.map(|a| a.target))
            .finish_non_exhaustive()
    }
}

impl<'a, H, C> EventScheduler<'a, H, C>
where
    H: CounterHardware,
    C: CounterConfig,
{
    /// Create a scheduler with nothing tracked.
    ///
    /// Does not touch the hardware. Call `init()` before use.
    pub const fn new(hw: H) -> Self {
        Self {
            hw,
            top: TopConfig::disabled(),
            top_active: false,
            last_top: 0,
            next_top: 0,
            alarm: None,
            _config: PhantomData,
        }
    }

    /// Program the tick period, clear all state and arm the wraparound.
    pub fn init(&mut self) {
        self.top = TopConfig::disabled();
        self.top_active = false;
        self.last_top = 0;
        self.next_top = 0;
        self.alarm = None;

        self.hw.configure_period(C::tick_period_us());
        self.hw.arm_target(TOP_VALUE);

        debug!(
            "counter init: {} Hz, tick {} us",
            C::FREQUENCY_HZ,
            C::tick_period_us()
        );
    }

    /// Start counting.
    pub fn start(&mut self) {
        self.hw.start();
    }

    /// Stop counting.
    pub fn stop(&mut self) {
        self.hw.stop();
    }

    /// Current counter value.
    pub fn read_value(&self) -> u32 {
        self.hw.read()
    }

    /// Interrupts waiting to be serviced. Always 0: every interrupt is
    /// processed to completion by `on_interrupt()`.
    pub fn pending_interrupt_count(&self) -> u32 {
        0
    }

    /// Static description of this counter.
    pub fn info(&self) -> CounterInfo {
        CounterInfo::of::<C>()
    }

    /// Last configured top period (`TOP_VALUE` before any `set_top`).
    pub fn get_top(&self) -> u32 {
        self.top.period_ticks
    }

    /// Whether top events are currently tracked.
    pub fn is_top_active(&self) -> bool {
        self.top_active
    }

    /// Whether the alarm channel is armed.
    pub fn is_alarm_pending(&self) -> bool {
        self.alarm.is_some()
    }

    /// Shared access to the hardware counter.
    pub fn hardware(&self) -> &H {
        &self.hw
    }

    /// Exclusive access to the hardware counter.
    ///
    /// Writing the compare target or the value behind the scheduler's back
    /// breaks the nearest-target invariant until the next configuration call
    /// or interrupt.
    pub fn hardware_mut(&mut self) -> &mut H {
        &mut self.hw
    }

    /// Configure the recurring top event.
    ///
    /// # Errors
    ///
    /// - `Busy` if an alarm is pending (its bound depends on the period)
    /// - `InvalidTiming` if `period_ticks` is 0 or above `C::MAX_TOP_VALUE`
    /// - `TimingViolation` if the policy preserves the counter and it is
    ///   already at or past `period_ticks`
    ///
    /// On error the scheduler state is unchanged, except that
    /// `PreserveAndResetIfLate` resets the hardware counter.
    pub fn set_top(&mut self, cfg: TopConfig<'a>) -> Result<(), CounterError> {
        if self.alarm.is_some() {
            warn!("can't set top value while alarm is active");
            return Err(CounterError::Busy);
        }

        if cfg.period_ticks == 0 {
            warn!("top period of 0 ticks rejected");
            return Err(CounterError::InvalidTiming);
        }

        if cfg.period_ticks > C::MAX_TOP_VALUE {
            warn!(
                "top value {} exceeds maximum {}",
                cfg.period_ticks,
                C::MAX_TOP_VALUE
            );
            return Err(CounterError::InvalidTiming);
        }

        let mut now = self.hw.read();

        match cfg.reset_policy {
            ResetPolicy::ResetAlways => {
                self.hw.reset();
                now = 0;
            }
            ResetPolicy::PreserveIfNotLate | ResetPolicy::PreserveAndResetIfLate => {
                if now >= cfg.period_ticks {
                    if cfg.reset_policy == ResetPolicy::PreserveAndResetIfLate {
                        self.hw.reset();
                    }
                    warn!(
                        "top value {} already elapsed at {}",
                        cfg.period_ticks, now
                    );
                    return Err(CounterError::TimingViolation);
                }
            }
        }

        self.top = cfg;
        self.last_top = now;
        self.top_active = cfg.is_tracked();

        if self.top_active {
            self.next_top = ticks::offset(now, cfg.period_ticks);
            self.hw.enable_interrupt();
        }

        self.rearm(now);

        debug!(
            "top set: period {} from {} (active: {})",
            cfg.period_ticks, now, self.top_active
        );

        Ok(())
    }

    /// Arm the one-shot alarm on `channel`.
    ///
    /// Relative requests are resolved against the counter value read here.
    ///
    /// # Errors
    ///
    /// - `UnsupportedChannel` if `channel >= ALARM_CHANNELS`
    /// - `Busy` if an alarm is already pending
    /// - `InvalidTiming` if a top event is tracked and the target lies beyond
    ///   the top boundary
    ///
    /// On error the scheduler state is unchanged.
    pub fn set_alarm(&mut self, channel: u8, cfg: AlarmConfig<'a>) -> Result<(), CounterError> {
        self.check_channel(channel)?;

        if self.alarm.is_some() {
            warn!("alarm already pending");
            return Err(CounterError::Busy);
        }

        let now = self.hw.read();
        let target = if cfg.absolute {
            cfg.ticks
        } else {
            ticks::offset(now, cfg.ticks)
        };

        if self.top_active && ticks::dist(now, target) > ticks::dist(now, self.top.period_ticks) {
            warn!(
                "alarm ticks {} exceed top ticks {}",
                target, self.top.period_ticks
            );
            return Err(CounterError::InvalidTiming);
        }

        self.alarm = Some(PendingAlarm {
            channel,
            target,
            callback: cfg.callback,
        });

        self.rearm(now);
        self.hw.enable_interrupt();

        debug!("alarm set: target {} at {}", target, now);

        Ok(())
    }

    /// Disarm the alarm on `channel`.
    ///
    /// The compare target is left as is; an interrupt at the stale target is
    /// serviced as a no-op.
    ///
    /// # Errors
    ///
    /// - `UnsupportedChannel` if `channel >= ALARM_CHANNELS`
    /// - `NotRunning` if the hardware counter is stopped
    pub fn cancel_alarm(&mut self, channel: u8) -> Result<(), CounterError> {
        self.check_channel(channel)?;

        if !self.hw.is_started() {
            warn!("counter not started");
            return Err(CounterError::NotRunning);
        }

        self.alarm = None;
        Ok(())
    }

    fn check_channel(&self, channel: u8) -> Result<(), CounterError> {
        if channel >= ALARM_CHANNELS {
            warn!("channel {} is not supported", channel);
            return Err(CounterError::UnsupportedChannel);
        }
        Ok(())
    }

    /// Arm the compare register for the nearest upcoming event seen from `now`.
    fn rearm(&mut self, now: u32) {
        let top = self.top_active.then_some(self.next_top);
        let alarm = self.alarm.map(|a| a.target);
        let target = ticks::nearest(now, top.into_iter().chain(alarm));
        self.hw.arm_target(target);
    }
}
