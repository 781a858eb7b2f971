//! Compare-interrupt servicing.
//!
//! One interrupt can complete several events at once (top boundary, alarm,
//! wraparound). They are checked in that fixed order against a single read
//! of the counter, then the compare register is re-armed.

use super::EventScheduler;
use crate::config::CounterConfig;
use crate::hw::CounterHardware;
use crate::ticks::{self, TOP_VALUE};

impl<H, C> EventScheduler<'_, H, C>
where
    H: CounterHardware,
    C: CounterConfig,
{
    /// Service a compare interrupt.
    ///
    /// Call from the counter's interrupt handler with the scheduler locked.
    /// Callbacks run synchronously inside this call, so they must be short
    /// and must not reconfigure the counter.
    ///
    /// An interrupt that matches nothing (e.g. a cancelled alarm's stale
    /// target) only re-arms the compare register.
    pub fn on_interrupt(&mut self) {
        let now = self.hw.read();

        // Top first, so the new boundary is in place before the alarm check
        let top_fired = self.service_top(now);
        self.service_alarm(now);

        if now == TOP_VALUE {
            self.hw.reset();
            trace!("counter wrapped");

            // Events landing on the new base are due at the reset instant
            if !top_fired {
                self.service_top(0);
            }
            self.service_alarm(0);

            self.rearm(0);
        } else {
            self.rearm(now);
        }
    }

    /// Fire the top callback if `now` is the current period boundary.
    fn service_top(&mut self, now: u32) -> bool {
        if !self.top_active || now != ticks::offset(self.last_top, self.top.period_ticks) {
            return false;
        }

        if let Some(callback) = self.top.callback {
            callback(now);
        }

        self.last_top = now;
        self.next_top = ticks::offset(now, self.top.period_ticks);

        trace!("top fired at {}, next {}", now, self.next_top);

        true
    }

    /// Fire and clear the alarm if `now` is its target.
    fn service_alarm(&mut self, now: u32) {
        let Some(alarm) = self.alarm.filter(|a| a.target == now) else {
            return;
        };

        self.alarm = None;
        trace!("alarm fired at {}", now);

        if let Some(callback) = alarm.callback {
            callback(alarm.channel, now);
        }
    }
}
