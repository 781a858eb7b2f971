//! Shared test helpers to reduce duplication across integration tests.

#![allow(dead_code)]

#[allow(clippy::duplicate_mod)]
#[path = "fixtures/mod.rs"]
mod fixtures;

pub use fixtures::{MockCounter, Recorder};

use counter_mux::ticks::{self, MODULUS};
use counter_mux::{Counter, DefaultConfig, EventScheduler};

/// Scheduler type used throughout the integration tests.
pub type TestScheduler<'a> = EventScheduler<'a, MockCounter, DefaultConfig>;

/// Counter device type used throughout the integration tests.
pub type TestCounter<'a> = Counter<'a, MockCounter, DefaultConfig>;

// ============================================================================
// Creation Helpers
// ============================================================================

/// Create an initialized, running scheduler at counter value 0.
pub fn create_scheduler<'a>() -> TestScheduler<'a> {
    let mut sched = EventScheduler::new(MockCounter::new());
    sched.init();
    sched.start();
    sched
}

/// Create an initialized, running counter device at value 0.
pub fn create_counter<'a>() -> TestCounter<'a> {
    let counter = Counter::new(MockCounter::new());
    counter.init();
    counter.start();
    counter
}

// ============================================================================
// Time Helpers
// ============================================================================

/// Move the mock forward by at most `remaining` ticks, stopping on the armed
/// target. Returns true if the target was reached (an interrupt is due).
fn step(hw: &mut MockCounter, remaining: &mut u64) -> bool {
    if *remaining == 0 || !hw.started {
        return false;
    }

    // The comparator only fires on a change to the target value
    let to_target = match ticks::dist(hw.value, hw.target) {
        0 => MODULUS,
        d => u64::from(d),
    };

    if *remaining < to_target {
        hw.value = ticks::offset(hw.value, *remaining as u32);
        *remaining = 0;
        return false;
    }

    *remaining -= to_target;
    hw.value = hw.target;
    true
}

/// Advance the counter by `ticks`, servicing every compare interrupt on the way.
///
/// Jumps straight from target to target, so multi-wrap runs stay fast.
pub fn advance(sched: &mut TestScheduler<'_>, ticks: u64) {
    let mut remaining = ticks;
    while step(sched.hardware_mut(), &mut remaining) {
        sched.on_interrupt();
    }
}

/// Same as `advance`, through the interrupt-safe device.
pub fn advance_counter(counter: &TestCounter<'_>, ticks: u64) {
    let mut remaining = ticks;
    while counter.with_hardware(|hw| step(hw, &mut remaining)) {
        counter.on_interrupt();
    }
}

/// Put the counter at `value` without servicing anything on the way.
///
/// The compare target is left untouched.
pub fn jump_to(sched: &mut TestScheduler<'_>, value: u32) {
    sched.hardware_mut().value = value;
}

// ============================================================================
// Assertion Helpers
// ============================================================================

/// Assert that consecutive recorded values are exactly `period` apart (mod 2^32).
pub fn assert_periodic(values: &[u32], period: u32) {
    for pair in values.windows(2) {
        assert_eq!(
            ticks::dist(pair[0], pair[1]),
            period,
            "Expected boundaries {} apart, got {} -> {} in {:?}",
            period,
            pair[0],
            pair[1],
            values
        );
    }
}
