//! Test fixtures and utilities for counter-mux testing.
//!
//! Provides:
//! - `MockCounter`: Test implementation of the CounterHardware trait
//! - `Recorder`: Interrupt-safe sink for callback invocations

#![allow(dead_code)]

use core::cell::RefCell;
use counter_mux::CounterHardware;
use critical_section::Mutex;
use heapless::Vec;

// ============================================================================
// MockCounter - Test Hardware Implementation
// ============================================================================

/// Mock hardware counter.
///
/// The value only changes when a test moves it (see `helpers::advance`).
/// Every hardware call is counted so tests can assert side effects.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MockCounter {
    /// Current counter value
    pub value: u32,

    /// Armed compare target
    pub target: u32,

    /// Counting enabled
    pub started: bool,

    /// Number of `reset()` calls
    pub resets: u32,

    /// Number of `arm_target()` calls
    pub arms: u32,

    /// Number of `enable_interrupt()` calls
    pub irq_enables: u32,

    /// Tick period handed over by `init()`
    pub tick_us: u32,
}

impl MockCounter {
    /// Stopped counter at 0 with the compare target at 0.
    pub const fn new() -> Self {
        Self {
            value: 0,
            target: 0,
            started: false,
            resets: 0,
            arms: 0,
            irq_enables: 0,
            tick_us: 0,
        }
    }
}

impl Default for MockCounter {
    fn default() -> Self {
        Self::new()
    }
}

impl CounterHardware for MockCounter {
    fn read(&self) -> u32 {
        self.value
    }

    fn arm_target(&mut self, target: u32) {
        self.target = target;
        self.arms += 1;
    }

    fn reset(&mut self) {
        self.value = 0;
        self.resets += 1;
    }

    fn start(&mut self) {
        self.started = true;
    }

    fn stop(&mut self) {
        self.started = false;
    }

    fn is_started(&self) -> bool {
        self.started
    }

    fn configure_period(&mut self, tick_us: u32) {
        self.tick_us = tick_us;
    }

    fn enable_interrupt(&mut self) {
        self.irq_enables += 1;
    }
}

// ============================================================================
// Recorder - Callback Sink
// ============================================================================

/// Maximum number of recorded values kept by a `Recorder`.
pub const RECORD_CAPACITY: usize = 64;

#[derive(Debug)]
struct Hits {
    count: u32,
    values: Vec<u32, RECORD_CAPACITY>,
}

/// Records callback invocations from interrupt context.
///
/// `Sync`, so closures borrowing it satisfy the callback bounds. Keeps the
/// total count plus the first `RECORD_CAPACITY` values.
pub struct Recorder {
    hits: Mutex<RefCell<Hits>>,
}

impl Recorder {
    /// Empty recorder.
    pub const fn new() -> Self {
        Self {
            hits: Mutex::new(RefCell::new(Hits {
                count: 0,
                values: Vec::new(),
            })),
        }
    }

    /// Record one invocation.
    pub fn record(&self, value: u32) {
        critical_section::with(|cs| {
            let mut hits = self.hits.borrow_ref_mut(cs);
            hits.count += 1;
            let _ = hits.values.push(value);
        });
    }

    /// Total number of invocations.
    pub fn count(&self) -> u32 {
        critical_section::with(|cs| self.hits.borrow_ref(cs).count)
    }

    /// Recorded values, oldest first.
    pub fn values(&self) -> Vec<u32, RECORD_CAPACITY> {
        critical_section::with(|cs| self.hits.borrow_ref(cs).values.clone())
    }

    /// Last kept value.
    pub fn last(&self) -> Option<u32> {
        critical_section::with(|cs| self.hits.borrow_ref(cs).values.last().copied())
    }
}

impl core::fmt::Debug for Recorder {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Recorder")
            .field("count", &self.count())
            .field("values", &self.values())
            .finish()
    }
}

impl Default for Recorder {
    fn default() -> Self {
        Self::new()
    }
}
