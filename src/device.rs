//! Interrupt-safe counter device.
//!
//! `Counter` owns an [`EventScheduler`] behind a
//! `critical_section::Mutex<RefCell<_>>`. Every operation, including the
//! interrupt entry point, runs entirely inside one critical section, so
//! application code and the counter interrupt never observe each other's
//! partial updates.
//!
//! ```ignore
//! static COUNTER: Counter<'static, Tim2, DefaultConfig> = Counter::new(Tim2::new());
//!
//! #[interrupt]
//! fn TIM2() {
//!     COUNTER.on_interrupt();
//! }
//! ```

use core::cell::RefCell;

use critical_section::Mutex;

use crate::config::{CounterConfig, CounterInfo};
use crate::error::CounterError;
use crate::event::{AlarmConfig, TopConfig};
use crate::hw::CounterHardware;
use crate::scheduler::EventScheduler;

/// Counter device with a periodic top event and one alarm channel.
///
/// Callbacks are invoked inside the critical section. Calling back into the
/// same `Counter` from a callback panics (the scheduler is already borrowed).
pub struct Counter<'a, H, C>
where
    H: CounterHardware,
    C: CounterConfig,
{
    inner: Mutex<RefCell<EventScheduler<'a, H, C>>>,
}

impl<H, C> core::fmt::Debug for Counter<'_, H, C>
where
    H: CounterHardware,
    C: CounterConfig,
{
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        critical_section::with(|cs| match self.inner.borrow(cs).try_borrow() {
            Ok(sched) => f.debug_struct("Counter").field("scheduler", &*sched).finish(),
            Err(_) => f.debug_struct("Counter").finish_non_exhaustive(),
        })
    }
}

impl<'a, H, C> Counter<'a, H, C>
where
    H: CounterHardware,
    C: CounterConfig,
{
    /// Wrap `hw`. Const, so a `Counter` can be placed in a `static`.
    ///
    /// Call `init()` before anything else.
    pub const fn new(hw: H) -> Self {
        Self {
            inner: Mutex::new(RefCell::new(EventScheduler::new(hw))),
        }
    }

    fn lock<R>(&self, f: impl FnOnce(&mut EventScheduler<'a, H, C>) -> R) -> R {
        critical_section::with(|cs| f(&mut *self.inner.borrow_ref_mut(cs)))
    }

    /// Program the tick period and arm the wraparound.
    pub fn init(&self) {
        self.lock(|sched| sched.init());
    }

    /// Start counting.
    pub fn start(&self) {
        self.lock(|sched| sched.start());
    }

    /// Stop counting.
    pub fn stop(&self) {
        self.lock(|sched| sched.stop());
    }

    /// Current counter value.
    pub fn read_value(&self) -> u32 {
        self.lock(|sched| sched.read_value())
    }

    /// Configure the recurring top event. See [`EventScheduler::set_top`].
    pub fn set_top(&self, cfg: TopConfig<'a>) -> Result<(), CounterError> {
        self.lock(|sched| sched.set_top(cfg))
    }

    /// Last configured top period.
    pub fn get_top(&self) -> u32 {
        self.lock(|sched| sched.get_top())
    }

    /// Arm the alarm on `channel`. See [`EventScheduler::set_alarm`].
    pub fn set_alarm(&self, channel: u8, cfg: AlarmConfig<'a>) -> Result<(), CounterError> {
        self.lock(|sched| sched.set_alarm(channel, cfg))
    }

    /// Disarm the alarm on `channel`. See [`EventScheduler::cancel_alarm`].
    pub fn cancel_alarm(&self, channel: u8) -> Result<(), CounterError> {
        self.lock(|sched| sched.cancel_alarm(channel))
    }

    /// Always 0; interrupts are never queued.
    pub fn pending_interrupt_count(&self) -> u32 {
        self.lock(|sched| sched.pending_interrupt_count())
    }

    /// Static description of this counter.
    pub fn info(&self) -> CounterInfo {
        CounterInfo::of::<C>()
    }

    /// Interrupt entry point. Call from the counter's interrupt handler.
    pub fn on_interrupt(&self) {
        self.lock(|sched| sched.on_interrupt());
    }

    /// Run `f` with exclusive access to the hardware counter.
    pub fn with_hardware<R>(&self, f: impl FnOnce(&mut H) -> R) -> R {
        self.lock(|sched| f(sched.hardware_mut()))
    }

    /// Run `f` with exclusive access to the scheduler.
    pub fn with_scheduler<R>(&self, f: impl FnOnce(&mut EventScheduler<'a, H, C>) -> R) -> R {
        self.lock(f)
    }
}
