//! Hardware counter abstraction.
//!
//! The `CounterHardware` trait is the only thing the scheduler needs from the
//! platform: a free-running 32-bit up-counter with one compare register and
//! one interrupt line. Implement it for a timer peripheral, a simulated
//! counter, or a test mock.

/// Platform-agnostic free-running counter with a single compare target.
///
/// Implementations must not block. `arm_target()` replaces any previously
/// armed value; the interrupt fires when the counter becomes equal to it.
pub trait CounterHardware {
    /// Current counter value.
    fn read(&self) -> u32;

    /// Schedule the next compare interrupt at `target`.
    fn arm_target(&mut self, target: u32);

    /// Set the counter value to 0.
    fn reset(&mut self);

    /// Start counting.
    fn start(&mut self);

    /// Stop counting. The value is kept.
    fn stop(&mut self);

    /// Whether the counter is currently counting.
    fn is_started(&self) -> bool;

    /// Set the duration of one tick. Called once, from `init()`.
    fn configure_period(&mut self, tick_us: u32);

    /// Unmask the counter interrupt line.
    fn enable_interrupt(&mut self);
}
