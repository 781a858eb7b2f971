//! Configuration traits and implementations for counter instances.
//!
//! The `CounterConfig` trait describes a counter at compile time (tick rate,
//! channel count, limits) without runtime overhead.

use crate::ticks::TOP_VALUE;

/// Microseconds per second, used to derive the hardware tick period.
pub const USEC_PER_SEC: u32 = 1_000_000;

/// Number of alarm channels. The compare register is shared with the top
/// event, so only channel 0 exists.
pub const ALARM_CHANNELS: u8 = 1;

/// Counter configuration trait.
///
/// All values are const (zero runtime cost). Only `FREQUENCY_HZ` has to be
/// provided; the top limit defaults to the full 32-bit range.
pub trait CounterConfig {
    /// Counting frequency in Hz
    const FREQUENCY_HZ: u32;

    /// Largest top period `set_top` accepts (default: `TOP_VALUE`)
    const MAX_TOP_VALUE: u32 = TOP_VALUE;

    /// Duration of one tick in microseconds, handed to the hardware at init.
    fn tick_period_us() -> u32 {
        USEC_PER_SEC / Self::FREQUENCY_HZ
    }
}

/// Default configuration: 1 MHz counter, one tick per microsecond.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct DefaultConfig;

impl CounterConfig for DefaultConfig {
    const FREQUENCY_HZ: u32 = 1_000_000;
}

/// Low-power configuration for RTC-style counters clocked at 32.768 kHz.
///
/// The tick period truncates to 30 µs.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct LowPowerConfig;

impl CounterConfig for LowPowerConfig {
    const FREQUENCY_HZ: u32 = 32_768;
}

/// Runtime description of a counter instance.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct CounterInfo {
    /// Largest settable top value
    pub max_top_value: u32,
    /// Counting frequency in Hz
    pub frequency_hz: u32,
    /// Number of alarm channels
    pub channels: u8,
    /// Counter direction (always up for this driver)
    pub counts_up: bool,
}

impl CounterInfo {
    /// Build the info block for configuration `C`.
    pub const fn of<C: CounterConfig>() -> Self {
        Self {
            max_top_value: C::MAX_TOP_VALUE,
            frequency_hz: C::FREQUENCY_HZ,
            channels: ALARM_CHANNELS,
            counts_up: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        assert_eq!(DefaultConfig::FREQUENCY_HZ, 1_000_000);
        assert_eq!(DefaultConfig::MAX_TOP_VALUE, u32::MAX);
        assert_eq!(DefaultConfig::tick_period_us(), 1);
    }

    #[test]
    fn test_low_power_config() {
        assert_eq!(LowPowerConfig::FREQUENCY_HZ, 32_768);
        assert_eq!(LowPowerConfig::MAX_TOP_VALUE, u32::MAX);
        assert_eq!(LowPowerConfig::tick_period_us(), 30);
    }

    #[test]
    fn test_counter_info() {
        let info = CounterInfo::of::<DefaultConfig>();
        assert_eq!(info.max_top_value, u32::MAX);
        assert_eq!(info.frequency_hz, 1_000_000);
        assert_eq!(info.channels, ALARM_CHANNELS);
        assert!(info.counts_up);
    }

    #[test]
    fn test_counter_info_reports_max_top_value() {
        struct Narrow;
        impl CounterConfig for Narrow {
            const FREQUENCY_HZ: u32 = 1_000;
            const MAX_TOP_VALUE: u32 = 0xFFFF;
        }

        let info = CounterInfo::of::<Narrow>();
        assert_eq!(info.max_top_value, 0xFFFF);
        assert_eq!(info.channels, 1);
        assert_eq!(Narrow::tick_period_us(), 1_000);
    }
}
