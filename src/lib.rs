//! # counter-mux
//!
//! Splits one free-running 32-bit hardware counter into two logical timers
//! sharing a single compare register and interrupt line.
//!
//! **Key features:**
//! - **Top event** - Recurring period callback, tracked across wraparounds
//! - **Alarm** - One-shot callback on a single channel, absolute or relative
//! - **Wraparound handling** - All ordering decisions use modular distance
//! - **Interrupt safe** - `Counter` serializes configuration and the ISR with `critical-section`
//! - **Flexible hardware** - Platform-agnostic counter trait
//!
//! ## Optional Features
//!
//! - `defmt` - Log configuration rejections and interrupt decisions through `defmt`
//!
//! This library is `no_std` compatible and never allocates.

#![no_std]
#![warn(missing_docs)]
#![warn(missing_debug_implementations)]

// ============================================================================
// Module Declarations
// ============================================================================

#[macro_use]
mod log;

pub mod ticks;

pub mod config;
pub mod hw;

pub mod error;

pub mod event;

pub mod scheduler;

pub mod device;

// ============================================================================
// Re-exports - Public API
// ============================================================================

// Hardware abstraction
pub use hw::CounterHardware;

// Configuration
pub use config::{ALARM_CHANNELS, CounterConfig, CounterInfo, DefaultConfig, LowPowerConfig};

// Error types
pub use error::CounterError;

// Event types
pub use event::{AlarmCallback, AlarmConfig, ResetPolicy, TopCallback, TopConfig};

// Scheduling
pub use device::Counter;
pub use scheduler::EventScheduler;

// Tick arithmetic
pub use ticks::{MODULUS, TOP_VALUE};

// ============================================================================
// Library Metadata
// ============================================================================

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
