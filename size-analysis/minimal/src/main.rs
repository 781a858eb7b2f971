#![no_std]
#![no_main]

use core::sync::atomic::{AtomicU32, Ordering};
use counter_mux::{AlarmConfig, Counter, CounterHardware, DefaultConfig, TopConfig};
use panic_halt as _;

// Minimal CounterHardware implementation - measures only driver code size
pub struct MinimalCounter {
    value: u32,
    started: bool,
}

impl MinimalCounter {
    const fn new() -> Self {
        Self {
            value: 0,
            started: false,
        }
    }
}

impl CounterHardware for MinimalCounter {
    fn read(&self) -> u32 {
        core::hint::black_box(self.value)
    }

    fn arm_target(&mut self, target: u32) {
        core::hint::black_box(target);
    }

    fn reset(&mut self) {
        self.value = 0;
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
        core::hint::black_box(tick_us);
    }

    fn enable_interrupt(&mut self) {}
}

static COUNTER: Counter<'static, MinimalCounter, DefaultConfig> = Counter::new(MinimalCounter::new());
static TICKS: AtomicU32 = AtomicU32::new(0);

fn on_top(_ticks: u32) {
    TICKS.fetch_add(1, Ordering::Relaxed);
}

fn on_alarm(_channel: u8, ticks: u32) {
    TICKS.store(ticks, Ordering::Relaxed);
}

// Entry point
#[cortex_m_rt::entry]
fn main() -> ! {
    COUNTER.init();
    COUNTER.start();

    // Use black_box to prevent optimizer from removing the code
    let _ = core::hint::black_box(COUNTER.set_top(TopConfig::new(1000, &on_top)));
    let _ = core::hint::black_box(COUNTER.set_alarm(0, AlarmConfig::relative(100, &on_alarm)));
    let _ = core::hint::black_box(COUNTER.cancel_alarm(0));

    // Service one interrupt to ensure the handler is included
    COUNTER.on_interrupt();

    loop {
        core::hint::black_box(COUNTER.read_value());
        cortex_m::asm::nop();
    }
}

// Required: exception handler
#[cortex_m_rt::exception]
unsafe fn HardFault(_ef: &cortex_m_rt::ExceptionFrame) -> ! {
    loop {
        cortex_m::asm::nop();
    }
}
