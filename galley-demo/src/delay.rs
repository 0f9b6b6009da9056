//! Host delay sources for processing ticks

use std::thread;
use std::time::Duration;

use embedded_hal::delay::DelayNs;

/// Sleeps the current thread
#[derive(Debug, Clone, Copy, Default)]
pub struct StdDelay;

impl DelayNs for StdDelay {
    fn delay_ns(&mut self, ns: u32) {
        thread::sleep(Duration::from_nanos(ns.into()));
    }

    fn delay_ms(&mut self, ms: u32) {
        thread::sleep(Duration::from_millis(ms.into()));
    }
}

/// Returns immediately, counting the time it skipped
#[derive(Debug, Clone, Copy, Default)]
pub struct InstantDelay {
    skipped_ns: u64,
}

impl InstantDelay {
    pub fn new() -> Self {
        Self::default()
    }

    /// Total time that would have been waited
    pub fn skipped(&self) -> Duration {
        Duration::from_nanos(self.skipped_ns)
    }
}

impl DelayNs for InstantDelay {
    fn delay_ns(&mut self, ns: u32) {
        self.skipped_ns += u64::from(ns);
    }

    fn delay_ms(&mut self, ms: u32) {
        self.skipped_ns += u64::from(ms) * 1_000_000;
    }
}
