//! Batch processing loop
//!
//! Blenders and meat grinders share one loop: each tick waits
//! [`TICK_MS`], removes `KG_PER_TICK_PER_SPEED * speed` from the batch and
//! reports what is left, until nothing is. A single batch is capped at
//! [`MAX_BATCH_KG`], which keeps every run to a bounded number of ticks.

use embedded_hal::delay::DelayNs;
use galley_core::narration::{Job, Narration, Narrator};

/// Length of one processing tick
pub const TICK_MS: u32 = 1000;

/// Kilograms processed per tick at speed 1
pub const KG_PER_TICK_PER_SPEED: f64 = 0.1;

/// Largest batch accepted in one run
pub const MAX_BATCH_KG: f64 = 1_000.0;

/// Result of a batch request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum BatchOutcome {
    /// Batch fully processed after this many ticks
    Done { ticks: u32 },
    /// Refused: device is off
    PoweredOff,
    /// Refused: quantity was not positive
    NothingToProcess,
    /// Refused: quantity exceeds [`MAX_BATCH_KG`]
    Overloaded,
}

impl BatchOutcome {
    /// Check if the batch ran
    pub fn is_done(&self) -> bool {
        matches!(self, BatchOutcome::Done { .. })
    }
}

/// Run one batch
///
/// NaN is treated like an empty batch. Anything above [`MAX_BATCH_KG`],
/// infinity included, is refused as overloaded.
pub(crate) fn run<D: DelayNs + ?Sized>(
    job: Job,
    powered: bool,
    speed: u8,
    quantity: f64,
    delay: &mut D,
    narrator: &mut dyn Narrator,
) -> BatchOutcome {
    if !powered {
        narrator.narrate(Narration::NotPowered);
        return BatchOutcome::PoweredOff;
    }

    if !(quantity > 0.0) {
        narrator.narrate(Narration::NothingToProcess(job));
        return BatchOutcome::NothingToProcess;
    }

    if quantity > MAX_BATCH_KG {
        narrator.narrate(Narration::Overloaded { job, quantity });
        return BatchOutcome::Overloaded;
    }

    narrator.narrate(Narration::BatchStarted { job, quantity });

    let per_tick = KG_PER_TICK_PER_SPEED * speed as f64;
    let mut remaining = quantity;
    let mut ticks = 0;

    loop {
        narrator.narrate(Narration::Processing(job));
        delay.delay_ms(TICK_MS);
        ticks += 1;

        remaining -= per_tick;
        if remaining <= 0.0 {
            break;
        }
        narrator.narrate(Narration::Remaining {
            job,
            quantity: remaining,
        });
    }

    narrator.narrate(Narration::BatchDone(job));
    BatchOutcome::Done { ticks }
}

#[cfg(test)]
pub(crate) mod mock {
    use embedded_hal::delay::DelayNs;

    /// Delay that returns immediately and counts what it was asked for
    #[derive(Debug, Default)]
    pub struct CountingDelay {
        pub calls: u32,
        pub total_ms: u64,
    }

    impl DelayNs for CountingDelay {
        fn delay_ns(&mut self, ns: u32) {
            self.calls += 1;
            self.total_ms += ns as u64 / 1_000_000;
        }

        fn delay_ms(&mut self, ms: u32) {
            self.calls += 1;
            self.total_ms += ms as u64;
        }
    }
}
