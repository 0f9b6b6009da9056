//! Narration sink backed by the `log` facade

use galley_core::narration::{Narration, Narrator};

/// Forwards narration to `log`
///
/// Refused operations are logged at warn level, everything else at info.
#[derive(Debug, Default)]
pub struct LogNarrator {
    events: usize,
    diagnostics: usize,
}

impl LogNarrator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Events seen so far
    pub fn events(&self) -> usize {
        self.events
    }

    /// Diagnostics seen so far
    pub fn diagnostics(&self) -> usize {
        self.diagnostics
    }
}

impl Narrator for LogNarrator {
    fn narrate(&mut self, event: Narration) {
        self.events += 1;
        if event.is_diagnostic() {
            self.diagnostics += 1;
            log::warn!("{}", event);
        } else {
            log::info!("{}", event);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use galley_core::narration::Job;

    #[test]
    fn test_counts() {
        let mut narrator = LogNarrator::new();
        narrator.narrate(Narration::Processing(Job::Blend));
        narrator.narrate(Narration::NotPowered);

        assert_eq!(narrator.events(), 2);
        assert_eq!(narrator.diagnostics(), 1);
    }
}
