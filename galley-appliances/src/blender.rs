//! Blender
//!
//! A speed-controlled device that blends a batch of products. Turning it
//! on without a speed resets it to [`DEFAULT_SPEED`].

use core::fmt;

use embedded_hal::delay::DelayNs;
use galley_core::narration::{Job, Narrator};
use galley_core::traits::{
    clamp_speed, Device, DeviceKind, PowerSwitch, SpeedControlled, DEFAULT_SPEED,
};
use galley_core::ModelError;

use crate::batch::{self, BatchOutcome};

/// Blender
#[derive(Debug, Clone, PartialEq)]
pub struct Blender {
    switch: PowerSwitch,
    /// Speed setting (1-5)
    speed: u8,
}

impl Blender {
    /// Create a switched-off blender at the default speed
    pub fn new(name: &str) -> Result<Self, ModelError> {
        Ok(Self {
            switch: PowerSwitch::new(name)?,
            speed: DEFAULT_SPEED,
        })
    }

    /// Blend `kg` of products, waiting on `delay` between ticks
    pub fn blend<D: DelayNs + ?Sized>(
        &mut self,
        kg: f64,
        delay: &mut D,
        narrator: &mut dyn Narrator,
    ) -> BatchOutcome {
        batch::run(Job::Blend, self.is_on(), self.speed, kg, delay, narrator)
    }
}

impl Device for Blender {
    fn kind(&self) -> DeviceKind {
        DeviceKind::Blender
    }

    fn switch(&self) -> &PowerSwitch {
        &self.switch
    }

    fn switch_mut(&mut self) -> &mut PowerSwitch {
        &mut self.switch
    }

    fn turn_on(&mut self, narrator: &mut dyn Narrator) {
        self.turn_on_at(DEFAULT_SPEED as i32, narrator);
    }
}

impl SpeedControlled for Blender {
    fn set_speed(&mut self, speed: i32) {
        self.speed = clamp_speed(speed);
    }

    fn speed(&self) -> u8 {
        self.speed
    }
}

impl fmt::Display for Blender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.switch.write_summary(self.kind(), f)?;
        write!(f, ", Speed: {})", self.speed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::batch::mock::CountingDelay;
    use galley_core::narration::{Narration, NullNarrator, RecordingNarrator};
    use std::format;

    fn blender() -> Blender {
        Blender::new("Bosch").unwrap()
    }

    #[test]
    fn test_initial_state() {
        let b = blender();
        assert!(!b.is_on());
        assert_eq!(b.speed(), 1);
    }

    #[test]
    fn test_turn_on_at_speed() {
        let mut b = blender();
        let mut log = RecordingNarrator::<4>::new();

        b.turn_on_at(4, &mut log);
        assert!(b.is_on());
        assert_eq!(b.speed(), 4);
        assert_eq!(log.len(), 1);

        b.turn_on_at(9, &mut log);
        assert_eq!(b.speed(), 5);
    }

    #[test]
    fn test_plain_turn_on_resets_speed() {
        let mut b = blender();
        b.set_speed(3);
        b.turn_on(&mut NullNarrator);
        assert_eq!(b.speed(), 1);
    }

    #[test]
    fn test_blend_off() {
        let mut b = blender();
        let mut delay = CountingDelay::default();
        let mut log = RecordingNarrator::<4>::new();

        assert_eq!(b.blend(1.0, &mut delay, &mut log), BatchOutcome::PoweredOff);
        assert_eq!(delay.calls, 0);
        assert_eq!(log.events(), &[Narration::NotPowered]);
    }

    #[test]
    fn test_blend_nothing() {
        let mut b = blender();
        b.turn_on(&mut NullNarrator);

        for kg in [0.0, -5.0] {
            let mut delay = CountingDelay::default();
            let mut log = RecordingNarrator::<4>::new();
            assert_eq!(
                b.blend(kg, &mut delay, &mut log),
                BatchOutcome::NothingToProcess
            );
            assert_eq!(delay.calls, 0);
            assert_eq!(log.events(), &[Narration::NothingToProcess(Job::Blend)]);
        }
    }

    #[test]
    fn test_blend_batch() {
        let mut b = blender();
        b.turn_on_at(5, &mut NullNarrator);
        let mut delay = CountingDelay::default();

        let outcome = b.blend(1.0, &mut delay, &mut NullNarrator);
        assert_eq!(outcome, BatchOutcome::Done { ticks: 2 });
        assert_eq!(delay.calls, 2);
    }

    #[test]
    fn test_display() {
        let mut b = blender();
        b.turn_on_at(2, &mut NullNarrator);
        assert_eq!(format!("{}", b), "Blender(Name: Bosch, Power: true, Speed: 2)");
    }
}
