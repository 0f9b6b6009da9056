//! Meat grinder
//!
//! Same motor behaviour as the blender; minces meat instead of blending
//! products, and reports the remaining quantity to two decimals.

use core::fmt;

use embedded_hal::delay::DelayNs;
use galley_core::narration::{Job, Narrator};
use galley_core::traits::{
    clamp_speed, Device, DeviceKind, PowerSwitch, SpeedControlled, DEFAULT_SPEED,
};
use galley_core::ModelError;

use crate::batch::{self, BatchOutcome};

/// Meat grinder
#[derive(Debug, Clone, PartialEq)]
pub struct MeatGrinder {
    switch: PowerSwitch,
    speed: u8,
}

impl MeatGrinder {
    /// Create a switched-off grinder at the default speed
    pub fn new(name: &str) -> Result<Self, ModelError> {
        Ok(Self {
            switch: PowerSwitch::new(name)?,
            speed: DEFAULT_SPEED,
        })
    }

    /// Mince `kg` of meat, waiting on `delay` between ticks
    pub fn mince<D: DelayNs + ?Sized>(
        &mut self,
        kg: f64,
        delay: &mut D,
        narrator: &mut dyn Narrator,
    ) -> BatchOutcome {
        batch::run(Job::Mince, self.is_on(), self.speed, kg, delay, narrator)
    }
}

impl Device for MeatGrinder {
    fn kind(&self) -> DeviceKind {
        DeviceKind::MeatGrinder
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

impl SpeedControlled for MeatGrinder {
    fn set_speed(&mut self, speed: i32) {
        self.speed = clamp_speed(speed);
    }

    fn speed(&self) -> u8 {
        self.speed
    }
}

impl fmt::Display for MeatGrinder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.switch.write_summary(self.kind(), f)?;
        write!(f, ", Speed: {})", self.speed)
    }
}
