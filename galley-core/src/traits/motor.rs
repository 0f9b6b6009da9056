//! Speed-controlled device trait
//!
//! Blenders and meat grinders run a motor with a small number of discrete
//! speed settings. Any requested speed outside the supported range is
//! clamped, never rejected.

use super::device::Device;
use crate::narration::Narrator;

/// Lowest speed setting
pub const MIN_SPEED: u8 = 1;

/// Highest speed setting
pub const MAX_SPEED: u8 = 5;

/// Speed applied by a plain [`Device::turn_on`]
pub const DEFAULT_SPEED: u8 = MIN_SPEED;

/// Clamp a requested speed to `[MIN_SPEED, MAX_SPEED]`
pub fn clamp_speed(speed: i32) -> u8 {
    speed.clamp(MIN_SPEED as i32, MAX_SPEED as i32) as u8
}

/// Trait for devices with a motor speed setting
pub trait SpeedControlled: Device {
    /// Set the motor speed, clamped to the supported range
    fn set_speed(&mut self, speed: i32);

    /// Get the current speed setting
    fn speed(&self) -> u8;

    /// Turn the device on at a given speed
    fn turn_on_at(&mut self, speed: i32, narrator: &mut dyn Narrator) {
        self.power_up(narrator);
        self.set_speed(speed);
    }
}
