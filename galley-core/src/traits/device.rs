//! Device base trait
//!
//! Every appliance owns a [`PowerSwitch`] (its name and power flag) and
//! exposes it through [`Device`]. The power behaviour itself is provided
//! by default methods so variants only override what they change.

use core::fmt;
use core::str::FromStr;

use crate::error::{ModelError, ParseError};
use crate::label::{self, Name};
use crate::narration::{Narration, Narrator};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Concrete device kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum DeviceKind {
    CoffeeMachine,
    Blender,
    MeatGrinder,
}

impl DeviceKind {
    /// Type name used in narration and renderings
    pub fn as_str(&self) -> &'static str {
        match self {
            DeviceKind::CoffeeMachine => "CoffeeMachine",
            DeviceKind::Blender => "Blender",
            DeviceKind::MeatGrinder => "MeatGrinder",
        }
    }
}

impl fmt::Display for DeviceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DeviceKind {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "coffee_machine" | "CoffeeMachine" => Ok(DeviceKind::CoffeeMachine),
            "blender" | "Blender" => Ok(DeviceKind::Blender),
            "meat_grinder" | "MeatGrinder" => Ok(DeviceKind::MeatGrinder),
            _ => Err(ParseError::UnknownDevice),
        }
    }
}

/// Name and power state shared by all devices
///
/// Power starts off and only [`Device::turn_on`] / [`Device::turn_off`]
/// change it.
#[derive(Debug, Clone, PartialEq)]
pub struct PowerSwitch {
    name: Name,
    on: bool,
}

impl PowerSwitch {
    /// Create a switched-off device base
    pub fn new(name: &str) -> Result<Self, ModelError> {
        Ok(Self {
            name: label::name(name)?,
            on: false,
        })
    }

    /// Device name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Check if power is on
    pub fn is_on(&self) -> bool {
        self.on
    }

    fn set(&mut self, on: bool) {
        self.on = on;
    }

    /// Write the shared part of a device rendering (without closing paren)
    pub fn write_summary(&self, kind: DeviceKind, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}(Name: {}, Power: {}", kind, self.name, self.on)
    }
}

/// Base trait for all devices
pub trait Device {
    /// Concrete kind of this device
    fn kind(&self) -> DeviceKind;

    /// Shared name and power state
    fn switch(&self) -> &PowerSwitch;

    /// Mutable access to the shared state
    fn switch_mut(&mut self) -> &mut PowerSwitch;

    /// Device name
    fn name(&self) -> &str {
        self.switch().name()
    }

    /// Check if the device is powered
    fn is_on(&self) -> bool {
        self.switch().is_on()
    }

    /// Power the device up without any variant-specific setup
    ///
    /// Variants that override [`Device::turn_on`] call this to reach the
    /// base behaviour.
    fn power_up(&mut self, narrator: &mut dyn Narrator) {
        narrator.narrate(Narration::PoweredOn {
            kind: self.kind(),
            name: self.switch().name.clone(),
        });
        self.switch_mut().set(true);
    }

    /// Turn the device on
    fn turn_on(&mut self, narrator: &mut dyn Narrator) {
        self.power_up(narrator);
    }

    /// Turn the device off
    ///
    /// Idempotent: turning off an already-off device is not an error.
    fn turn_off(&mut self, narrator: &mut dyn Narrator) {
        narrator.narrate(Narration::PoweredOff {
            kind: self.kind(),
            name: self.switch().name.clone(),
        });
        self.switch_mut().set(false);
    }
}
