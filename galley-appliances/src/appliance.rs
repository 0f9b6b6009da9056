//! Any appliance
//!
//! Lets a kitchen hold a mix of device kinds and build them from
//! [`DeviceConfig`] entries.

use core::fmt;

use galley_core::config::DeviceConfig;
use galley_core::narration::Narrator;
use galley_core::traits::{Device, DeviceKind, PowerSwitch, SpeedControlled, DEFAULT_SPEED};
use galley_core::ModelError;

use crate::blender::Blender;
use crate::coffee::CoffeeMachine;
use crate::grinder::MeatGrinder;

/// One of the supported devices
#[derive(Debug, Clone, PartialEq)]
pub enum Appliance {
    CoffeeMachine(CoffeeMachine),
    Blender(Blender),
    MeatGrinder(MeatGrinder),
}

impl Appliance {
    /// Build a device from its configuration
    ///
    /// Devices configured as powered are switched on through `narrator`,
    /// at the configured speed where one applies.
    pub fn from_config(
        config: &DeviceConfig,
        narrator: &mut dyn Narrator,
    ) -> Result<Self, ModelError> {
        let mut appliance = match config.kind {
            DeviceKind::CoffeeMachine => {
                let mut cm = CoffeeMachine::new(&config.name)?;
                cm.refill(config.water.unwrap_or(0.0), config.coffee.unwrap_or(0.0));
                Appliance::CoffeeMachine(cm)
            }
            DeviceKind::Blender => Appliance::Blender(Blender::new(&config.name)?),
            DeviceKind::MeatGrinder => Appliance::MeatGrinder(MeatGrinder::new(&config.name)?),
        };

        let speed = config.speed.unwrap_or(DEFAULT_SPEED as i32);
        if let Some(motor) = appliance.as_speed_controlled_mut() {
            if config.powered {
                motor.turn_on_at(speed, narrator);
            } else {
                motor.set_speed(speed);
            }
        } else if config.powered {
            appliance.turn_on(narrator);
        }

        Ok(appliance)
    }

    /// Shared device view
    pub fn as_device(&self) -> &dyn Device {
        match self {
            Appliance::CoffeeMachine(d) => d,
            Appliance::Blender(d) => d,
            Appliance::MeatGrinder(d) => d,
        }
    }

    /// Mutable shared device view
    pub fn as_device_mut(&mut self) -> &mut dyn Device {
        match self {
            Appliance::CoffeeMachine(d) => d,
            Appliance::Blender(d) => d,
            Appliance::MeatGrinder(d) => d,
        }
    }

    /// Speed control, if this device has a motor
    pub fn as_speed_controlled_mut(&mut self) -> Option<&mut dyn SpeedControlled> {
        match self {
            Appliance::CoffeeMachine(_) => None,
            Appliance::Blender(d) => Some(d),
            Appliance::MeatGrinder(d) => Some(d),
        }
    }
}

impl Device for Appliance {
    fn kind(&self) -> DeviceKind {
        self.as_device().kind()
    }

    fn switch(&self) -> &PowerSwitch {
        self.as_device().switch()
    }

    fn switch_mut(&mut self) -> &mut PowerSwitch {
        self.as_device_mut().switch_mut()
    }

    fn turn_on(&mut self, narrator: &mut dyn Narrator) {
        self.as_device_mut().turn_on(narrator);
    }

    fn turn_off(&mut self, narrator: &mut dyn Narrator) {
        self.as_device_mut().turn_off(narrator);
    }
}

impl fmt::Display for Appliance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Appliance::CoffeeMachine(d) => fmt::Display::fmt(d, f),
            Appliance::Blender(d) => fmt::Display::fmt(d, f),
            Appliance::MeatGrinder(d) => fmt::Display::fmt(d, f),
        }
    }
}
