//! Configuration type definitions
//!
//! These types describe a kitchen of devices and a set of fleets. Field
//! values are taken as-is; clamping happens when the models are built.

use heapless::Vec;

use crate::label::Name;
use crate::traits::{DeviceKind, Engine, ShipClass};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Maximum devices per scenario
pub const MAX_DEVICES: usize = 8;

/// Maximum ships per fleet
pub const MAX_FLEET_SIZE: usize = 16;

/// Maximum fleets per scenario
pub const MAX_FLEETS: usize = 4;

/// Device configuration
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DeviceConfig {
    /// Device kind
    pub kind: DeviceKind,
    /// Device name
    pub name: Name,
    /// Start powered on
    #[cfg_attr(feature = "serde", serde(default))]
    pub powered: bool,
    /// Startup speed (speed-controlled devices only)
    #[cfg_attr(feature = "serde", serde(default))]
    pub speed: Option<i32>,
    /// Initial water level (coffee machines only)
    #[cfg_attr(feature = "serde", serde(default))]
    pub water: Option<f64>,
    /// Initial coffee level (coffee machines only)
    #[cfg_attr(feature = "serde", serde(default))]
    pub coffee: Option<f64>,
}

impl DeviceConfig {
    /// Minimal config for a switched-off device
    pub fn new(kind: DeviceKind, name: Name) -> Self {
        Self {
            kind,
            name,
            powered: false,
            speed: None,
            water: None,
            coffee: None,
        }
    }
}

/// Ship configuration
///
/// Armament fields that do not apply to `class` are ignored; the ones that
/// do apply default to zero charges.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ShipConfig {
    /// Ship class
    pub class: ShipClass,
    /// Ship name
    pub name: Name,
    /// Deadweight in tons
    pub deadweight: u32,
    /// Engine type
    pub engine: Engine,
    /// Artillery charges (all naval classes)
    #[cfg_attr(feature = "serde", serde(default))]
    pub artillery: u32,
    /// Torpedo charges (destroyers)
    #[cfg_attr(feature = "serde", serde(default))]
    pub torpedoes: u32,
    /// Depth charges (destroyers, frigates)
    #[cfg_attr(feature = "serde", serde(default))]
    pub depth_charges: u32,
    /// Anti-air charges (frigates, cruisers)
    #[cfg_attr(feature = "serde", serde(default))]
    pub anti_air: u32,
}

impl ShipConfig {
    /// Minimal config with no armament
    pub fn new(class: ShipClass, name: Name, deadweight: u32, engine: Engine) -> Self {
        Self {
            class,
            name,
            deadweight,
            engine,
            artillery: 0,
            torpedoes: 0,
            depth_charges: 0,
            anti_air: 0,
        }
    }
}

/// Fleet configuration
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct FleetConfig {
    /// Fleet number
    pub id: u32,
    /// Ships in display order
    #[cfg_attr(feature = "serde", serde(default))]
    pub ships: Vec<ShipConfig, MAX_FLEET_SIZE>,
}

/// Complete scenario: a kitchen and some fleets
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ScenarioConfig {
    /// Kitchen devices
    #[cfg_attr(feature = "serde", serde(default))]
    pub devices: Vec<DeviceConfig, MAX_DEVICES>,
    /// Fleets
    #[cfg_attr(feature = "serde", serde(default))]
    pub fleets: Vec<FleetConfig, MAX_FLEETS>,
}

impl ScenarioConfig {
    /// Create an empty scenario
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up a device config by name
    pub fn device(&self, name: &str) -> Option<&DeviceConfig> {
        self.devices.iter().find(|d| d.name.as_str() == name)
    }

    /// Look up a fleet config by number
    pub fn fleet(&self, id: u32) -> Option<&FleetConfig> {
        self.fleets.iter().find(|f| f.id == id)
    }
}
