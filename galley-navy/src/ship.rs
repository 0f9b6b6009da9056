//! Unarmed ships and the any-ship enum

use core::fmt;

use galley_core::config::ShipConfig;
use galley_core::traits::{Engine, Hull, ShipClass, Vessel};
use galley_core::ModelError;

use crate::armament::NavalShip;
use crate::cruiser::Cruiser;
use crate::destroyer::Destroyer;
use crate::frigate::Frigate;

/// Unarmed vessel, e.g. a cargo sailer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ship {
    hull: Hull,
}

impl Ship {
    pub fn new(name: &str, deadweight: u32, engine: Engine) -> Result<Self, ModelError> {
        Ok(Self {
            hull: Hull::new(name, deadweight, engine)?,
        })
    }
}

impl Vessel for Ship {
    fn hull(&self) -> &Hull {
        &self.hull
    }

    fn class(&self) -> ShipClass {
        ShipClass::Ship
    }
}

impl fmt::Display for Ship {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Ship({})", self.hull.name())
    }
}

/// Any ship that can sail in a fleet
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnyShip {
    Ship(Ship),
    Destroyer(Destroyer),
    Frigate(Frigate),
    Cruiser(Cruiser),
}

impl AnyShip {
    /// Build a ship from its configuration
    ///
    /// Only the armament fields that apply to the class are used.
    pub fn from_config(config: &ShipConfig) -> Result<Self, ModelError> {
        let name = config.name.as_str();
        let ship = match config.class {
            ShipClass::Ship => AnyShip::Ship(Ship::new(name, config.deadweight, config.engine)?),
            ShipClass::Destroyer => AnyShip::Destroyer(Destroyer::new(
                name,
                config.deadweight,
                config.engine,
                config.artillery,
                config.torpedoes,
                config.depth_charges,
            )?),
            ShipClass::Frigate => AnyShip::Frigate(Frigate::new(
                name,
                config.deadweight,
                config.engine,
                config.artillery,
                config.depth_charges,
                config.anti_air,
            )?),
            ShipClass::Cruiser => AnyShip::Cruiser(Cruiser::new(
                name,
                config.deadweight,
                config.engine,
                config.artillery,
                config.anti_air,
            )?),
        };
        Ok(ship)
    }

    /// Shared vessel view
    pub fn as_vessel(&self) -> &dyn Vessel {
        match self {
            AnyShip::Ship(s) => s,
            AnyShip::Destroyer(s) => s,
            AnyShip::Frigate(s) => s,
            AnyShip::Cruiser(s) => s,
        }
    }

    /// Armament view, if this ship is armed
    pub fn as_naval(&self) -> Option<&dyn NavalShip> {
        match self {
            AnyShip::Ship(_) => None,
            AnyShip::Destroyer(s) => Some(s),
            AnyShip::Frigate(s) => Some(s),
            AnyShip::Cruiser(s) => Some(s),
        }
    }

    /// Mutable armament view, if this ship is armed
    pub fn as_naval_mut(&mut self) -> Option<&mut dyn NavalShip> {
        match self {
            AnyShip::Ship(_) => None,
            AnyShip::Destroyer(s) => Some(s),
            AnyShip::Frigate(s) => Some(s),
            AnyShip::Cruiser(s) => Some(s),
        }
    }
}

impl Vessel for AnyShip {
    fn hull(&self) -> &Hull {
        self.as_vessel().hull()
    }

    fn class(&self) -> ShipClass {
        self.as_vessel().class()
    }

    fn write_info(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.as_vessel().write_info(f)
    }
}

impl fmt::Display for AnyShip {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AnyShip::Ship(s) => fmt::Display::fmt(s, f),
            AnyShip::Destroyer(s) => fmt::Display::fmt(s, f),
            AnyShip::Frigate(s) => fmt::Display::fmt(s, f),
            AnyShip::Cruiser(s) => fmt::Display::fmt(s, f),
        }
    }
}

impl From<Ship> for AnyShip {
    fn from(ship: Ship) -> Self {
        AnyShip::Ship(ship)
    }
}

impl From<Destroyer> for AnyShip {
    fn from(ship: Destroyer) -> Self {
        AnyShip::Destroyer(ship)
    }
}

impl From<Frigate> for AnyShip {
    fn from(ship: Frigate) -> Self {
        AnyShip::Frigate(ship)
    }
}

impl From<Cruiser> for AnyShip {
    fn from(ship: Cruiser) -> Self {
        AnyShip::Cruiser(ship)
    }
}
