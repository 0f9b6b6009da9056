//! Vessel base trait
//!
//! A ship's identity (name, deadweight, engine) is fixed at construction
//! and held in a [`Hull`]. Every ship type exposes its hull through
//! [`Vessel`] and gets read-only accessors for free.

use core::fmt;
use core::str::FromStr;

use crate::error::{ModelError, ParseError};
use crate::label::{self, Name};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Propulsion type
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Engine {
    SteamEngine,
    SteamTurbine,
    DieselEngine,
    GasTurbine,
    Sail,
}

impl Engine {
    /// Human-readable engine name
    pub fn display_name(&self) -> &'static str {
        match self {
            Engine::SteamEngine => "Steam engine",
            Engine::SteamTurbine => "Steam turbine",
            Engine::DieselEngine => "Diesel engine",
            Engine::GasTurbine => "Gas turbine",
            Engine::Sail => "Sail",
        }
    }
}

impl fmt::Display for Engine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

impl FromStr for Engine {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "steam_engine" | "Steam engine" => Ok(Engine::SteamEngine),
            "steam_turbine" | "Steam turbine" => Ok(Engine::SteamTurbine),
            "diesel_engine" | "Diesel engine" => Ok(Engine::DieselEngine),
            "gas_turbine" | "Gas turbine" => Ok(Engine::GasTurbine),
            "sail" | "Sail" => Ok(Engine::Sail),
            _ => Err(ParseError::UnknownEngine),
        }
    }
}

/// Ship class, used for identity renderings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum ShipClass {
    /// Unarmed vessel
    Ship,
    Destroyer,
    Frigate,
    Cruiser,
}

impl ShipClass {
    /// Class name
    pub fn as_str(&self) -> &'static str {
        match self {
            ShipClass::Ship => "Ship",
            ShipClass::Destroyer => "Destroyer",
            ShipClass::Frigate => "Frigate",
            ShipClass::Cruiser => "Cruiser",
        }
    }

    /// Check if this class carries armament
    pub fn is_naval(&self) -> bool {
        !matches!(self, ShipClass::Ship)
    }
}

impl fmt::Display for ShipClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ShipClass {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ship" | "Ship" => Ok(ShipClass::Ship),
            "destroyer" | "Destroyer" => Ok(ShipClass::Destroyer),
            "frigate" | "Frigate" => Ok(ShipClass::Frigate),
            "cruiser" | "Cruiser" => Ok(ShipClass::Cruiser),
            _ => Err(ParseError::UnknownShipClass),
        }
    }
}

/// Immutable ship identity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hull {
    name: Name,
    deadweight: u32,
    engine: Engine,
}

impl Hull {
    /// Create a hull
    ///
    /// - `deadweight`: carrying capacity in tons
    pub fn new(name: &str, deadweight: u32, engine: Engine) -> Result<Self, ModelError> {
        Ok(Self {
            name: label::name(name)?,
            deadweight,
            engine,
        })
    }

    /// Ship name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Deadweight in tons
    pub fn deadweight(&self) -> u32 {
        self.deadweight
    }

    /// Engine type
    pub fn engine(&self) -> Engine {
        self.engine
    }

    /// Write the base information block for a ship of `class`
    pub fn write_info(&self, class: ShipClass, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "\n---SHIP INFO---\n{} {}, Deadweight: {} tons, Engine: {}",
            self.name, class, self.deadweight, self.engine
        )
    }
}

/// Base trait for all ships
pub trait Vessel {
    /// Immutable identity
    fn hull(&self) -> &Hull;

    /// Ship class
    fn class(&self) -> ShipClass;

    /// Ship name
    fn name(&self) -> &str {
        self.hull().name()
    }

    /// Deadweight in tons
    fn deadweight(&self) -> u32 {
        self.hull().deadweight()
    }

    /// Engine type
    fn engine_type(&self) -> Engine {
        self.hull().engine()
    }

    /// Write the detailed ship information block
    ///
    /// Armed classes extend this with their armament lines.
    fn write_info(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.hull().write_info(self.class(), f)
    }

    /// Detailed information view, for use with `{}`
    fn info(&self) -> ShipInfo<'_, Self>
    where
        Self: Sized,
    {
        ShipInfo(self)
    }
}

/// Display adapter for [`Vessel::write_info`]
pub struct ShipInfo<'a, V: ?Sized>(pub &'a V);

impl<V: Vessel + ?Sized> fmt::Display for ShipInfo<'_, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.write_info(f)
    }
}
