//! Destroyer: torpedoes, depth charges and sonar

use core::fmt;

use galley_core::narration::Narrator;
use galley_core::traits::{ArmamentKind, ContactKind, Engine, Hull, ShipClass, Vessel};
use galley_core::ModelError;
use rand::RngCore;

use crate::armament::{Armament, NavalShip};
use crate::sensor;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Destroyer {
    hull: Hull,
    armament: Armament,
}

impl Destroyer {
    /// Create a destroyer with its initial charges
    pub fn new(
        name: &str,
        deadweight: u32,
        engine: Engine,
        artillery: u32,
        torpedo_tubes: u32,
        depth_charge_projectors: u32,
    ) -> Result<Self, ModelError> {
        Ok(Self {
            hull: Hull::new(name, deadweight, engine)?,
            armament: Armament::with_artillery(artillery)
                .fit(ArmamentKind::TorpedoTubes, torpedo_tubes)
                .fit(ArmamentKind::DepthChargeProjectors, depth_charge_projectors),
        })
    }

    /// Sweep the sonars for an enemy submarine
    pub fn locate_submarine<R: RngCore + ?Sized>(
        &self,
        rng: &mut R,
        narrator: &mut dyn Narrator,
    ) -> bool {
        sensor::sweep(ContactKind::Submarine, rng, narrator)
    }
}

impl Vessel for Destroyer {
    fn hull(&self) -> &Hull {
        &self.hull
    }

    fn class(&self) -> ShipClass {
        ShipClass::Destroyer
    }

    fn write_info(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.hull.write_info(self.class(), f)?;
        self.write_artillery(f)?;
        write!(
            f,
            "\nNo of torpedoes: {}. No of depth charges: {}",
            self.get_armament(ArmamentKind::TorpedoTubes),
            self.get_armament(ArmamentKind::DepthChargeProjectors)
        )
    }
}

impl NavalShip for Destroyer {
    fn armament(&self) -> &Armament {
        &self.armament
    }

    fn armament_mut(&mut self) -> &mut Armament {
        &mut self.armament
    }
}

impl fmt::Display for Destroyer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Destroyer({})", self.hull.name())
    }
}
