//! Frigate: depth charges, anti-air and radar

use core::fmt;

use galley_core::narration::Narrator;
use galley_core::traits::{ArmamentKind, ContactKind, Engine, Hull, ShipClass, Vessel};
use galley_core::ModelError;
use rand::RngCore;

use crate::armament::{Armament, NavalShip};
use crate::sensor;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frigate {
    hull: Hull,
    armament: Armament,
}

impl Frigate {
    /// Create a frigate with its initial charges
    pub fn new(
        name: &str,
        deadweight: u32,
        engine: Engine,
        artillery: u32,
        depth_charge_projectors: u32,
        anti_air: u32,
    ) -> Result<Self, ModelError> {
        Ok(Self {
            hull: Hull::new(name, deadweight, engine)?,
            armament: Armament::with_artillery(artillery)
                .fit(ArmamentKind::DepthChargeProjectors, depth_charge_projectors)
                .fit(ArmamentKind::AntiAir, anti_air),
        })
    }

    /// Sweep the radars for enemy aircraft
    pub fn locate_aircraft<R: RngCore + ?Sized>(
        &self,
        rng: &mut R,
        narrator: &mut dyn Narrator,
    ) -> bool {
        sensor::sweep(ContactKind::Aircraft, rng, narrator)
    }
}

impl Vessel for Frigate {
    fn hull(&self) -> &Hull {
        &self.hull
    }

    fn class(&self) -> ShipClass {
        ShipClass::Frigate
    }

    fn write_info(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.hull.write_info(self.class(), f)?;
        self.write_artillery(f)?;
        write!(
            f,
            "\nNo of depth charges: {}. No of anti-air charges {}",
            self.get_armament(ArmamentKind::DepthChargeProjectors),
            self.get_armament(ArmamentKind::AntiAir)
        )
    }
}

impl NavalShip for Frigate {
    fn armament(&self) -> &Armament {
        &self.armament
    }

    fn armament_mut(&mut self) -> &mut Armament {
        &mut self.armament
    }
}

impl fmt::Display for Frigate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Frigate({})", self.hull.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::armament::ArmamentError;
    use galley_core::narration::{Narration, NullNarrator, RecordingNarrator};
    use rand::rngs::mock::StepRng;
    use std::format;

    fn fletcher() -> Frigate {
        Frigate::new("USS Fletcher", 2_050, Engine::DieselEngine, 10, 4, 8).unwrap()
    }

    #[test]
    fn test_key_set() {
        let ship = fletcher();
        assert!(ship.check_armament(ArmamentKind::DepthChargeProjectors));
        assert!(ship.check_armament(ArmamentKind::AntiAir));
        assert!(!ship.check_armament(ArmamentKind::TorpedoTubes));
        assert_eq!(ship.get_armament(ArmamentKind::TorpedoTubes), 0);
    }

    #[test]
    fn test_over_fire_keeps_count() {
        let mut ship = fletcher();
        let mut log = RecordingNarrator::<4>::new();

        assert_eq!(
            ship.fire_armament(ArmamentKind::AntiAir, 9, &mut log),
            Err(ArmamentError::Insufficient {
                armament: ArmamentKind::AntiAir,
                requested: 9,
                available: 8,
            })
        );
        assert_eq!(ship.get_armament(ArmamentKind::AntiAir), 8);
        assert_eq!(log.count(Narration::is_diagnostic), 1);

        assert_eq!(
            ship.fire_armament(ArmamentKind::AntiAir, 8, &mut NullNarrator),
            Ok(0)
        );
        assert_eq!(ship.get_armament(ArmamentKind::AntiAir), 0);
    }

    #[test]
    fn test_locate_aircraft() {
        let ship = fletcher();
        let mut rng = StepRng::new(u64::MAX, 0);
        let mut log = RecordingNarrator::<4>::new();

        assert!(!ship.locate_aircraft(&mut rng, &mut log));
        assert_eq!(
            format!("{}", log.events()[0]),
            "Using radars to locate enemy aircraft"
        );
        assert_eq!(log.events()[1], Narration::ContactLost(ContactKind::Aircraft));
    }

    #[test]
    fn test_renderings() {
        let ship = fletcher();
        assert_eq!(format!("{}", ship), "Frigate(USS Fletcher)");
        assert_eq!(
            format!("{}", ship.info()),
            "\n---SHIP INFO---\nUSS Fletcher Frigate, Deadweight: 2050 tons, Engine: Diesel engine\
             \nNo of artillery weapons: 10\
             \nNo of depth charges: 4. No of anti-air charges 8"
        );
    }
}
