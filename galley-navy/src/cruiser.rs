//! Cruiser: artillery and anti-air

use core::fmt;

use galley_core::traits::{ArmamentKind, Engine, Hull, ShipClass, Vessel};
use galley_core::ModelError;

use crate::armament::{Armament, NavalShip};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cruiser {
    hull: Hull,
    armament: Armament,
}

impl Cruiser {
    pub fn new(
        name: &str,
        deadweight: u32,
        engine: Engine,
        artillery: u32,
        anti_air: u32,
    ) -> Result<Self, ModelError> {
        Ok(Self {
            hull: Hull::new(name, deadweight, engine)?,
            armament: Armament::with_artillery(artillery).fit(ArmamentKind::AntiAir, anti_air),
        })
    }
}

impl Vessel for Cruiser {
    fn hull(&self) -> &Hull {
        &self.hull
    }

    fn class(&self) -> ShipClass {
        ShipClass::Cruiser
    }

    fn write_info(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.hull.write_info(self.class(), f)?;
        self.write_artillery(f)
    }
}

impl NavalShip for Cruiser {
    fn armament(&self) -> &Armament {
        &self.armament
    }

    fn armament_mut(&mut self) -> &mut Armament {
        &mut self.armament
    }
}

impl fmt::Display for Cruiser {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Cruiser({})", self.hull.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use galley_core::narration::{Narration, RecordingNarrator};
    use std::format;

    fn alaska() -> Cruiser {
        Cruiser::new("USS Alaska", 10_800, Engine::SteamEngine, 20, 10).unwrap()
    }

    #[test]
    fn test_key_set() {
        let ship = alaska();
        let fitted: std::vec::Vec<_> = ship.armament().iter().collect();
        assert_eq!(
            fitted,
            [(ArmamentKind::Artillery, 20), (ArmamentKind::AntiAir, 10)]
        );
    }

    #[test]
    fn test_set_then_fire() {
        let mut ship = alaska();
        let mut log = RecordingNarrator::<4>::new();

        ship.set_armament(ArmamentKind::AntiAir, 3, &mut log).unwrap();
        assert!(ship.fire_armament(ArmamentKind::AntiAir, 4, &mut log).is_err());
        assert_eq!(ship.fire_armament(ArmamentKind::Artillery, 20, &mut log), Ok(0));

        assert_eq!(ship.get_armament(ArmamentKind::AntiAir), 3);
        assert_eq!(ship.get_armament(ArmamentKind::Artillery), 0);
        assert_eq!(
            log.count(|e| matches!(e, Narration::Firing { .. })),
            1
        );
    }

    #[test]
    fn test_renderings() {
        let ship = alaska();
        assert_eq!(format!("{}", ship), "Cruiser(USS Alaska)");
        assert_eq!(
            format!("{}", ship.info()),
            "\n---SHIP INFO---\nUSS Alaska Cruiser, Deadweight: 10800 tons, Engine: Steam engine\
             \nNo of artillery weapons: 20"
        );
    }
}
