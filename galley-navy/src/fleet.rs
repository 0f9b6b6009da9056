//! Fleet of ships
//!
//! Ships keep their insertion order, which is also the display order.
//! Storage is bounded at [`MAX_FLEET_SIZE`] ships.

use core::fmt;
use core::ops::{Index, IndexMut};

use galley_core::config::{FleetConfig, MAX_FLEET_SIZE};
use galley_core::ModelError;
use heapless::Vec;

use crate::ship::AnyShip;

/// Ordered collection of ships
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fleet {
    id: u32,
    ships: Vec<AnyShip, MAX_FLEET_SIZE>,
}

impl Fleet {
    /// Create an empty fleet
    pub fn new(id: u32) -> Self {
        Self {
            id,
            ships: Vec::new(),
        }
    }

    /// Create a fleet holding `ships` in order
    pub fn with_ships<I>(id: u32, ships: I) -> Result<Self, ModelError>
    where
        I: IntoIterator,
        I::Item: Into<AnyShip>,
    {
        let mut fleet = Self::new(id);
        for ship in ships {
            fleet.add_ship(ship)?;
        }
        Ok(fleet)
    }

    /// Build a fleet and its ships from configuration
    pub fn from_config(config: &FleetConfig) -> Result<Self, ModelError> {
        let mut fleet = Self::new(config.id);
        for ship in &config.ships {
            fleet.add_ship(AnyShip::from_config(ship)?)?;
        }
        Ok(fleet)
    }

    /// Fleet number
    pub fn id(&self) -> u32 {
        self.id
    }

    /// Append a ship
    pub fn add_ship(&mut self, ship: impl Into<AnyShip>) -> Result<(), ModelError> {
        self.ships
            .push(ship.into())
            .map_err(|_| ModelError::FleetFull)
    }

    /// Ship at `index`, if any
    pub fn get(&self, index: usize) -> Option<&AnyShip> {
        self.ships.get(index)
    }

    /// Mutable ship at `index`, if any
    pub fn get_mut(&mut self, index: usize) -> Option<&mut AnyShip> {
        self.ships.get_mut(index)
    }

    pub fn len(&self) -> usize {
        self.ships.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ships.is_empty()
    }

    /// Ships in insertion order
    pub fn iter(&self) -> impl Iterator<Item = &AnyShip> {
        self.ships.iter()
    }

    /// Mutable ships in insertion order
    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut AnyShip> {
        self.ships.iter_mut()
    }
}

impl Index<usize> for Fleet {
    type Output = AnyShip;

    /// Panics if `index` is out of range
    fn index(&self, index: usize) -> &AnyShip {
        &self.ships[index]
    }
}

impl IndexMut<usize> for Fleet {
    fn index_mut(&mut self, index: usize) -> &mut AnyShip {
        &mut self.ships[index]
    }
}

impl<'a> IntoIterator for &'a Fleet {
    type Item = &'a AnyShip;
    type IntoIter = core::slice::Iter<'a, AnyShip>;

    fn into_iter(self) -> Self::IntoIter {
        self.ships.iter()
    }
}

impl fmt::Display for Fleet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Fleet {}\n---SHIPS---\n", self.id)?;
        for ship in &self.ships {
            writeln!(f, "{}", ship)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cruiser::Cruiser;
    use crate::destroyer::Destroyer;
    use crate::frigate::Frigate;
    use crate::ship::Ship;
    use galley_core::config::ShipConfig;
    use galley_core::label;
    use galley_core::narration::NullNarrator;
    use galley_core::traits::{ArmamentKind, Engine, ShipClass, Vessel};
    use std::format;

    fn first_fleet() -> Fleet {
        let mut fleet = Fleet::with_ships(
            1,
            [
                AnyShip::from(
                    Frigate::new("USS Fletcher", 2_050, Engine::DieselEngine, 10, 4, 8).unwrap(),
                ),
                AnyShip::from(
                    Destroyer::new("USS Iowa", 3_800, Engine::GasTurbine, 4, 8, 16).unwrap(),
                ),
                AnyShip::from(
                    Cruiser::new("USS Alaska", 10_800, Engine::SteamEngine, 20, 10).unwrap(),
                ),
            ],
        )
        .unwrap();
        fleet
            .add_ship(Destroyer::new("USS McGowan", 3_900, Engine::GasTurbine, 4, 10, 5).unwrap())
            .unwrap();
        fleet
    }

    #[test]
    fn test_add_to_empty() {
        let mut fleet = Fleet::new(7);
        assert!(fleet.is_empty());

        let ship = Ship::new("Cutty Sark", 963, Engine::Sail).unwrap();
        fleet.add_ship(ship.clone()).unwrap();

        assert_eq!(fleet.len(), 1);
        assert_eq!(fleet[0], AnyShip::Ship(ship));
    }

    #[test]
    fn test_out_of_range_lookup() {
        let fleet = first_fleet();
        assert!(fleet.get(3).is_some());
        assert!(fleet.get(4).is_none());
    }

    #[test]
    #[should_panic]
    fn test_index_out_of_range_panics() {
        let fleet = Fleet::new(1);
        let _ = &fleet[0];
    }

    #[test]
    fn test_fleet_full() {
        let mut fleet = Fleet::new(1);
        for _ in 0..MAX_FLEET_SIZE {
            fleet
                .add_ship(Ship::new("Tender", 100, Engine::Sail).unwrap())
                .unwrap();
        }
        assert_eq!(
            fleet.add_ship(Ship::new("Tender", 100, Engine::Sail).unwrap()),
            Err(ModelError::FleetFull)
        );
        assert_eq!(fleet.len(), MAX_FLEET_SIZE);
    }

    #[test]
    fn test_rendering() {
        let fleet = first_fleet();
        assert_eq!(
            format!("{}", fleet),
            "Fleet 1\n---SHIPS---\n\
             Frigate(USS Fletcher)\n\
             Destroyer(USS Iowa)\n\
             Cruiser(USS Alaska)\n\
             Destroyer(USS McGowan)\n"
        );
    }

    #[test]
    fn test_mutate_through_index() {
        let mut fleet = first_fleet();
        let iowa = fleet[1].as_naval_mut().unwrap();
        iowa.fire_armament(ArmamentKind::TorpedoTubes, 3, &mut NullNarrator)
            .unwrap();

        assert_eq!(
            fleet[1].as_naval().unwrap().get_armament(ArmamentKind::TorpedoTubes),
            5
        );
        assert_eq!(fleet.iter().filter(|s| s.class() == ShipClass::Destroyer).count(), 2);
    }

    #[test]
    fn test_from_config() {
        let mut ships = Vec::new();
        let mut iowa = ShipConfig::new(
            ShipClass::Destroyer,
            label::name("USS Iowa").unwrap(),
            3_800,
            Engine::GasTurbine,
        );
        iowa.torpedoes = 8;
        ships.push(iowa).unwrap();
        ships
            .push(ShipConfig::new(
                ShipClass::Ship,
                label::name("Endeavour").unwrap(),
                366,
                Engine::Sail,
            ))
            .unwrap();

        let fleet = Fleet::from_config(&FleetConfig { id: 2, ships }).unwrap();
        assert_eq!(fleet.id(), 2);
        assert_eq!(fleet.len(), 2);
        assert_eq!(fleet[1].name(), "Endeavour");
    }
}
