//! Narrated demo session
//!
//! Builds the kitchen and fleets from a scenario, then puts every device
//! and ship through one round of work.

use embedded_hal::delay::DelayNs;
use galley_appliances::{Appliance, BatchOutcome, BrewOutcome};
use galley_core::config::ScenarioConfig;
use galley_core::narration::Narrator;
use galley_core::traits::{ArmamentKind, Device, Vessel};
use galley_core::ModelError;
use galley_navy::{AnyShip, Fleet};
use rand::RngCore;

/// Kilograms handed to each blender
pub const BLEND_KG: f64 = 1.0;

/// Kilograms handed to each meat grinder
pub const MINCE_KG: f64 = 0.5;

/// Charges fired per volley
pub const VOLLEY: u32 = 2;

/// What happened during a round
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Report {
    pub brewed: u32,
    pub batches: u32,
    pub refused: u32,
    pub contacts: u32,
    pub volleys: u32,
}

/// A kitchen and the fleets it feeds
#[derive(Debug, Clone)]
pub struct Session {
    kitchen: Vec<Appliance>,
    fleets: Vec<Fleet>,
}

impl Session {
    /// Build every device and fleet in `scenario`
    pub fn from_config(
        scenario: &ScenarioConfig,
        narrator: &mut dyn Narrator,
    ) -> Result<Self, ModelError> {
        let kitchen = scenario
            .devices
            .iter()
            .map(|d| Appliance::from_config(d, narrator))
            .collect::<Result<Vec<_>, _>>()?;
        let fleets = scenario
            .fleets
            .iter()
            .map(Fleet::from_config)
            .collect::<Result<Vec<_>, _>>()?;

        log::debug!(
            "Session ready: {} device(s), {} fleet(s)",
            kitchen.len(),
            fleets.len()
        );
        Ok(Self { kitchen, fleets })
    }

    /// Devices in scenario order
    pub fn kitchen(&self) -> &[Appliance] {
        &self.kitchen
    }

    pub fn fleets(&self) -> &[Fleet] {
        &self.fleets
    }

    /// Run one round: cook in the kitchen, then patrol with every fleet
    pub fn run<D, R>(&mut self, delay: &mut D, rng: &mut R, narrator: &mut dyn Narrator) -> Report
    where
        D: DelayNs + ?Sized,
        R: RngCore + ?Sized,
    {
        let mut report = Report::default();
        self.cook(delay, narrator, &mut report);
        self.patrol(rng, narrator, &mut report);
        report
    }

    fn cook<D: DelayNs + ?Sized>(
        &mut self,
        delay: &mut D,
        narrator: &mut dyn Narrator,
        report: &mut Report,
    ) {
        for appliance in &mut self.kitchen {
            log::debug!("{}", appliance);
            let batch = match appliance {
                Appliance::CoffeeMachine(cm) => {
                    match cm.make_coffee(narrator) {
                        BrewOutcome::Brewed => report.brewed += 1,
                        _ => report.refused += 1,
                    }
                    continue;
                }
                Appliance::Blender(b) => b.blend(BLEND_KG, delay, narrator),
                Appliance::MeatGrinder(g) => g.mince(MINCE_KG, delay, narrator),
            };

            match batch {
                BatchOutcome::Done { .. } => report.batches += 1,
                BatchOutcome::PoweredOff
                | BatchOutcome::NothingToProcess
                | BatchOutcome::Overloaded => report.refused += 1,
            }
        }

        for appliance in &mut self.kitchen {
            if appliance.is_on() {
                appliance.turn_off(narrator);
            }
        }
    }

    fn patrol<R: RngCore + ?Sized>(
        &mut self,
        rng: &mut R,
        narrator: &mut dyn Narrator,
        report: &mut Report,
    ) {
        for fleet in &mut self.fleets {
            for ship in fleet.iter_mut() {
                log::debug!("{} on patrol", ship.name());
                let target = match ship {
                    AnyShip::Destroyer(d) => {
                        if !d.locate_submarine(rng, narrator) {
                            continue;
                        }
                        report.contacts += 1;
                        ArmamentKind::DepthChargeProjectors
                    }
                    AnyShip::Frigate(f) => {
                        if !f.locate_aircraft(rng, narrator) {
                            continue;
                        }
                        report.contacts += 1;
                        ArmamentKind::AntiAir
                    }
                    AnyShip::Cruiser(_) => ArmamentKind::Artillery,
                    AnyShip::Ship(_) => continue,
                };

                let Some(naval) = ship.as_naval_mut() else {
                    continue;
                };
                match naval.fire_armament(target, VOLLEY, narrator) {
                    Ok(_) => report.volleys += 1,
                    Err(_) => report.refused += 1,
                }
            }
        }
    }
}
