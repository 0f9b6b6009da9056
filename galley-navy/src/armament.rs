//! Armament inventory and the naval ship trait
//!
//! An [`Armament`] holds one charge counter per fitted [`ArmamentKind`].
//! Which kinds are fitted is decided by the ship class constructor and
//! never changes afterwards: every mutation goes through
//! [`NavalShip::set_armament`], which refuses unfitted kinds.

use core::fmt;

use galley_core::narration::{Narration, Narrator};
use galley_core::traits::{ArmamentKind, Vessel};

/// Errors that can occur with armament operations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ArmamentError {
    /// This armament type is not fitted on the ship
    NotFitted(ArmamentKind),
    /// Fewer charges left than requested
    Insufficient {
        armament: ArmamentKind,
        requested: u32,
        available: u32,
    },
}

impl fmt::Display for ArmamentError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArmamentError::NotFitted(kind) => write!(f, "{} is not fitted", kind),
            ArmamentError::Insufficient {
                armament,
                requested,
                available,
            } => write!(
                f,
                "{} has {} charges, {} requested",
                armament, available, requested
            ),
        }
    }
}

/// Charge counters for the fitted armament types
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Armament {
    slots: [Option<u32>; ArmamentKind::COUNT],
}

impl Armament {
    /// Armament with artillery only, the minimum for a naval ship
    pub(crate) fn with_artillery(charges: u32) -> Self {
        let mut slots = [None; ArmamentKind::COUNT];
        slots[ArmamentKind::Artillery.index()] = Some(charges);
        Self { slots }
    }

    /// Fit an additional armament type (construction only)
    pub(crate) fn fit(mut self, kind: ArmamentKind, charges: u32) -> Self {
        self.slots[kind.index()] = Some(charges);
        self
    }

    /// Check if a type is fitted
    pub fn is_fitted(&self, kind: ArmamentKind) -> bool {
        self.slots[kind.index()].is_some()
    }

    /// Charges for a type, or None if not fitted
    pub fn charges(&self, kind: ArmamentKind) -> Option<u32> {
        self.slots[kind.index()]
    }

    /// Fitted types with their charges, in slot order
    pub fn iter(&self) -> impl Iterator<Item = (ArmamentKind, u32)> + '_ {
        ArmamentKind::ALL
            .into_iter()
            .filter_map(|kind| self.charges(kind).map(|n| (kind, n)))
    }

    /// Overwrite the charges of a fitted type
    fn replace(&mut self, kind: ArmamentKind, charges: u32) -> Result<(), ArmamentError> {
        match &mut self.slots[kind.index()] {
            Some(slot) => {
                *slot = charges;
                Ok(())
            }
            None => Err(ArmamentError::NotFitted(kind)),
        }
    }
}

/// Trait for armed ships
///
/// Failed operations report a narration diagnostic, leave the armament
/// untouched and return the reason as an error value.
pub trait NavalShip: Vessel {
    /// Current armament
    fn armament(&self) -> &Armament;

    /// Mutable access to the armament
    fn armament_mut(&mut self) -> &mut Armament;

    /// Check if an armament type is fitted
    fn check_armament(&self, kind: ArmamentKind) -> bool {
        self.armament().is_fitted(kind)
    }

    /// Check by canonical name; unknown names are never fitted
    fn check_armament_named(&self, name: &str) -> bool {
        name.parse::<ArmamentKind>()
            .map(|kind| self.check_armament(kind))
            .unwrap_or(false)
    }

    /// Charges for an armament type, 0 if not fitted
    fn get_armament(&self, kind: ArmamentKind) -> u32 {
        self.armament().charges(kind).unwrap_or(0)
    }

    /// Charges by canonical name; unknown names have none
    fn get_armament_named(&self, name: &str) -> u32 {
        name.parse::<ArmamentKind>()
            .map(|kind| self.get_armament(kind))
            .unwrap_or(0)
    }

    /// Set the charges of a fitted armament type
    fn set_armament(
        &mut self,
        kind: ArmamentKind,
        charges: u32,
        narrator: &mut dyn Narrator,
    ) -> Result<(), ArmamentError> {
        let result = self.armament_mut().replace(kind, charges);
        if result.is_err() {
            narrator.narrate(Narration::ArmamentNotFitted { armament: kind });
        }
        result
    }

    /// Fire `charges` of an armament type
    ///
    /// Returns the charges left on success.
    fn fire_armament(
        &mut self,
        kind: ArmamentKind,
        charges: u32,
        narrator: &mut dyn Narrator,
    ) -> Result<u32, ArmamentError> {
        let Some(available) = self.armament().charges(kind) else {
            narrator.narrate(Narration::ArmamentUnavailable { armament: kind });
            return Err(ArmamentError::NotFitted(kind));
        };

        if available < charges {
            narrator.narrate(Narration::ArmamentUnavailable { armament: kind });
            return Err(ArmamentError::Insufficient {
                armament: kind,
                requested: charges,
                available,
            });
        }

        narrator.narrate(Narration::Firing {
            armament: kind,
            charges,
        });
        let remaining = available - charges;
        self.set_armament(kind, remaining, narrator)?;
        Ok(remaining)
    }

    /// Write the armament part shared by every naval ship
    fn write_artillery(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "\nNo of artillery weapons: {}",
            self.get_armament(ArmamentKind::Artillery)
        )
    }
}
