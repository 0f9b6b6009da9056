//! Coffee machine
//!
//! Holds a water tank and a coffee hopper, both measured in percent of
//! capacity. A brew needs [`WATER_PER_CUP`] water and [`COFFEE_PER_CUP`]
//! coffee and the machine switched on.

use core::fmt;

use galley_core::narration::{BrewStep, Narration, Narrator};
use galley_core::traits::{Device, DeviceKind, PowerSwitch};
use galley_core::ModelError;

/// Full tank or hopper
pub const MAX_LEVEL: f64 = 100.0;

/// Water used per cup
pub const WATER_PER_CUP: f64 = 10.0;

/// Coffee used per cup
pub const COFFEE_PER_CUP: f64 = 5.0;

/// Clamp a refill level to `[0, MAX_LEVEL]`
///
/// NaN counts as empty.
pub fn clamp_level(level: f64) -> f64 {
    if level.is_nan() || level < 0.0 {
        0.0
    } else if level >= MAX_LEVEL {
        MAX_LEVEL
    } else {
        level
    }
}

/// Result of a brew request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum BrewOutcome {
    /// One cup brewed
    Brewed,
    /// Refused: machine is off
    PoweredOff,
    /// Refused: not enough water or coffee
    InsufficientResources,
}

/// Coffee machine
#[derive(Debug, Clone, PartialEq)]
pub struct CoffeeMachine {
    switch: PowerSwitch,
    /// Water level (0-100)
    water: f64,
    /// Coffee level (0-100)
    coffee: f64,
}

impl CoffeeMachine {
    /// Create an empty, switched-off coffee machine
    pub fn new(name: &str) -> Result<Self, ModelError> {
        Ok(Self {
            switch: PowerSwitch::new(name)?,
            water: 0.0,
            coffee: 0.0,
        })
    }

    /// Current water level
    pub fn water_level(&self) -> f64 {
        self.water
    }

    /// Current coffee level
    pub fn coffee_level(&self) -> f64 {
        self.coffee
    }

    /// Set both levels, each clamped to `[0, MAX_LEVEL]`
    pub fn refill(&mut self, water: f64, coffee: f64) {
        self.water = clamp_level(water);
        self.coffee = clamp_level(coffee);
    }

    /// Check if one cup can be brewed from the current levels
    pub fn has_resources(&self) -> bool {
        self.water >= WATER_PER_CUP && self.coffee >= COFFEE_PER_CUP
    }

    /// Brew one cup
    pub fn make_coffee(&mut self, narrator: &mut dyn Narrator) -> BrewOutcome {
        if !self.is_on() {
            narrator.narrate(Narration::NotPowered);
            return BrewOutcome::PoweredOff;
        }

        if !self.has_resources() {
            narrator.narrate(Narration::InsufficientResources {
                water: self.water,
                coffee: self.coffee,
            });
            return BrewOutcome::InsufficientResources;
        }

        for step in BrewStep::ALL {
            narrator.narrate(Narration::Brewing(step));
        }

        self.water -= WATER_PER_CUP;
        self.coffee -= COFFEE_PER_CUP;
        BrewOutcome::Brewed
    }
}

impl Device for CoffeeMachine {
    fn kind(&self) -> DeviceKind {
        DeviceKind::CoffeeMachine
    }

    fn switch(&self) -> &PowerSwitch {
        &self.switch
    }

    fn switch_mut(&mut self) -> &mut PowerSwitch {
        &mut self.switch
    }
}

impl fmt::Display for CoffeeMachine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.switch.write_summary(self.kind(), f)?;
        write!(f, ", Water: {}, Coffee: {})", self.water, self.coffee)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use galley_core::narration::{NullNarrator, RecordingNarrator};
    use proptest::prelude::*;
    use std::format;

    fn machine() -> CoffeeMachine {
        CoffeeMachine::new("DeLonghi").unwrap()
    }

    #[test]
    fn test_initial_state() {
        let cm = machine();
        assert!(!cm.is_on());
        assert_eq!(cm.water_level(), 0.0);
        assert_eq!(cm.coffee_level(), 0.0);
    }

    #[test]
    fn test_refill_in_range() {
        let mut cm = machine();
        cm.refill(40.0, 20.0);
        assert_eq!(cm.water_level(), 40.0);
        assert_eq!(cm.coffee_level(), 20.0);
    }

    #[test]
    fn test_refill_clamps() {
        let mut cm = machine();
        cm.refill(-3.0, 250.0);
        assert_eq!(cm.water_level(), 0.0);
        assert_eq!(cm.coffee_level(), 100.0);

        cm.refill(100.0, f64::NAN);
        assert_eq!(cm.water_level(), 100.0);
        assert_eq!(cm.coffee_level(), 0.0);
    }

    #[test]
    fn test_brew_requires_power() {
        let mut cm = machine();
        cm.refill(100.0, 100.0);
        let mut log = RecordingNarrator::<8>::new();

        assert_eq!(cm.make_coffee(&mut log), BrewOutcome::PoweredOff);
        assert_eq!(cm.water_level(), 100.0);
        assert_eq!(cm.coffee_level(), 100.0);
        assert_eq!(log.events(), &[Narration::NotPowered]);
    }

    #[test]
    fn test_brew_requires_resources() {
        let mut cm = machine();
        cm.turn_on(&mut NullNarrator);

        cm.refill(9.0, 50.0);
        assert_eq!(
            cm.make_coffee(&mut NullNarrator),
            BrewOutcome::InsufficientResources
        );
        assert_eq!(cm.water_level(), 9.0);

        cm.refill(50.0, 4.5);
        assert_eq!(
            cm.make_coffee(&mut NullNarrator),
            BrewOutcome::InsufficientResources
        );
        assert_eq!(cm.coffee_level(), 4.5);
    }

    #[test]
    fn test_brew_exact_resources() {
        let mut cm = machine();
        let mut log = RecordingNarrator::<8>::new();
        cm.turn_on(&mut log);
        cm.refill(10.0, 5.0);
        log.clear();

        assert_eq!(cm.make_coffee(&mut log), BrewOutcome::Brewed);
        assert_eq!(cm.water_level(), 0.0);
        assert_eq!(cm.coffee_level(), 0.0);
        assert_eq!(log.len(), 4);
        assert_eq!(log.events()[0], Narration::Brewing(BrewStep::BoilWater));
        assert_eq!(log.events()[3], Narration::Brewing(BrewStep::AddSugarAndMilk));

        // Tank now empty
        assert_eq!(
            cm.make_coffee(&mut log),
            BrewOutcome::InsufficientResources
        );
    }

    #[test]
    fn test_display() {
        let mut cm = machine();
        cm.refill(30.0, 12.5);
        assert_eq!(
            format!("{}", cm),
            "CoffeeMachine(Name: DeLonghi, Power: false, Water: 30, Coffee: 12.5)"
        );
    }

    proptest! {
        #[test]
        fn test_refill_always_in_range(water in any::<f64>(), coffee in any::<f64>()) {
            let mut cm = machine();
            cm.refill(water, coffee);
            prop_assert!((0.0..=MAX_LEVEL).contains(&cm.water_level()));
            prop_assert!((0.0..=MAX_LEVEL).contains(&cm.coffee_level()));
            if (0.0..MAX_LEVEL).contains(&water) {
                prop_assert_eq!(cm.water_level(), water);
            }
            if (0.0..MAX_LEVEL).contains(&coffee) {
                prop_assert_eq!(cm.coffee_level(), coffee);
            }
        }

        #[test]
        fn test_brew_off_never_changes_levels(water in 0.0f64..=100.0, coffee in 0.0f64..=100.0) {
            let mut cm = machine();
            cm.refill(water, coffee);
            prop_assert_eq!(cm.make_coffee(&mut NullNarrator), BrewOutcome::PoweredOff);
            prop_assert_eq!(cm.water_level(), clamp_level(water));
            prop_assert_eq!(cm.coffee_level(), clamp_level(coffee));
        }
    }
}
