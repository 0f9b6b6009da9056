//! Narration events
//!
//! Devices and ships never print. Everything they would say is emitted as
//! a [`Narration`] value into a [`Narrator`] supplied by the caller, who
//! decides whether to log it, show it or drop it.

use core::fmt;

use heapless::Vec;

use crate::label::Name;
use crate::traits::{ArmamentKind, ContactKind, DeviceKind};

/// Kind of batch a processing device runs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Job {
    /// Blender batch (kg of products)
    Blend,
    /// Meat grinder batch (kg of meat)
    Mince,
}

impl Job {
    fn gerund(&self) -> &'static str {
        match self {
            Job::Blend => "Blending",
            Job::Mince => "Mincing",
        }
    }

    fn verb(&self) -> &'static str {
        match self {
            Job::Blend => "blend",
            Job::Mince => "mince",
        }
    }

    fn material(&self) -> &'static str {
        match self {
            Job::Blend => "products",
            Job::Mince => "meat",
        }
    }
}

/// Steps of a successful coffee brew, in order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum BrewStep {
    BoilWater,
    Drip,
    Pour,
    AddSugarAndMilk,
}

impl BrewStep {
    /// All steps in brewing order
    pub const ALL: [BrewStep; 4] = [
        BrewStep::BoilWater,
        BrewStep::Drip,
        BrewStep::Pour,
        BrewStep::AddSugarAndMilk,
    ];
}

/// Something a device or ship reports
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Narration {
    // Device power
    /// Device is being switched on
    PoweredOn { kind: DeviceKind, name: Name },
    /// Device is being switched off
    PoweredOff { kind: DeviceKind, name: Name },
    /// Operation refused because the device is off
    NotPowered,

    // Coffee machine
    /// One step of a brew
    Brewing(BrewStep),
    /// Brew refused for lack of water or coffee
    InsufficientResources { water: f64, coffee: f64 },

    // Processing devices
    /// Batch refused because there is nothing to process
    NothingToProcess(Job),
    /// Batch refused because it is larger than one run can take
    Overloaded { job: Job, quantity: f64 },
    /// Batch accepted
    BatchStarted { job: Job, quantity: f64 },
    /// One processing tick begins
    Processing(Job),
    /// Quantity left after a tick
    Remaining { job: Job, quantity: f64 },
    /// Batch finished
    BatchDone(Job),

    // Armament
    /// Charges fired
    Firing { armament: ArmamentKind, charges: u32 },
    /// Not enough charges (or no such armament) to fire
    ArmamentUnavailable { armament: ArmamentKind },
    /// Armament type is not fitted on this ship
    ArmamentNotFitted { armament: ArmamentKind },

    // Sensors
    /// Sensor sweep started
    Scanning(ContactKind),
    /// Contact found
    ContactLocated(ContactKind),
    /// Contact lost
    ContactLost(ContactKind),
}

impl Narration {
    /// Check if this event reports a refused or failed operation
    pub fn is_diagnostic(&self) -> bool {
        matches!(
            self,
            Narration::NotPowered
                | Narration::InsufficientResources { .. }
                | Narration::NothingToProcess(_)
                | Narration::Overloaded { .. }
                | Narration::ArmamentUnavailable { .. }
                | Narration::ArmamentNotFitted { .. }
        )
    }
}

impl fmt::Display for Narration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Narration::PoweredOn { kind, name } => write!(f, "Turning {} {} on", kind, name),
            Narration::PoweredOff { kind, name } => write!(f, "Turning {} {} off", kind, name),
            Narration::NotPowered => f.write_str("Turn on the machine before using!"),
            Narration::Brewing(step) => f.write_str(match step {
                BrewStep::BoilWater => "Boiling water",
                BrewStep::Drip => "Dripping coffee through filter",
                BrewStep::Pour => "Pouring into cup",
                BrewStep::AddSugarAndMilk => "Adding Sugar and Milk",
            }),
            Narration::InsufficientResources { .. } => {
                f.write_str("Not enough water or coffee grains")
            }
            Narration::NothingToProcess(job) => write!(f, "You can't {} nothing!", job.verb()),
            Narration::Overloaded { job, quantity } => {
                write!(f, "Can't {} {} kg of {} in one go!", job.verb(), quantity, job.material())
            }
            Narration::BatchStarted { job, quantity } => {
                write!(f, "{} {} kg of {}", job.gerund(), quantity, job.material())
            }
            Narration::Processing(job) => write!(f, "{}...", job.gerund()),
            Narration::Remaining { job, quantity } => match job {
                Job::Blend => write!(f, "{} kg of {} remaining", quantity, job.material()),
                Job::Mince => write!(f, "{:.2} kg of {} remaining", quantity, job.material()),
            },
            Narration::BatchDone(job) => write!(f, "Your {} is ready", job.verb()),
            Narration::Firing { armament, charges } => {
                write!(f, "Firing {} from {}", charges, armament)
            }
            Narration::ArmamentUnavailable { .. } => f.write_str("No such weaponry available!"),
            Narration::ArmamentNotFitted { .. } => {
                f.write_str("No such armament onboard. Can't add charges")
            }
            Narration::Scanning(contact) => {
                write!(f, "Using {} to locate enemy {}", contact.sensor(), contact)
            }
            Narration::ContactLocated(contact) => write!(f, "Enemy {} located!", contact),
            Narration::ContactLost(contact) => write!(f, "Enemy {} lost!", contact),
        }
    }
}

/// Sink for narration events
pub trait Narrator {
    /// Receive one event
    fn narrate(&mut self, event: Narration);
}

impl<N: Narrator + ?Sized> Narrator for &mut N {
    fn narrate(&mut self, event: Narration) {
        (**self).narrate(event);
    }
}

/// Narrator that discards every event
#[derive(Debug, Clone, Copy, Default)]
pub struct NullNarrator;

impl Narrator for NullNarrator {
    fn narrate(&mut self, _event: Narration) {}
}

/// Narrator that keeps up to `N` events in memory
///
/// Events past capacity are counted but not stored.
#[derive(Debug, Clone, Default)]
pub struct RecordingNarrator<const N: usize> {
    events: Vec<Narration, N>,
    dropped: usize,
}

impl<const N: usize> RecordingNarrator<N> {
    /// Create an empty recorder
    pub fn new() -> Self {
        Self {
            events: Vec::new(),
            dropped: 0,
        }
    }

    /// Recorded events, oldest first
    pub fn events(&self) -> &[Narration] {
        &self.events
    }

    /// Number of recorded events
    pub fn len(&self) -> usize {
        self.events.len()
    }

    /// Check if nothing was recorded
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Number of events that did not fit
    pub fn dropped(&self) -> usize {
        self.dropped
    }

    /// Count recorded events matching a predicate
    pub fn count(&self, pred: impl Fn(&Narration) -> bool) -> usize {
        self.events.iter().filter(|e| pred(e)).count()
    }

    /// Most recent event
    pub fn last(&self) -> Option<&Narration> {
        self.events.last()
    }

    /// Forget everything recorded so far
    pub fn clear(&mut self) {
        self.events.clear();
        self.dropped = 0;
    }
}

impl<const N: usize> Narrator for RecordingNarrator<N> {
    fn narrate(&mut self, event: Narration) {
        if self.events.push(event).is_err() {
            self.dropped += 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::label;
    use std::format;

    #[test]
    fn test_recorder_capacity() {
        let mut log = RecordingNarrator::<2>::new();
        log.narrate(Narration::NotPowered);
        log.narrate(Narration::BatchDone(Job::Blend));
        log.narrate(Narration::BatchDone(Job::Mince));

        assert_eq!(log.len(), 2);
        assert_eq!(log.dropped(), 1);
        assert_eq!(log.last(), Some(&Narration::BatchDone(Job::Blend)));

        log.clear();
        assert!(log.is_empty());
        assert_eq!(log.dropped(), 0);
    }

    #[test]
    fn test_forward_through_reference() {
        fn feed<N: Narrator>(mut sink: N) {
            sink.narrate(Narration::NotPowered);
        }

        let mut log = RecordingNarrator::<4>::new();
        feed(&mut log);
        feed(&mut log);
        assert_eq!(log.len(), 2);
    }

    #[test]
    fn test_diagnostics() {
        assert!(Narration::NotPowered.is_diagnostic());
        assert!(Narration::NothingToProcess(Job::Mince).is_diagnostic());
        assert!(Narration::Overloaded {
            job: Job::Blend,
            quantity: 1e17
        }
        .is_diagnostic());
        assert!(Narration::ArmamentNotFitted {
            armament: ArmamentKind::AntiAir
        }
        .is_diagnostic());
        assert!(!Narration::Brewing(BrewStep::Pour).is_diagnostic());
        assert!(!Narration::ContactLost(ContactKind::Aircraft).is_diagnostic());
    }

    #[test]
    fn test_display_text() {
        let on = Narration::PoweredOn {
            kind: DeviceKind::CoffeeMachine,
            name: label::name("DeLonghi").unwrap(),
        };
        assert_eq!(format!("{}", on), "Turning CoffeeMachine DeLonghi on");
        assert_eq!(
            format!("{}", Narration::NothingToProcess(Job::Blend)),
            "You can't blend nothing!"
        );
        assert_eq!(
            format!(
                "{}",
                Narration::Overloaded {
                    job: Job::Mince,
                    quantity: 2e6
                }
            ),
            "Can't mince 2000000 kg of meat in one go!"
        );
        assert_eq!(
            format!(
                "{}",
                Narration::Remaining {
                    job: Job::Mince,
                    quantity: 0.30000000000000004
                }
            ),
            "0.30 kg of meat remaining"
        );
        assert_eq!(
            format!(
                "{}",
                Narration::Firing {
                    armament: ArmamentKind::TorpedoTubes,
                    charges: 2
                }
            ),
            "Firing 2 from torpedo_tubes"
        );
        assert_eq!(
            format!("{}", Narration::Scanning(ContactKind::Submarine)),
            "Using sonars to locate enemy submarine"
        );
    }
}
