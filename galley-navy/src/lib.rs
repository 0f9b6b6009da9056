//! Naval ship implementations
//!
//! This crate provides the concrete ship types on top of the vessel trait
//! defined in galley-core:
//!
//! - Unarmed ships
//! - Naval ships with a fixed set of armament slots (destroyer, frigate,
//!   cruiser)
//! - Sonar and radar sweeps driven by an injected random source
//! - Fleets: ordered, bounded collections of any ship

#![no_std]
#![deny(unsafe_code)]

#[cfg(test)]
extern crate std;

pub mod armament;
pub mod cruiser;
pub mod destroyer;
pub mod fleet;
pub mod frigate;
pub mod sensor;
pub mod ship;

pub use armament::{Armament, ArmamentError, NavalShip};
pub use cruiser::Cruiser;
pub use destroyer::Destroyer;
pub use fleet::Fleet;
pub use frigate::Frigate;
pub use ship::{AnyShip, Ship};
