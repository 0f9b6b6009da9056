//! Board-agnostic core of the Galley object models
//!
//! This crate contains everything the appliance and naval models share
//! without depending on either of them:
//!
//! - Naming and capacity limits (`label`)
//! - Error types for construction and parsing (`error`)
//! - Behaviour traits for devices and vessels (`traits`)
//! - Narration events and the sinks that receive them (`narration`)
//! - Configuration type definitions (`config`)

#![no_std]
#![deny(unsafe_code)]

#[cfg(test)]
extern crate std;

pub mod config;
pub mod error;
pub mod label;
pub mod narration;
pub mod traits;

pub use error::{ModelError, ParseError};
pub use label::{Name, MAX_NAME_LEN};
pub use narration::{BrewStep, Job, Narration, Narrator, NullNarrator, RecordingNarrator};
