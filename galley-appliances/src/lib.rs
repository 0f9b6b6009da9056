//! Kitchen appliance implementations
//!
//! This crate provides concrete implementations of the device traits
//! defined in galley-core:
//!
//! - Coffee machine (water/coffee levels, four-step brew)
//! - Blender and meat grinder (speed-controlled batch processing)
//!
//! Batch processing waits on an injected [`embedded_hal::delay::DelayNs`]
//! between ticks, so callers choose between wall-clock pacing and an
//! instant delay.

#![no_std]
#![deny(unsafe_code)]

#[cfg(test)]
extern crate std;

pub mod appliance;
pub mod batch;
pub mod blender;
pub mod coffee;
pub mod grinder;

pub use appliance::Appliance;
pub use batch::{BatchOutcome, KG_PER_TICK_PER_SPEED, MAX_BATCH_KG, TICK_MS};
pub use blender::Blender;
pub use coffee::{BrewOutcome, CoffeeMachine};
pub use grinder::MeatGrinder;
