//! Configuration types
//!
//! Board-agnostic scenario descriptions. The host driver parses them from
//! TOML; the model crates turn them into devices and fleets.

pub mod types;

pub use types::*;
