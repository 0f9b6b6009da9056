//! Behaviour traits
//!
//! These traits define the shared behaviour of the model variants. The
//! concrete devices live in `galley-appliances` and the concrete ships in
//! `galley-navy`.

pub mod armament;
pub mod device;
pub mod motor;
pub mod sensor;
pub mod vessel;

pub use armament::ArmamentKind;
pub use device::{Device, DeviceKind, PowerSwitch};
pub use motor::{clamp_speed, SpeedControlled, DEFAULT_SPEED, MAX_SPEED, MIN_SPEED};
pub use sensor::ContactKind;
pub use vessel::{Engine, Hull, ShipClass, ShipInfo, Vessel};
