//! Error types shared by the model crates

use core::fmt;

/// Errors raised while constructing or growing a model
///
/// These are structural problems (bad input to a constructor, a full
/// container). Domain misuse such as operating a powered-off device is
/// reported through narration instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ModelError {
    /// Name exceeds `MAX_NAME_LEN` bytes
    NameTooLong,
    /// Fleet already holds `MAX_FLEET_SIZE` ships
    FleetFull,
}

impl fmt::Display for ModelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ModelError::NameTooLong => f.write_str("name is too long"),
            ModelError::FleetFull => f.write_str("fleet is full"),
        }
    }
}

/// Errors raised when parsing a textual identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ParseError {
    /// Unknown engine type name
    UnknownEngine,
    /// Unknown armament type name
    UnknownArmament,
    /// Unknown ship class name
    UnknownShipClass,
    /// Unknown device kind name
    UnknownDevice,
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let what = match self {
            ParseError::UnknownEngine => "engine type",
            ParseError::UnknownArmament => "armament type",
            ParseError::UnknownShipClass => "ship class",
            ParseError::UnknownDevice => "device kind",
        };
        write!(f, "unknown {}", what)
    }
}
