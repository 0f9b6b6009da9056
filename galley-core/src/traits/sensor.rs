//! Contact sensor types

use core::fmt;

/// What a ship's sensors sweep for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ContactKind {
    /// Enemy submarine (sonar)
    Submarine,
    /// Enemy aircraft (radar)
    Aircraft,
}

impl ContactKind {
    /// Sensor used to sweep for this contact
    pub fn sensor(&self) -> &'static str {
        match self {
            ContactKind::Submarine => "sonars",
            ContactKind::Aircraft => "radars",
        }
    }
}

impl fmt::Display for ContactKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ContactKind::Submarine => f.write_str("submarine"),
            ContactKind::Aircraft => f.write_str("aircraft"),
        }
    }
}
