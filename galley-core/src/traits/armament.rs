//! Armament types
//!
//! The set of armament categories is closed; each ship class decides at
//! construction which of them it carries.

use core::fmt;
use core::str::FromStr;

use crate::error::ParseError;

/// Armament category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ArmamentKind {
    /// Main guns, carried by every naval ship
    Artillery,
    /// Torpedo launchers
    TorpedoTubes,
    /// Anti-submarine depth charge throwers
    DepthChargeProjectors,
    /// Anti-aircraft guns
    AntiAir,
}

impl ArmamentKind {
    /// Number of armament categories
    pub const COUNT: usize = 4;

    /// All categories in slot order
    pub const ALL: [ArmamentKind; Self::COUNT] = [
        ArmamentKind::Artillery,
        ArmamentKind::TorpedoTubes,
        ArmamentKind::DepthChargeProjectors,
        ArmamentKind::AntiAir,
    ];

    /// Storage slot for this category
    pub fn index(self) -> usize {
        match self {
            ArmamentKind::Artillery => 0,
            ArmamentKind::TorpedoTubes => 1,
            ArmamentKind::DepthChargeProjectors => 2,
            ArmamentKind::AntiAir => 3,
        }
    }

    /// Canonical snake_case name
    pub fn as_str(&self) -> &'static str {
        match self {
            ArmamentKind::Artillery => "artillery",
            ArmamentKind::TorpedoTubes => "torpedo_tubes",
            ArmamentKind::DepthChargeProjectors => "depth_charge_projectors",
            ArmamentKind::AntiAir => "anti_air",
        }
    }
}

impl fmt::Display for ArmamentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ArmamentKind {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ArmamentKind::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or(ParseError::UnknownArmament)
    }
}
