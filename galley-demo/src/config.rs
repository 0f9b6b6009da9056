//! Scenario loading
//!
//! The demo ships with an embedded `galley.toml`. A file given on the
//! command line replaces it entirely.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use galley_core::config::ScenarioConfig;

/// Scenario compiled into the binary
pub const DEFAULT_SCENARIO: &str = include_str!("../galley.toml");

/// Parse a scenario from TOML text
pub fn parse(text: &str) -> Result<ScenarioConfig> {
    toml::from_str(text).context("invalid scenario TOML")
}

/// Load the scenario at `path`, or the embedded default
pub fn load(path: Option<&Path>) -> Result<ScenarioConfig> {
    let Some(path) = path else {
        log::debug!("Using embedded scenario");
        return parse(DEFAULT_SCENARIO);
    };

    let text = fs::read_to_string(path)
        .with_context(|| format!("failed to read scenario {}", path.display()))?;
    let scenario =
        parse(&text).with_context(|| format!("failed to load scenario {}", path.display()))?;

    log::info!(
        "Loaded {} device(s) and {} fleet(s) from {}",
        scenario.devices.len(),
        scenario.fleets.len(),
        path.display()
    );
    Ok(scenario)
}
