use std::path::Path;

use anyhow::{Context, Result};
use dropcontour_core::droplet::{BoundaryConfig, ContourFinderConfig, VolumeConfig};
use dropcontour_core::profile::ProfileConfig;
use serde::{Deserialize, Serialize};

/// Every tunable of the tool, one table per operation.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub boundary: BoundaryConfig,
    pub finder: ContourFinderConfig,
    pub volume: VolumeConfig,
    pub profile: ProfileConfig,
}

/// Read a TOML config, or fall back to the defaults when no path is given.
pub fn load_config(path: Option<&Path>) -> Result<AppConfig> {
    let Some(path) = path else {
        return Ok(AppConfig::default());
    };
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config {}", path.display()))?;
    toml::from_str(&contents).with_context(|| format!("Invalid config {}", path.display()))
}
