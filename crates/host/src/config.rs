//! Coupling settings file.
//!
//! A single JSON object, read once at startup. Every key is optional:
//!
//! ```json
//! {
//!   "coupling_distance": 1,
//!   "coupling_signal": 15,
//!   "ignore_sneaking": false,
//!   "couple_doors": true,
//!   "couple_fence_gates": true,
//!   "couple_trapdoors": true
//! }
//! ```

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use couplings_core::config::{ConfigError, CouplingConfig};
use couplings_core::coupling::Openable;
use serde::{Deserialize, Serialize};

/// Default settings file, relative to the working directory.
pub const DEFAULT_PATH: &str = "couplings.json";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct HostConfig {
    pub coupling_distance: u32,
    pub coupling_signal: u8,
    pub ignore_sneaking: bool,
    pub couple_doors: bool,
    pub couple_fence_gates: bool,
    pub couple_trapdoors: bool,
}

impl Default for HostConfig {
    fn default() -> Self {
        let core = CouplingConfig::default();
        Self {
            coupling_distance: core.distance(),
            coupling_signal: core.signal(),
            ignore_sneaking: core.ignore_sneaking(),
            couple_doors: true,
            couple_fence_gates: true,
            couple_trapdoors: true,
        }
    }
}

impl HostConfig {
    /// The validated settings handed to the coupling core.
    pub fn coupling(&self) -> Result<CouplingConfig, ConfigError> {
        CouplingConfig::new(self.coupling_distance, self.coupling_signal, self.ignore_sneaking)
    }

    /// Whether `variant` couples at all.
    pub fn couples(&self, variant: Openable) -> bool {
        match variant {
            Openable::Trapdoor => self.couple_trapdoors,
            Openable::FenceGate => self.couple_fence_gates,
            Openable::Door => self.couple_doors,
        }
    }
}

/// Load settings from `path`. A missing file yields the defaults.
pub fn load(path: &Path) -> Result<HostConfig> {
    if !path.exists() {
        tracing::info!("No config at {}, using defaults", path.display());
        return Ok(HostConfig::default());
    }

    let text = fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    let config: HostConfig =
        serde_json::from_str(&text).with_context(|| format!("parsing {}", path.display()))?;
    config
        .coupling()
        .with_context(|| format!("invalid coupling settings in {}", path.display()))?;

    tracing::info!(
        "Loaded {}: distance={} signal={} ignore_sneaking={}",
        path.display(),
        config.coupling_distance,
        config.coupling_signal,
        config.ignore_sneaking
    );
    Ok(config)
}
