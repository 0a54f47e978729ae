use crate::animation::Catalog;
use crate::error::IdleError;
use crate::scheduler::DEFAULT_IDLE_THRESHOLD;
use serde::Deserialize;
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

/// Settings for a robot's idle behavior, usually from a JSON file.
///
/// Every field may be left out:
///
/// ```json
/// { "timeout_seconds": 30, "seed": 7, "weights": { "LieDown": 0, "wave": 4 } }
/// ```
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct IdleConfig {
    pub enabled: bool,
    /// Idle threshold before the first animation plays
    pub timeout_seconds: u32,
    /// Fixed seed to replay a session, otherwise drawn from the OS
    pub seed: Option<u64>,
    /// Pause between control loop iterations
    pub tick_millis: u64,
    /// Catalog weight overrides by animation name
    pub weights: BTreeMap<String, u32>,
}

impl Default for IdleConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            timeout_seconds: DEFAULT_IDLE_THRESHOLD.0,
            seed: None,
            tick_millis: 50,
            weights: BTreeMap::new(),
        }
    }
}

impl IdleConfig {
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, IdleError> {
        let json = fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    pub fn from_json(json: &str) -> Result<Self, IdleError> {
        Ok(serde_json::from_str(json)?)
    }

    /// The reference catalog with this configuration's weights applied.
    pub fn catalog(&self) -> Result<Catalog, IdleError> {
        Catalog::reference_with_weights(&self.weights)
    }
}
