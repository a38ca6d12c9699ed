// Centralized configuration for simulation parameters

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::error::Result;

// ====================
// Force Model Parameters
// ====================
/// Coulomb constant in simulation units.
pub const COULOMB_CONSTANT: f64 = 9000.0;
/// Separation below which the close-range repulsion penalty kicks in.
/// Meant to mitigate charges coinciding across the periodic boundary.
pub const CLOSE_RANGE: f64 = 5.0;
/// Strength of the close-range penalty, added as `CLOSE_PENALTY / d` per axis.
pub const CLOSE_PENALTY: f64 = 10.0;
/// Magnitude every nonzero net force is rescaled to after summation.
/// Otherwise the simulation jumps out of the periodic volume.
pub const NET_FORCE_MAGNITUDE: f64 = 20.0;

// ====================
// Integrator Parameters
// ====================
/// Speed cap applied to free charges after each velocity update.
pub const MAX_SPEED: f64 = 10.0;

// ====================
// Charge Parameters
// ====================
/// Radius assigned to every charge at initialization.
pub const DEFAULT_RADIUS: f64 = 1.0;

// ====================
// Default Scenario
// ====================
pub const DEFAULT_NUM_FIXED: usize = 2;
pub const DEFAULT_NUM_FREE: usize = 1000;
pub const DEFAULT_DOMAIN: f64 = 3000.0;
pub const DEFAULT_DT: f64 = 1.0;
pub const DEFAULT_SNAPSHOTS: usize = 1000;

/// Runtime scenario parameters, loadable from a TOML file.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SimConfig {
    pub num_fixed: usize,
    pub num_free: usize,
    pub width: f64,
    pub height: f64,
    pub depth: f64,
    pub charge_min: f64,
    pub charge_max: f64,
    pub mass_min: f64,
    pub mass_max: f64,
    pub dt: f64,
    pub snapshots: usize,
    /// Seed for the particle initializer. Stepping itself is deterministic,
    /// so the seed fully determines the run.
    #[serde(default)]
    pub seed: u64,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            num_fixed: DEFAULT_NUM_FIXED,
            num_free: DEFAULT_NUM_FREE,
            width: DEFAULT_DOMAIN,
            height: DEFAULT_DOMAIN,
            depth: DEFAULT_DOMAIN,
            charge_min: -1.0,
            charge_max: 1.0,
            mass_min: 1.0,
            mass_max: 1.0,
            dt: DEFAULT_DT,
            snapshots: DEFAULT_SNAPSHOTS,
            seed: 0,
        }
    }
}

impl SimConfig {
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let config: SimConfig = toml::from_str(&content)?;
        Ok(config)
    }
}
