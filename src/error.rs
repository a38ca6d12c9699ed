//! Error types for charge_sim.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimError {
    /// Two distinct charges occupy the exact same position, making the
    /// Coulomb force undefined.
    #[error("charges {a} and {b} occupy the same position")]
    DegeneratePair { a: usize, b: usize },

    /// A charge ended a step outside the simulation volume. Periodic
    /// wraparound should have prevented this, so the run is aborted.
    #[error("charge {index} left the simulation volume at step {step}")]
    OutOfBounds { step: usize, index: usize },

    #[error("fixture directories disagree: {inputs} input files, {outputs} output files")]
    FixtureCountMismatch { inputs: usize, outputs: usize },

    #[error("malformed fixture file {path}: {reason}")]
    MalformedFixture { path: String, reason: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("config parse error: {0}")]
    Config(#[from] toml::de::Error),
}

pub type Result<T> = std::result::Result<T, SimError>;
