//! Error types for the simulator

use thiserror::Error;

/// Errors raised by state construction, gate application and sampling
#[derive(Debug, Error, Clone, PartialEq)]
pub enum SimulatorError {
    /// Non-positive qubit or shot count, oversized register, unknown backend
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// Amplitude vector length does not match the register size
    #[error("State vector dimension mismatch: expected {expected}, got {actual}")]
    DimensionMismatch { expected: usize, actual: usize },

    /// Squared amplitude magnitudes do not sum to one
    #[error("State vector is not normalized (norm squared = {0})")]
    NotNormalized(f64),

    /// Gate targeted at a qubit the register does not have
    #[error("Qubit index {qubit} out of range for {qubit_count}-qubit register")]
    QubitOutOfRange { qubit: usize, qubit_count: usize },

    /// A configuration document could not be parsed
    #[error("Failed to parse configuration: {0}")]
    Config(String),
}

impl SimulatorError {
    /// Create an invalid configuration error
    pub fn invalid_configuration(reason: impl Into<String>) -> Self {
        Self::InvalidConfiguration(reason.into())
    }
}

impl From<serde_json::Error> for SimulatorError {
    fn from(err: serde_json::Error) -> Self {
        Self::Config(err.to_string())
    }
}

/// Result alias used throughout the crate
pub type Result<T> = std::result::Result<T, SimulatorError>;
