//! Run configuration

use serde::{Deserialize, Serialize};

use crate::backend::Backend;
use crate::error::Result;
use crate::simulators::statevector::{validate_qubit_count, validate_shots};

/// Shot count used when none is given
pub const DEFAULT_SHOTS: usize = 1024;

/// Register size used when none is given
pub const DEFAULT_QUBITS: usize = 2;

/// Parameters of one simulation run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RunConfig {
    /// Number of qubits in the register
    pub qubits: usize,
    /// Number of independent shots
    pub shots: usize,
    /// Seed for reproducible sampling; entropy-seeded when absent
    pub seed: Option<u64>,
    pub backend: Backend,
}

impl Default for RunConfig {
    fn default() -> Self {
        RunConfig {
            qubits: DEFAULT_QUBITS,
            shots: DEFAULT_SHOTS,
            seed: None,
            backend: Backend::LocalSimulator,
        }
    }
}

impl RunConfig {
    /// Parse a JSON document without checking the counts
    ///
    /// Use this when further overrides are applied before execution.
    pub fn parse(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Parse a JSON document and validate it
    pub fn from_json(json: &str) -> Result<Self> {
        let config = Self::parse(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Replace each field for which a value is given
    pub fn override_with(
        &mut self,
        qubits: Option<usize>,
        shots: Option<usize>,
        seed: Option<u64>,
        backend: Option<Backend>,
    ) {
        if let Some(qubits) = qubits {
            self.qubits = qubits;
        }
        if let Some(shots) = shots {
            self.shots = shots;
        }
        if seed.is_some() {
            self.seed = seed;
        }
        if let Some(backend) = backend {
            self.backend = backend;
        }
    }

    /// Reject non-positive or oversized counts before any work starts
    pub fn validate(&self) -> Result<()> {
        validate_qubit_count(self.qubits)?;
        validate_shots(self.shots)
    }
}
