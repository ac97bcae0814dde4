//! Execution backends
//!
//! A backend is chosen explicitly from a closed set rather than looked up by
//! name at run time. Only the local statevector simulator exists.

use std::fmt;
use std::str::FromStr;
use log::info;
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};

use crate::config::RunConfig;
use crate::counts::Counts;
use crate::error::{Result, SimulatorError};
use crate::simulators::StateSimulator;

/// Where a circuit is executed
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Backend {
    /// In-process statevector simulation
    #[default]
    #[serde(alias = "qasm_simulator")]
    LocalSimulator,
}

impl Backend {
    /// Canonical name of the backend
    pub fn name(&self) -> &'static str {
        match self {
            Backend::LocalSimulator => "local_simulator",
        }
    }
}

/// Run the Hadamard-then-measure circuit described by `config` on the
/// backend it names
///
/// The configuration is validated before any state is built.
pub fn execute(config: &RunConfig) -> Result<ExecutionResult> {
    config.validate()?;

    let backend = config.backend;
    let counts = match backend {
        Backend::LocalSimulator => run_local(config)?,
    };

    info!(
        "{} finished {} shots on {} qubits",
        backend, config.shots, config.qubits
    );

    Ok(ExecutionResult {
        backend,
        qubits: config.qubits,
        shots: config.shots,
        seed: config.seed,
        counts,
    })
}

fn run_local(config: &RunConfig) -> Result<Counts> {
    let mut simulator = StateSimulator::initialize(config.qubits)?;
    simulator.apply_hadamard_all()?;

    match config.seed {
        Some(seed) => simulator.run_seeded(config.shots, seed),
        None => simulator.run(config.shots, &mut StdRng::from_entropy()),
    }
}

impl fmt::Display for Backend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Backend {
    type Err = SimulatorError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "local_simulator" | "qasm_simulator" => Ok(Backend::LocalSimulator),
            other => Err(SimulatorError::invalid_configuration(format!(
                "unknown backend '{}'",
                other
            ))),
        }
    }
}

/// The outcome of executing a circuit on a backend
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExecutionResult {
    pub backend: Backend,
    pub qubits: usize,
    pub shots: usize,
    pub seed: Option<u64>,
    pub counts: Counts,
}
