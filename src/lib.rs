//! Hadamard Superposition Simulator
//!
//! This crate simulates a register of qubits prepared in |0...0⟩, puts every
//! qubit into superposition with a Hadamard gate, and samples measurement
//! outcomes into a shot histogram. State representation, gate application
//! and sampling are kept as separate pieces composed by the caller.

pub mod error;
pub mod quantum;
pub mod simulators;
pub mod counts;
pub mod config;
pub mod backend;

pub use backend::{execute, Backend, ExecutionResult};
pub use config::RunConfig;
pub use counts::Counts;
pub use error::{Result, SimulatorError};
pub use simulators::{MeasurementOutcome, StateSimulator};

// Create a prelude module for convenient imports
pub mod prelude {
    pub use crate::quantum::{Hadamard, QuantumGate, StateVector};
    pub use crate::{execute, Backend, Counts, ExecutionResult, RunConfig, SimulatorError, StateSimulator};
}

// Version and crate information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const CRATE_NAME: &str = env!("CARGO_PKG_NAME");
