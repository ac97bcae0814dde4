//! Quantum circuit simulators
//!
//! This module provides the local statevector simulator used to execute the
//! Hadamard-then-measure circuit on classical hardware.

pub mod statevector;

pub use statevector::{
    StateSimulator,
    MeasurementOutcome,
    MAX_QUBITS,
};
