//! Quantum states and gates

pub mod gate;
pub mod state;

pub use gate::{Hadamard, QuantumGate};
pub use state::StateVector;
