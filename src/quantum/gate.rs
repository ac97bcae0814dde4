//! Quantum gates
//!
//! Only the single-qubit Hadamard gate is provided. Gates are exposed as a
//! 2x2 unitary matrix; applying one to a register updates the amplitudes in
//! place, and the tensor-product helpers build the equivalent full-register
//! operator for verification.

use std::fmt::Debug;
use log::trace;
use num_complex::Complex64;
use ndarray::{array, Array2};

use crate::error::Result;
use super::state::StateVector;

/// Common complex numbers used in quantum gates
pub mod constants {
    use num_complex::Complex64;

    /// 1/sqrt(2)
    pub const FRAC_1_SQRT_2: f64 = std::f64::consts::FRAC_1_SQRT_2;

    pub const ZERO: Complex64 = Complex64::new(0.0, 0.0);
    pub const ONE: Complex64 = Complex64::new(1.0, 0.0);
}

/// A gate acting on a single qubit
pub trait QuantumGate: Debug {
    /// Display name of the gate
    fn name(&self) -> &'static str;

    /// The 2x2 unitary matrix of the gate
    fn matrix(&self) -> Array2<Complex64>;

    /// Apply the gate to one qubit of a register, in place
    fn apply_to_qubit(&self, state: &mut StateVector, qubit: usize) -> Result<()> {
        state.apply_single_qubit(&self.matrix(), qubit)
    }

    /// Apply the gate to every qubit of a register, one qubit at a time
    fn apply_to_all(&self, state: &mut StateVector) -> Result<()> {
        for qubit in 0..state.qubit_count() {
            trace!("Applying {} to qubit {}", self.name(), qubit);
            self.apply_to_qubit(state, qubit)?;
        }
        Ok(())
    }

    /// The operator obtained by applying the gate to each of `qubit_count`
    /// qubits, i.e. the `qubit_count`-fold tensor power of [`Self::matrix`]
    fn tensor_power(&self, qubit_count: usize) -> Array2<Complex64> {
        let single = self.matrix();
        let mut result = array![[constants::ONE]];
        for _ in 0..qubit_count {
            result = kron(&result, &single);
        }
        result
    }
}

/// The Hadamard gate, H = (1/sqrt 2) [[1, 1], [1, -1]]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Hadamard;

impl QuantumGate for Hadamard {
    fn name(&self) -> &'static str {
        "H"
    }

    fn matrix(&self) -> Array2<Complex64> {
        let factor = Complex64::new(constants::FRAC_1_SQRT_2, 0.0);
        array![
            [factor, factor],
            [factor, -factor]
        ]
    }
}

/// Kronecker product `a ⊗ b`
///
/// The left operand occupies the most significant bits of the row and column
/// index, matching the big-endian qubit order of [`StateVector`].
pub fn kron(a: &Array2<Complex64>, b: &Array2<Complex64>) -> Array2<Complex64> {
    let (a_rows, a_cols) = a.dim();
    let (b_rows, b_cols) = b.dim();

    let mut result = Array2::zeros((a_rows * b_rows, a_cols * b_cols));

    for i in 0..a_rows {
        for j in 0..a_cols {
            for k in 0..b_rows {
                for l in 0..b_cols {
                    result[[i * b_rows + k, j * b_cols + l]] = a[[i, j]] * b[[k, l]];
                }
            }
        }
    }

    result
}

/// Check that `matrix` is unitary (U†U = I) within `epsilon`
pub fn is_unitary(matrix: &Array2<Complex64>, epsilon: f64) -> bool {
    let (rows, cols) = matrix.dim();
    if rows != cols {
        return false;
    }

    let adjoint = matrix.t().mapv(|z| z.conj());
    let product = adjoint.dot(matrix);

    product.indexed_iter().all(|((i, j), value)| {
        let expected = if i == j { constants::ONE } else { constants::ZERO };
        (value - expected).norm() < epsilon
    })
}
