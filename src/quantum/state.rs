// src/quantum/state.rs
//! Quantum state representations
//!
//! A register of n qubits is held as 2^n complex amplitudes over the
//! computational basis. Qubit 0 is the most significant bit of a basis index.

use std::fmt::{self, Display};
use num_complex::Complex64;
use ndarray::{Array1, Array2};

use crate::error::{Result, SimulatorError};

/// Tolerance used when checking normalization
pub const NORM_TOLERANCE: f64 = 1e-10;

/// Largest register that can be allocated (2^24 amplitudes)
pub const MAX_QUBITS: usize = 24;

/// Number of amplitudes of a `qubit_count`-qubit register
pub fn register_dimension(qubit_count: usize) -> Result<usize> {
    if qubit_count > MAX_QUBITS {
        return Err(SimulatorError::invalid_configuration(format!(
            "qubit count {} exceeds the maximum of {}",
            qubit_count, MAX_QUBITS
        )));
    }
    Ok(1 << qubit_count)
}

/// State vector representation of a quantum register
#[derive(Clone, Debug, PartialEq)]
pub struct StateVector {
    /// Number of qubits
    qubit_count: usize,

    /// The state vector as an array of complex amplitudes
    amplitudes: Array1<Complex64>,
}

impl StateVector {
    /// Create a new state vector with the given amplitudes
    pub fn new(qubit_count: usize, amplitudes: Array1<Complex64>) -> Result<Self> {
        let expected = register_dimension(qubit_count)?;

        if amplitudes.len() != expected {
            return Err(SimulatorError::DimensionMismatch {
                expected,
                actual: amplitudes.len(),
            });
        }

        let state = StateVector {
            qubit_count,
            amplitudes,
        };

        let norm_sqr = state.norm_sqr();
        if (norm_sqr - 1.0).abs() >= NORM_TOLERANCE {
            return Err(SimulatorError::NotNormalized(norm_sqr));
        }

        Ok(state)
    }

    /// Create a new state vector in the computational basis state |index⟩
    pub fn computational_basis(qubit_count: usize, index: usize) -> Result<Self> {
        let dim = register_dimension(qubit_count)?;

        if index >= dim {
            return Err(SimulatorError::invalid_configuration(format!(
                "basis index {} is out of range for {}-qubit state",
                index, qubit_count
            )));
        }

        let mut amplitudes = Array1::zeros(dim);
        amplitudes[index] = Complex64::new(1.0, 0.0);

        Ok(StateVector {
            qubit_count,
            amplitudes,
        })
    }

    /// Create the zero state |00...0⟩
    pub fn zero_state(qubit_count: usize) -> Result<Self> {
        Self::computational_basis(qubit_count, 0)
    }

    /// Return every qubit to |0⟩, keeping the register size
    pub fn reset(&mut self) {
        self.amplitudes.fill(Complex64::new(0.0, 0.0));
        self.amplitudes[0] = Complex64::new(1.0, 0.0);
    }

    /// Number of qubits in the register
    pub fn qubit_count(&self) -> usize {
        self.qubit_count
    }

    /// Dimension of the Hilbert space (2^n for n qubits)
    pub fn dimension(&self) -> usize {
        self.amplitudes.len()
    }

    /// Get a reference to the amplitudes
    pub fn amplitudes(&self) -> &Array1<Complex64> {
        &self.amplitudes
    }

    /// Sum of squared amplitude magnitudes
    pub fn norm_sqr(&self) -> f64 {
        self.amplitudes.iter().map(|amp| amp.norm_sqr()).sum()
    }

    /// Check that the squared magnitudes sum to one
    pub fn is_normalized(&self) -> bool {
        (self.norm_sqr() - 1.0).abs() < NORM_TOLERANCE
    }

    /// Calculate the probability of measuring the given basis state
    pub fn probability(&self, index: usize) -> f64 {
        self.amplitudes
            .get(index)
            .map_or(0.0, |amp| amp.norm_sqr())
    }

    /// Probabilities of every basis state, indexed like the amplitudes
    pub fn probabilities(&self) -> Vec<f64> {
        self.amplitudes.iter().map(|amp| amp.norm_sqr()).collect()
    }

    /// The bit string labelling basis state `index`, qubit 0 first
    pub fn bitstring(&self, index: usize) -> String {
        format!("{:0width$b}", index, width = self.qubit_count)
    }

    /// Tensor product with another state, `self` taking the leading qubits
    pub fn tensor(&self, other: &Self) -> Self {
        let other_dim = other.dimension();
        let mut amplitudes = Array1::zeros(self.dimension() * other_dim);

        for (i, a) in self.amplitudes.iter().enumerate() {
            for (j, b) in other.amplitudes.iter().enumerate() {
                amplitudes[i * other_dim + j] = a * b;
            }
        }

        StateVector {
            qubit_count: self.qubit_count + other.qubit_count,
            amplitudes,
        }
    }

    /// Apply a 2x2 unitary to one qubit, overwriting the amplitudes
    ///
    /// Every pair of basis states differing only in `qubit` is mixed by the
    /// matrix; the rest of the register is untouched.
    pub fn apply_single_qubit(&mut self, matrix: &Array2<Complex64>, qubit: usize) -> Result<()> {
        if qubit >= self.qubit_count {
            return Err(SimulatorError::QubitOutOfRange {
                qubit,
                qubit_count: self.qubit_count,
            });
        }

        if matrix.dim() != (2, 2) {
            return Err(SimulatorError::DimensionMismatch {
                expected: 2,
                actual: matrix.nrows(),
            });
        }

        let (m00, m01) = (matrix[[0, 0]], matrix[[0, 1]]);
        let (m10, m11) = (matrix[[1, 0]], matrix[[1, 1]]);

        // Big-endian: qubit 0 is the highest bit
        let mask = 1 << (self.qubit_count - 1 - qubit);

        for i in 0..self.dimension() {
            if i & mask != 0 {
                continue;
            }
            let j = i | mask;
            let a0 = self.amplitudes[i];
            let a1 = self.amplitudes[j];
            self.amplitudes[i] = m00 * a0 + m01 * a1;
            self.amplitudes[j] = m10 * a0 + m11 * a1;
        }

        Ok(())
    }

    /// Apply a full-register matrix, returning the transformed state
    pub fn apply_matrix(&self, matrix: &Array2<Complex64>) -> Result<Self> {
        let dim = self.dimension();

        if matrix.dim() != (dim, dim) {
            return Err(SimulatorError::DimensionMismatch {
                expected: dim,
                actual: matrix.nrows(),
            });
        }

        Ok(StateVector {
            qubit_count: self.qubit_count,
            amplitudes: matrix.dot(&self.amplitudes),
        })
    }
}

impl Display for StateVector {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "{}-qubit state:", self.qubit_count)?;

        let mut has_entries = false;

        for (i, amp) in self.amplitudes.iter().enumerate() {
            let prob = amp.norm_sqr();
            if prob > NORM_TOLERANCE {
                has_entries = true;
                writeln!(
                    f,
                    "  ({:.6}{:+.6}i) |{}⟩ [{:.1}%]",
                    amp.re,
                    amp.im,
                    self.bitstring(i),
                    prob * 100.0
                )?;
            }
        }

        if !has_entries {
            writeln!(f, "  (zero state)")?;
        }

        Ok(())
    }
}
