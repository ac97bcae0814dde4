//! Statevector simulator for the Hadamard-then-measure circuit
//!
//! The simulator owns one register, applies a Hadamard to every qubit and
//! then samples measurement outcomes from the Born-rule distribution. Sampling
//! never collapses the stored state: every shot draws from the same
//! pre-measurement amplitudes, which is equivalent to re-running the circuit
//! on a fresh register.

use std::fmt;
use log::debug;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::counts::Counts;
use crate::error::{Result, SimulatorError};
use crate::quantum::gate::{Hadamard, QuantumGate};
use crate::quantum::state::{register_dimension, StateVector};

pub use crate::quantum::state::MAX_QUBITS;

/// One basis outcome together with its exact probability
#[derive(Debug, Clone, PartialEq)]
pub struct MeasurementOutcome {
    /// The measured bits, qubit 0 first
    pub bitstring: String,
    /// The probability of this outcome
    pub probability: f64,
}

impl fmt::Display for MeasurementOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (p={})", self.bitstring, self.probability)
    }
}

/// Check that a qubit count is usable
pub fn validate_qubit_count(qubit_count: usize) -> Result<()> {
    if qubit_count < 1 {
        return Err(SimulatorError::invalid_configuration(
            "qubit count must be at least 1, got 0",
        ));
    }
    register_dimension(qubit_count)?;
    Ok(())
}

/// Check that a shot count is usable
pub fn validate_shots(shots: usize) -> Result<()> {
    if shots < 1 {
        return Err(SimulatorError::invalid_configuration(
            "shot count must be at least 1, got 0",
        ));
    }
    Ok(())
}

/// A statevector simulator for an n-qubit register
#[derive(Clone, Debug)]
pub struct StateSimulator {
    /// The current state of the simulator
    state: StateVector,
}

impl StateSimulator {
    /// Create a simulator with every qubit in |0⟩
    pub fn initialize(qubit_count: usize) -> Result<Self> {
        validate_qubit_count(qubit_count)?;
        debug!("Initializing {}-qubit register", qubit_count);

        Ok(StateSimulator {
            state: StateVector::zero_state(qubit_count)?,
        })
    }

    /// Get the current state vector
    pub fn state(&self) -> &StateVector {
        &self.state
    }

    /// Get the number of qubits in the simulator
    pub fn qubit_count(&self) -> usize {
        self.state.qubit_count()
    }

    /// Reset the simulator to the |0...0⟩ state
    pub fn reset(&mut self) {
        self.state.reset();
    }

    /// Apply a Hadamard gate to each qubit independently
    ///
    /// From |0...0⟩ this yields the uniform superposition, every amplitude
    /// equal to (1/sqrt 2)^n.
    pub fn apply_hadamard_all(&mut self) -> Result<()> {
        Hadamard.apply_to_all(&mut self.state)
    }

    /// Born-rule probabilities of every basis state
    pub fn probabilities(&self) -> Vec<f64> {
        self.state.probabilities()
    }

    /// The exact outcome distribution, most likely outcomes first
    ///
    /// Outcomes with zero probability are omitted; ties are ordered by
    /// bit string.
    pub fn outcome_distribution(&self) -> Vec<MeasurementOutcome> {
        let mut outcomes: Vec<MeasurementOutcome> = self
            .probabilities()
            .into_iter()
            .enumerate()
            .filter(|(_, probability)| *probability > 1e-10)
            .map(|(index, probability)| MeasurementOutcome {
                bitstring: self.state.bitstring(index),
                probability,
            })
            .collect();

        outcomes.sort_by(|a, b| {
            b.probability
                .total_cmp(&a.probability)
                .then_with(|| a.bitstring.cmp(&b.bitstring))
        });

        outcomes
    }

    /// Draw one basis-state index from the measurement distribution
    pub fn sample_index<R: Rng + ?Sized>(&self, rng: &mut R) -> usize {
        let random_val = rng.gen::<f64>();

        let mut cumulative = 0.0;
        let mut last_nonzero = 0;
        for (index, amp) in self.state.amplitudes().iter().enumerate() {
            let prob = amp.norm_sqr();
            if prob == 0.0 {
                continue;
            }
            cumulative += prob;
            last_nonzero = index;
            if random_val < cumulative {
                return index;
            }
        }

        // Rounding can leave the cumulative sum just short of 1.0
        last_nonzero
    }

    /// Measure every qubit once, leaving the stored state untouched
    pub fn measure_once<R: Rng + ?Sized>(&self, rng: &mut R) -> String {
        self.state.bitstring(self.sample_index(rng))
    }

    /// Sample `shots` measurements and aggregate them into a histogram
    pub fn run<R: Rng + ?Sized>(&self, shots: usize, rng: &mut R) -> Result<Counts> {
        validate_shots(shots)?;
        debug!("Running {} shots on {}-qubit register", shots, self.qubit_count());

        let mut counts = Counts::new();
        for _ in 0..shots {
            counts.record(self.measure_once(rng));
        }

        debug!("Collected {} outcomes over {} shots", counts.len(), counts.total());
        Ok(counts)
    }

    /// Run with a generator seeded from `seed`, for reproducible histograms
    pub fn run_seeded(&self, shots: usize, seed: u64) -> Result<Counts> {
        let mut rng = StdRng::seed_from_u64(seed);
        self.run(shots, &mut rng)
    }
}
