use num_complex::Complex64;
use ndarray::{array, Array1};

use hadamard_sim::quantum::gate::{constants, is_unitary, kron};
use hadamard_sim::quantum::state::MAX_QUBITS;
use hadamard_sim::quantum::{Hadamard, QuantumGate, StateVector};
use hadamard_sim::SimulatorError;

fn complex_approx_eq(a: Complex64, b: Complex64, epsilon: f64) -> bool {
    (a - b).norm() < epsilon
}

fn states_approx_eq(a: &StateVector, b: &StateVector, epsilon: f64) -> bool {
    a.qubit_count() == b.qubit_count()
        && a.amplitudes()
            .iter()
            .zip(b.amplitudes().iter())
            .all(|(x, y)| complex_approx_eq(*x, *y, epsilon))
}

#[test]
fn test_hadamard_matrix() {
    let h = Hadamard.matrix();
    let f = constants::FRAC_1_SQRT_2;

    assert!(complex_approx_eq(h[[0, 0]], Complex64::new(f, 0.0), 1e-15));
    assert!(complex_approx_eq(h[[0, 1]], Complex64::new(f, 0.0), 1e-15));
    assert!(complex_approx_eq(h[[1, 0]], Complex64::new(f, 0.0), 1e-15));
    assert!(complex_approx_eq(h[[1, 1]], Complex64::new(-f, 0.0), 1e-15));
    assert_eq!(Hadamard.name(), "H");
}

#[test]
fn test_hadamard_on_basis_states() {
    let f = constants::FRAC_1_SQRT_2;

    let mut plus = StateVector::zero_state(1).unwrap();
    Hadamard.apply_to_qubit(&mut plus, 0).unwrap();
    assert!(complex_approx_eq(plus.amplitudes()[0], Complex64::new(f, 0.0), 1e-12));
    assert!(complex_approx_eq(plus.amplitudes()[1], Complex64::new(f, 0.0), 1e-12));

    let mut minus = StateVector::computational_basis(1, 1).unwrap();
    Hadamard.apply_to_qubit(&mut minus, 0).unwrap();
    assert!(complex_approx_eq(minus.amplitudes()[0], Complex64::new(f, 0.0), 1e-12));
    assert!(complex_approx_eq(minus.amplitudes()[1], Complex64::new(-f, 0.0), 1e-12));
}

#[test]
fn test_in_place_matches_full_tensor_product() {
    // An arbitrary normalized 3-qubit state
    let raw: Vec<Complex64> = (0..8)
        .map(|i| Complex64::new(i as f64 + 1.0, (i % 3) as f64 - 1.0))
        .collect();
    let norm = raw.iter().map(|z| z.norm_sqr()).sum::<f64>().sqrt();
    let state = StateVector::new(3, Array1::from(raw).mapv(|z| z / norm)).unwrap();

    let mut in_place = state.clone();
    Hadamard.apply_to_all(&mut in_place).unwrap();

    let full = state.apply_matrix(&Hadamard.tensor_power(3)).unwrap();

    assert!(states_approx_eq(&in_place, &full, 1e-12));
    assert!(in_place.is_normalized());
}

#[test]
fn test_qubit_zero_is_leading_bit() {
    let mut state = StateVector::zero_state(2).unwrap();
    Hadamard.apply_to_qubit(&mut state, 0).unwrap();

    // Only |00⟩ and |10⟩ are populated
    assert!(state.probability(0) > 0.49);
    assert!(state.probability(2) > 0.49);
    assert_eq!(state.bitstring(2), "10");
    assert!(state.probability(1) < 1e-12);
    assert!(state.probability(3) < 1e-12);
}

#[test]
fn test_tensor_of_plus_states() {
    let mut plus = StateVector::zero_state(1).unwrap();
    Hadamard.apply_to_qubit(&mut plus, 0).unwrap();

    let mut pair = StateVector::zero_state(2).unwrap();
    Hadamard.apply_to_all(&mut pair).unwrap();

    assert!(states_approx_eq(&plus.tensor(&plus), &pair, 1e-12));
}

#[test]
fn test_kron_of_hadamards() {
    let h = Hadamard.matrix();
    let hh = kron(&h, &h);

    for value in hh.iter() {
        assert!((value.norm() - 0.5).abs() < 1e-12);
    }
    // The sign pattern of H⊗H at (3, 3) is (+)(-)(-) = +
    assert!(complex_approx_eq(hh[[3, 3]], Complex64::new(0.5, 0.0), 1e-12));
    assert!(complex_approx_eq(hh[[1, 1]], Complex64::new(-0.5, 0.0), 1e-12));
    assert!(is_unitary(&hh, 1e-12));
}

#[test]
fn test_non_unitary_detected() {
    let m = array![
        [Complex64::new(1.0, 0.0), Complex64::new(1.0, 0.0)],
        [Complex64::new(0.0, 0.0), Complex64::new(1.0, 0.0)]
    ];
    assert!(!is_unitary(&m, 1e-12));
}

#[test]
fn test_qubit_out_of_range() {
    let mut state = StateVector::zero_state(2).unwrap();
    let err = Hadamard.apply_to_qubit(&mut state, 2).unwrap_err();
    assert_eq!(err, SimulatorError::QubitOutOfRange { qubit: 2, qubit_count: 2 });
}

#[test]
fn test_state_vector_validation() {
    let err = StateVector::new(2, Array1::from(vec![Complex64::new(1.0, 0.0); 3])).unwrap_err();
    assert_eq!(err, SimulatorError::DimensionMismatch { expected: 4, actual: 3 });

    let err = StateVector::new(1, Array1::from(vec![Complex64::new(1.0, 0.0); 2])).unwrap_err();
    assert!(matches!(err, SimulatorError::NotNormalized(n) if (n - 2.0).abs() < 1e-12));

    let err = StateVector::computational_basis(2, 4).unwrap_err();
    assert!(matches!(err, SimulatorError::InvalidConfiguration(_)));
}

#[test]
fn test_display_lists_populated_kets() {
    let mut state = StateVector::zero_state(2).unwrap();
    Hadamard.apply_to_qubit(&mut state, 1).unwrap();

    let text = state.to_string();
    assert!(text.starts_with("2-qubit state:"));
    assert!(text.contains("|00⟩ [50.0%]"));
    assert!(text.contains("|01⟩ [50.0%]"));
    assert!(!text.contains("|10⟩"));
}

#[test]
fn test_oversized_registers_are_rejected() {
    let amplitudes = Array1::from(vec![Complex64::new(1.0, 0.0)]);
    let err = StateVector::new(64, amplitudes).unwrap_err();
    assert!(matches!(err, SimulatorError::InvalidConfiguration(_)));

    let err = StateVector::computational_basis(70, 0).unwrap_err();
    assert!(matches!(err, SimulatorError::InvalidConfiguration(_)));

    let err = StateVector::zero_state(MAX_QUBITS + 1).unwrap_err();
    assert!(matches!(err, SimulatorError::InvalidConfiguration(_)));

    assert!(StateVector::zero_state(10).is_ok());
}

#[test]
fn test_reset_keeps_register_size() {
    let mut state = StateVector::zero_state(3).unwrap();
    Hadamard.apply_to_all(&mut state).unwrap();
    state.reset();

    assert_eq!(state, StateVector::zero_state(3).unwrap());
}
