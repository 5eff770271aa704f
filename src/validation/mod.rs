// src/validation/mod.rs

//! Normalization checks for qubits and register states.
//!
//! The transformation model never enforces unit norm; these helpers let the
//! simulator and the probe endpoint report when a state has drifted.

use crate::core::{EchoError, Qubit, Result};
use num_complex::Complex;

const DEFAULT_NORM_TOLERANCE: f64 = 1e-9;

/// Checks that the squared amplitudes of `state` sum to 1 within `tolerance`
/// (default `1e-9`).
///
/// # Returns
/// * `Ok(())` if normalized within tolerance.
/// * `Err(EchoError::Incoherence)` otherwise.
pub fn check_normalization(state: &[Complex<f64>], tolerance: Option<f64>) -> Result<()> {
    let tolerance = tolerance.unwrap_or(DEFAULT_NORM_TOLERANCE);
    let norm_sq: f64 = state.iter().map(|c| c.norm_sqr()).sum();
    if (norm_sq - 1.0).abs() > tolerance {
        return Err(EchoError::Incoherence {
            message: format!("squared norm is {:.12}, expected 1", norm_sq),
        });
    }
    Ok(())
}

/// `check_normalization` for a single qubit's two amplitudes.
pub fn check_qubit_normalization(qubit: &Qubit, tolerance: Option<f64>) -> Result<()> {
    check_normalization(&[qubit.alpha(), qubit.beta()], tolerance)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::operations::Gate;

    #[test]
    fn test_gates_preserve_norm() {
        let mut q = Qubit::new();
        for gate in [Gate::Hadamard, Gate::RotateY(1.3), Gate::PhaseFlip, Gate::BitFlip] {
            q.apply(gate);
            assert!(check_qubit_normalization(&q, None).is_ok());
        }
    }

    #[test]
    fn test_unnormalized_is_incoherent() {
        let q = Qubit::from_amplitudes(Complex::new(1.0, 0.0), Complex::new(1.0, 0.0));
        match check_qubit_normalization(&q, None) {
            Err(EchoError::Incoherence { message }) => assert!(message.contains("2.0")),
            other => panic!("expected incoherence, got {:?}", other),
        }
        assert!(check_qubit_normalization(&q, Some(1.5)).is_ok());
    }
}
