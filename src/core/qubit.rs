// src/core/qubit.rs

use super::random::RandomSource;
use crate::operations::Gate;
use num_complex::Complex;
use num_traits::{One, Zero};
use std::fmt;

/// A two-amplitude state container: `alpha` weights |0>, `beta` weights |1>.
///
/// This is a toy model, not a physical qubit. Normalization is intended
/// (`|alpha|² + |beta|² = 1`) and all four gates preserve it, but nothing
/// enforces it; see `validation::check_qubit_normalization`.
///
/// A qubit lives for one transformation call: it is created in |0>, mutated
/// by gates, and collapsed by a single measurement.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Qubit {
    alpha: Complex<f64>,
    beta: Complex<f64>,
}

impl Qubit {
    /// A qubit in basis state |0>.
    pub fn new() -> Self {
        Self {
            alpha: Complex::one(),
            beta: Complex::zero(),
        }
    }

    /// A qubit with explicit amplitudes. Not normalized.
    pub fn from_amplitudes(alpha: Complex<f64>, beta: Complex<f64>) -> Self {
        Self { alpha, beta }
    }

    /// Resets to |0>.
    pub fn initialize(&mut self) {
        self.alpha = Complex::one();
        self.beta = Complex::zero();
    }

    /// Amplitude of |0>.
    pub fn alpha(&self) -> Complex<f64> {
        self.alpha
    }

    /// Amplitude of |1>.
    pub fn beta(&self) -> Complex<f64> {
        self.beta
    }

    /// Applies a gate in place.
    pub fn apply(&mut self, gate: Gate) {
        let m = gate.matrix();
        let (a, b) = (self.alpha, self.beta);
        self.alpha = m[0][0] * a + m[0][1] * b;
        self.beta = m[1][0] * a + m[1][1] * b;
    }

    /// Applies gates in order.
    pub fn apply_all(&mut self, gates: &[Gate]) {
        for gate in gates {
            self.apply(*gate);
        }
    }

    /// Probability of measuring 0, `|alpha|²`.
    pub fn probability_zero(&self) -> f64 {
        self.alpha.norm_sqr()
    }

    /// `2·|alpha·beta|`: 0 for a basis state, 1 for an equal superposition.
    pub fn superposition_strength(&self) -> f64 {
        2.0 * (self.alpha * self.beta).norm()
    }

    /// True when one amplitude is exactly zero.
    pub fn is_basis_state(&self) -> bool {
        self.alpha.is_zero() || self.beta.is_zero()
    }

    /// Measures with a draw from `rng`, collapsing the state.
    ///
    /// Once collapsed, measuring again without applying a gate returns the
    /// same bit: `p0` is then exactly 0 or 1.
    pub fn measure(&mut self, rng: &mut dyn RandomSource) -> u8 {
        let r = rng.next_unit();
        self.measure_with(r)
    }

    /// Measures against an explicit draw `r` in `[0, 1)`.
    pub fn measure_with(&mut self, r: f64) -> u8 {
        let bit = if r < self.probability_zero() { 0 } else { 1 };
        self.collapse(bit);
        bit
    }

    /// Forces the qubit into basis state |bit>.
    pub fn collapse(&mut self, bit: u8) {
        if bit == 0 {
            self.alpha = Complex::one();
            self.beta = Complex::zero();
        } else {
            self.alpha = Complex::zero();
            self.beta = Complex::one();
        }
    }
}

impl Default for Qubit {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Qubit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Qubit[{:.4}|0> + {:.4}|1>]", self.alpha, self.beta)
    }
}

/// One measured bit plus the strength read just before measuring.
///
/// Consumed once by the character transformer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MeasurementResult {
    /// Classical outcome, 0 or 1.
    pub measurement: u8,
    /// Superposition strength in `[0, 1]` of the pre-measurement state.
    pub strength: f64,
}

impl MeasurementResult {
    /// Pairs a bit with a strength.
    pub fn new(measurement: u8, strength: f64) -> Self {
        Self { measurement, strength }
    }

    /// The opposite bit.
    pub fn complement(&self) -> u8 {
        1 - self.measurement.min(1)
    }
}
