// src/core/random.rs

//! Injectable randomness for measurement and pseudo-quantum draws.
//!
//! Every transformation takes a `&mut dyn RandomSource` instead of reaching
//! for a process-global generator, so a request owns its randomness and tests
//! can pin outcomes.

use super::qubit::{MeasurementResult, Qubit};
use rand::SeedableRng;
use rand::distr::{Distribution, StandardUniform};
use rand::rngs::StdRng;

/// A provider of uniform draws in `[0, 1)`.
pub trait RandomSource {
    /// Next uniform value in `[0, 1)`.
    fn next_unit(&mut self) -> f64;

    /// Reads the qubit's superposition strength, then measures it.
    ///
    /// The strength is taken from the pre-measurement amplitudes; after this
    /// call the qubit sits in a basis state.
    fn observe(&mut self, qubit: &mut Qubit) -> MeasurementResult {
        let strength = qubit.superposition_strength();
        let r = self.next_unit();
        let measurement = qubit.measure_with(r);
        MeasurementResult::new(measurement, strength)
    }

    /// Uniform index in `0..len`. `len` must be non-zero.
    fn pick_index(&mut self, len: usize) -> usize {
        let idx = (self.next_unit() * len as f64) as usize;
        idx.min(len.saturating_sub(1))
    }
}

/// A `StdRng`-backed source.
#[derive(Debug)]
pub struct SeededSource {
    rng: StdRng,
}

impl SeededSource {
    /// Deterministic source for a given seed.
    pub fn new(seed: u64) -> Self {
        Self { rng: StdRng::seed_from_u64(seed) }
    }

    /// Source seeded from the thread-local entropy generator.
    pub fn from_entropy() -> Self {
        Self::new(rand::random::<u64>())
    }
}

impl RandomSource for SeededSource {
    fn next_unit(&mut self) -> f64 {
        StandardUniform.sample(&mut self.rng)
    }
}

/// Pins every observation to a fixed measurement and strength.
///
/// Observed qubits are still collapsed to the forced basis state, so the
/// gate logic downstream of a mid-circuit measurement behaves as it would
/// for a real draw with that outcome.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ForcedOutcome {
    measurement: u8,
    strength: f64,
}

impl ForcedOutcome {
    /// `measurement` is clamped to a bit (anything non-zero reads as 1).
    pub fn new(measurement: u8, strength: f64) -> Self {
        Self {
            measurement: u8::from(measurement != 0),
            strength,
        }
    }
}

impl RandomSource for ForcedOutcome {
    fn next_unit(&mut self) -> f64 {
        // Draws near 1.0 measure |1> unless p0 is exactly 1.
        if self.measurement == 1 { 1.0 - f64::EPSILON } else { 0.0 }
    }

    fn observe(&mut self, qubit: &mut Qubit) -> MeasurementResult {
        qubit.collapse(self.measurement);
        MeasurementResult::new(self.measurement, self.strength)
    }
}

/// Replays a fixed list of draws, cycling when exhausted.
#[derive(Debug, Clone, PartialEq)]
pub struct ScriptedSource {
    values: Vec<f64>,
    cursor: usize,
}

impl ScriptedSource {
    /// An empty script always yields `0.0`.
    pub fn new(values: Vec<f64>) -> Self {
        Self { values, cursor: 0 }
    }
}

impl RandomSource for ScriptedSource {
    fn next_unit(&mut self) -> f64 {
        if self.values.is_empty() {
            return 0.0;
        }
        let v = self.values[self.cursor % self.values.len()];
        self.cursor += 1;
        v
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::operations::Gate;

    #[test]
    fn test_seeded_source_is_reproducible() {
        let mut a = SeededSource::new(7);
        let mut b = SeededSource::new(7);
        for _ in 0..16 {
            let (x, y) = (a.next_unit(), b.next_unit());
            assert_eq!(x, y);
            assert!((0.0..1.0).contains(&x));
        }
    }

    #[test]
    fn test_forced_outcome_collapses_qubit() {
        let mut source = ForcedOutcome::new(1, 0.5);
        let mut q = Qubit::new();
        q.apply(Gate::Hadamard);
        let result = source.observe(&mut q);
        assert_eq!(result.measurement, 1);
        assert_eq!(result.strength, 0.5);
        assert!(q.is_basis_state());
        assert_eq!(q.probability_zero(), 0.0);
    }

    #[test]
    fn test_scripted_source_cycles() {
        let mut s = ScriptedSource::new(vec![0.1, 0.9]);
        assert_eq!(s.next_unit(), 0.1);
        assert_eq!(s.next_unit(), 0.9);
        assert_eq!(s.next_unit(), 0.1);
        assert_eq!(ScriptedSource::new(Vec::new()).next_unit(), 0.0);
    }

    #[test]
    fn test_pick_index_bounds() {
        let mut s = ScriptedSource::new(vec![0.0, 0.5, 1.0 - f64::EPSILON]);
        assert_eq!(s.pick_index(4), 0);
        assert_eq!(s.pick_index(4), 2);
        assert_eq!(s.pick_index(4), 3);
    }
}
