// src/simulation/mod.rs

//! Runs register circuits (`qecho::circuits::Circuit`).
//!
//! `CircuitBackend` is the narrow capability the byte-level echo depends on:
//! simulate a circuit and return the sampled bits. `Simulator` is the bundled
//! state-vector implementation; other backends can be plugged in for parity
//! testing.

mod results;
pub(crate) mod engine;

pub use results::SimulationResult;

use crate::circuits::Circuit;
use crate::core::{RandomSource, Result};
use crate::operations::Operation;
use crate::validation::check_normalization;
use engine::SimulationEngine;
use tracing::{debug, warn};

/// Something that can simulate a register circuit and sample its measurements.
pub trait CircuitBackend {
    /// Executes `circuit` once, drawing measurement randomness from `rng`.
    fn simulate(&self, circuit: &Circuit, rng: &mut dyn RandomSource) -> Result<SimulationResult>;

    /// Short name reported by health checks.
    fn name(&self) -> &'static str;
}

/// The bundled state-vector simulator.
#[derive(Debug, Default, Clone, Copy)]
pub struct Simulator;

impl Simulator {
    /// Creates a new Simulator with default settings.
    pub fn new() -> Self {
        Self
    }

    /// Runs a simulation of the provided circuit.
    ///
    /// # Returns
    /// * `Ok(SimulationResult)` holding the bits of every measured qubit.
    /// * `Err(EchoError::Simulation)` if the register is too wide or an
    ///   operation addresses a qubit outside it.
    pub fn run(&self, circuit: &Circuit, rng: &mut dyn RandomSource) -> Result<SimulationResult> {
        if circuit.is_empty() {
            return Ok(SimulationResult::new());
        }

        let mut engine = SimulationEngine::init(circuit.width())?;
        let mut result = SimulationResult::new();
        debug!(width = circuit.width(), operations = circuit.len(), "simulating circuit");

        for op in circuit.operations() {
            match op {
                Operation::Measure { targets } => {
                    if let Err(e) = check_normalization(engine.state(), None) {
                        warn!(error = %e, "register drifted from unit norm before measurement");
                    }
                    engine.measure(targets, rng, &mut result)?;
                }
                _ => engine.apply_operation(op)?,
            }
        }

        Ok(result)
    }
}

impl CircuitBackend for Simulator {
    fn simulate(&self, circuit: &Circuit, rng: &mut dyn RandomSource) -> Result<SimulationResult> {
        self.run(circuit, rng)
    }

    fn name(&self) -> &'static str {
        "state-vector"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::circuits::CircuitBuilder;
    use crate::core::{EchoError, SeededSource};
    use crate::operations::Gate;

    #[test]
    fn test_empty_circuit_has_no_outcomes() -> Result<()> {
        let mut rng = SeededSource::new(1);
        let result = Simulator::new().run(&CircuitBuilder::new().build(), &mut rng)?;
        assert!(result.is_empty());
        Ok(())
    }

    #[test]
    fn test_basis_preparation_is_deterministic() -> Result<()> {
        let circuit = CircuitBuilder::with_width(4)
            .gate(0, Gate::BitFlip)
            .gate(3, Gate::BitFlip)
            .measure_all()
            .build();
        let mut rng = SeededSource::new(99);
        let result = Simulator::new().simulate(&circuit, &mut rng)?;
        assert_eq!(result.bitstring(), "1001");
        Ok(())
    }

    #[test]
    fn test_reverse_style_cx_chain() -> Result<()> {
        // q0=1 controls q3; q1=0 leaves q2 alone.
        let circuit = CircuitBuilder::with_width(4)
            .gate(0, Gate::BitFlip)
            .cx(0, 3)
            .cx(1, 2)
            .measure_all()
            .build();
        let mut rng = SeededSource::new(3);
        let result = Simulator::new().run(&circuit, &mut rng)?;
        assert_eq!(result.bitstring(), "1001");
        Ok(())
    }

    #[test]
    fn test_too_wide_register_is_simulation_error() {
        let mut rng = SeededSource::new(3);
        let wide = CircuitBuilder::with_width(30).measure_all().build();
        match Simulator::new().run(&wide, &mut rng) {
            Err(EchoError::Simulation { message }) => assert!(message.contains("30")),
            other => panic!("expected simulation error, got {:?}", other),
        }
    }
}
