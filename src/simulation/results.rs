// src/simulation/results.rs
use std::collections::BTreeMap;
use std::fmt;

/// Holds the results of a circuit simulation: the classical bit recorded for
/// every measured qubit.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SimulationResult {
    outcomes: BTreeMap<usize, u8>,
}

impl SimulationResult {
    /// Creates a new, empty result set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records the measured bit of a qubit, replacing any earlier record.
    pub fn record(&mut self, qubit: usize, bit: u8) {
        self.outcomes.insert(qubit, bit);
    }

    /// Gets the bit recorded for `qubit`, if it was measured.
    pub fn bit(&self, qubit: usize) -> Option<u8> {
        self.outcomes.get(&qubit).copied()
    }

    /// Returns a reference to the map containing all recorded outcomes.
    pub fn outcomes(&self) -> &BTreeMap<usize, u8> {
        &self.outcomes
    }

    /// Measured bits as a string, highest qubit index first.
    ///
    /// This is the conventional register readout order: for a 3-qubit
    /// register where only q0 measured 1 the string is `"001"`.
    pub fn bitstring(&self) -> String {
        self.outcomes
            .values()
            .rev()
            .map(|bit| if *bit == 1 { '1' } else { '0' })
            .collect()
    }

    /// True when nothing was measured.
    pub fn is_empty(&self) -> bool {
        self.outcomes.is_empty()
    }
}

impl fmt::Display for SimulationResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Simulation Results:")?;
        if self.outcomes.is_empty() {
            writeln!(f, "  No qubits were measured.")?;
        } else {
            writeln!(f, "  Bitstring: {}", self.bitstring())?;
        }
        Ok(())
    }
}
