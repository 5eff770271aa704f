// src/echo/mod.rs

//! Byte-level register echo.
//!
//! The text's bits prepare a register (one qubit per bit, capped at
//! `max_qubits`), the echo type adds a layer of gates, and a single sampled
//! bitstring then drives per-character edits. The bitstring is read with
//! the highest qubit first and indexed cyclically by character position.

mod pseudo;

pub use pseudo::pseudo_echo;

use crate::circuits::{Circuit, CircuitBuilder};
use crate::core::echo_constants::{GHOST_ANGLE, MAX_REGISTER_QUBITS};
use crate::core::{EchoConfig, RandomSource, Result};
use crate::dispatch::EchoType;
use crate::operations::Gate;
use crate::simulation::CircuitBackend;
use crate::transform::tables;
use tracing::debug;

/// The binary expansion of every character, most significant bit first,
/// padded to eight bits (wider for code points above 255).
///
/// Lazy, so callers that only need a prefix stop early.
pub fn bit_stream(text: &str) -> impl Iterator<Item = u8> + '_ {
    text.chars().flat_map(|c| {
        let code = c as u32;
        let width = (u32::BITS - code.leading_zeros()).max(8);
        (0..width).rev().map(move |shift| ((code >> shift) & 1) as u8)
    })
}

/// All of `text`'s bits, collected.
pub fn text_bits(text: &str) -> Vec<u8> {
    bit_stream(text).collect()
}

/// Builds and runs register echo circuits.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RegisterEcho {
    max_qubits: usize,
    ghost_angle: f64,
}

impl RegisterEcho {
    pub fn new(max_qubits: usize, ghost_angle: f64) -> Self {
        Self { max_qubits, ghost_angle }
    }

    pub fn from_config(config: &EchoConfig) -> Self {
        Self::new(config.max_register_qubits, config.ghost_angle)
    }

    /// Register width used for `text`.
    pub fn width_for(&self, text: &str) -> usize {
        bit_stream(text).take(self.max_qubits).count()
    }

    /// The preparation, echo layer and final measurement for `text`.
    ///
    /// Empty text yields an empty circuit.
    pub fn build_circuit(&self, text: &str, echo_type: EchoType) -> Circuit {
        let bits: Vec<u8> = bit_stream(text).take(self.max_qubits).collect();
        let n = bits.len();
        if n == 0 {
            return Circuit::new();
        }

        let mut builder = CircuitBuilder::with_width(n);
        for (i, bit) in bits.iter().enumerate() {
            if *bit == 1 {
                builder = builder.gate(i, Gate::BitFlip);
            }
        }

        builder = match echo_type {
            EchoType::Scramble => (0..n).fold(builder, |b, i| b.gate(i, Gate::Hadamard)),
            EchoType::Reverse => (0..n / 2).fold(builder, |b, i| b.cx(i, n - 1 - i)),
            EchoType::Ghost => (0..n).fold(builder, |b, i| b.gate(i, Gate::RotateY(self.ghost_angle))),
            EchoType::QuantumCaps => (0..n).fold(builder, |b, i| {
                if i % 2 == 0 {
                    b.gate(i, Gate::Hadamard)
                } else {
                    b.gate(i, Gate::PhaseFlip)
                }
            }),
        };

        builder.measure_all().build()
    }

    /// Runs the echo of `text` on `backend`.
    ///
    /// # Errors
    /// Propagates the backend's `EchoError::Simulation` failures.
    pub fn echo(
        &self,
        text: &str,
        echo_type: EchoType,
        backend: &dyn CircuitBackend,
        rng: &mut dyn RandomSource,
    ) -> Result<String> {
        let circuit = self.build_circuit(text, echo_type);
        if circuit.is_empty() {
            return Ok(text.to_string());
        }

        let result = backend.simulate(&circuit, rng)?;
        let bits = result.bitstring();
        debug!(
            echo_type = echo_type.name(),
            width = circuit.width(),
            backend = backend.name(),
            bits = %bits,
            "register echo sampled"
        );
        Ok(apply_bits(text, &bits, echo_type))
    }
}

impl Default for RegisterEcho {
    fn default() -> Self {
        Self::new(MAX_REGISTER_QUBITS, GHOST_ANGLE)
    }
}

/// Applies a sampled bitstring to `text`. Character `i` reads
/// `bits[i % bits.len()]`; an empty bitstring leaves the text unchanged.
pub fn apply_bits(text: &str, bits: &str, echo_type: EchoType) -> String {
    let bits: Vec<bool> = bits.chars().map(|b| b == '1').collect();
    if bits.is_empty() {
        return text.to_string();
    }

    let mut out = String::with_capacity(text.len());
    for (i, c) in text.chars().enumerate() {
        let set = bits[i % bits.len()];
        match echo_type {
            EchoType::Scramble => {
                let mapped = if set && c.is_alphabetic() { tables::similar(c) } else { None };
                out.push(mapped.unwrap_or(c));
            }
            EchoType::Reverse => {
                if set && c.is_lowercase() {
                    out.extend(c.to_uppercase());
                } else if set {
                    out.extend(c.to_lowercase());
                } else {
                    out.push(c);
                }
            }
            EchoType::Ghost => {
                let mapped = if set && c.is_alphabetic() {
                    c.to_lowercase().next().and_then(tables::superscript)
                } else {
                    None
                };
                out.push(mapped.unwrap_or(c));
            }
            EchoType::QuantumCaps => {
                if set {
                    out.extend(c.to_uppercase());
                } else {
                    out.extend(c.to_lowercase());
                }
            }
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::SeededSource;
    use crate::operations::Operation;
    use crate::simulation::Simulator;

    #[test]
    fn test_text_bits() {
        assert_eq!(text_bits("A"), vec![0, 1, 0, 0, 0, 0, 0, 1]);
        assert_eq!(text_bits("").len(), 0);
        // 'é' is U+00E9, still eight bits.
        assert_eq!(text_bits("é").len(), 8);
        assert_eq!(text_bits("Ā").len(), 9);
        assert_eq!(text_bits("Ā"), vec![1, 0, 0, 0, 0, 0, 0, 0, 0]);
    }

    #[test]
    fn test_bits_stop_at_the_cap() {
        // Only the first twenty bits of a long text are ever produced.
        let long = "x".repeat(10_000);
        assert_eq!(bit_stream(&long).take(20).count(), 20);
        let echo = RegisterEcho::new(20, GHOST_ANGLE);
        assert_eq!(echo.width_for(&long), 20);
        assert_eq!(echo.build_circuit(&long, EchoType::Ghost).width(), 20);
        assert_eq!(RegisterEcho::new(4, GHOST_ANGLE).width_for("Hi"), 4);
    }

    #[test]
    fn test_register_width_is_capped() {
        let echo = RegisterEcho::default();
        assert_eq!(echo.width_for("Hi"), 16);
        assert_eq!(echo.width_for("Hello"), 20);
        assert_eq!(echo.build_circuit("Hello", EchoType::Scramble).width(), 20);
    }

    #[test]
    fn test_reverse_layer_pairs_mirror_qubits() {
        let circuit = RegisterEcho::default().build_circuit("Hi", EchoType::Reverse);
        let cx: Vec<(usize, usize)> = circuit
            .operations()
            .iter()
            .filter_map(|op| match op {
                Operation::ControlledFlip { control, target } => Some((*control, *target)),
                _ => None,
            })
            .collect();
        assert_eq!(cx.len(), 8);
        assert_eq!(cx[0], (0, 15));
        assert_eq!(cx[7], (7, 8));
    }

    #[test]
    fn test_apply_bits_rules() {
        assert_eq!(apply_bits("ab", "1", EchoType::Scramble), "ăb");
        assert_eq!(apply_bits("aB1", "1", EchoType::Reverse), "Ab1");
        assert_eq!(apply_bits("aB", "0", EchoType::Reverse), "aB");
        assert_eq!(apply_bits("Ex", "1", EchoType::Ghost), "ᵉx");
        assert_eq!(apply_bits("abcd", "10", EchoType::QuantumCaps), "AbCd");
        assert_eq!(apply_bits("abc", "", EchoType::QuantumCaps), "abc");
    }

    #[test]
    fn test_echo_preserves_length_and_empty_text() -> Result<()> {
        let echo = RegisterEcho::default();
        let backend = Simulator::new();
        let mut rng = SeededSource::new(11);
        assert_eq!(echo.echo("", EchoType::Ghost, &backend, &mut rng)?, "");
        let out = echo.echo("Quantum", EchoType::QuantumCaps, &backend, &mut rng)?;
        assert_eq!(out.to_lowercase(), "quantum");
        Ok(())
    }
}
