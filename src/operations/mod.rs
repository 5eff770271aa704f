// src/operations/mod.rs

//! Defines the gates a qubit can undergo, the caller-facing gate-sequence
//! grammar, and the register-level operations used by circuits.
//!
//! Gate-sequence strings are tokens separated by `-`, matched
//! case-insensitively against `H`, `X`, `Y`, `Z` and `ROT`. Unknown tokens
//! are dropped and an empty result falls back to a single Hadamard.

use num_complex::Complex;
use num_traits::{One, Zero};
use std::f64::consts::{FRAC_1_SQRT_2, FRAC_PI_2, PI};
use std::fmt;

/// A single-qubit gate, applied to the two amplitudes of a qubit.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Gate {
    /// X gate: swaps the amplitudes.
    BitFlip,
    /// Z gate: negates the |1> amplitude.
    PhaseFlip,
    /// Rotation about the Y axis by `theta` radians. Any angle is accepted.
    RotateY(f64),
    /// H gate: mixes the amplitudes into an equal superposition.
    Hadamard,
}

impl Gate {
    /// The 2x2 matrix acting on `[alpha, beta]`.
    pub fn matrix(&self) -> [[Complex<f64>; 2]; 2] {
        let one = Complex::one();
        let zero = Complex::zero();
        match *self {
            Gate::BitFlip => [[zero, one], [one, zero]],
            Gate::PhaseFlip => [[one, zero], [zero, -one]],
            Gate::RotateY(theta) => {
                let cos_half = Complex::new((theta / 2.0).cos(), 0.0);
                let sin_half = Complex::new((theta / 2.0).sin(), 0.0);
                // Ry(theta) = [[cos, -sin], [sin, cos]] at half angle
                [[cos_half, -sin_half], [sin_half, cos_half]]
            }
            Gate::Hadamard => {
                let h = Complex::new(FRAC_1_SQRT_2, 0.0);
                [[h, h], [h, -h]]
            }
        }
    }

    /// Circuit diagram symbol.
    pub fn symbol(&self) -> &'static str {
        match self {
            Gate::BitFlip => "X",
            Gate::PhaseFlip => "Z",
            Gate::RotateY(_) => "Ry",
            Gate::Hadamard => "H",
        }
    }
}

impl fmt::Display for Gate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Gate::RotateY(theta) => write!(f, "Ry({:.4})", theta),
            other => write!(f, "{}", other.symbol()),
        }
    }
}

/// One token of a caller-supplied gate sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GateToken {
    /// `H`
    Hadamard,
    /// `X`
    BitFlip,
    /// `Y`: a fixed quarter-turn rotation (π/2) about Y.
    RotateY,
    /// `Z`
    PhaseFlip,
    /// `ROT`: a Y rotation whose angle depends on the character position.
    PositionalRotation,
}

impl GateToken {
    /// Parses one token, ignoring case and surrounding whitespace.
    pub fn parse(token: &str) -> Option<Self> {
        match token.trim().to_ascii_uppercase().as_str() {
            "H" => Some(GateToken::Hadamard),
            "X" => Some(GateToken::BitFlip),
            "Y" => Some(GateToken::RotateY),
            "Z" => Some(GateToken::PhaseFlip),
            "ROT" => Some(GateToken::PositionalRotation),
            _ => None,
        }
    }

    /// Canonical token name, as reported back to callers.
    pub fn name(&self) -> &'static str {
        match self {
            GateToken::Hadamard => "H",
            GateToken::BitFlip => "X",
            GateToken::RotateY => "Y",
            GateToken::PhaseFlip => "Z",
            GateToken::PositionalRotation => "ROT",
        }
    }

    /// Resolves the token to a concrete gate for the character at `index`
    /// in a text of `len` characters.
    ///
    /// `ROT` rotates by `(index + 1) * π / len`.
    pub fn resolve(&self, index: usize, len: usize) -> Gate {
        match self {
            GateToken::Hadamard => Gate::Hadamard,
            GateToken::BitFlip => Gate::BitFlip,
            GateToken::RotateY => Gate::RotateY(FRAC_PI_2),
            GateToken::PhaseFlip => Gate::PhaseFlip,
            GateToken::PositionalRotation => {
                let len = len.max(1) as f64;
                Gate::RotateY((index as f64 + 1.0) * PI / len)
            }
        }
    }
}

impl fmt::Display for GateToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// An ordered, immutable list of gate tokens parsed from a request parameter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GateSequence {
    tokens: Vec<GateToken>,
}

impl GateSequence {
    /// Parses a `-`-separated sequence. Never fails: unknown tokens are
    /// dropped and an empty sequence becomes `[H]`.
    pub fn parse(sequence: &str) -> Self {
        let tokens: Vec<GateToken> = sequence.split('-').filter_map(GateToken::parse).collect();
        if tokens.is_empty() {
            Self { tokens: vec![GateToken::Hadamard] }
        } else {
            Self { tokens }
        }
    }

    /// Builds a sequence from already-validated tokens.
    pub fn from_tokens(tokens: Vec<GateToken>) -> Self {
        if tokens.is_empty() {
            Self { tokens: vec![GateToken::Hadamard] }
        } else {
            Self { tokens }
        }
    }

    /// The parsed tokens, in application order.
    pub fn tokens(&self) -> &[GateToken] {
        &self.tokens
    }

    /// Token names, e.g. `["H", "X"]`.
    pub fn names(&self) -> Vec<String> {
        self.tokens.iter().map(|t| t.name().to_string()).collect()
    }

    /// Concrete gates for the character at `index` of a `len`-character text.
    pub fn gates_for(&self, index: usize, len: usize) -> Vec<Gate> {
        self.tokens.iter().map(|t| t.resolve(index, len)).collect()
    }
}

impl fmt::Display for GateSequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names: Vec<&str> = self.tokens.iter().map(|t| t.name()).collect();
        f.write_str(&names.join("-"))
    }
}

/// An operation on a register of qubits, addressed by index.
#[derive(Debug, Clone, PartialEq)]
pub enum Operation {
    /// Apply a single-qubit gate to one register qubit.
    Apply {
        /// Register index of the qubit.
        target: usize,
        /// The gate to apply.
        gate: Gate,
    },
    /// CX: flip `target` on the branches where `control` is |1>.
    ControlledFlip {
        /// Control qubit index.
        control: usize,
        /// Target qubit index.
        target: usize,
    },
    /// Sample the register once and record the listed qubits' bits.
    Measure {
        /// Qubits whose outcomes are recorded.
        targets: Vec<usize>,
    },
}

impl Operation {
    /// Register indices this operation touches.
    pub fn involved_qubits(&self) -> Vec<usize> {
        match self {
            Operation::Apply { target, .. } => vec![*target],
            Operation::ControlledFlip { control, target } => vec![*control, *target],
            Operation::Measure { targets } => targets.clone(),
        }
    }
}
