// src/dispatch/mod.rs

//! Runs a transformation mode over a string.
//!
//! Single-qubit modes give each character its own fresh qubit, pre-flipped
//! when the character is uppercase. Circuit modes consume characters in
//! pairs and transform each pair from the joint outcome of two qubits.

mod modes;
pub mod memory;
pub mod words;

pub use memory::{MemoryEcho, MemoryType, dilute};
pub use modes::{CircuitType, EchoType, TransformationMode};
pub use words::{CategoryStats, CoverageReport, WordCategory, WordRoute, WordsTransform, analyze_coverage, categorize, category_stats};

use crate::core::{EchoConfig, MeasurementResult, Qubit, RandomSource, Result};
use crate::echo::RegisterEcho;
use crate::operations::{Gate, GateSequence};
use crate::simulation::CircuitBackend;
use crate::transform::CharacterTransformer;
use std::f64::consts::PI;
use tracing::{debug, trace};

/// Rounds to three decimals, the precision reported for strengths.
pub(crate) fn round3(value: f64) -> f64 {
    (value * 1000.0).round() / 1000.0
}

/// The observation of one character on the single-qubit path.
#[derive(Debug, Clone, PartialEq)]
pub struct CharState {
    pub original: char,
    pub measurement: u8,
    /// Strength rounded to three decimals.
    pub superposition: f64,
}

/// Output of a single-qubit run.
#[derive(Debug, Clone, PartialEq)]
pub struct GateTransform {
    pub text: String,
    pub states: Vec<CharState>,
    /// Token names of the sequence, or the preset's gate symbols.
    pub gates_applied: Vec<String>,
    /// Mean of the rounded strengths, itself rounded; `0.0` for empty text.
    pub superposition_average: f64,
}

/// How one character pair came out of a circuit run.
#[derive(Debug, Clone, PartialEq)]
pub struct PairRecord {
    /// The pair's characters. A lone trailing character appears alone.
    pub original: String,
    pub transformed: String,
    pub measurements: (u8, u8),
    pub correlated: bool,
}

impl PairRecord {
    pub fn correlation_label(&self) -> &'static str {
        if self.correlated { "correlated" } else { "anti-correlated" }
    }
}

/// Output of a two-qubit circuit run.
#[derive(Debug, Clone, PartialEq)]
pub struct CircuitTransform {
    pub text: String,
    pub pairs: Vec<PairRecord>,
    /// Fraction of correlated pairs; `0.0` when there were none.
    pub correlation: f64,
}

/// Owns the transformer and per-mode parameters.
#[derive(Debug, Clone)]
pub struct CircuitDispatcher {
    transformer: CharacterTransformer,
    default_gates: GateSequence,
    ghost_angle: f64,
    register: RegisterEcho,
    dilution_threshold: f64,
    dilution_stride: usize,
}

impl CircuitDispatcher {
    pub fn new(config: &EchoConfig) -> Self {
        Self {
            transformer: CharacterTransformer::from_config(config),
            default_gates: GateSequence::parse(&config.default_gate_sequence),
            ghost_angle: config.ghost_angle,
            register: RegisterEcho::from_config(config),
            dilution_threshold: config.dilution_threshold,
            dilution_stride: config.dilution_stride,
        }
    }

    pub fn transformer(&self) -> &CharacterTransformer {
        &self.transformer
    }

    /// Sequence used when a gates request names none.
    pub fn default_gates(&self) -> &GateSequence {
        &self.default_gates
    }

    pub fn register(&self) -> &RegisterEcho {
        &self.register
    }

    /// Runs `mode` over `text`. `QuantumGates` uses the default sequence.
    pub fn dispatch(&self, text: &str, mode: TransformationMode, rng: &mut dyn RandomSource) -> String {
        match mode {
            TransformationMode::Echo(echo) => self.transform_echo(text, echo, rng).text,
            TransformationMode::QuantumGates => self.transform_gates(text, &self.default_gates, rng).text,
            TransformationMode::Circuit(circuit) => self.transform_circuit(text, circuit, rng).text,
        }
    }

    /// `dispatch` with a mode name; unknown names run scramble.
    pub fn dispatch_named(&self, text: &str, mode: &str, rng: &mut dyn RandomSource) -> String {
        self.dispatch(text, TransformationMode::parse_or_default(mode), rng)
    }

    /// Single-qubit run with a caller-supplied gate sequence.
    pub fn transform_gates(&self, text: &str, sequence: &GateSequence, rng: &mut dyn RandomSource) -> GateTransform {
        let len = text.chars().count();
        debug!(sequence = %sequence, chars = len, "gate transform");
        self.run_single(text, sequence.names(), |i| sequence.gates_for(i, len), rng)
    }

    /// Single-qubit run with the preset gates of `echo`.
    ///
    /// Scramble applies H, reverse X, ghost a Y rotation by the ghost
    /// angle, and quantum caps H at even positions and Z at odd ones.
    pub fn transform_echo(&self, text: &str, echo: EchoType, rng: &mut dyn RandomSource) -> GateTransform {
        debug!(mode = echo.name(), chars = text.chars().count(), "echo transform");
        let ghost = Gate::RotateY(self.ghost_angle);
        let names = match echo {
            EchoType::Scramble => vec![Gate::Hadamard.symbol().to_string()],
            EchoType::Reverse => vec![Gate::BitFlip.symbol().to_string()],
            EchoType::Ghost => vec![ghost.symbol().to_string()],
            EchoType::QuantumCaps => vec![Gate::Hadamard.symbol().to_string(), Gate::PhaseFlip.symbol().to_string()],
        };
        let preset = |i: usize| match echo {
            EchoType::Scramble => vec![Gate::Hadamard],
            EchoType::Reverse => vec![Gate::BitFlip],
            EchoType::Ghost => vec![ghost],
            EchoType::QuantumCaps if i % 2 == 0 => vec![Gate::Hadamard],
            EchoType::QuantumCaps => vec![Gate::PhaseFlip],
        };
        self.run_single(text, names, preset, rng)
    }

    fn run_single<F>(&self, text: &str, gates_applied: Vec<String>, gates_at: F, rng: &mut dyn RandomSource) -> GateTransform
    where
        F: Fn(usize) -> Vec<Gate>,
    {
        let mut out = String::with_capacity(text.len());
        let mut states = Vec::new();

        for (i, c) in text.chars().enumerate() {
            let mut qubit = Qubit::new();
            if c.is_uppercase() {
                qubit.apply(Gate::BitFlip);
            }
            qubit.apply_all(&gates_at(i));
            let result = rng.observe(&mut qubit);
            trace!(index = i, char = %c, measurement = result.measurement, strength = result.strength, "observed");

            out.push_str(&self.transformer.transform_result(c, &result));
            states.push(CharState {
                original: c,
                measurement: result.measurement,
                superposition: round3(result.strength),
            });
        }

        let superposition_average = if states.is_empty() {
            0.0
        } else {
            round3(states.iter().map(|s| s.superposition).sum::<f64>() / states.len() as f64)
        };

        GateTransform {
            text: out,
            states,
            gates_applied,
            superposition_average,
        }
    }

    /// Two-qubit run over character pairs.
    ///
    /// Text shorter than two characters is returned as is. An odd trailing
    /// character is paired with a space whose own output is discarded.
    pub fn transform_circuit(&self, text: &str, circuit: CircuitType, rng: &mut dyn RandomSource) -> CircuitTransform {
        let chars: Vec<char> = text.chars().collect();
        if chars.len() < 2 {
            return CircuitTransform {
                text: text.to_string(),
                pairs: Vec::new(),
                correlation: 0.0,
            };
        }
        debug!(circuit = circuit.name(), chars = chars.len(), "circuit transform");

        let mut out = String::with_capacity(text.len());
        let mut pairs = Vec::with_capacity(chars.len().div_ceil(2));

        for chunk in chars.chunks(2) {
            let c1 = chunk[0];
            let (c2, padded) = match chunk.get(1) {
                Some(c) => (*c, false),
                None => (' ', true),
            };

            let (r1, r2) = self.run_pair(c1, c2, circuit, rng);
            let correlated = r1.measurement == r2.measurement;
            let (t1, t2) = if correlated {
                let s = r1.strength.max(r2.strength);
                (
                    self.transformer.transform(c1, r1.measurement, s),
                    self.transformer.transform(c2, r2.measurement, s),
                )
            } else {
                (
                    self.transformer.transform(c1, r1.complement(), r1.strength),
                    self.transformer.transform(c2, r2.complement(), r2.strength),
                )
            };

            let mut original = c1.to_string();
            let mut transformed = t1;
            if !padded {
                original.push(c2);
                transformed.push_str(&t2);
            }
            out.push_str(&transformed);
            pairs.push(PairRecord {
                original,
                transformed,
                measurements: (r1.measurement, r2.measurement),
                correlated,
            });
        }

        let correlation = if pairs.is_empty() {
            0.0
        } else {
            pairs.iter().filter(|p| p.correlated).count() as f64 / pairs.len() as f64
        };

        CircuitTransform {
            text: out,
            pairs,
            correlation,
        }
    }

    fn run_pair(
        &self,
        c1: char,
        c2: char,
        circuit: CircuitType,
        rng: &mut dyn RandomSource,
    ) -> (MeasurementResult, MeasurementResult) {
        let mut q1 = Qubit::new();
        let mut q2 = Qubit::new();
        if c1.is_uppercase() {
            q1.apply(Gate::BitFlip);
        }
        if c2.is_uppercase() {
            q2.apply(Gate::BitFlip);
        }

        match circuit {
            CircuitType::Entanglement => {
                q1.apply(Gate::Hadamard);
                if rng.observe(&mut q1).measurement == 1 {
                    q2.apply(Gate::BitFlip);
                    q1.apply(Gate::BitFlip);
                }
            }
            CircuitType::Interference => {
                q1.apply(Gate::Hadamard);
                q2.apply(Gate::Hadamard);
                q1.apply(Gate::PhaseFlip);
                q2.apply(Gate::RotateY(PI / 4.0));
            }
            CircuitType::Teleportation => {
                q1.apply(Gate::Hadamard);
                q1.apply(Gate::PhaseFlip);
                q2.apply(Gate::RotateY(PI / 3.0));
            }
        }

        (rng.observe(&mut q1), rng.observe(&mut q2))
    }

    /// Memory-style echo of `text`; see [`memory`].
    pub fn memory_echo(
        &self,
        text: &str,
        memory_type: &str,
        intensity: f64,
        backend: &dyn CircuitBackend,
        rng: &mut dyn RandomSource,
    ) -> Result<MemoryEcho> {
        memory::memory_echo(self, text, memory_type, intensity, backend, rng)
    }

    pub(crate) fn dilution(&self) -> (f64, usize) {
        (self.dilution_threshold, self.dilution_stride)
    }
}

impl Default for CircuitDispatcher {
    fn default() -> Self {
        Self::new(&EchoConfig::default())
    }
}
