//! JSON request and response bodies.

use crate::dispatch::{CharState, CircuitTransform, CoverageReport, GateTransform, MemoryEcho, PairRecord, WordRoute};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

/// The string form of an enumerated field, if it holds a string.
///
/// Enumerated fields are decoded as raw JSON so that a number or an array
/// falls back to the endpoint default instead of failing the request.
pub(crate) fn enum_name(field: &Option<Value>) -> Option<&str> {
    field.as_ref().and_then(Value::as_str)
}

#[derive(Debug, Clone, Deserialize)]
pub struct EchoRequest {
    pub text: String,
    #[serde(default)]
    pub echo_type: Option<Value>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GatesRequest {
    pub text: String,
    #[serde(default)]
    pub gate_sequence: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CircuitRequest {
    pub text: String,
    #[serde(default)]
    pub circuit_type: Option<Value>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct MemoryRequest {
    pub text: String,
    #[serde(default)]
    pub memory_type: Option<Value>,
    #[serde(default)]
    pub intensity: Option<f64>,
}

impl MemoryRequest {
    /// Memory type as reported back to the caller. Absent means
    /// `fragmented`; a non-string value is kept in its JSON form and so
    /// takes the echo fallback.
    pub fn memory_type_label(&self) -> String {
        match &self.memory_type {
            None => "fragmented".to_string(),
            Some(Value::String(name)) => name.clone(),
            Some(other) => other.to_string(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct WordsRequest {
    pub text: String,
}

/// Probe body. Every field is optional.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct GateProbeRequest {
    pub gate_type: Option<String>,
    pub rotation_angle: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EchoResponse {
    pub original: String,
    pub echo: String,
    pub echo_type: &'static str,
    pub quantum_processed: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mode: Option<&'static str>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QuantumStateBody {
    pub char: String,
    pub measurement: u8,
    pub superposition: f64,
}

impl From<&CharState> for QuantumStateBody {
    fn from(state: &CharState) -> Self {
        Self {
            char: state.original.to_string(),
            measurement: state.measurement,
            superposition: state.superposition,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GatesResponse {
    pub original: String,
    pub transformed: String,
    pub quantum_states: Vec<QuantumStateBody>,
    pub gates_applied: Vec<String>,
    pub superposition_average: f64,
    pub transformation_type: &'static str,
}

impl GatesResponse {
    pub fn new(original: &str, report: GateTransform) -> Self {
        Self {
            original: original.to_string(),
            quantum_states: report.states.iter().map(QuantumStateBody::from).collect(),
            transformed: report.text,
            gates_applied: report.gates_applied,
            superposition_average: report.superposition_average,
            transformation_type: "quantum_gates",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PairBody {
    pub original: String,
    pub transformed: String,
    pub measurements: [u8; 2],
    pub correlation: &'static str,
}

impl From<&PairRecord> for PairBody {
    fn from(pair: &PairRecord) -> Self {
        Self {
            original: pair.original.clone(),
            transformed: pair.transformed.clone(),
            measurements: [pair.measurements.0, pair.measurements.1],
            correlation: pair.correlation_label(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CircuitResponse {
    pub original: String,
    pub transformed: String,
    pub circuit_type: &'static str,
    pub entangled_pairs: Vec<PairBody>,
    pub quantum_correlation: f64,
    pub transformation_type: &'static str,
}

impl CircuitResponse {
    pub fn new(original: &str, circuit_type: &'static str, report: CircuitTransform) -> Self {
        Self {
            original: original.to_string(),
            entangled_pairs: report.pairs.iter().map(PairBody::from).collect(),
            transformed: report.text,
            circuit_type,
            quantum_correlation: report.correlation,
            transformation_type: "quantum_circuit",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MemoryResponse {
    pub original: String,
    pub memory_echo: String,
    pub memory_type: String,
    pub memory_state: &'static str,
    pub intensity: f64,
    pub quantum_coherence: f64,
    pub story_context: &'static str,
}

impl From<MemoryEcho> for MemoryResponse {
    fn from(echo: MemoryEcho) -> Self {
        Self {
            original: echo.original,
            memory_echo: echo.echo,
            memory_type: echo.memory_type,
            memory_state: echo.memory_state,
            intensity: echo.intensity,
            quantum_coherence: echo.coherence,
            story_context: "quantum_memory_fragment",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WordBody {
    pub word: String,
    pub category: &'static str,
    pub transformed: String,
}

impl From<&WordRoute> for WordBody {
    fn from(route: &WordRoute) -> Self {
        Self {
            word: route.word.clone(),
            category: route.category.label(),
            transformed: route.transformed.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CoverageBody {
    pub total_words: usize,
    pub quantum_words: usize,
    pub coverage_percent: f64,
    pub category_counts: BTreeMap<&'static str, usize>,
}

impl From<&CoverageReport> for CoverageBody {
    fn from(report: &CoverageReport) -> Self {
        Self {
            total_words: report.total_words,
            quantum_words: report.quantum_words,
            coverage_percent: report.coverage_percent,
            category_counts: report.category_counts(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WordsResponse {
    pub original: String,
    pub transformed: String,
    pub words: Vec<WordBody>,
    pub coverage: CoverageBody,
    /// Table sizes keyed by table name, plus `total_quantum_words`.
    pub dictionary: BTreeMap<&'static str, usize>,
    pub transformation_type: &'static str,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GateProbeResponse {
    pub gate_type: &'static str,
    pub rotation_angle: Option<f64>,
    pub measurement: u8,
    pub superposition_strength: f64,
    pub probability_zero: f64,
    pub normalized: bool,
}
