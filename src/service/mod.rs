// src/service/mod.rs

//! The request handler: `(method, path, JSON body)` in, `(status, JSON)` out.
//!
//! Transport is left to the embedding server. `EchoService` is `Send + Sync`
//! and keeps no per-request state; every request gets its own random source.

pub mod types;

use crate::core::echo_constants::PI;
use crate::core::{EchoBackend, EchoConfig, EchoError, Qubit, RandomSource, Result, SeededSource};
use crate::dispatch::{CircuitDispatcher, CircuitType, EchoType, analyze_coverage, category_stats};
use crate::echo::pseudo_echo;
use crate::operations::{Gate, GateSequence};
use crate::simulation::{CircuitBackend, Simulator};
use crate::validation::check_qubit_normalization;
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::{Value, json};
use tracing::{debug, info, warn};
use types::*;

const SERVICE_NAME: &str = "quantum-echo-server";
const SERVICE_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Status code plus JSON body.
#[derive(Debug, Clone, PartialEq)]
pub struct ServiceResponse {
    pub status: u16,
    pub body: Value,
}

impl ServiceResponse {
    pub fn ok(body: Value) -> Self {
        Self { status: 200, body }
    }

    /// `{"error": message}` with the error's status code.
    pub fn from_error(err: &EchoError) -> Self {
        Self {
            status: err.status_code(),
            body: json!({ "error": err.to_string() }),
        }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Route {
    Index,
    Health,
    EchoTypes,
    Echo,
    Gates,
    Entanglement,
    Memory,
    Words,
    GateProbe,
}

impl Route {
    fn from_path(path: &str) -> Option<Self> {
        let path = path.split('?').next().unwrap_or(path);
        let route = match path {
            "/" => Route::Index,
            "/health" => Route::Health,
            "/quantum_echo_types" => Route::EchoTypes,
            "/quantum_echo" => Route::Echo,
            "/quantum_gates" => Route::Gates,
            "/quantum_entanglement" => Route::Entanglement,
            "/quantum_memory" => Route::Memory,
            "/quantum_words" => Route::Words,
            "/quantum_gate" => Route::GateProbe,
            _ => return None,
        };
        Some(route)
    }

    fn method(&self) -> &'static str {
        match self {
            Route::Index | Route::Health | Route::EchoTypes => "GET",
            _ => "POST",
        }
    }
}

/// Routes requests to the transformation layer.
pub struct EchoService {
    config: EchoConfig,
    dispatcher: CircuitDispatcher,
    backend: Box<dyn CircuitBackend + Send + Sync>,
}

impl EchoService {
    /// Service over the bundled state-vector simulator.
    ///
    /// # Errors
    /// `EchoError::InvalidParameter` if `config` fails validation.
    pub fn new(config: EchoConfig) -> Result<Self> {
        Self::with_backend(config, Box::new(Simulator::new()))
    }

    pub fn with_backend(config: EchoConfig, backend: Box<dyn CircuitBackend + Send + Sync>) -> Result<Self> {
        config.validate()?;
        info!(backend = backend.name(), mode = ?config.backend, "echo service ready");
        Ok(Self {
            dispatcher: CircuitDispatcher::new(&config),
            config,
            backend,
        })
    }

    pub fn config(&self) -> &EchoConfig {
        &self.config
    }

    pub fn dispatcher(&self) -> &CircuitDispatcher {
        &self.dispatcher
    }

    /// Fresh random source for one request.
    fn request_source(&self) -> SeededSource {
        match self.config.seed {
            Some(seed) => SeededSource::new(seed),
            None => SeededSource::from_entropy(),
        }
    }

    /// Handles one request with its own random source.
    pub fn handle(&self, method: &str, path: &str, body: &str) -> ServiceResponse {
        let mut rng = self.request_source();
        self.handle_with(method, path, body, &mut rng)
    }

    /// Handles one request drawing from `rng`.
    pub fn handle_with(&self, method: &str, path: &str, body: &str, rng: &mut dyn RandomSource) -> ServiceResponse {
        match self.route(method, path, body, rng) {
            Ok(body) => ServiceResponse::ok(body),
            Err(err) => {
                if err.is_client_error() {
                    debug!(method, path, error = %err, "rejected request");
                } else {
                    warn!(method, path, error = %err, "request failed");
                }
                ServiceResponse::from_error(&err)
            }
        }
    }

    fn route(&self, method: &str, path: &str, body: &str, rng: &mut dyn RandomSource) -> Result<Value> {
        let route = Route::from_path(path).ok_or_else(|| EchoError::NotFound { path: path.to_string() })?;
        if !method.eq_ignore_ascii_case(route.method()) {
            return Err(EchoError::MethodNotAllowed {
                method: method.to_string(),
                path: path.to_string(),
            });
        }
        debug!(method, path, "dispatching request");

        match route {
            Route::Index => Ok(self.index()),
            Route::Health => Ok(self.health()),
            Route::EchoTypes => Ok(echo_types()),
            Route::Echo => to_json(self.echo(parse_text_body(body)?, rng)?),
            Route::Gates => to_json(self.gates(parse_text_body(body)?, rng)),
            Route::Entanglement => to_json(self.entanglement(parse_text_body(body)?, rng)),
            Route::Memory => to_json(self.memory(parse_text_body(body)?, rng)?),
            Route::Words => to_json(self.words(parse_text_body(body)?, rng)),
            Route::GateProbe => to_json(self.gate_probe(parse_probe_body(body)?, rng)?),
        }
    }

    /// POST /quantum_echo
    pub fn echo(&self, req: EchoRequest, rng: &mut dyn RandomSource) -> Result<EchoResponse> {
        let echo_type = EchoType::parse_or_default(enum_name(&req.echo_type).unwrap_or_default());
        let (echo, mode) = match self.config.backend {
            EchoBackend::Circuit => (
                self.dispatcher.register().echo(&req.text, echo_type, self.backend.as_ref(), rng)?,
                None,
            ),
            EchoBackend::Pseudo => (pseudo_echo(&req.text, echo_type, rng), Some("pseudo-quantum")),
        };
        Ok(EchoResponse {
            original: req.text,
            echo,
            echo_type: echo_type.name(),
            quantum_processed: true,
            mode,
        })
    }

    /// POST /quantum_gates
    pub fn gates(&self, req: GatesRequest, rng: &mut dyn RandomSource) -> GatesResponse {
        let sequence = match req.gate_sequence.as_deref() {
            Some(raw) => GateSequence::parse(raw),
            None => self.dispatcher.default_gates().clone(),
        };
        let report = self.dispatcher.transform_gates(&req.text, &sequence, rng);
        GatesResponse::new(&req.text, report)
    }

    /// POST /quantum_entanglement
    pub fn entanglement(&self, req: CircuitRequest, rng: &mut dyn RandomSource) -> CircuitResponse {
        let circuit = CircuitType::parse_or_default(enum_name(&req.circuit_type).unwrap_or_default());
        let report = self.dispatcher.transform_circuit(&req.text, circuit, rng);
        CircuitResponse::new(&req.text, circuit.name(), report)
    }

    /// POST /quantum_memory
    pub fn memory(&self, req: MemoryRequest, rng: &mut dyn RandomSource) -> Result<MemoryResponse> {
        let memory_type = req.memory_type_label();
        let intensity = req.intensity.unwrap_or(self.config.default_intensity);
        let echo = self
            .dispatcher
            .memory_echo(&req.text, &memory_type, intensity, self.backend.as_ref(), rng)?;
        Ok(MemoryResponse::from(echo))
    }

    /// POST /quantum_words
    pub fn words(&self, req: WordsRequest, rng: &mut dyn RandomSource) -> WordsResponse {
        let routed = self.dispatcher.transform_words(&req.text, rng);
        let coverage = analyze_coverage(&req.text);
        let stats = category_stats();
        let mut dictionary: std::collections::BTreeMap<&'static str, usize> = stats.table_sizes.into_iter().collect();
        dictionary.insert("total_quantum_words", stats.total_quantum_words);

        WordsResponse {
            original: req.text,
            transformed: routed.text,
            words: routed.words.iter().map(WordBody::from).collect(),
            coverage: CoverageBody::from(&coverage),
            dictionary,
            transformation_type: "quantum_words",
        }
    }

    /// POST /quantum_gate
    ///
    /// Runs one gate on a fresh qubit and reports the outcome. Unknown gate
    /// types fall back to hadamard.
    pub fn gate_probe(&self, req: GateProbeRequest, rng: &mut dyn RandomSource) -> Result<GateProbeResponse> {
        let angle = req.rotation_angle.unwrap_or(PI / 2.0);
        if !angle.is_finite() {
            return Err(EchoError::invalid_parameter("rotation_angle", "must be finite"));
        }
        let (gate_type, gate) = match req.gate_type.as_deref() {
            Some("bit_flip") => ("bit_flip", Gate::BitFlip),
            Some("phase_flip") => ("phase_flip", Gate::PhaseFlip),
            Some("rotation") => ("rotation", Gate::RotateY(angle)),
            _ => ("hadamard", Gate::Hadamard),
        };

        let mut qubit = Qubit::new();
        qubit.apply(gate);
        let probability_zero = qubit.probability_zero();
        let normalized = check_qubit_normalization(&qubit, None).is_ok();
        let result = rng.observe(&mut qubit);

        Ok(GateProbeResponse {
            gate_type,
            rotation_angle: matches!(gate, Gate::RotateY(_)).then_some(angle),
            measurement: result.measurement,
            superposition_strength: result.strength,
            probability_zero,
            normalized,
        })
    }

    /// GET /health
    pub fn health(&self) -> Value {
        let mode = match self.config.backend {
            EchoBackend::Circuit => "circuit",
            EchoBackend::Pseudo => "pseudo-quantum",
        };
        json!({
            "status": "healthy",
            "service": SERVICE_NAME,
            "backend": self.backend.name(),
            "mode": mode,
            "qiskit_available": matches!(self.config.backend, EchoBackend::Circuit),
        })
    }

    /// GET /
    pub fn index(&self) -> Value {
        json!({
            "service": "Quantum Echo Server",
            "version": SERVICE_VERSION,
            "description": "Quantum-flavored text transformation over simulated qubits and circuits",
            "endpoints": {
                "POST /quantum_echo": "Basic quantum echo transformation",
                "POST /quantum_gates": "Apply quantum gate sequences (H, X, Y, Z, ROT)",
                "POST /quantum_entanglement": "Multi-qubit quantum circuits (entanglement, interference, teleportation)",
                "POST /quantum_memory": "Quantum memory effects for story integration",
                "POST /quantum_words": "Route each word through its category's transformation",
                "POST /quantum_gate": "Apply one gate to a fresh qubit and measure it",
                "GET /quantum_echo_types": "Get available transformation types",
                "GET /health": "Health check",
            },
        })
    }
}

/// GET /quantum_echo_types
pub fn echo_types() -> Value {
    let basic: Vec<Value> = EchoType::ALL
        .iter()
        .map(|t| json!({ "name": t.name(), "description": t.description() }))
        .collect();
    let circuits: Vec<&str> = CircuitType::ALL.iter().map(|c| c.name()).collect();
    json!({
        "basic_echo_types": basic,
        "advanced_transformations": [
            {
                "name": "quantum_gates",
                "description": "Apply quantum gate sequences (H, X, Y, Z, ROT)",
                "endpoint": "/quantum_gates",
                "parameters": ["text", "gate_sequence"],
            },
            {
                "name": "quantum_entanglement",
                "description": "Multi-qubit entanglement transformations",
                "endpoint": "/quantum_entanglement",
                "parameters": ["text", "circuit_type"],
                "circuit_types": circuits,
            },
            {
                "name": "quantum_memory",
                "description": "Quantum memory effects for story integration",
                "endpoint": "/quantum_memory",
                "parameters": ["text", "memory_type", "intensity"],
                "memory_types": ["fragmented", "entangled", "superposition"],
            },
            {
                "name": "quantum_words",
                "description": "Word-category routing with coverage analysis",
                "endpoint": "/quantum_words",
                "parameters": ["text"],
            },
        ],
    })
}

fn to_json<T: Serialize>(value: T) -> Result<Value> {
    serde_json::to_value(value).map_err(|e| EchoError::Encoding(e.to_string()))
}

fn parse_json(body: &str) -> Result<Value> {
    if body.trim().is_empty() {
        return Ok(Value::Null);
    }
    serde_json::from_str(body).map_err(|e| EchoError::MalformedRequest(e.to_string()))
}

/// Decodes a body that must carry a `text` field.
fn parse_text_body<T: DeserializeOwned>(body: &str) -> Result<T> {
    let value = parse_json(body)?;
    match value.as_object() {
        Some(map) if map.contains_key("text") => {}
        _ => return Err(EchoError::missing("text")),
    }
    serde_json::from_value(value).map_err(|e| EchoError::invalid_parameter("body", e.to_string()))
}

fn parse_probe_body(body: &str) -> Result<GateProbeRequest> {
    match parse_json(body)? {
        Value::Null => Ok(GateProbeRequest::default()),
        value => serde_json::from_value(value).map_err(|e| EchoError::invalid_parameter("body", e.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::ForcedOutcome;

    fn service() -> EchoService {
        EchoService::new(EchoConfig {
            seed: Some(5),
            ..Default::default()
        })
        .unwrap()
    }

    #[test]
    fn test_routes_and_methods() {
        let svc = service();
        assert_eq!(svc.handle("GET", "/health", "").status, 200);
        assert_eq!(svc.handle("GET", "/nowhere", "").status, 404);
        assert_eq!(svc.handle("GET", "/quantum_echo", "").status, 405);
        assert_eq!(svc.handle("POST", "/health", "").status, 405);
    }

    #[test]
    fn test_missing_text() {
        let svc = service();
        for body in ["", "{}", "[1,2]", r#"{"echo_type":"ghost"}"#] {
            let resp = svc.handle("POST", "/quantum_echo", body);
            assert_eq!(resp.status, 400);
            assert_eq!(resp.body, json!({ "error": "Missing text parameter" }));
        }
    }

    #[test]
    fn test_malformed_json() {
        let resp = service().handle("POST", "/quantum_gates", "{text:");
        assert_eq!(resp.status, 400);
        assert!(resp.body["error"].as_str().unwrap().starts_with("Malformed"));
    }

    #[test]
    fn test_probe_defaults() {
        let svc = service();
        let mut rng = ForcedOutcome::new(0, 1.0);
        let resp = svc.handle_with("POST", "/quantum_gate", "", &mut rng);
        assert_eq!(resp.status, 200);
        assert_eq!(resp.body["gate_type"], "hadamard");
        assert_eq!(resp.body["measurement"], 0);
        assert_eq!(resp.body["normalized"], true);
        assert!(resp.body["rotation_angle"].is_null());
    }

    #[test]
    fn test_rotation_probe_reports_angle() {
        let svc = service();
        let mut rng = SeededSource::new(1);
        let resp = svc.handle_with("POST", "/quantum_gate", r#"{"gate_type":"rotation","rotation_angle":0.0}"#, &mut rng);
        assert_eq!(resp.body["rotation_angle"], 0.0);
        assert_eq!(resp.body["probability_zero"], 1.0);
        assert_eq!(resp.body["superposition_strength"], 0.0);
    }
}
