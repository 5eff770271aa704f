// src/lib.rs

//! `qecho` - quantum-flavored text transformations
//!
//! Characters are routed through a toy two-amplitude qubit: a gate sequence
//! is applied, the qubit is measured, and the outcome together with the
//! pre-measurement superposition strength picks the output glyph. Pairs of
//! characters can be run through two-qubit circuits, whole texts through a
//! byte-level register echo, and whole words through static category tables.

pub mod core;
pub mod operations;
pub mod circuits;
pub mod simulation;
pub mod validation;
pub mod transform;
pub mod dispatch;
pub mod echo;
pub mod service;

// Re-export the most common types for easier top-level use
pub use core::{
    EchoBackend, EchoConfig, EchoError, ForcedOutcome, MeasurementResult, Qubit, RandomSource, Result,
    ScriptedSource, SeededSource,
};
pub use operations::{Gate, GateSequence, GateToken, Operation};
pub use circuits::{Circuit, CircuitBuilder};
pub use simulation::{CircuitBackend, SimulationResult, Simulator};
pub use validation::{check_normalization, check_qubit_normalization};
pub use transform::CharacterTransformer;
pub use dispatch::{CircuitDispatcher, CircuitType, EchoType, MemoryType, TransformationMode, WordCategory};
pub use echo::{RegisterEcho, pseudo_echo};
pub use service::{EchoService, ServiceResponse};

// Example 1: Pinned single-qubit scramble
// A forced outcome of |1> with strength 0.5 lands in the diacritic tier:
// the uppercase 'H' has no entry and stays, the 'i' gains a macron.
/// ```
/// use qecho::{CircuitDispatcher, EchoType, ForcedOutcome, TransformationMode};
///
/// let dispatcher = CircuitDispatcher::default();
/// let mut rng = ForcedOutcome::new(1, 0.5);
///
/// let out = dispatcher.dispatch("Hi", TransformationMode::Echo(EchoType::Scramble), &mut rng);
/// println!("\n--- Example 1: Pinned scramble ---");
/// println!("Hi -> {}", out);
/// assert_eq!(out, "Hī");
/// ```
#[doc(hidden)]
const _: () = ();

// Example 2: Register echo on the state-vector simulator
// Quantum caps only ever changes case, whatever bits are sampled.
/// ```
/// use qecho::{EchoType, RegisterEcho, SeededSource, Simulator, EchoError};
///
/// let echo = RegisterEcho::default();
/// let circuit = echo.build_circuit("Echo", EchoType::QuantumCaps);
/// println!("\n--- Example 2: Register echo ---");
/// println!("Circuit:\n{}", circuit);
///
/// let mut rng = SeededSource::new(42);
/// match echo.echo("Echo", EchoType::QuantumCaps, &Simulator::new(), &mut rng) {
///     Ok(out) => {
///         println!("Echo -> {}", out);
///         assert_eq!(out.to_lowercase(), "echo");
///     }
///     Err(e) => {
///         eprintln!("Example 2 failed: {}", e);
///         assert!(false, "Example 2 failed");
///     }
/// }
/// # let _: Option<EchoError> = None;
/// ```
#[doc(hidden)]
const _: () = ();

// Example 3: Request handling
/// ```
/// use qecho::{EchoConfig, EchoService};
///
/// let service = EchoService::new(EchoConfig { seed: Some(7), ..Default::default() }).unwrap();
/// let resp = service.handle("POST", "/quantum_gates", r#"{"text": "Hi", "gate_sequence": "x-bogus"}"#);
/// assert_eq!(resp.status, 200);
/// assert_eq!(resp.body["gates_applied"], serde_json::json!(["X"]));
///
/// let missing = service.handle("POST", "/quantum_echo", "{}");
/// assert_eq!(missing.status, 400);
/// assert_eq!(missing.body["error"], "Missing text parameter");
/// ```
#[doc(hidden)]
const _: () = ();
