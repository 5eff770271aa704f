// demos/echo_demo.rs
//
// Runs a handful of requests through the echo service and prints the
// responses. `RUST_LOG=qecho=debug cargo run --example echo_demo` shows the
// dispatch and simulation logs.

use qecho::{EchoConfig, EchoError, EchoService};
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), EchoError> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let service = EchoService::new(EchoConfig::default())?;

    let requests = [
        ("GET", "/health", ""),
        ("POST", "/quantum_echo", r#"{"text": "Echoes of Light", "echo_type": "ghost"}"#),
        ("POST", "/quantum_gates", r#"{"text": "Quantum", "gate_sequence": "H-ROT-Z"}"#),
        ("POST", "/quantum_entanglement", r#"{"text": "Theo and Ava", "circuit_type": "interference"}"#),
        ("POST", "/quantum_memory", r#"{"text": "I remember the light", "memory_type": "superposition", "intensity": 0.2}"#),
        ("POST", "/quantum_words", r#"{"text": "The vanished burst of light now flickering on the console."}"#),
        ("POST", "/quantum_gate", r#"{"gate_type": "rotation", "rotation_angle": 1.2}"#),
    ];

    for (method, path, body) in requests {
        let resp = service.handle(method, path, body);
        println!("\n--- {} {} -> {} ---", method, path, resp.status);
        println!("{:#}", resp.body);
    }
    Ok(())
}
