//! Memory-style echoes: a named effect plus an intensity that can dilute it.
//!
//! | memory type     | effect                         | state               |
//! |-----------------|--------------------------------|---------------------|
//! | `fragmented`    | interference circuit           | `fragmented`        |
//! | `entangled`     | entanglement circuit           | `quantum_entangled` |
//! | `superposition` | gates `H-ROT-Y-Z`              | `superposition`     |
//! | anything else   | register ghost echo            | `quantum_echo`      |

use super::{CircuitDispatcher, CircuitType, EchoType};
use crate::core::echo_constants::SUPERPOSITION_MEMORY_SEQUENCE;
use crate::core::{RandomSource, Result};
use crate::operations::GateSequence;
use crate::simulation::CircuitBackend;
use tracing::debug;

/// The recognized memory effects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MemoryType {
    Fragmented,
    Entangled,
    Superposition,
    /// Fallback for every other name.
    Echo,
}

impl MemoryType {
    pub fn parse(name: &str) -> Self {
        match name {
            "fragmented" => MemoryType::Fragmented,
            "entangled" => MemoryType::Entangled,
            "superposition" => MemoryType::Superposition,
            _ => MemoryType::Echo,
        }
    }

    /// Label reported as `memory_state`.
    pub fn state_label(&self) -> &'static str {
        match self {
            MemoryType::Fragmented => "fragmented",
            MemoryType::Entangled => "quantum_entangled",
            MemoryType::Superposition => "superposition",
            MemoryType::Echo => "quantum_echo",
        }
    }
}

/// Result of a memory echo.
#[derive(Debug, Clone, PartialEq)]
pub struct MemoryEcho {
    pub original: String,
    pub echo: String,
    /// The memory type as the caller named it.
    pub memory_type: String,
    pub memory_state: &'static str,
    pub intensity: f64,
    /// Superposition average of the gates path, the intensity otherwise.
    pub coherence: f64,
}

/// Keeps `original` except at every `stride`-th position (starting at 0),
/// where the character of `transformed` is taken instead. Positions beyond
/// the end of `original` are ignored.
pub fn dilute(original: &str, transformed: &str, stride: usize) -> String {
    let mut out: Vec<char> = original.chars().collect();
    let transformed: Vec<char> = transformed.chars().collect();
    for i in (0..transformed.len()).step_by(stride.max(1)) {
        if let Some(slot) = out.get_mut(i) {
            *slot = transformed[i];
        }
    }
    out.into_iter().collect()
}

pub(super) fn memory_echo(
    dispatcher: &CircuitDispatcher,
    text: &str,
    memory_type: &str,
    intensity: f64,
    backend: &dyn CircuitBackend,
    rng: &mut dyn RandomSource,
) -> Result<MemoryEcho> {
    let kind = MemoryType::parse(memory_type);
    debug!(memory_type, state = kind.state_label(), intensity, "memory echo");

    let (full, coherence) = match kind {
        MemoryType::Fragmented => (dispatcher.transform_circuit(text, CircuitType::Interference, rng).text, intensity),
        MemoryType::Entangled => (dispatcher.transform_circuit(text, CircuitType::Entanglement, rng).text, intensity),
        MemoryType::Superposition => {
            let report = dispatcher.transform_gates(text, &GateSequence::parse(SUPERPOSITION_MEMORY_SEQUENCE), rng);
            (report.text, report.superposition_average)
        }
        MemoryType::Echo => (dispatcher.register().echo(text, EchoType::Ghost, backend, rng)?, intensity),
    };

    let (threshold, stride) = dispatcher.dilution();
    let echo = if intensity < threshold { dilute(text, &full, stride) } else { full };

    Ok(MemoryEcho {
        original: text.to_string(),
        echo,
        memory_type: memory_type.to_string(),
        memory_state: kind.state_label(),
        intensity,
        coherence,
    })
}
