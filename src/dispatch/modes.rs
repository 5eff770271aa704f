//! Named transformation modes and their fallbacks.

use std::fmt;

/// Basic echo effects. Unknown names fall back to `Scramble`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum EchoType {
    /// Superposition-heavy scrambling.
    #[default]
    Scramble,
    /// Case reversal.
    Reverse,
    /// Faint, superscript-leaning changes.
    Ghost,
    /// Alternating superposition and phase, i.e. quantum capitalization.
    QuantumCaps,
}

impl EchoType {
    /// All echo types, in catalog order.
    pub const ALL: [EchoType; 4] = [EchoType::Scramble, EchoType::Reverse, EchoType::Ghost, EchoType::QuantumCaps];

    /// Exact-name lookup.
    pub fn parse(name: &str) -> Option<Self> {
        match name {
            "scramble" => Some(EchoType::Scramble),
            "reverse" => Some(EchoType::Reverse),
            "ghost" => Some(EchoType::Ghost),
            "quantum_caps" => Some(EchoType::QuantumCaps),
            _ => None,
        }
    }

    /// Lookup with the documented fallback.
    pub fn parse_or_default(name: &str) -> Self {
        Self::parse(name).unwrap_or_default()
    }

    /// Wire name.
    pub fn name(&self) -> &'static str {
        match self {
            EchoType::Scramble => "scramble",
            EchoType::Reverse => "reverse",
            EchoType::Ghost => "ghost",
            EchoType::QuantumCaps => "quantum_caps",
        }
    }

    /// Catalog description.
    pub fn description(&self) -> &'static str {
        match self {
            EchoType::Scramble => "Quantum scrambling with special characters",
            EchoType::Reverse => "Quantum case reversal",
            EchoType::Ghost => "Ghostly superscript transformation",
            EchoType::QuantumCaps => "Quantum-influenced capitalization",
        }
    }
}

/// Two-qubit circuit effects. Unknown names fall back to `Entanglement`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CircuitType {
    /// Hadamard, mid-circuit measurement, conditional flips.
    #[default]
    Entanglement,
    /// Hadamard both, phase-flip the first, rotate the second by π/4.
    Interference,
    /// Hadamard and phase-flip the first, rotate the second by π/3.
    Teleportation,
}

impl CircuitType {
    /// All circuit types, in catalog order.
    pub const ALL: [CircuitType; 3] = [CircuitType::Entanglement, CircuitType::Interference, CircuitType::Teleportation];

    /// Exact-name lookup.
    pub fn parse(name: &str) -> Option<Self> {
        match name {
            "entanglement" => Some(CircuitType::Entanglement),
            "interference" => Some(CircuitType::Interference),
            "teleportation" => Some(CircuitType::Teleportation),
            _ => None,
        }
    }

    /// Lookup with the documented fallback.
    pub fn parse_or_default(name: &str) -> Self {
        Self::parse(name).unwrap_or_default()
    }

    /// Wire name.
    pub fn name(&self) -> &'static str {
        match self {
            CircuitType::Entanglement => "entanglement",
            CircuitType::Interference => "interference",
            CircuitType::Teleportation => "teleportation",
        }
    }
}

/// Any effect the dispatcher can run over a string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TransformationMode {
    /// One qubit per character with the echo type's preset gates.
    Echo(EchoType),
    /// One qubit per character with a caller-supplied gate sequence.
    QuantumGates,
    /// Two qubits per character pair.
    Circuit(CircuitType),
}

impl TransformationMode {
    /// Exact-name lookup. Accepts the `quantum_`-prefixed circuit names
    /// produced by word categorization.
    pub fn parse(name: &str) -> Option<Self> {
        if let Some(echo) = EchoType::parse(name) {
            return Some(TransformationMode::Echo(echo));
        }
        let circuit_name = name.strip_prefix("quantum_").unwrap_or(name);
        if let Some(circuit) = CircuitType::parse(circuit_name) {
            return Some(TransformationMode::Circuit(circuit));
        }
        match name {
            "quantum_gates" => Some(TransformationMode::QuantumGates),
            _ => None,
        }
    }

    /// Lookup falling back to scramble.
    pub fn parse_or_default(name: &str) -> Self {
        Self::parse(name).unwrap_or_default()
    }

    /// Wire name.
    pub fn name(&self) -> &'static str {
        match self {
            TransformationMode::Echo(echo) => echo.name(),
            TransformationMode::QuantumGates => "quantum_gates",
            TransformationMode::Circuit(circuit) => circuit.name(),
        }
    }

    /// True for modes that consume characters in pairs.
    pub fn is_multi_qubit(&self) -> bool {
        matches!(self, TransformationMode::Circuit(_))
    }
}

impl Default for TransformationMode {
    fn default() -> Self {
        TransformationMode::Echo(EchoType::Scramble)
    }
}

impl fmt::Display for TransformationMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
