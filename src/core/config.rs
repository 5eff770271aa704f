//! Runtime configuration for the transformation layer.

use super::constants::echo_constants::*;
use super::error::{EchoError, Result};
use serde::{Deserialize, Serialize};

/// Which implementation serves the basic echo endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum EchoBackend {
    /// Byte-level register circuits run through a `CircuitBackend`.
    #[default]
    Circuit,
    /// Plain random draws, no circuit model.
    Pseudo,
}

/// Tunables of the echo service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EchoConfig {
    /// Strength above which characters become exotic glyphs.
    pub high_superposition_threshold: f64,
    /// Strength above which characters get diacritics or case swaps.
    pub medium_superposition_threshold: f64,
    /// Register width cap for the byte-level echo.
    pub max_register_qubits: usize,
    /// Memory intensities below this dilute the output.
    pub dilution_threshold: f64,
    /// Stride of transformed characters kept when diluting.
    pub dilution_stride: usize,
    /// Gate sequence used when a caller sends none.
    pub default_gate_sequence: String,
    /// Y-rotation angle of the ghost preset.
    pub ghost_angle: f64,
    /// Intensity assumed when a memory request sends none.
    pub default_intensity: f64,
    /// Echo implementation.
    pub backend: EchoBackend,
    /// Fixed per-request seed. `None` draws fresh entropy for every request.
    pub seed: Option<u64>,
}

impl Default for EchoConfig {
    fn default() -> Self {
        Self {
            high_superposition_threshold: HIGH_SUPERPOSITION,
            medium_superposition_threshold: MEDIUM_SUPERPOSITION,
            max_register_qubits: MAX_REGISTER_QUBITS,
            dilution_threshold: DILUTION_THRESHOLD,
            dilution_stride: DILUTION_STRIDE,
            default_gate_sequence: DEFAULT_GATE_SEQUENCE.to_string(),
            ghost_angle: GHOST_ANGLE,
            default_intensity: DEFAULT_INTENSITY,
            backend: EchoBackend::Circuit,
            seed: None,
        }
    }
}

impl EchoConfig {
    /// Parses a JSON document (missing keys take defaults) and validates it.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json).map_err(|e| EchoError::invalid_parameter("config", e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Rejects settings the transformer and simulator cannot honour.
    pub fn validate(&self) -> Result<()> {
        for (name, value) in [
            ("high_superposition_threshold", self.high_superposition_threshold),
            ("medium_superposition_threshold", self.medium_superposition_threshold),
        ] {
            if !(0.0..=1.0).contains(&value) {
                return Err(EchoError::invalid_parameter(name, format!("{} is outside [0, 1]", value)));
            }
        }
        if self.medium_superposition_threshold > self.high_superposition_threshold {
            return Err(EchoError::invalid_parameter(
                "medium_superposition_threshold",
                "must not exceed high_superposition_threshold",
            ));
        }
        if self.max_register_qubits == 0 || self.max_register_qubits > MAX_SIMULATED_QUBITS {
            return Err(EchoError::invalid_parameter(
                "max_register_qubits",
                format!("must be within 1..={}", MAX_SIMULATED_QUBITS),
            ));
        }
        if self.dilution_stride == 0 {
            return Err(EchoError::invalid_parameter("dilution_stride", "must be at least 1"));
        }
        Ok(())
    }
}
