//! Design constants shared by the transformer, dispatcher and echo paths.

/// Constants of the transformation model. `EchoConfig::default()` is built from these.
pub mod echo_constants {
    /// Strength above which characters become bracketed "exotic" glyphs.
    pub const HIGH_SUPERPOSITION: f64 = 0.7;
    /// Strength above which characters get diacritics or case swaps.
    pub const MEDIUM_SUPERPOSITION: f64 = 0.4;
    /// Upper bound on register width for the byte-level echo.
    pub const MAX_REGISTER_QUBITS: usize = 20;
    /// Hard ceiling the state-vector simulator accepts (2^24 amplitudes).
    pub const MAX_SIMULATED_QUBITS: usize = 24;
    /// Intensities below this dilute the memory echo.
    pub const DILUTION_THRESHOLD: f64 = 0.3;
    /// Every n-th transformed character survives dilution.
    pub const DILUTION_STRIDE: usize = 3;
    /// Rotation applied by the ghost preset and the ghost register circuit.
    pub const GHOST_ANGLE: f64 = 0.5;
    /// Sequence used by the gate endpoint when the caller sends none.
    pub const DEFAULT_GATE_SEQUENCE: &str = "H-X";
    /// Sequence used by the superposition memory effect.
    pub const SUPERPOSITION_MEMORY_SEQUENCE: &str = "H-ROT-Y-Z";
    /// Intensity assumed by the memory endpoint when the caller sends none.
    pub const DEFAULT_INTENSITY: f64 = 0.5;
    /// Used for rotation angles.
    pub const PI: f64 = std::f64::consts::PI;
}
