// src/core/mod.rs

//! Core data structures and types

pub mod error;
pub mod qubit;
pub mod random;
pub mod config;

pub use error::{EchoError, Result};
pub use qubit::{MeasurementResult, Qubit};
pub use random::{ForcedOutcome, RandomSource, ScriptedSource, SeededSource};
pub use config::{EchoBackend, EchoConfig};

pub mod constants;
pub use constants::echo_constants;
