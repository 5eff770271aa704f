// src/transform/mod.rs

//! Maps one character plus its measurement outcome to an output glyph.
//!
//! The mapping is tiered by superposition strength:
//!
//! | strength              | measurement 1          | measurement 0 |
//! |-----------------------|------------------------|---------------|
//! | `> high`              | bracketed exotic glyph | same          |
//! | `(medium, high]`      | diacritic variant      | case swap     |
//! | `<= medium`           | uppercase              | lowercase     |
//!
//! Non-alphabetic characters always pass through.

pub mod tables;

use crate::core::{EchoConfig, MeasurementResult};
use crate::core::echo_constants::{HIGH_SUPERPOSITION, MEDIUM_SUPERPOSITION};

/// Pure, table-driven character transformer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CharacterTransformer {
    high: f64,
    medium: f64,
}

impl CharacterTransformer {
    /// Transformer with explicit tier thresholds.
    pub fn new(high: f64, medium: f64) -> Self {
        Self { high, medium }
    }

    /// Transformer using the thresholds of `config`.
    pub fn from_config(config: &EchoConfig) -> Self {
        Self::new(config.high_superposition_threshold, config.medium_superposition_threshold)
    }

    /// Transforms `c` given a measured bit and a strength.
    pub fn transform(&self, c: char, measurement: u8, strength: f64) -> String {
        if !c.is_alphabetic() {
            return c.to_string();
        }

        if strength > self.high {
            return match tables::exotic_glyph(c) {
                Some(glyph) => glyph.to_string(),
                None => format!("⟨{}⟩", c),
            };
        }

        if strength > self.medium {
            return if measurement == 1 {
                tables::diacritic(c).unwrap_or(c).to_string()
            } else {
                tables::swap_case(c)
            };
        }

        if measurement == 1 {
            c.to_uppercase().collect()
        } else {
            c.to_lowercase().collect()
        }
    }

    /// `transform` fed from a measurement result.
    pub fn transform_result(&self, c: char, result: &MeasurementResult) -> String {
        self.transform(c, result.measurement, result.strength)
    }
}

impl Default for CharacterTransformer {
    fn default() -> Self {
        Self::new(HIGH_SUPERPOSITION, MEDIUM_SUPERPOSITION)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_non_alphabetic_passes_through() {
        let t = CharacterTransformer::default();
        for c in ['1', ' ', '!', '-', '⟨'] {
            assert_eq!(t.transform(c, 1, 1.0), c.to_string());
            assert_eq!(t.transform(c, 0, 0.0), c.to_string());
        }
    }

    #[test]
    fn test_high_tier() {
        let t = CharacterTransformer::default();
        assert_eq!(t.transform('a', 0, 0.9), "⟨ᵃ⟩");
        assert_eq!(t.transform('U', 1, 1.0), "⟨ᵁ⟩");
        assert_eq!(t.transform('q', 1, 0.71), "⟨q⟩");
    }

    #[test]
    fn test_medium_tier() {
        let t = CharacterTransformer::default();
        assert_eq!(t.transform('i', 1, 0.5), "ī");
        assert_eq!(t.transform('H', 1, 0.5), "H");
        assert_eq!(t.transform('H', 0, 0.5), "h");
        assert_eq!(t.transform('z', 1, 0.7), "ž");
    }

    #[test]
    fn test_low_tier() {
        let t = CharacterTransformer::default();
        assert_eq!(t.transform('a', 1, 0.4), "A");
        assert_eq!(t.transform('A', 0, 0.0), "a");
        assert_eq!(t.transform('ß', 1, 0.1), "SS");
    }

    #[test]
    fn test_custom_thresholds() {
        let t = CharacterTransformer::new(0.9, 0.1);
        assert_eq!(t.transform('e', 1, 0.8), "ē");
        assert_eq!(t.transform('e', 1, 0.05), "E");
    }
}
