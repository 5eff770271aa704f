//! Draw-only echo used when no circuit backend is wanted.

use crate::core::RandomSource;
use crate::dispatch::EchoType;
use crate::transform::tables;

/// Per-character random edits, no qubits involved.
///
/// Scramble replaces a character that has accent variants with a random
/// variant when a draw exceeds 0.7 (the variant is always lowercase). Reverse
/// swaps case on draws above 0.5. Ghost swaps in a superscript on draws above
/// 0.6. Quantum caps upper-cases on draws above 0.5 and lower-cases otherwise.
pub fn pseudo_echo(text: &str, echo_type: EchoType, rng: &mut dyn RandomSource) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        let lower = c.to_lowercase().next().unwrap_or(c);
        match echo_type {
            EchoType::Scramble => match tables::pseudo_variants(lower) {
                Some(variants) if rng.next_unit() > 0.7 => out.push(variants[rng.pick_index(variants.len())]),
                _ => out.push(c),
            },
            EchoType::Reverse => {
                if rng.next_unit() > 0.5 {
                    out.push_str(&tables::swap_case(c));
                } else {
                    out.push(c);
                }
            }
            EchoType::Ghost => match tables::superscript(lower) {
                Some(sup) if rng.next_unit() > 0.6 => out.push(sup),
                _ => out.push(c),
            },
            EchoType::QuantumCaps => {
                if rng.next_unit() > 0.5 {
                    out.extend(c.to_uppercase());
                } else {
                    out.extend(c.to_lowercase());
                }
            }
        }
    }
    out
}
