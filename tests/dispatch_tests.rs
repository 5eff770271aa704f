// tests/dispatch_tests.rs

use qecho::dispatch::{dilute, MemoryType};
use qecho::{
    CharacterTransformer, CircuitDispatcher, CircuitType, EchoConfig, EchoError, EchoType, ForcedOutcome, GateSequence,
    ScriptedSource, SeededSource, Simulator, TransformationMode,
};

fn dispatcher() -> CircuitDispatcher {
    CircuitDispatcher::new(&EchoConfig::default())
}

#[test]
fn test_forced_scramble_hi() {
    let mut rng = ForcedOutcome::new(1, 0.5);
    let out = dispatcher().dispatch_named("Hi", "scramble", &mut rng);
    assert_eq!(out, "Hī");
}

#[test]
fn test_unknown_mode_runs_scramble() {
    let d = dispatcher();
    let mut a = ForcedOutcome::new(1, 0.5);
    let mut b = ForcedOutcome::new(1, 0.5);
    assert_eq!(d.dispatch_named("Hi", "warp_drive", &mut a), d.dispatch_named("Hi", "scramble", &mut b));
}

#[test]
fn test_non_alphabetic_always_passes_through() {
    let d = dispatcher();
    let text = "123 !? -_";
    for mode in ["scramble", "reverse", "ghost", "quantum_caps", "quantum_gates", "entanglement", "interference", "teleportation"] {
        let mut rng = SeededSource::new(17);
        assert_eq!(d.dispatch_named(text, mode, &mut rng), text, "mode {}", mode);
    }
}

#[test]
fn test_length_preserved_without_exotic_tier() {
    // Reverse and ghost never exceed the medium tier, so output has one
    // character per input character.
    let d = dispatcher();
    let mut rng = SeededSource::new(3);
    let out = d.transform_echo("Quantum Echo", EchoType::Reverse, &mut rng).text;
    assert_eq!(out.chars().count(), "Quantum Echo".chars().count());
}

#[test]
fn test_quantum_caps_alternates_presets() {
    // Even positions get H (strength 1), odd ones Z on a basis state (strength 0).
    let d = dispatcher();
    let mut rng = ScriptedSource::new(vec![0.0]);
    let report = d.transform_echo("abcd", EchoType::QuantumCaps, &mut rng);
    let strengths: Vec<f64> = report.states.iter().map(|s| s.superposition).collect();
    assert_eq!(strengths, vec![1.0, 0.0, 1.0, 0.0]);
    assert_eq!(report.superposition_average, 0.5);
}

#[test]
fn test_gate_report_shape() {
    let d = dispatcher();
    let mut rng = SeededSource::new(9);
    let report = d.transform_gates("Qubit", &GateSequence::parse("H-ROT-Y-Z"), &mut rng);
    assert_eq!(report.states.len(), 5);
    assert_eq!(report.gates_applied, vec!["H", "ROT", "Y", "Z"]);
    for state in &report.states {
        assert!((0.0..=1.0).contains(&state.superposition));
        assert!(state.measurement <= 1);
        // Rounded to three decimals.
        assert_eq!((state.superposition * 1000.0).round() / 1000.0, state.superposition);
    }
}

#[test]
fn test_default_gates_come_from_config() {
    let config = EchoConfig {
        default_gate_sequence: "z-y".to_string(),
        ..Default::default()
    };
    let d = CircuitDispatcher::new(&config);
    assert_eq!(d.default_gates().names(), vec!["Z", "Y"]);
}

#[test]
fn test_entanglement_double_flip() {
    // Forced |1> at the mid-circuit measurement flips q2, then q1 is flipped
    // back; the final forced observations still read 1 for both.
    let d = dispatcher();
    let mut rng = ForcedOutcome::new(1, 0.2);
    let report = d.transform_circuit("ab", CircuitType::Entanglement, &mut rng);
    assert_eq!(report.pairs[0].measurements, (1, 1));
    assert_eq!(report.text, "AB");
    assert_eq!(report.correlation, 1.0);
}

#[test]
fn test_correlated_pairs_share_max_strength() {
    let d = dispatcher();
    let mut rng = ForcedOutcome::new(1, 0.5);
    let report = d.transform_circuit("ie", CircuitType::Teleportation, &mut rng);
    assert_eq!(report.text, "īē");
}

#[test]
fn test_entanglement_anti_correlated_pair_takes_complements() {
    // 0.9 reads 1 at the mid-circuit measurement, so q2 is flipped and q1
    // flipped back: the final reads are 0 and 1 at strength 0. Each
    // character is transformed with the complement of its own bit.
    let d = dispatcher();
    let mut rng = ScriptedSource::new(vec![0.9]);
    let report = d.transform_circuit("ab", CircuitType::Entanglement, &mut rng);
    assert_eq!(report.pairs[0].measurements, (0, 1));
    assert!(!report.pairs[0].correlated);
    assert_eq!(report.text, "Ab");
}

#[test]
fn test_entanglement_correlated_pair_keeps_measurements() {
    let d = dispatcher();
    let mut rng = ScriptedSource::new(vec![0.0]);
    let report = d.transform_circuit("ab", CircuitType::Entanglement, &mut rng);
    assert_eq!(report.pairs[0].measurements, (0, 0));
    assert!(report.pairs[0].correlated);
    assert_eq!(report.text, "ab");
}

/// Dispatcher whose exotic tier starts above the interference q2 strength
/// (about 0.707) but below the q1 strength (1.0).
fn split_tier_dispatcher() -> CircuitDispatcher {
    CircuitDispatcher::new(&EchoConfig {
        high_superposition_threshold: 0.9,
        ..Default::default()
    })
}

#[test]
fn test_correlated_pair_uses_stronger_strength() {
    // Both qubits read 0. On its own strength 'y' would be a case swap; the
    // pair shares q1's strength, so both land in the exotic tier.
    let d = split_tier_dispatcher();
    let mut rng = ScriptedSource::new(vec![0.0, 0.0]);
    let report = d.transform_circuit("xy", CircuitType::Interference, &mut rng);
    assert_eq!(report.pairs[0].measurements, (0, 0));
    assert_eq!(report.text, "⟨x⟩⟨y⟩");
}

#[test]
fn test_anti_correlated_pair_uses_own_strength() {
    // q1 reads 0 and q2 reads 1. q2 keeps its own medium strength, and the
    // complement 0 in the medium tier swaps the case.
    let d = split_tier_dispatcher();
    let mut rng = ScriptedSource::new(vec![0.0, 0.99]);
    let report = d.transform_circuit("xy", CircuitType::Interference, &mut rng);
    assert_eq!(report.pairs[0].measurements, (0, 1));
    assert_eq!(report.text, "⟨x⟩Y");
}

#[test]
fn test_circuit_mode_via_dispatch() {
    let d = dispatcher();
    let mut rng = ForcedOutcome::new(0, 0.0);
    let mode = TransformationMode::Circuit(CircuitType::Interference);
    assert_eq!(d.dispatch("HELLO", mode, &mut rng), "hello");
}

#[test]
fn test_dilution_replaces_every_third_position() {
    assert_eq!(dilute("abcdefghi", "ABCDEFGHI", 3), "AbcDefGhi");
}

#[test]
fn test_low_intensity_memory_dilutes() -> Result<(), EchoError> {
    // Forced |0> at strength 0.5 swaps the case of every letter; after
    // dilution only positions 0, 3 and 6 differ from the input.
    let d = dispatcher();
    let mut rng = ForcedOutcome::new(0, 0.5);
    let echo = d.memory_echo("abcdefghi", "superposition", 0.1, &Simulator::new(), &mut rng)?;
    assert_eq!(echo.echo, "AbcDefGhi");
    assert_eq!(echo.memory_state, "superposition");
    assert_eq!(echo.coherence, 0.5);
    Ok(())
}

#[test]
fn test_memory_coherence_defaults_to_intensity() -> Result<(), EchoError> {
    let d = dispatcher();
    let backend = Simulator::new();
    for (name, state) in [
        ("fragmented", "fragmented"),
        ("entangled", "quantum_entangled"),
        ("nostalgic", "quantum_echo"),
    ] {
        let mut rng = SeededSource::new(21);
        let echo = d.memory_echo("remember the light", name, 0.8, &backend, &mut rng)?;
        assert_eq!(echo.memory_state, state);
        assert_eq!(echo.memory_type, name);
        assert_eq!(echo.coherence, 0.8);
    }
    assert_eq!(MemoryType::parse("nostalgic"), MemoryType::Echo);
    Ok(())
}

#[test]
fn test_transformer_is_pure() {
    let t = CharacterTransformer::default();
    for c in ['a', 'Z', 'é', '7'] {
        for m in [0u8, 1] {
            for s in [0.0, 0.41, 0.71, 1.0] {
                assert_eq!(t.transform(c, m, s), t.transform(c, m, s));
            }
        }
    }
}
