// tests/qubit_tests.rs

use qecho::{EchoError, Gate, GateSequence, GateToken, Qubit, RandomSource, ScriptedSource, SeededSource, check_qubit_normalization};
use std::f64::consts::{FRAC_PI_2, PI};

const EPS: f64 = 1e-12;

#[test]
fn test_fresh_qubit_is_zero() {
    let q = Qubit::new();
    assert_eq!(q.probability_zero(), 1.0);
    assert_eq!(q.superposition_strength(), 0.0);
    assert!(q.is_basis_state());
}

#[test]
fn test_hadamard_gives_full_strength() {
    let mut q = Qubit::new();
    q.apply(Gate::Hadamard);
    assert!((q.probability_zero() - 0.5).abs() < EPS);
    assert!((q.superposition_strength() - 1.0).abs() < EPS);
}

#[test]
fn test_involutions_restore_state() -> Result<(), EchoError> {
    for gate in [Gate::BitFlip, Gate::PhaseFlip, Gate::Hadamard] {
        let mut q = Qubit::new();
        q.apply(Gate::RotateY(0.8));
        let before = q;
        q.apply(gate);
        q.apply(gate);
        assert!((q.alpha() - before.alpha()).norm() < EPS, "{} twice should be identity", gate);
        assert!((q.beta() - before.beta()).norm() < EPS);
        check_qubit_normalization(&q, None)?;
    }
    Ok(())
}

#[test]
fn test_observe_reads_strength_before_collapse() {
    let mut q = Qubit::new();
    q.apply(Gate::Hadamard);
    let mut rng = ScriptedSource::new(vec![0.25]);
    let result = rng.observe(&mut q);
    assert_eq!(result.measurement, 0);
    assert!((result.strength - 1.0).abs() < EPS);
    // Collapsed afterwards.
    assert_eq!(q.superposition_strength(), 0.0);
}

#[test]
fn test_measurement_is_idempotent_after_collapse() {
    let mut rng = SeededSource::new(2024);
    for _ in 0..32 {
        let mut q = Qubit::new();
        q.apply(Gate::RotateY(1.1));
        let first = q.measure(&mut rng);
        for _ in 0..4 {
            assert_eq!(q.measure(&mut rng), first);
        }
    }
}

#[test]
fn test_measure_threshold_is_strict() {
    // r equal to p0 measures 1.
    let mut q = Qubit::new();
    q.apply(Gate::Hadamard);
    let p0 = q.probability_zero();
    let mut probe = q;
    assert_eq!(probe.measure_with(p0), 1);
    assert_eq!(q.measure_with(0.0), 0);
}

#[test]
fn test_gate_sequence_grammar() {
    let seq = GateSequence::parse(" h - x -bogus- rot ");
    assert_eq!(seq.names(), vec!["H", "X", "ROT"]);
    assert_eq!(seq.to_string(), "H-X-ROT");

    assert_eq!(GateSequence::parse("").tokens(), &[GateToken::Hadamard]);
    assert_eq!(GateSequence::parse("nope-nada").tokens(), &[GateToken::Hadamard]);
}

#[test]
fn test_rot_angle_depends_on_position() {
    let seq = GateSequence::parse("ROT");
    assert_eq!(seq.gates_for(0, 4), vec![Gate::RotateY(PI / 4.0)]);
    assert_eq!(seq.gates_for(3, 4), vec![Gate::RotateY(PI)]);
    assert_eq!(GateSequence::parse("y").gates_for(7, 9), vec![Gate::RotateY(FRAC_PI_2)]);
}
