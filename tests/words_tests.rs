// tests/words_tests.rs

use qecho::dispatch::{analyze_coverage, categorize, category_stats};
use qecho::{CircuitDispatcher, ForcedOutcome, SeededSource, TransformationMode, WordCategory};

#[test]
fn test_memory_words_use_circuit_path() {
    let category = categorize("Remember");
    assert_eq!(category, WordCategory::Memory);
    assert_eq!(category.label(), "quantum_interference");
    let mode = category.mode().unwrap();
    assert!(mode.is_multi_qubit());
}

#[test]
fn test_unknown_words_are_original() {
    assert_eq!(categorize("zebra"), WordCategory::Original);
    assert_eq!(WordCategory::Original.mode(), None);
}

#[test]
fn test_category_modes() {
    assert_eq!(WordCategory::Gates.mode(), Some(TransformationMode::QuantumGates));
    assert_eq!(categorize("photon").mode(), TransformationMode::parse("ghost"));
    assert_eq!(categorize("console").mode(), TransformationMode::parse("quantum_caps"));
    assert_eq!(categorize("panic").mode(), TransformationMode::parse("scramble"));
    assert_eq!(categorize("when").mode(), TransformationMode::parse("reverse"));
    assert_eq!(categorize("bond").mode(), TransformationMode::parse("quantum_entanglement"));
}

#[test]
fn test_passthrough_is_byte_identical() {
    let d = CircuitDispatcher::default();
    let mut rng = ForcedOutcome::new(1, 1.0);
    let text = "Zebras, xylophones & yaks!";
    let routed = d.transform_words(text, &mut rng);
    assert_eq!(routed.text, text);
    assert!(routed.words.iter().all(|w| w.category == WordCategory::Original));
}

#[test]
fn test_punctuation_is_preserved_around_routed_words() {
    let d = CircuitDispatcher::default();
    let mut rng = SeededSource::new(12);
    let routed = d.transform_words("--memory...", &mut rng);
    assert!(routed.text.starts_with("--"));
    assert!(routed.text.ends_with("..."));
    assert_eq!(routed.words.len(), 1);
    assert_eq!(routed.words[0].word, "memory");
}

#[test]
fn test_sample_coverage() {
    let report = analyze_coverage("That was three days ago and you, Theo and Ava have been locked away");
    assert_eq!(report.total_words, 14);
    // Every word of this sentence is in some table.
    assert_eq!(report.quantum_words, 14);
    assert_eq!(report.coverage_percent, 100.0);
    let counts = report.category_counts();
    // "been" is a memory word before it is a reverse word.
    assert_eq!(counts["quantum_memory"], 1);
    assert_eq!(counts["quantum_caps"], 1);
}

#[test]
fn test_coverage_rounds_to_one_decimal() {
    let report = analyze_coverage("memory zebra zebra");
    assert_eq!(report.coverage_percent, 33.3);
}

#[test]
fn test_stats_have_every_table() {
    let stats = category_stats();
    let names: Vec<&str> = stats.table_sizes.iter().map(|(n, _)| *n).collect();
    assert_eq!(
        names,
        vec!["quantum_memory", "quantum_gates", "quantum_entanglement", "ghost", "quantum_caps", "scramble", "reverse"]
    );
    assert!(stats.table_sizes.iter().all(|(_, n)| *n > 0));
}
