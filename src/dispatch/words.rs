//! Whole-word routing through static category tables.
//!
//! A word is looked up by its lowercase form. The tables overlap, so the
//! first table containing the word wins, in this order: memory, gates,
//! entanglement, ghost, quantum caps, scramble, reverse. Words in none of
//! them, and every non-word run, pass through untouched.

use super::{CircuitDispatcher, CircuitType, EchoType, TransformationMode};
use crate::core::RandomSource;
use std::collections::{BTreeMap, HashMap, HashSet};
use std::sync::LazyLock;
use tracing::debug;

/// Routing category of a word.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum WordCategory {
    Memory,
    Gates,
    Entanglement,
    Ghost,
    QuantumCaps,
    Scramble,
    Reverse,
    Original,
}

impl WordCategory {
    /// Table categories in lookup priority order.
    pub const PRIORITY: [WordCategory; 7] = [
        WordCategory::Memory,
        WordCategory::Gates,
        WordCategory::Entanglement,
        WordCategory::Ghost,
        WordCategory::QuantumCaps,
        WordCategory::Scramble,
        WordCategory::Reverse,
    ];

    /// Label reported per routed word.
    pub fn label(&self) -> &'static str {
        match self {
            WordCategory::Memory => "quantum_interference",
            WordCategory::Gates => "quantum_gates",
            WordCategory::Entanglement => "quantum_entanglement",
            WordCategory::Ghost => "ghost",
            WordCategory::QuantumCaps => "quantum_caps",
            WordCategory::Scramble => "scramble",
            WordCategory::Reverse => "reverse",
            WordCategory::Original => "original",
        }
    }

    /// Name of the backing table, used by statistics and coverage counts.
    pub fn table_name(&self) -> &'static str {
        match self {
            WordCategory::Memory => "quantum_memory",
            other => other.label(),
        }
    }

    /// The mode a word of this category runs through. `None` for passthrough.
    pub fn mode(&self) -> Option<TransformationMode> {
        match self {
            WordCategory::Memory => Some(TransformationMode::Circuit(CircuitType::Interference)),
            WordCategory::Gates => Some(TransformationMode::QuantumGates),
            WordCategory::Entanglement => Some(TransformationMode::Circuit(CircuitType::Entanglement)),
            WordCategory::Ghost => Some(TransformationMode::Echo(EchoType::Ghost)),
            WordCategory::QuantumCaps => Some(TransformationMode::Echo(EchoType::QuantumCaps)),
            WordCategory::Scramble => Some(TransformationMode::Echo(EchoType::Scramble)),
            WordCategory::Reverse => Some(TransformationMode::Echo(EchoType::Reverse)),
            WordCategory::Original => None,
        }
    }

    fn words(&self) -> &'static [&'static str] {
        match self {
            WordCategory::Memory => MEMORY_WORDS,
            WordCategory::Gates => GATES_WORDS,
            WordCategory::Entanglement => ENTANGLEMENT_WORDS,
            WordCategory::Ghost => GHOST_WORDS,
            WordCategory::QuantumCaps => QUANTUM_CAPS_WORDS,
            WordCategory::Scramble => SCRAMBLE_WORDS,
            WordCategory::Reverse => REVERSE_WORDS,
            WordCategory::Original => &[],
        }
    }
}

static MEMORY_WORDS: &[&str] = &[
    "memory", "memories", "remember", "forgot", "forgotten", "recall", "recalling",
    "past", "history", "lost", "gone", "disappeared", "missing", "vanished",
    "vanishing", "fading", "fade", "fades", "dim", "silent", "silence",
    "trace", "traces", "hidden", "buried", "pulled", "back", "echo", "echoes",
    "whisper", "whispers", "murmur", "murmurs", "voices", "voice", "messages",
    "beneath", "surface", "faint", "fragile", "fragments", "fragment",
    "extinguished", "beckons", "listen", "gather", "gathered", "knowledge",
    "remembered", "partially", "dreams", "despair", "limbo", "waiting",
    "remembrance", "boundary", "oblivion", "once", "might", "been",
    "intertwined", "webs", "consciousness", "awareness", "mind", "thought",
    "thoughts", "afterglow", "moments", "moment", "resurrect",
    "resurrection", "revival", "revive", "reclaim", "reclaiming", "reshape",
    "reshaping", "data", "information", "trapped", "stored", "imprint",
];

static GHOST_WORDS: &[&str] = &[
    "quantum", "light", "burst", "bursts", "brilliant", "glow", "glowing",
    "flickering", "flicker", "faintly", "slowly", "leaving", "pulse",
    "pulses", "pulsing", "signal", "signals", "energy", "wave", "waves",
    "particle", "particles", "field", "fields", "resonance", "frequency",
    "frequencies", "interference", "superposition", "entanglement", "coherence",
    "decoherence", "collapse", "measurement", "measurements", "circuit",
    "circuits", "gate", "gates", "operation", "operations", "effect",
    "effects", "phenomenon", "phenomena", "superconductor", "superconductors",
    "superconducting", "higgs", "signature", "signatures", "state", "states",
    "amplitudes", "amplitude", "qubits", "qubit", "feedback", "fractures",
    "fracture", "reality", "realities", "timelines", "timeline", "parallel",
    "alternate", "dimension", "dimensions", "space", "time", "continuum",
    "echo-tech", "processor", "computing", "technology", "beam", "beams",
    "ray", "rays", "emission", "spectrum", "wavelength", "photon", "photons",
];

static QUANTUM_CAPS_WORDS: &[&str] = &[
    "novacore", "ava", "ai", "assistant", "system", "systems", "processing",
    "processor", "neural", "digital", "computer", "computers", "computing",
    "analysis", "analyze", "calculation", "calculate", "protocol", "protocols",
    "interface", "interfaces", "network", "networks", "diagnostic", "diagnostics",
    "error", "errors", "warning", "warnings", "stable", "stability", "unstable",
    "crash", "crashes", "crashed", "instruments", "instrument", "register",
    "registers", "capture", "captured", "equipment", "console", "consoles",
    "lab", "laboratory", "experiment", "experiments", "experimenting",
    "secure", "security", "doors", "scientists", "scientist", "catalog",
    "cataloging", "excited", "massive", "holograms", "hologram", "technical",
    "achievement", "achievements", "barriers", "barrier", "surpassed",
    "monumental", "stabilize", "stabilizing", "sensor", "sensors", "precise",
    "precision", "timing", "unpredictable", "device", "devices", "machine",
    "machines", "machinery", "apparatus", "control", "controls", "controlled",
    "monitor", "monitoring", "display", "displays", "screen", "screens",
];

static GATES_WORDS: &[&str] = &[
    "bit_flip", "phase_flip", "rotate", "rotation", "hadamard", "pauli",
    "unitary", "matrix", "matrices", "eigenvalue", "eigenvector", "basis",
    "computational", "transform", "transformation", "transformations",
    "sequence", "sequences", "apply", "applied", "applying", "gate",
    "gates", "operation", "operations", "quantum", "circuit", "circuits",
    "algorithm", "algorithms", "complexity", "optimization",
    "encode", "encoding", "decode", "decoding", "process", "processes",
    "processing", "manipulation", "manipulate", "manipulating", "control",
    "controlled", "precision", "accurate", "calibrate", "calibration",
    "fine-tune", "adjustment", "parameters", "parameter", "variables",
    "variable", "function", "functions", "execute", "execution", "run",
    "simulate", "simulation", "model", "modeling", "calculate", "computation",
];

static ENTANGLEMENT_WORDS: &[&str] = &[
    "connection", "connections", "connected", "linking", "linked", "bind",
    "binding", "bound", "together", "paired", "pairs", "correlation",
    "correlations", "correlated", "relationship", "relationships", "bond",
    "bonds", "bonding", "sync", "synchronized", "harmony", "harmonized",
    "unified", "unite", "unity", "merge", "merged", "merging", "combine",
    "combined", "combining", "intertwined", "entangled", "entanglement",
    "coupled", "coupling", "shared", "sharing", "communicate", "communication",
    "communicating", "telepathic", "instant", "instantaneous", "simultaneous",
    "across", "between", "among", "throughout", "network", "web", "matrix",
    "fabric", "threads", "thread", "woven", "weaving", "pattern", "patterns",
    "resonant", "resonating", "vibration", "vibrations", "frequency", "tune",
    "tuned", "attuned", "alignment", "aligned", "coherent", "coherence",
    "interference", "constructive", "destructive", "phase", "phases",
];

static SCRAMBLE_WORDS: &[&str] = &[
    "tension", "tense", "etched", "face", "faces", "panicked", "panic",
    "run", "running", "swallowed", "blink", "blinking", "fear", "fears",
    "afraid", "scared", "breathing", "breathe", "down", "neck", "pressure",
    "locked", "lock", "away", "behind", "heavy", "doors", "trapped",
    "hard", "difficult", "struggle", "struggling", "managed", "manage",
    "finally", "at_last", "today", "need", "needs", "right", "correct",
    "choose", "choice", "choices", "decision", "decisions", "steady",
    "hands", "hand", "initiate", "start", "begin", "fails", "fail",
    "failure", "vanishes", "vanish", "ghost", "ghosts", "ghostly",
    "realities", "strong", "strength", "enough", "sufficient", "caution",
    "careful", "best", "optimal", "critical", "crash", "crashes",
    "entire", "whole", "complete", "fixing", "fix", "repair", "risk",
    "risks", "risky", "dangerous", "anyway", "regardless", "unstable",
    "proceed", "continue", "forward", "dreams", "dream", "nightmare",
    "despair", "hopeless", "melancholy", "sad", "sadness", "seeps",
    "deep", "profound", "testament", "witness", "limbo", "stuck",
    "fragile", "delicate", "nature", "essence", "blurs", "blur",
    "confused", "awed", "amazed", "complex", "complicated", "emerge",
    "emerging", "multiple", "many", "several", "branching", "branch",
    "possibilities", "possible", "hearts", "heart", "pounding", "beat",
    "anticipation", "anticipate", "waiting", "whispered", "whisper",
    "across", "space", "distance", "proof", "evidence", "beginning",
    "commence", "urgent", "urgency", "immediate", "crisis",
    "emergency", "alarm", "warning", "threat", "danger", "perilous",
];

static REVERSE_WORDS: &[&str] = &[
    "that", "was", "three", "days", "ago", "and", "you", "theo", "have",
    "been", "the", "are", "will", "can", "this", "with", "your", "but",
    "for", "not", "all", "any", "had", "her", "his", "how", "its", "may",
    "new", "old", "see", "two", "who", "did", "has", "let", "put", "say",
    "she", "too", "use", "here", "there", "where", "when", "why", "what",
    "which", "each", "than", "them", "these", "those", "would", "could",
    "should", "their", "they", "we", "our", "us", "him", "if", "or",
    "as", "at", "be", "by", "do", "go", "he", "i", "in", "is", "it",
    "me", "my", "no", "of", "on", "so", "to", "up", "an", "am", "one",
    "first", "last", "next", "then", "now", "before", "after", "during",
    "while", "until", "since", "from", "into", "onto", "upon", "over",
    "under", "through", "around", "between", "among", "within", "without",
    "about", "above", "below", "near", "far", "left", "right", "front",
    "back", "side", "top", "bottom", "inside", "outside",
    "towards", "away", "against", "along", "across", "beyond", "behind",
    "beside", "beneath", "off", "out", "down", "forward",
];

static TABLES: LazyLock<HashMap<WordCategory, HashSet<&'static str>>> = LazyLock::new(|| {
    WordCategory::PRIORITY
        .iter()
        .map(|category| (*category, category.words().iter().copied().collect()))
        .collect()
});

static LOOKUP: LazyLock<HashMap<&'static str, WordCategory>> = LazyLock::new(|| {
    let mut lookup = HashMap::new();
    for category in WordCategory::PRIORITY {
        for word in category.words() {
            lookup.entry(*word).or_insert(category);
        }
    }
    lookup
});

/// Category of `word`, matched on its lowercase form.
pub fn categorize(word: &str) -> WordCategory {
    let lower = word.trim().to_lowercase();
    LOOKUP.get(lower.as_str()).copied().unwrap_or(WordCategory::Original)
}

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

/// Splits `text` into alternating runs, flagged `true` for word runs.
/// Concatenating the runs gives back `text`.
pub fn tokenize(text: &str) -> Vec<(&str, bool)> {
    let mut runs = Vec::new();
    let mut start = 0;
    let mut current: Option<bool> = None;
    for (idx, c) in text.char_indices() {
        let word = is_word_char(c);
        match current {
            Some(kind) if kind != word => {
                runs.push((&text[start..idx], kind));
                start = idx;
                current = Some(word);
            }
            None => current = Some(word),
            _ => {}
        }
    }
    if let Some(kind) = current {
        runs.push((&text[start..], kind));
    }
    runs
}

/// How one word was routed.
#[derive(Debug, Clone, PartialEq)]
pub struct WordRoute {
    pub word: String,
    pub category: WordCategory,
    pub transformed: String,
}

/// Output of a word-routed transform.
#[derive(Debug, Clone, PartialEq)]
pub struct WordsTransform {
    pub text: String,
    pub words: Vec<WordRoute>,
}

/// Word counts of a text per category.
#[derive(Debug, Clone, PartialEq)]
pub struct CoverageReport {
    pub total_words: usize,
    pub quantum_words: usize,
    /// Percentage of routed words, one decimal; `0.0` for wordless text.
    pub coverage_percent: f64,
    /// Lowercased words per table name, plus `original`.
    pub categorized_words: BTreeMap<&'static str, Vec<String>>,
}

impl CoverageReport {
    pub fn category_counts(&self) -> BTreeMap<&'static str, usize> {
        self.categorized_words.iter().map(|(k, v)| (*k, v.len())).collect()
    }
}

/// Sizes of the category tables.
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryStats {
    /// Distinct words per table name, in priority order.
    pub table_sizes: Vec<(&'static str, usize)>,
    /// Distinct words across all tables.
    pub total_quantum_words: usize,
}

pub fn category_stats() -> CategoryStats {
    let table_sizes = WordCategory::PRIORITY
        .iter()
        .map(|c| (c.table_name(), TABLES.get(c).map_or(0, HashSet::len)))
        .collect();
    CategoryStats {
        table_sizes,
        total_quantum_words: LOOKUP.len(),
    }
}

pub fn analyze_coverage(text: &str) -> CoverageReport {
    let mut categorized_words: BTreeMap<&'static str, Vec<String>> = WordCategory::PRIORITY
        .iter()
        .chain(std::iter::once(&WordCategory::Original))
        .map(|c| (c.table_name(), Vec::new()))
        .collect();

    let mut total_words = 0;
    for (run, is_word) in tokenize(text) {
        if !is_word {
            continue;
        }
        total_words += 1;
        let lower = run.to_lowercase();
        let category = categorize(&lower);
        categorized_words.entry(category.table_name()).or_default().push(lower);
    }

    let originals = categorized_words.get("original").map_or(0, Vec::len);
    let quantum_words = total_words - originals;
    let coverage_percent = if total_words == 0 {
        0.0
    } else {
        (quantum_words as f64 / total_words as f64 * 1000.0).round() / 10.0
    };

    CoverageReport {
        total_words,
        quantum_words,
        coverage_percent,
        categorized_words,
    }
}

impl CircuitDispatcher {
    /// Routes each word of `text` through its category's mode.
    pub fn transform_words(&self, text: &str, rng: &mut dyn RandomSource) -> WordsTransform {
        let mut out = String::with_capacity(text.len());
        let mut words = Vec::new();

        for (run, is_word) in tokenize(text) {
            if !is_word {
                out.push_str(run);
                continue;
            }
            let category = categorize(run);
            let transformed = match category.mode() {
                Some(mode) => self.dispatch(run, mode, rng),
                None => run.to_string(),
            };
            out.push_str(&transformed);
            words.push(WordRoute {
                word: run.to_string(),
                category,
                transformed,
            });
        }

        debug!(words = words.len(), "word routing complete");
        WordsTransform { text: out, words }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_priority_order() {
        // "quantum" is in both gates and ghost tables; gates wins.
        assert_eq!(categorize("quantum"), WordCategory::Gates);
        // "memory" only in memory.
        assert_eq!(categorize("Memory"), WordCategory::Memory);
        // "across" is in entanglement, scramble and reverse.
        assert_eq!(categorize("ACROSS"), WordCategory::Entanglement);
        assert_eq!(categorize("the"), WordCategory::Reverse);
        assert_eq!(categorize("zebra"), WordCategory::Original);
    }

    #[test]
    fn test_tokenize_round_trips() {
        let text = "Hello, world! bit_flip 42 café";
        let runs = tokenize(text);
        let joined: String = runs.iter().map(|(r, _)| *r).collect();
        assert_eq!(joined, text);
        let words: Vec<&str> = runs.iter().filter(|(_, w)| *w).map(|(r, _)| *r).collect();
        assert_eq!(words, vec!["Hello", "world", "bit_flip", "42", "café"]);
    }

    #[test]
    fn test_coverage() {
        let report = analyze_coverage("The memory of zebras");
        assert_eq!(report.total_words, 4);
        assert_eq!(report.quantum_words, 3);
        assert_eq!(report.coverage_percent, 75.0);
        let counts = report.category_counts();
        assert_eq!(counts["quantum_memory"], 1);
        assert_eq!(counts["reverse"], 2);
        assert_eq!(counts["original"], 1);
    }

    #[test]
    fn test_empty_coverage() {
        let report = analyze_coverage("... !!");
        assert_eq!(report.total_words, 0);
        assert_eq!(report.coverage_percent, 0.0);
    }

    #[test]
    fn test_stats_union_is_smaller_than_sum() {
        let stats = category_stats();
        assert_eq!(stats.table_sizes.len(), 7);
        assert_eq!(stats.table_sizes[0].0, "quantum_memory");
        let sum: usize = stats.table_sizes.iter().map(|(_, n)| n).sum();
        assert!(stats.total_quantum_words < sum);
        assert!(stats.total_quantum_words > 0);
    }
}
