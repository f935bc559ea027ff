// ==============================================
// CROSS-MODULE ANALYSIS INVARIANT TESTS (integration)
// ==============================================
//
// End-to-end scenarios plus randomized selector/table consistency checks.
// These span the tokenizer, frequency table, selector, and reporter and
// belong here rather than in any single source file.

use freqtop::analyzer::{Analyzer, AnalyzerConfig};
use freqtop::ds::{TokenTable, TopKSelector};
use freqtop::text::{StopWords, SuffixTable};

/// Simple XorShift64 RNG for deterministic workloads.
struct XorShift64 {
    state: u64,
}

impl XorShift64 {
    fn new(seed: u64) -> Self {
        Self { state: seed.max(1) }
    }

    fn next_u64(&mut self) -> u64 {
        let mut x = self.state;
        x ^= x << 13;
        x ^= x >> 7;
        x ^= x << 17;
        self.state = x;
        x
    }
}

// ==============================================
// Randomized Selector Consistency
// ==============================================

/// Feed a skewed random token stream and check, after every single update,
/// that the heap shape and the bidirectional slot pointers hold; at the end,
/// compare the held frequency multiset against a naive oracle.
fn run_randomized(seed: u64, k: usize, operations: usize, universe: u64) {
    let mut rng = XorShift64::new(seed);
    let mut table = TokenTable::new();
    let mut selector = TopKSelector::new(k);

    for _ in 0..operations {
        // Square the draw to skew toward low token ids (hot tokens).
        let draw = rng.next_u64() % universe;
        let id = (draw * draw) / universe.max(1);
        let token = format!("T{id}");

        let frequency = table.observe(&token);
        selector.update(&mut table, &token, frequency);
        selector
            .check_invariants(&table)
            .expect("invariants must hold after every update");
        assert!(selector.len() <= k);
    }

    // Oracle: the selector's frequency multiset equals the K largest
    // frequencies over all tokens seen.
    let mut all: Vec<u64> = table.iter().map(|(_, record)| record.frequency()).collect();
    all.sort_unstable_by(|a, b| b.cmp(a));
    all.truncate(k);
    all.sort_unstable();

    let mut held: Vec<u64> = selector.iter().map(|node| node.frequency()).collect();
    held.sort_unstable();

    assert_eq!(held, all, "selector does not hold the top-{k} frequencies");
}

#[test]
fn randomized_small_selector() {
    run_randomized(0x5eed, 4, 2_000, 32);
}

#[test]
fn randomized_large_selector() {
    run_randomized(0xDEADBEEF, 25, 5_000, 200);
}

#[test]
fn randomized_selector_larger_than_universe() {
    run_randomized(7, 50, 1_000, 10);
}

#[test]
fn randomized_capacity_one() {
    run_randomized(42, 1, 1_000, 16);
}

// ==============================================
// Tie Stability at the Boundary
// ==============================================

#[test]
fn equal_frequency_never_displaces_incumbent() {
    let mut table = TokenTable::new();
    let mut selector = TopKSelector::new(2);

    for token in ["A", "B"] {
        let frequency = table.observe(token);
        selector.update(&mut table, token, frequency);
    }
    // A stream of fresh frequency-1 tokens: none may enter.
    for id in 0..100 {
        let token = format!("N{id}");
        let frequency = table.observe(&token);
        selector.update(&mut table, &token, frequency);
        assert!(table.slot(&token).is_none());
    }

    assert!(table.slot("A").is_some());
    assert!(table.slot("B").is_some());
    selector.check_invariants(&table).unwrap();
}

// ==============================================
// End-to-End Scenarios
// ==============================================

#[test]
fn pipeline_k3_tie_boundary_scenario() {
    let report = Analyzer::new(AnalyzerConfig::new(3)).analyze_lines(["A B C D A A"]);

    let mut held: Vec<(String, u64)> = report
        .entries()
        .iter()
        .map(|entry| (entry.token.clone(), entry.frequency))
        .collect();
    held.sort();

    assert_eq!(held.len(), 3);
    assert!(held.contains(&("A".to_owned(), 3)));
    for (token, frequency) in held.iter().filter(|(t, _)| t != "A") {
        assert_eq!(*frequency, 1);
        assert!(["B", "C", "D"].contains(&token.as_str()));
    }
}

#[test]
fn pipeline_all_stages_together() {
    let config = AnalyzerConfig::new(3)
        .stop_words(StopWords::from_words(["the", "and"]))
        .stem_suffixes(SuffixTable::reference());
    let report = Analyzer::new(config).analyze_lines([
        "the carzl and the carzl",
        "stone and the stone",
        "stone!",
    ]);

    let ranked: Vec<(&str, u64)> = report
        .ranked()
        .into_iter()
        .map(|entry| (entry.token.as_str(), entry.frequency))
        .collect();
    assert_eq!(ranked, vec![("STONE", 3), ("CARA", 2)]);

    // CARA only ever arrived via -ZL, so CARZL is the actual word.
    assert_eq!(report.actual_words().len(), 1);
    assert_eq!(report.actual_words()[0].surface, "CARZL");
    assert_eq!(report.actual_words()[0].stem, "CARA");
}

#[test]
fn longest_suffix_first_through_the_pipeline() {
    let config = AnalyzerConfig::new(5)
        .stem_suffixes(SuffixTable::from_pairs([("ZL", "A"), ("EZL", "R")]).unwrap());
    let report = Analyzer::new(config).analyze_lines(["runezl"]);

    assert_eq!(report.entries().len(), 1);
    // EZL -> R wins over ZL -> A.
    assert_eq!(report.entries()[0].token, "RUNR");
}

#[test]
fn k_zero_pipeline_yields_empty_report() {
    let report = Analyzer::new(AnalyzerConfig::new(0)).analyze_lines(["a a b c a"]);
    assert!(report.is_empty());
    assert!(report.ranked().is_empty());
}
