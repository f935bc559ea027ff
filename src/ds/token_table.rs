//! Frequency table: per-token running statistics plus the live heap slot.
//!
//! One [`TokenRecord`] per distinct token seen. Records are created on first
//! occurrence and never removed during a run; the final stemming report needs
//! them even after a token has been evicted from the top-K selector.
//!
//! The `heap_slot` field is the table half of the bidirectional pointer
//! invariant shared with [`TopKSelector`](crate::ds::TopKSelector): whenever
//! it is `Some(i)`, the selector's node at index `i` holds this exact token,
//! and every occupied selector slot maps back here. Only the selector calls
//! [`set_slot`](TokenTable::set_slot); every node move updates the moved
//! token's record in the same step.

use rustc_hash::FxHashMap;

/// Running statistics for one distinct token.
#[derive(Debug, Clone, Default)]
pub struct TokenRecord {
    frequency: u64,
    heap_slot: Option<usize>,
    suffix_hits: u64,
    observed_suffixes: Vec<String>,
}

impl TokenRecord {
    fn first_occurrence() -> Self {
        TokenRecord {
            frequency: 1,
            heap_slot: None,
            suffix_hits: 0,
            observed_suffixes: Vec::new(),
        }
    }

    /// Total occurrences seen so far (>= 1).
    pub fn frequency(&self) -> u64 {
        self.frequency
    }

    /// Current index into the selector's backing array, if this token is one
    /// of the top-K right now.
    pub fn heap_slot(&self) -> Option<usize> {
        self.heap_slot
    }

    /// Occurrences that arrived via a suffix match (stemming enabled only).
    pub fn suffix_hits(&self) -> u64 {
        self.suffix_hits
    }

    /// Distinct suffixes this stem was reached through, in first-seen order.
    pub fn observed_suffixes(&self) -> &[String] {
        &self.observed_suffixes
    }
}

/// Map from token to its [`TokenRecord`].
///
/// # Example
///
/// ```
/// use freqtop::ds::TokenTable;
///
/// let mut table = TokenTable::new();
/// assert_eq!(table.observe("WORD"), 1);
/// assert_eq!(table.observe("WORD"), 2);
/// assert_eq!(table.record("WORD").map(|r| r.frequency()), Some(2));
/// ```
#[derive(Debug, Default)]
pub struct TokenTable {
    records: FxHashMap<String, TokenRecord>,
}

impl TokenTable {
    /// Creates an empty table.
    pub fn new() -> Self {
        TokenTable {
            records: FxHashMap::default(),
        }
    }

    /// Creates an empty table with pre-allocated capacity.
    pub fn with_capacity(capacity: usize) -> Self {
        TokenTable {
            records: FxHashMap::with_capacity_and_hasher(capacity, Default::default()),
        }
    }

    /// Records one occurrence of `token` and returns its new frequency.
    ///
    /// First occurrence creates a record at frequency 1 with no heap slot.
    /// Monotonic counter, no failure mode.
    pub fn observe(&mut self, token: &str) -> u64 {
        if let Some(record) = self.records.get_mut(token) {
            record.frequency += 1;
            record.frequency
        } else {
            self.records
                .insert(token.to_owned(), TokenRecord::first_occurrence());
            1
        }
    }

    /// Records that the current occurrence of `token` arrived via `suffix`.
    ///
    /// Called only when stemming matched a non-trivial suffix, after
    /// [`observe`](Self::observe) for the same occurrence.
    pub fn record_suffix_hit(&mut self, token: &str, suffix: &str) {
        let Some(record) = self.records.get_mut(token) else {
            debug_assert!(false, "suffix hit for unseen token {token:?}");
            return;
        };
        record.suffix_hits += 1;
        if !record.observed_suffixes.iter().any(|s| s == suffix) {
            record.observed_suffixes.push(suffix.to_owned());
        }
    }

    /// Returns the token's current heap slot, if it is in the top-K.
    pub fn slot(&self, token: &str) -> Option<usize> {
        self.records.get(token).and_then(|record| record.heap_slot)
    }

    /// Sets (or clears, with `None`) the token's heap slot.
    ///
    /// Selector-internal: must be called in the same step as the heap
    /// mutation it mirrors, never independently.
    pub(crate) fn set_slot(&mut self, token: &str, slot: Option<usize>) {
        let Some(record) = self.records.get_mut(token) else {
            debug_assert!(false, "slot update for unseen token {token:?}");
            return;
        };
        record.heap_slot = slot;
    }

    /// Returns the record for `token`, if seen.
    pub fn record(&self, token: &str) -> Option<&TokenRecord> {
        self.records.get(token)
    }

    /// Number of distinct tokens seen.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns `true` if no token has been seen yet.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Iterates over all `(token, record)` pairs in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &TokenRecord)> {
        self.records
            .iter()
            .map(|(token, record)| (token.as_str(), record))
    }
}

// ==============================================
// TOKEN TABLE TESTS
// ==============================================
