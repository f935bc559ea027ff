//! Final report: the top-K set plus "actual word" annotations.
//!
//! Built once at end of stream from the selector's occupied prefix (heap
//! array order, NOT rank order) and the full frequency table. Ranking is an
//! explicit, separable sort-for-display step; it is never part of the
//! selector's live invariant.
//!
//! ## Actual-Word Detection
//!
//! With stemming enabled, a stem whose every occurrence carried one and the
//! same suffix never occurred bare, so the suffixed surface form is likely
//! the "actual" underlying word. The conditions are:
//!
//! ```text
//!   record.frequency == record.suffix_hits     every occurrence was suffixed
//!   observed_suffixes has exactly one entry    always the SAME suffix
//! ```
//!
//! A stem reached via two or more distinct suffixes is excluded outright.
//! The scan covers the whole table, not just the top-K: records survive
//! eviction precisely so this report stays complete. The surface form is
//! reconstructed by undoing the replacement and re-appending the suffix.

use std::fmt;

use crate::ds::{TokenTable, TopKSelector};
use crate::text::SuffixTable;

/// One `(token, frequency)` pair from the selector.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportEntry {
    pub token: String,
    pub frequency: u64,
}

/// A stem whose only observed surface form was suffixed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActualWord {
    /// The stemmed token as counted.
    pub stem: String,
    /// The reconstructed surface form (replacement undone, suffix restored).
    pub surface: String,
    /// The single suffix every occurrence carried.
    pub suffix: String,
    pub frequency: u64,
}

/// The rendered result of one analysis run.
#[derive(Debug, Clone, Default)]
pub struct TopKReport {
    entries: Vec<ReportEntry>,
    actual_words: Vec<ActualWord>,
}

impl TopKReport {
    /// Reads the selector's contents and the frequency table into a report.
    ///
    /// `suffixes` must be the table the run stemmed with; `None` disables
    /// actual-word annotations.
    pub fn build(
        selector: &TopKSelector,
        table: &TokenTable,
        suffixes: Option<&SuffixTable>,
    ) -> Self {
        let entries = selector
            .iter()
            .map(|node| ReportEntry {
                token: node.token().to_owned(),
                frequency: node.frequency(),
            })
            .collect();

        let mut actual_words = Vec::new();
        if let Some(suffixes) = suffixes {
            for (token, record) in table.iter() {
                if record.frequency() != record.suffix_hits() {
                    continue;
                }
                let [suffix] = record.observed_suffixes() else {
                    continue;
                };
                let Some(replacement) = suffixes.replacement(suffix) else {
                    continue;
                };
                // The stem ends with the replacement by construction; undo it
                // and restore the suffix.
                let Some(base) = token.strip_suffix(replacement) else {
                    continue;
                };
                actual_words.push(ActualWord {
                    stem: token.to_owned(),
                    surface: format!("{base}{suffix}"),
                    suffix: suffix.clone(),
                    frequency: record.frequency(),
                });
            }
            // Table iteration order is arbitrary; fix it for display.
            actual_words.sort_by(|a, b| a.stem.cmp(&b.stem));
        }

        TopKReport {
            entries,
            actual_words,
        }
    }

    /// The top-K pairs in heap-array order (order unspecified).
    pub fn entries(&self) -> &[ReportEntry] {
        &self.entries
    }

    /// The top-K pairs sorted for display: frequency descending, token
    /// ascending on ties. Display order only, no ranking semantics beyond
    /// the frequency sort.
    pub fn ranked(&self) -> Vec<&ReportEntry> {
        let mut ranked: Vec<&ReportEntry> = self.entries.iter().collect();
        ranked.sort_by(|a, b| {
            b.frequency
                .cmp(&a.frequency)
                .then_with(|| a.token.cmp(&b.token))
        });
        ranked
    }

    /// Stems whose every occurrence carried the same single suffix.
    pub fn actual_words(&self) -> &[ActualWord] {
        &self.actual_words
    }

    /// Returns `true` if nothing was admitted to the top-K.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl fmt::Display for TopKReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "top {} tokens:", self.entries.len())?;
        for entry in self.ranked() {
            writeln!(f, "  {} {}", entry.token, entry.frequency)?;
        }
        if !self.actual_words.is_empty() {
            writeln!(f, "actual words:")?;
            for word in &self.actual_words {
                writeln!(
                    f,
                    "  {} (counted as {}, always -{}) {}",
                    word.surface, word.stem, word.suffix, word.frequency
                )?;
            }
        }
        Ok(())
    }
}

// ==============================================
// REPORT TESTS
// ==============================================
