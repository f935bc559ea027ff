//! Analysis pipeline: lines -> tokens -> frequency table -> top-K selector.
//!
//! One [`Analyzer`] call runs one analysis: the frequency table and selector
//! are created fresh per run and discarded once the report is built, so no
//! state leaks between runs. Stop-word and suffix tables are explicit
//! configuration, not hidden controller fields.
//!
//! Per-token flow, in order:
//!
//! ```text
//!   raw token ─▶ stop-word check (raw form) ─▶ optional stemming
//!             ─▶ TokenTable::observe ─▶ TopKSelector::update
//! ```
//!
//! The stop-word check runs on the raw token BEFORE stemming; duplicate
//! tokens within one line simply pass through `update` once per occurrence,
//! in order.
//!
//! ## Example Usage
//!
//! ```
//! use freqtop::analyzer::{Analyzer, AnalyzerConfig};
//! use freqtop::text::StopWords;
//!
//! let config = AnalyzerConfig::new(2)
//!     .stop_words(StopWords::from_words(["the"]));
//! let report = Analyzer::new(config)
//!     .analyze_lines(["the cat and the cat", "a dog"]);
//!
//! let ranked = report.ranked();
//! assert_eq!(ranked[0].token, "CAT");
//! assert_eq!(ranked[0].frequency, 2);
//! ```

use std::borrow::Cow;
use std::io::{self, BufRead};

use crate::ds::{TokenTable, TopKSelector};
use crate::report::TopKReport;
use crate::text::{StopWords, SuffixTable, Tokenizer};

/// Configuration for one analysis run.
///
/// Optional stages are selected by presence: a `Some` stop-word set enables
/// filtering, a `Some` suffix table enables stemming. `k = 0` is valid and
/// yields an empty top-K.
#[derive(Debug, Default)]
pub struct AnalyzerConfig {
    k: usize,
    stop_words: Option<StopWords>,
    suffixes: Option<SuffixTable>,
}

impl AnalyzerConfig {
    /// Creates a configuration retaining the top `k` tokens.
    pub fn new(k: usize) -> Self {
        AnalyzerConfig {
            k,
            stop_words: None,
            suffixes: None,
        }
    }

    /// Enables stop-word filtering with the given set.
    pub fn stop_words(mut self, stop_words: StopWords) -> Self {
        self.stop_words = Some(stop_words);
        self
    }

    /// Enables suffix-stripping stemming with the given table.
    pub fn stem_suffixes(mut self, suffixes: SuffixTable) -> Self {
        self.suffixes = Some(suffixes);
        self
    }
}

/// Runs the tokenize → count → select pipeline over a line stream.
#[derive(Debug)]
pub struct Analyzer {
    tokenizer: Tokenizer,
    config: AnalyzerConfig,
}

impl Analyzer {
    /// Creates an analyzer for the given configuration.
    pub fn new(config: AnalyzerConfig) -> Self {
        Analyzer {
            tokenizer: Tokenizer::new(),
            config,
        }
    }

    /// Analyzes an in-memory sequence of lines. Infallible.
    pub fn analyze_lines<I, S>(&self, lines: I) -> TopKReport
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut table = TokenTable::new();
        let mut selector = TopKSelector::new(self.config.k);
        for line in lines {
            self.ingest_line(&mut table, &mut selector, line.as_ref());
        }
        TopKReport::build(&selector, &table, self.config.suffixes.as_ref())
    }

    /// Analyzes a line-oriented reader, aborting on the first I/O error.
    ///
    /// No partial state is surfaced on failure: the whole analysis is
    /// discarded.
    pub fn analyze_reader<R: BufRead>(&self, reader: R) -> io::Result<TopKReport> {
        let mut table = TokenTable::new();
        let mut selector = TopKSelector::new(self.config.k);
        for line in reader.lines() {
            let line = line?;
            self.ingest_line(&mut table, &mut selector, &line);
        }
        Ok(TopKReport::build(
            &selector,
            &table,
            self.config.suffixes.as_ref(),
        ))
    }

    fn ingest_line(&self, table: &mut TokenTable, selector: &mut TopKSelector, line: &str) {
        for raw in self.tokenizer.tokens(line) {
            self.ingest_token(table, selector, &raw);
        }
    }

    fn ingest_token(&self, table: &mut TokenTable, selector: &mut TopKSelector, raw: &str) {
        if let Some(stop_words) = &self.config.stop_words {
            if stop_words.contains(raw) {
                return;
            }
        }

        let (token, suffix) = match &self.config.suffixes {
            Some(suffixes) => match suffixes.apply(raw) {
                Some(stemmed) => (Cow::Owned(stemmed.stem), Some(stemmed.suffix)),
                None => (Cow::Borrowed(raw), None),
            },
            None => (Cow::Borrowed(raw), None),
        };

        let frequency = table.observe(&token);
        if let Some(suffix) = suffix {
            table.record_suffix_hit(&token, suffix);
        }
        selector.update(table, &token, frequency);
    }
}

// ==============================================
// ANALYZER TESTS
// ==============================================
