//! Stop-word set: membership test only.
//!
//! Loaded once before processing, one word per non-empty line, stored in the
//! same ASCII-uppercase folding the tokenizer applies.

use std::io::{self, BufRead};

use rustc_hash::FxHashSet;

/// A set of normalized stop-words.
///
/// # Example
///
/// ```
/// use freqtop::text::StopWords;
///
/// let stop = StopWords::from_words(["the", "and", "of"]);
/// assert!(stop.contains("THE"));
/// assert!(!stop.contains("CAT"));
/// ```
#[derive(Debug, Default, Clone)]
pub struct StopWords {
    words: FxHashSet<String>,
}

impl StopWords {
    /// Creates an empty set.
    pub fn new() -> Self {
        StopWords {
            words: FxHashSet::default(),
        }
    }

    /// Builds the set from an iterator of words, case-folding each.
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        StopWords {
            words: words
                .into_iter()
                .map(|word| word.as_ref().trim().to_ascii_uppercase())
                .filter(|word| !word.is_empty())
                .collect(),
        }
    }

    /// Reads one stop-word per line from `reader`, skipping blank lines.
    ///
    /// Fails fast on the first I/O error.
    pub fn from_reader<R: BufRead>(reader: R) -> io::Result<Self> {
        let mut words = FxHashSet::default();
        for line in reader.lines() {
            let line = line?;
            let word = line.trim();
            if !word.is_empty() {
                words.insert(word.to_ascii_uppercase());
            }
        }
        Ok(StopWords { words })
    }

    /// Membership test; `token` is expected in tokenizer folding (uppercase).
    pub fn contains(&self, token: &str) -> bool {
        self.words.contains(token)
    }

    /// Number of distinct stop-words.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Returns `true` if the set is empty.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

// ==============================================
// STOP-WORD TESTS
// ==============================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn from_words_case_folds() {
        let stop = StopWords::from_words(["The", "AND"]);
        assert!(stop.contains("THE"));
        assert!(stop.contains("AND"));
        assert_eq!(stop.len(), 2);
    }

    #[test]
    fn from_reader_skips_blank_lines() {
        let source = "the\n\nand\n   \nof\n";
        let stop = StopWords::from_reader(Cursor::new(source)).unwrap();
        assert_eq!(stop.len(), 3);
        assert!(stop.contains("OF"));
    }

    #[test]
    fn from_reader_trims_whitespace() {
        let stop = StopWords::from_reader(Cursor::new("  the  \n")).unwrap();
        assert!(stop.contains("THE"));
    }

    #[test]
    fn empty_set_matches_nothing() {
        let stop = StopWords::new();
        assert!(stop.is_empty());
        assert!(!stop.contains("ANYTHING"));
    }
}
