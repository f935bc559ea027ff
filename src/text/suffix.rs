//! Suffix table: fixed suffix → replacement rules with longest-first match.
//!
//! Stem resolution tries the longest configured suffix length first and walks
//! down to length 1, returning the first table hit; the linear scan by
//! decreasing length is what makes the longest of several overlapping
//! suffixes win, and must not be reordered. Tokens shorter than the longest
//! configured rule are returned unmatched (the matching window starts at the
//! longest length and is abandoned when it does not fit).
//!
//! This is a small fixed lookup, not a linguistic stemmer.

use rustc_hash::FxHashMap;

use crate::error::ConfigError;

/// A successful suffix match on one token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Stemmed<'t> {
    /// The token with its suffix replaced.
    pub stem: String,
    /// The matched suffix, as configured (uppercase).
    pub suffix: &'t str,
}

/// Mapping from suffix to replacement (possibly empty).
///
/// # Example
///
/// ```
/// use freqtop::text::SuffixTable;
///
/// let table = SuffixTable::reference();
/// let stemmed = table.apply("CARZL").unwrap();
/// assert_eq!(stemmed.stem, "CARA");
/// assert_eq!(stemmed.suffix, "ZL");
///
/// // Longest match wins: EZL (3 letters) beats ZL (2) and L (1).
/// assert_eq!(table.apply("RUNEZL").unwrap().stem, "RUNR");
/// ```
#[derive(Debug, Clone)]
pub struct SuffixTable {
    rules: FxHashMap<String, String>,
    max_len: usize,
}

impl SuffixTable {
    /// The reference rule set: `L, LZ, ZL→A, ZQ, EVM, EZL→R, PZL→AZ`.
    pub fn reference() -> Self {
        let pairs = [
            ("L", ""),
            ("LZ", ""),
            ("ZL", "A"),
            ("ZQ", ""),
            ("EVM", ""),
            ("EZL", "R"),
            ("PZL", "AZ"),
        ];
        // Static rules, all non-empty.
        Self::from_pairs(pairs).expect("reference rules are valid")
    }

    /// Builds a table from `(suffix, replacement)` pairs, case-folding both.
    ///
    /// Rejects empty suffixes: a zero-length rule would match every token.
    pub fn from_pairs<I, S, R>(pairs: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = (S, R)>,
        S: AsRef<str>,
        R: AsRef<str>,
    {
        let mut rules = FxHashMap::default();
        let mut max_len = 0;
        for (suffix, replacement) in pairs {
            let suffix = suffix.as_ref().to_ascii_uppercase();
            if suffix.is_empty() {
                return Err(ConfigError::new("suffix must be non-empty"));
            }
            max_len = max_len.max(suffix.len());
            rules.insert(suffix, replacement.as_ref().to_ascii_uppercase());
        }
        Ok(SuffixTable { rules, max_len })
    }

    /// Length of the longest configured suffix.
    pub fn max_len(&self) -> usize {
        self.max_len
    }

    /// The replacement for `suffix`, if such a rule exists.
    pub fn replacement(&self, suffix: &str) -> Option<&str> {
        self.rules.get(suffix).map(String::as_str)
    }

    /// Resolves `token` against the table, longest suffix first.
    ///
    /// Returns `None` when no rule matches (or the token is shorter than the
    /// longest rule); the caller keeps the token unchanged and records no
    /// suffix.
    pub fn apply<'t>(&self, token: &'t str) -> Option<Stemmed<'t>> {
        if token.len() < self.max_len {
            return None;
        }
        for len in (1..=self.max_len).rev() {
            let split = token.len() - len;
            let suffix = &token[split..];
            if let Some(replacement) = self.rules.get(suffix) {
                let mut stem = String::with_capacity(split + replacement.len());
                stem.push_str(&token[..split]);
                stem.push_str(replacement);
                return Some(Stemmed { stem, suffix });
            }
        }
        None
    }
}

// ==============================================
// SUFFIX TABLE TESTS
// ==============================================
