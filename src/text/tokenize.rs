//! Regex-based line tokenizer.
//!
//! Replaces every maximal run of non-alphabetic characters with a single
//! separator, splits on it, trims, and ASCII-uppercases the pieces. A line
//! with no letters yields an empty sequence, not an error. Tokenization is
//! deliberately ASCII-only; Unicode-aware segmentation is out of scope.

use regex::Regex;

/// Pattern matching any maximal run of non-letter characters.
const NON_ALPHA: &str = "[^A-Za-z]+";

/// Splits raw lines into normalized candidate tokens.
///
/// # Example
///
/// ```
/// use freqtop::text::Tokenizer;
///
/// let tokenizer = Tokenizer::new();
/// let tokens: Vec<String> = tokenizer.tokens("The cat, the hat!").collect();
/// assert_eq!(tokens, vec!["THE", "CAT", "THE", "HAT"]);
///
/// assert_eq!(tokenizer.tokens("123 ... 456").count(), 0);
/// ```
#[derive(Debug)]
pub struct Tokenizer {
    non_alpha: Regex,
}

impl Tokenizer {
    /// Creates a tokenizer with the standard non-alphabetic separator.
    pub fn new() -> Self {
        Tokenizer {
            // Static, known-valid pattern.
            non_alpha: Regex::new(NON_ALPHA).expect("non-alpha pattern compiles"),
        }
    }

    /// Produces the normalized tokens of one line, in order.
    ///
    /// Lazy and finite; consumed once per line.
    pub fn tokens<'a>(&'a self, line: &'a str) -> impl Iterator<Item = String> + 'a {
        self.non_alpha
            .split(line)
            .map(str::trim)
            .filter(|piece| !piece.is_empty())
            .map(|piece| piece.to_ascii_uppercase())
    }
}

impl Default for Tokenizer {
    fn default() -> Self {
        Self::new()
    }
}

// ==============================================
// TOKENIZER TESTS
// ==============================================

#[cfg(test)]
mod tests {
    use super::*;

    fn tokens(line: &str) -> Vec<String> {
        Tokenizer::new().tokens(line).collect()
    }

    #[test]
    fn splits_on_runs_of_non_letters() {
        assert_eq!(
            tokens("one,two;;three -- four"),
            vec!["ONE", "TWO", "THREE", "FOUR"]
        );
    }

    #[test]
    fn case_folds_to_uppercase() {
        assert_eq!(tokens("MiXeD case"), vec!["MIXED", "CASE"]);
    }

    #[test]
    fn digits_and_punctuation_are_separators() {
        assert_eq!(tokens("abc123def"), vec!["ABC", "DEF"]);
        assert_eq!(tokens("it's"), vec!["IT", "S"]);
    }

    #[test]
    fn line_without_letters_yields_nothing() {
        assert!(tokens("").is_empty());
        assert!(tokens("   ").is_empty());
        assert!(tokens("42 + 17 = 59").is_empty());
    }

    #[test]
    fn leading_and_trailing_separators_produce_no_empty_tokens() {
        assert_eq!(tokens("...word..."), vec!["WORD"]);
    }

    #[test]
    fn sequence_is_restartable_per_line() {
        let tokenizer = Tokenizer::new();
        let first: Vec<String> = tokenizer.tokens("a b").collect();
        let second: Vec<String> = tokenizer.tokens("a b").collect();
        assert_eq!(first, second);
    }
}
