//! Error types for the freqtop library.
//!
//! ## Key Components
//!
//! - [`InvariantError`]: Returned when internal data-structure invariants are
//!   violated (`check_invariants` methods on the selector).
//! - [`ConfigError`]: Returned when configuration parameters are invalid
//!   (e.g. an empty suffix rule, a zero-artifact sink).
//!
//! Input (I/O) errors are not wrapped: loaders and the reader-driven analysis
//! entry points propagate `std::io::Error` directly and abort the run.
//!
//! ## Example Usage
//!
//! ```
//! use freqtop::error::ConfigError;
//! use freqtop::text::SuffixTable;
//!
//! // Fallible constructor for user-configurable rules
//! let table: Result<SuffixTable, ConfigError> =
//!     SuffixTable::from_pairs([("zl", "a"), ("ezl", "r")]);
//! assert!(table.is_ok());
//!
//! // An empty suffix is caught without panicking
//! let bad = SuffixTable::from_pairs([("", "a")]);
//! assert!(bad.is_err());
//! ```

use std::fmt;

// ---------------------------------------------------------------------------
// InvariantError
// ---------------------------------------------------------------------------

/// Error returned when internal selector/table invariants are violated.
///
/// Produced by [`TopKSelector::check_invariants`](crate::ds::TopKSelector::check_invariants).
/// Carries a human-readable description of which invariant failed. A
/// violation means the bidirectional slot pointers between the heap and the
/// frequency table have drifted, which would corrupt every subsequent
/// admit/evict decision; callers should treat it as fatal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvariantError(String);

impl InvariantError {
    /// Creates a new `InvariantError` with the given description.
    #[inline]
    pub fn new(msg: impl Into<String>) -> Self {
        Self(msg.into())
    }

    /// Returns the error description.
    #[inline]
    pub fn message(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for InvariantError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::error::Error for InvariantError {}

// ---------------------------------------------------------------------------
// ConfigError
// ---------------------------------------------------------------------------

/// Error returned when configuration parameters are invalid.
///
/// Produced by fallible constructors such as
/// [`SuffixTable::from_pairs`](crate::text::SuffixTable::from_pairs) and
/// [`ReportSink::new`](crate::sink::ReportSink::new). Carries a
/// human-readable description of which parameter failed validation.
///
/// Note that `k = 0` is NOT a configuration error: a zero-capacity selector
/// is degenerate but valid and simply never admits anything.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigError(String);

impl ConfigError {
    /// Creates a new `ConfigError` with the given description.
    #[inline]
    pub fn new(msg: impl Into<String>) -> Self {
        Self(msg.into())
    }

    /// Returns the error description.
    #[inline]
    pub fn message(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::error::Error for ConfigError {}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
