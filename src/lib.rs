//! freqtop: streaming top-K token frequency analysis.
//!
//! Feeds lines of text through a tokenizer, counts token frequencies, and
//! maintains the current best-K tokens in an indexed bounded min-heap with
//! O(log K) admit/update/evict. Optional stop-word filtering and
//! suffix-stripping stemming, with "actual word" detection for stems that
//! only ever occurred in one suffixed form.
//!
//! See `DESIGN.md` for internal architecture and invariants.

pub mod analyzer;
pub mod ds;
pub mod error;
pub mod report;
pub mod sink;
pub mod text;

pub mod prelude;
