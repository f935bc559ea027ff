pub use crate::analyzer::{Analyzer, AnalyzerConfig};
pub use crate::ds::{HeapNode, TokenRecord, TokenTable, TopKSelector};
pub use crate::error::{ConfigError, InvariantError};
pub use crate::report::{ActualWord, ReportEntry, TopKReport};
pub use crate::sink::ReportSink;
pub use crate::text::{StopWords, SuffixTable, Tokenizer};
