pub mod stop_words;
pub mod suffix;
pub mod tokenize;

pub use stop_words::StopWords;
pub use suffix::{Stemmed, SuffixTable};
pub use tokenize::Tokenizer;
