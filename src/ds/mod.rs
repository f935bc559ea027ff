pub mod token_table;
pub mod top_k;

pub use token_table::{TokenRecord, TokenTable};
pub use top_k::{HeapNode, TopKSelector};
