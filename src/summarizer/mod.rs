//! Summarization components
//!
//! Extractive summarization by word frequency:
//! count content words, score sentences by the words they contain,
//! keep the highest-scoring sentences.

pub mod frequency;
pub mod scorer;
pub mod selector;
