// ============================================================
// Layer 3 — Core Traits (Abstractions)
// ============================================================
// The two seams of the pipeline:
//
//   TextExtractor — file path in, Document out
//   Summarizer    — text in, Summary out
//
// The application layer only talks to these traits, so tests
// can drive the whole pipeline with an in-memory extractor
// instead of real PDF files, and a different ranking strategy
// could be dropped in without touching the use cases.
//
// Reference: Rust Book §10 (Traits: Defining Shared Behaviour)

use std::path::Path;

use crate::domain::document::Document;
use crate::domain::error::{ExtractError, SummarizeError};
use crate::domain::summary::Summary;

// ─── TextExtractor ────────────────────────────────────────────────────────────
/// Any component that can turn a file on disk into document text.
///
/// Implementations:
///   - PdfLoader → reads PDFs with lopdf
pub trait TextExtractor {
    /// Extract the concatenated text of every page in the file.
    fn extract(&self, path: &Path) -> Result<Document, ExtractError>;
}

// ─── Summarizer ───────────────────────────────────────────────────────────────
/// Any component that can pick the most relevant sentences of a text.
///
/// Implementations:
///   - FrequencySummarizer → word-frequency sentence scoring
pub trait Summarizer {
    /// Select at most `max_sentences` sentences from `text`.
    fn summarize(&self, text: &str, max_sentences: usize) -> Result<Summary, SummarizeError>;
}
