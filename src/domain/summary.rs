// ============================================================
// Layer 3 — Summary Domain Types
// ============================================================
// The output side of the pipeline:
//
//   ScoredSentence — one sentence and the score it earned
//   Summary        — the selected sentences, best first
//   SummaryReport  — everything shown to the user for one upload
//
// A Summary keeps its sentences in RANKED order (highest score
// first), not in the order they appeared in the document.
// Rendering joins them with a single space.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::domain::document::Document;

/// A sentence together with its accumulated frequency score.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoredSentence {
    /// The sentence text, exactly as segmented from the document
    pub text: String,

    /// Sum of the frequencies of every table word the sentence matched
    pub score: usize,
}

impl ScoredSentence {
    pub fn new(text: impl Into<String>, score: usize) -> Self {
        Self { text: text.into(), score }
    }
}

/// Sentences selected for the summary, highest score first.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Summary {
    pub sentences: Vec<ScoredSentence>,
}

impl Summary {
    pub fn new(sentences: Vec<ScoredSentence>) -> Self {
        Self { sentences }
    }

    /// The summary as a single string, sentences joined by one space
    pub fn text(&self) -> String {
        self.sentences
            .iter()
            .map(|s| s.text.as_str())
            .collect::<Vec<_>>()
            .join(" ")
    }

    pub fn len(&self) -> usize {
        self.sentences.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sentences.is_empty()
    }
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text())
    }
}

/// The (extracted text, summary) pair handed back to the presentation layer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SummaryReport {
    /// Name of the uploaded file
    pub source: String,
    pub page_count: usize,
    pub pages_with_text: usize,

    /// Full extracted text of the document
    pub extracted_text: String,

    /// The rendered summary string
    pub summary: String,

    /// Selected sentences with their scores, in summary order
    pub sentences: Vec<ScoredSentence>,
}

impl SummaryReport {
    pub fn new(document: Document, summary: Summary) -> Self {
        Self {
            source: document.source,
            page_count: document.page_count,
            pages_with_text: document.pages_with_text,
            extracted_text: document.text,
            summary: summary.text(),
            sentences: summary.sentences,
        }
    }
}
