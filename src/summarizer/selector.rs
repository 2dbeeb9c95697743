//! Frequency-based sentence selection
//!
//! Ranks scored sentences by descending score and keeps the top N.
//! The sort is stable, so sentences with equal scores stay in the
//! order they were first scored. The selection is NOT put back into
//! document order.

use crate::domain::error::SummarizeError;
use crate::domain::summary::{ScoredSentence, Summary};
use crate::domain::traits::Summarizer;
use crate::nlp::sentences::split_sentences;
use crate::nlp::stopwords::StopwordFilter;
use crate::nlp::words::tokenize;
use crate::summarizer::frequency::FrequencyTable;
use crate::summarizer::scorer::{score_sentences, MatchMode};

/// Extractive summarizer scoring sentences by word frequency
#[derive(Debug, Clone, Default)]
pub struct FrequencySummarizer {
    stopwords: StopwordFilter,
    match_mode: MatchMode,
}

impl FrequencySummarizer {
    /// Create a summarizer with the given stopword set
    pub fn new(stopwords: StopwordFilter) -> Self {
        Self {
            stopwords,
            match_mode: MatchMode::default(),
        }
    }

    /// Choose how table words are matched against sentences
    pub fn with_match_mode(mut self, match_mode: MatchMode) -> Self {
        self.match_mode = match_mode;
        self
    }

    /// Score every sentence of `text`, in first-appearance order
    pub fn score(&self, text: &str) -> Vec<ScoredSentence> {
        let table = FrequencyTable::build(tokenize(text), &self.stopwords);
        tracing::debug!(
            "Frequency table: {} words, top {:?}",
            table.len(),
            table.top(5)
        );
        if table.is_empty() {
            tracing::debug!("No content words, nothing to score");
            return Vec::new();
        }

        let sentences = split_sentences(text);
        let scored = score_sentences(&sentences, &table, self.match_mode);
        tracing::debug!(
            "Scored {} of {} sentences",
            scored.len(),
            sentences.len()
        );
        scored
    }
}

impl Summarizer for FrequencySummarizer {
    fn summarize(&self, text: &str, max_sentences: usize) -> Result<Summary, SummarizeError> {
        if text.trim().is_empty() {
            return Err(SummarizeError::EmptyInput);
        }

        let selected = select_top(self.score(text), max_sentences);
        let summary = Summary::new(selected);

        // Selected sentences are trimmed and non-empty, so an empty
        // selection is the only way to get a blank summary
        if summary.is_empty() {
            return Err(SummarizeError::Unsummarizable);
        }

        tracing::info!(
            "Selected {} sentences (max {})",
            summary.len(),
            max_sentences
        );
        Ok(summary)
    }
}

/// Stable sort by descending score, then keep the first `n`
pub fn select_top(mut scored: Vec<ScoredSentence>, n: usize) -> Vec<ScoredSentence> {
    scored.sort_by(|a, b| b.score.cmp(&a.score));
    scored.truncate(n);
    scored
}
