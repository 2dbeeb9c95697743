// ============================================================
// Layer 2 — Application Configuration
// ============================================================
// Everything a summarisation run can be configured with.
// Built once at startup (defaults → optional JSON file → CLI
// flags) and passed down explicitly; nothing else holds
// process-wide settings.
//
// Serialisable so it can be written to and read from disk
// (see infra::config_store).

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::infra::resources::ResourceLocator;
use crate::nlp::stopwords::{StopwordFilter, StopwordList};
use crate::summarizer::scorer::MatchMode;
use crate::summarizer::selector::FrequencySummarizer;

/// Default number of summary sentences
pub const DEFAULT_MAX_SENTENCES: usize = 10;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Upper bound on sentences in the summary
    pub max_sentences: usize,

    /// NLTK-style data directory holding corpora/stopwords/english
    pub resource_dir: Option<PathBuf>,

    /// Built-in list used when no resource_dir is set
    pub stopwords: StopwordList,

    /// Substring (default) or whole-token word matching
    pub match_mode: MatchMode,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            max_sentences: DEFAULT_MAX_SENTENCES,
            resource_dir: None,
            stopwords: StopwordList::default(),
            match_mode: MatchMode::default(),
        }
    }
}

impl AppConfig {
    /// Load the stopword set this config points at
    pub fn load_stopwords(&self) -> Result<StopwordFilter> {
        ResourceLocator::new(self.resource_dir.clone()).stopwords(self.stopwords)
    }

    /// Build the summarizer described by this config
    pub fn build_summarizer(&self) -> Result<FrequencySummarizer> {
        Ok(FrequencySummarizer::new(self.load_stopwords()?).with_match_mode(self.match_mode))
    }
}
