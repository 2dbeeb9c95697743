// ============================================================
// Layer 2 — SummarizeUseCase
// ============================================================
// Orchestrates the full pipeline for one upload:
//
//   Step 1: Read the upload bytes            (Layer 6 - infra)
//   Step 2: Write them to a temporary .pdf   (Layer 6 - infra)
//   Step 3: Extract the text of every page   (Layer 4 - data)
//   Step 4: Score and select sentences       (Layer 5 - summarizer)
//   Step 5: Remove the temporary file        (Layer 6 - infra)
//
// Steps 3–4 return typed PipelineErrors (no readable text,
// nothing to summarise, ...). Steps 1, 2 and 5 are plain I/O
// and use anyhow. The temporary file is removed no matter
// which step fails.

use anyhow::Result;
use std::path::Path;

use crate::application::config::AppConfig;
use crate::data::loader::PdfLoader;
use crate::domain::error::PipelineError;
use crate::domain::summary::SummaryReport;
use crate::domain::traits::{Summarizer, TextExtractor};
use crate::infra::upload::UploadSource;
use crate::summarizer::selector::FrequencySummarizer;

pub struct SummarizeUseCase<E = PdfLoader, S = FrequencySummarizer> {
    extractor: E,
    summarizer: S,
    max_sentences: usize,
}

impl SummarizeUseCase {
    /// Build the production pipeline from config.
    /// Fails if the configured stopword resources cannot be loaded.
    pub fn new(config: &AppConfig) -> Result<Self> {
        Ok(Self::with_parts(
            PdfLoader::new(),
            config.build_summarizer()?,
            config.max_sentences,
        ))
    }
}

impl<E: TextExtractor, S: Summarizer> SummarizeUseCase<E, S> {
    /// Assemble a pipeline from explicit parts
    pub fn with_parts(extractor: E, summarizer: S, max_sentences: usize) -> Self {
        Self { extractor, summarizer, max_sentences }
    }

    /// Run the pipeline on an upload, via a temporary file
    pub fn execute(&self, upload: &UploadSource) -> Result<SummaryReport> {
        let source = upload.name();
        upload.process(|path| self.run(path, &source))
    }

    /// Run extraction then summarisation on a file already on disk
    pub fn run(&self, path: &Path, source: &str) -> Result<SummaryReport, PipelineError> {
        let document = self.extractor.extract(path)?.with_source(source);
        tracing::info!(
            "Extracted {} chars from '{}' ({} of {} pages had text)",
            document.text.len(),
            document.source,
            document.pages_with_text,
            document.page_count
        );

        let summary = self.summarizer.summarize(&document.text, self.max_sentences)?;
        for (rank, sentence) in summary.sentences.iter().enumerate() {
            tracing::debug!("#{} score={} {:?}", rank + 1, sentence.score, sentence.text);
        }

        Ok(SummaryReport::new(document, summary))
    }
}
