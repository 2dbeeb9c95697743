// ============================================================
// Layer 3 — Pipeline Error Types
// ============================================================
// Every way a request can fail, as a typed value.
//
//   ExtractError   — what can go wrong turning a file into text
//   SummarizeError — what can go wrong turning text into a summary
//   PipelineError  — either of the above, for callers that run both
//
// None of these represent a crash. A corrupt PDF, an image-only
// scan, an empty document: all are ordinary outcomes the caller
// reports to the user. The Display text of each variant is the
// message the user sees.
//
// Reference: thiserror crate documentation
//            Rust Book §9 (Recoverable Errors with Result)

use std::path::PathBuf;

use thiserror::Error;

/// Failures while reading text out of a PDF.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ExtractError {
    /// The path handed to the extractor does not exist
    #[error("Error: File '{}' not found.", path.display())]
    NotFound { path: PathBuf },

    /// The PDF could not be parsed (corrupt, encrypted, unsupported, ...)
    #[error("An error occurred: {cause}")]
    ExtractionFailure { cause: String },

    /// Parsing worked but no page produced any usable text
    #[error("No readable text found in the PDF.")]
    NoReadableText,
}

impl ExtractError {
    /// Shorthand for wrapping any displayable cause
    pub fn failure(cause: impl std::fmt::Display) -> Self {
        Self::ExtractionFailure { cause: cause.to_string() }
    }
}

/// Failures while summarising extracted text.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SummarizeError {
    /// Input text was empty or whitespace only
    #[error("No content to summarize.")]
    EmptyInput,

    /// No sentence scored above zero, so nothing could be selected
    #[error("The text could not be summarized meaningfully.")]
    Unsummarizable,
}

/// Any failure from the extract-then-summarise pipeline.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PipelineError {
    #[error(transparent)]
    Extract(#[from] ExtractError),

    #[error(transparent)]
    Summarize(#[from] SummarizeError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_match_user_facing_text() {
        let not_found = ExtractError::NotFound { path: PathBuf::from("missing.pdf") };
        assert_eq!(not_found.to_string(), "Error: File 'missing.pdf' not found.");
        assert_eq!(
            ExtractError::failure("bad xref").to_string(),
            "An error occurred: bad xref"
        );
        assert_eq!(
            ExtractError::NoReadableText.to_string(),
            "No readable text found in the PDF."
        );
        assert_eq!(SummarizeError::EmptyInput.to_string(), "No content to summarize.");
        assert_eq!(
            SummarizeError::Unsummarizable.to_string(),
            "The text could not be summarized meaningfully."
        );
    }

    #[test]
    fn test_pipeline_error_is_transparent() {
        let err: PipelineError = SummarizeError::EmptyInput.into();
        assert_eq!(err.to_string(), "No content to summarize.");
        assert!(matches!(err, PipelineError::Summarize(SummarizeError::EmptyInput)));
    }
}
