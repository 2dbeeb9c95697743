// ============================================================
// Layer 3 — Document Domain Type
// ============================================================
// Represents the text pulled out of a single PDF.
// This is a plain data struct with no behaviour —
// the source name, the concatenated page text, and
// a little bookkeeping about how many pages contributed.
//
// The text is the page texts glued together in page order
// with NOTHING inserted between them. Pages that produced no
// text at all are simply absent from the concatenation.
//
// Reference: Rust Book §5 (Structs and Methods)

use serde::{Deserialize, Serialize};

/// Text extracted from one PDF document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    /// The filename the text came from — kept for reports and logs
    pub source: String,

    /// Every page's extracted text, concatenated in page order
    pub text: String,

    /// Total number of pages in the PDF
    pub page_count: usize,

    /// Number of pages that contributed non-empty text
    pub pages_with_text: usize,
}

impl Document {
    /// Create a Document from a source name and already-joined text.
    /// Page statistics default to a single page holding all the text.
    ///
    /// Example:
    ///   let doc = Document::new("report.pdf", "Quarterly results...");
    pub fn new(source: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            text: text.into(),
            page_count: 1,
            pages_with_text: 1,
        }
    }

    /// Attach page statistics to the document
    pub fn with_pages(mut self, page_count: usize, pages_with_text: usize) -> Self {
        self.page_count = page_count;
        self.pages_with_text = pages_with_text;
        self
    }

    /// Re-label the document, e.g. with the original upload name
    /// instead of the temporary file it was read from.
    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = source.into();
        self
    }

    /// True when the text has nothing but whitespace in it
    pub fn is_blank(&self) -> bool {
        self.text.trim().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_detection() {
        assert!(Document::new("a.pdf", "  \n\t ").is_blank());
        assert!(!Document::new("a.pdf", " text ").is_blank());
    }

    #[test]
    fn test_builders_keep_text() {
        let doc = Document::new("tmp123.pdf", "body")
            .with_pages(4, 3)
            .with_source("upload.pdf");
        assert_eq!(doc.source, "upload.pdf");
        assert_eq!(doc.text, "body");
        assert_eq!(doc.page_count, 4);
        assert_eq!(doc.pages_with_text, 3);
    }
}
