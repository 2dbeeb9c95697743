// ============================================================
// Layer 2 — ExtractUseCase
// ============================================================
// Text extraction on its own, without summarising:
//
//   Step 1: Read the upload and write a temp .pdf   (Layer 6 - infra)
//   Step 2: Extract the text of every page          (Layer 4 - data)
//   Step 3: Remove the temporary file               (Layer 6 - infra)

use anyhow::Result;

use crate::data::loader::PdfLoader;
use crate::domain::document::Document;
use crate::domain::traits::TextExtractor;
use crate::infra::upload::UploadSource;

pub struct ExtractUseCase<E = PdfLoader> {
    extractor: E,
}

impl ExtractUseCase {
    pub fn new() -> Self {
        Self::with_extractor(PdfLoader::new())
    }
}

impl Default for ExtractUseCase {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: TextExtractor> ExtractUseCase<E> {
    pub fn with_extractor(extractor: E) -> Self {
        Self { extractor }
    }

    /// Extract the upload's text, labelled with the upload's name
    pub fn execute(&self, upload: &UploadSource) -> Result<Document> {
        let source = upload.name();
        let document = upload.process(|path| self.extractor.extract(path))?;
        Ok(document.with_source(source))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::error::ExtractError;
    use std::fs;
    use std::path::Path;

    struct Echo;

    impl TextExtractor for Echo {
        fn extract(&self, path: &Path) -> Result<Document, ExtractError> {
            let text = fs::read_to_string(path).map_err(ExtractError::failure)?;
            Ok(Document::new("tmp.pdf", text))
        }
    }

    #[test]
    fn test_document_is_named_after_upload() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("notes.pdf");
        fs::write(&input, "Page one.").unwrap();

        let doc = ExtractUseCase::with_extractor(Echo)
            .execute(&UploadSource::Path(input))
            .unwrap();
        assert_eq!(doc.source, "notes.pdf");
        assert_eq!(doc.text, "Page one.");
    }

    #[test]
    fn test_real_loader_rejects_non_pdf() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("fake.pdf");
        fs::write(&input, "plain text").unwrap();

        let err = ExtractUseCase::new().execute(&UploadSource::Path(input)).unwrap_err();
        assert!(err.to_string().starts_with("An error occurred: "));
    }
}
