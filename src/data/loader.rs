// ============================================================
// Layer 4 — PDF Loader
// ============================================================
// Loads a single PDF file and pulls the text out of every page
// using the lopdf crate.
//
// How a PDF is laid out (the parts we care about):
//   Document
//     └── page tree: page number → page object
//           └── content stream (drawing operators)
//                 └── BT ... Tj / TJ ... ET  (text showing)
//
// lopdf walks the page tree for us (get_pages) and decodes
// the text-showing operators of a page (extract_text).
//
// Joining rule:
//   page texts are concatenated in page order with NO separator.
//   A page whose extraction comes back empty (a scanned image,
//   a blank page) contributes nothing and does not abort the run.
//   If the joined text is blank the whole document is reported
//   as having no readable text.
//
// lopdf can panic on some malformed files instead of returning
// an error, so the parse runs inside catch_unwind and a panic is
// turned into an ordinary ExtractionFailure.
//
// Reference: lopdf crate documentation
//            Rust Book §9 (Error Handling)

use std::panic::{self, AssertUnwindSafe};
use std::path::Path;

use lopdf::Document as PdfDocument;

use crate::domain::document::Document;
use crate::domain::error::ExtractError;
use crate::domain::traits::TextExtractor;

/// Reads PDF files from disk.
/// Implements the TextExtractor trait from Layer 3.
#[derive(Debug, Default, Clone, Copy)]
pub struct PdfLoader;

impl PdfLoader {
    pub fn new() -> Self {
        Self
    }
}

impl TextExtractor for PdfLoader {
    fn extract(&self, path: &Path) -> Result<Document, ExtractError> {
        // A missing file is its own, friendlier error
        if !path.exists() {
            tracing::warn!("PDF '{}' does not exist", path.display());
            return Err(ExtractError::NotFound { path: path.to_path_buf() });
        }

        let pages = contain_panics(|| read_pages(path))?;

        let page_count = pages.len();
        let (text, pages_with_text) = join_pages(pages);

        tracing::debug!(
            "Read {} chars from {}/{} pages of '{}'",
            text.len(),
            pages_with_text,
            page_count,
            path.display()
        );

        let source = path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or("unknown")
            .to_string();

        let document = Document::new(source, text).with_pages(page_count, pages_with_text);
        if document.is_blank() {
            return Err(ExtractError::NoReadableText);
        }
        Ok(document)
    }
}

/// Run a parser step, turning a panic inside it into an ExtractionFailure
fn contain_panics<T>(step: impl FnOnce() -> Result<T, ExtractError>) -> Result<T, ExtractError> {
    panic::catch_unwind(AssertUnwindSafe(step)).unwrap_or_else(|_| {
        Err(ExtractError::failure(
            "PDF parser panicked (malformed document)",
        ))
    })
}

/// Parse the PDF and return the raw text of each page in page order.
fn read_pages(path: &Path) -> Result<Vec<String>, ExtractError> {
    let doc = PdfDocument::load(path).map_err(ExtractError::failure)?;

    if doc.is_encrypted() {
        return Err(ExtractError::failure("the PDF is encrypted"));
    }

    // get_pages() is a BTreeMap keyed by page number, so
    // iteration order is already page order
    let mut pages = Vec::new();
    for (page_num, _page_id) in doc.get_pages() {
        let text = doc
            .extract_text(&[page_num])
            .map_err(|e| ExtractError::failure(format!("page {page_num}: {e}")))?;

        tracing::debug!("Page {}: {} chars", page_num, text.len());
        pages.push(text);
    }

    Ok(pages)
}

/// Concatenate page texts in order, skipping pages that produced
/// nothing. Returns the joined text and how many pages contributed.
pub fn join_pages<I>(pages: I) -> (String, usize)
where
    I: IntoIterator<Item = String>,
{
    let mut text = String::new();
    let mut contributed = 0usize;

    for page in pages {
        if page.is_empty() {
            tracing::debug!("Skipping page without extractable text");
            continue;
        }
        text.push_str(&page);
        contributed += 1;
    }

    (text, contributed)
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use lopdf::content::{Content, Operation};
    use lopdf::{dictionary, Object, Stream};

    /// Write a minimal PDF with one page per entry. An empty entry
    /// produces a page with an empty content stream.
    fn write_pdf(path: &Path, pages: &[&str]) {
        let mut doc = PdfDocument::with_version("1.5");
        let pages_id = doc.new_object_id();
        let font_id = doc.add_object(dictionary! {
            "Type" => "Font",
            "Subtype" => "Type1",
            "BaseFont" => "Courier",
        });
        let resources_id = doc.add_object(dictionary! {
            "Font" => dictionary! { "F1" => font_id },
        });

        let mut kids: Vec<Object> = Vec::new();
        for text in pages {
            let operations = if text.is_empty() {
                Vec::new()
            } else {
                vec![
                    Operation::new("BT", vec![]),
                    Operation::new("Tf", vec!["F1".into(), 12.into()]),
                    Operation::new("Td", vec![72.into(), 720.into()]),
                    Operation::new("Tj", vec![Object::string_literal(*text)]),
                    Operation::new("ET", vec![]),
                ]
            };
            let content = Content { operations };
            let content_id =
                doc.add_object(Stream::new(dictionary! {}, content.encode().unwrap()));
            let page_id = doc.add_object(dictionary! {
                "Type" => "Page",
                "Parent" => pages_id,
                "Contents" => content_id,
            });
            kids.push(page_id.into());
        }

        let count = kids.len() as i64;
        doc.objects.insert(
            pages_id,
            Object::Dictionary(dictionary! {
                "Type" => "Pages",
                "Kids" => kids,
                "Count" => count,
                "Resources" => resources_id,
                "MediaBox" => vec![0.into(), 0.into(), 595.into(), 842.into()],
            }),
        );
        let catalog_id = doc.add_object(dictionary! {
            "Type" => "Catalog",
            "Pages" => pages_id,
        });
        doc.trailer.set("Root", catalog_id);
        doc.save(path).unwrap();
    }

    #[test]
    fn test_join_pages_has_no_separators() {
        let pages = vec!["Alpha".to_string(), "Bravo ".to_string(), "Charlie".to_string()];
        let (text, contributed) = join_pages(pages);
        assert_eq!(text, "AlphaBravo Charlie");
        assert_eq!(contributed, 3);
    }

    #[test]
    fn test_join_pages_skips_empty_pages() {
        let pages = vec![String::new(), "One.".to_string(), String::new(), "Two.".to_string()];
        let (text, contributed) = join_pages(pages);
        assert_eq!(text, "One.Two.");
        assert_eq!(contributed, 2);
    }

    #[test]
    fn test_missing_file_is_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nope.pdf");
        let err = PdfLoader::new().extract(&path).unwrap_err();
        assert_eq!(err, ExtractError::NotFound { path });
    }

    #[test]
    fn test_garbage_file_is_extraction_failure() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("junk.pdf");
        std::fs::write(&path, b"this is not a pdf at all").unwrap();

        let err = PdfLoader::new().extract(&path).unwrap_err();
        assert!(matches!(err, ExtractError::ExtractionFailure { .. }));
        assert!(err.to_string().starts_with("An error occurred: "));
    }

    #[test]
    fn test_multi_page_pdf_in_page_order() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("three.pdf");
        write_pdf(&path, &["Alpha page.", "", "Bravo page."]);

        let doc = PdfLoader::new().extract(&path).unwrap();
        assert_eq!(doc.source, "three.pdf");
        assert_eq!(doc.page_count, 3);
        assert_eq!(doc.pages_with_text, 2);

        let alpha = doc.text.find("Alpha page.").unwrap();
        let bravo = doc.text.find("Bravo page.").unwrap();
        assert!(alpha < bravo);
    }

    #[test]
    fn test_pdf_without_text_is_no_readable_text() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("blank.pdf");
        write_pdf(&path, &["", ""]);

        let err = PdfLoader::new().extract(&path).unwrap_err();
        assert_eq!(err, ExtractError::NoReadableText);
    }

    #[test]
    fn test_extraction_leaves_file_in_place() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("keep.pdf");
        write_pdf(&path, &["Still here."]);

        PdfLoader::new().extract(&path).unwrap();
        assert!(path.exists());
    }

    #[test]
    fn test_parser_panic_becomes_extraction_failure() {
        let result: Result<Vec<String>, ExtractError> =
            contain_panics(|| panic!("corrupt cross-reference table"));
        assert_eq!(
            result,
            Err(ExtractError::failure("PDF parser panicked (malformed document)"))
        );
    }

    #[test]
    fn test_contain_panics_passes_results_through() {
        assert_eq!(contain_panics(|| Ok(vec!["x".to_string()])), Ok(vec!["x".to_string()]));
        assert_eq!(
            contain_panics::<()>(|| Err(ExtractError::NoReadableText)),
            Err(ExtractError::NoReadableText)
        );
    }
}
