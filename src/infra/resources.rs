// ============================================================
// Layer 6 — Linguistic Resources
// ============================================================
// Locates the stopword list the summarizer uses.
//
// Without a resource directory the compiled-in list is used
// (NLTK or ISO, per config). With one, the list is read from
// the NLTK data layout inside it:
//
//   <resource_dir>/
//     corpora/
//       stopwords/
//         english      ← one word per line
//
// The directory is handed in once at startup through the
// config; nothing here touches global state.
//
// A configured directory without the file is a deployment
// mistake, so it is an error rather than a silent fallback.

use anyhow::{Context, Result};
use std::{fs, path::PathBuf};

use crate::nlp::stopwords::{StopwordFilter, StopwordList};

pub struct ResourceLocator {
    /// Optional NLTK-style data directory
    dir: Option<PathBuf>,
}

impl ResourceLocator {
    pub fn new(dir: Option<PathBuf>) -> Self {
        Self { dir }
    }

    /// Path of the English stopword file, if a directory is configured
    pub fn stopwords_path(&self) -> Option<PathBuf> {
        self.dir
            .as_ref()
            .map(|d| d.join("corpora").join("stopwords").join("english"))
    }

    /// Load the English stopword list.
    pub fn stopwords(&self, list: StopwordList) -> Result<StopwordFilter> {
        let Some(path) = self.stopwords_path() else {
            let filter = StopwordFilter::english(list);
            tracing::debug!("Using built-in {:?} stopwords ({} words)", list, filter.len());
            return Ok(filter);
        };

        let contents = fs::read_to_string(&path).with_context(|| {
            format!("Cannot read stopword list from '{}'", path.display())
        })?;
        let filter = StopwordFilter::from_lines(&contents);
        if filter.is_empty() {
            tracing::warn!("Stopword list '{}' is empty, no words will be filtered", path.display());
        }

        tracing::info!(
            "Loaded {} stopwords from '{}'",
            filter.len(),
            path.display()
        );
        Ok(filter)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_when_no_dir() {
        let filter = ResourceLocator::new(None).stopwords(StopwordList::Nltk).unwrap();
        assert_eq!(filter.len(), 179);
    }

    #[test]
    fn test_reads_nltk_layout() {
        let dir = tempfile::tempdir().unwrap();
        let corpus = dir.path().join("corpora").join("stopwords");
        fs::create_dir_all(&corpus).unwrap();
        fs::write(corpus.join("english"), "the\nand\nwidget\n").unwrap();

        let locator = ResourceLocator::new(Some(dir.path().to_path_buf()));
        let filter = locator.stopwords(StopwordList::Nltk).unwrap();

        assert_eq!(filter.len(), 3);
        assert!(filter.is_stopword("widget"));
    }

    #[test]
    fn test_blank_file_gives_empty_list() {
        let dir = tempfile::tempdir().unwrap();
        let corpus = dir.path().join("corpora").join("stopwords");
        fs::create_dir_all(&corpus).unwrap();
        fs::write(corpus.join("english"), "\n\n").unwrap();

        let locator = ResourceLocator::new(Some(dir.path().to_path_buf()));
        assert!(locator.stopwords(StopwordList::Nltk).unwrap().is_empty());
    }

    #[test]
    fn test_missing_file_in_configured_dir_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let locator = ResourceLocator::new(Some(dir.path().to_path_buf()));
        let err = locator.stopwords(StopwordList::Nltk).unwrap_err();
        assert!(err.to_string().contains("Cannot read stopword list"));
    }
}
