// ============================================================
// Layer 6 — Upload Handling
// ============================================================
// The PDF loader needs a real file path, but an upload is just
// bytes (read from a file argument or from stdin). This module
// bridges the two:
//
//   UploadSource — where the bytes come from
//   TempUpload   — the bytes written to a temporary .pdf file
//
// TempUpload owns a tempfile::NamedTempFile, so the file is
// deleted when the guard is dropped, on the error path as
// well as the success path. `close()` removes it eagerly and
// reports a failed delete.
//
// Reference: tempfile crate documentation
//            Rust Book §15 (Drop trait)

use anyhow::{Context, Result};
use std::{
    fs,
    io::{self, Read, Write},
    path::{Path, PathBuf},
};
use tempfile::NamedTempFile;

use crate::domain::error::{ExtractError, PipelineError};

/// Where the uploaded PDF bytes come from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UploadSource {
    /// A file on disk
    Path(PathBuf),
    /// Standard input
    Stdin,
}

impl UploadSource {
    /// "-" means stdin, anything else is a path
    pub fn parse(arg: &str) -> Self {
        if arg == "-" {
            Self::Stdin
        } else {
            Self::Path(PathBuf::from(arg))
        }
    }

    /// Human-readable name used in logs and reports
    pub fn name(&self) -> String {
        match self {
            Self::Path(p) => p
                .file_name()
                .and_then(|n| n.to_str())
                .unwrap_or("unknown")
                .to_string(),
            Self::Stdin => "<stdin>".to_string(),
        }
    }

    /// Read all upload bytes.
    ///
    /// A missing input file surfaces as the pipeline's own
    /// NotFound error so the user sees the usual message.
    pub fn read(&self) -> Result<Vec<u8>> {
        match self {
            Self::Path(path) => match fs::read(path) {
                Ok(bytes) => Ok(bytes),
                Err(e) if e.kind() == io::ErrorKind::NotFound => {
                    Err(PipelineError::from(ExtractError::NotFound { path: path.clone() }).into())
                }
                Err(e) => {
                    Err(e).with_context(|| format!("Cannot read upload '{}'", path.display()))
                }
            },
            Self::Stdin => read_all(io::stdin().lock()).context("Cannot read upload from stdin"),
        }
    }

    /// Read the upload, write it to a temporary file, run `f` on
    /// that file's path, then remove the file whatever `f` returned.
    pub fn process<T, E>(&self, f: impl FnOnce(&Path) -> std::result::Result<T, E>) -> Result<T>
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        let bytes = self.read()?;
        process_bytes(&self.name(), &bytes, f)
    }
}

fn read_all(mut reader: impl Read) -> io::Result<Vec<u8>> {
    let mut bytes = Vec::new();
    reader.read_to_end(&mut bytes)?;
    Ok(bytes)
}

/// Write `bytes` to a temporary file, run `f` on it, then remove it
fn process_bytes<T, E>(
    name: &str,
    bytes: &[u8],
    f: impl FnOnce(&Path) -> std::result::Result<T, E>,
) -> Result<T>
where
    E: std::error::Error + Send + Sync + 'static,
{
    tracing::info!("Processing upload '{}' ({} bytes)", name, bytes.len());

    let temp = TempUpload::from_bytes(bytes)?;
    let outcome = f(temp.path());

    // Cleanup failures are logged, never allowed to hide the outcome
    if let Err(e) = temp.close() {
        tracing::warn!("{e:#}");
    }

    Ok(outcome?)
}

/// Uploaded bytes materialised as a temporary file.
/// The file is removed when this value is dropped.
pub struct TempUpload {
    file: NamedTempFile,
}

impl TempUpload {
    /// Write `bytes` to a fresh temporary `.pdf` file
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        let mut file = tempfile::Builder::new()
            .prefix("pdf-summarizer-")
            .suffix(".pdf")
            .tempfile()
            .context("Cannot create temporary upload file")?;

        file.write_all(bytes)
            .and_then(|_| file.flush())
            .context("Cannot write temporary upload file")?;

        tracing::debug!(
            "Wrote {} upload bytes to '{}'",
            bytes.len(),
            file.path().display()
        );
        Ok(Self { file })
    }

    pub fn path(&self) -> &Path {
        self.file.path()
    }

    /// Delete the temporary file now, reporting any failure
    pub fn close(self) -> Result<()> {
        let path = self.file.path().to_path_buf();
        self.file
            .close()
            .with_context(|| format!("Cannot remove temporary upload '{}'", path.display()))?;
        tracing::debug!("Removed temporary upload '{}'", path.display());
        Ok(())
    }
}
