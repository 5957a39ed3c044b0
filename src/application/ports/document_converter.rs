use std::io;
use std::path::{Path, PathBuf};

use async_trait::async_trait;

/// Produces a PDF rendition of a document on disk and returns its path.
#[async_trait]
pub trait DocumentConverter: Send + Sync {
    async fn convert_to_pdf(&self, source: &Path) -> Result<PathBuf, ConversionError>;
}

#[derive(Debug, thiserror::Error)]
pub enum ConversionError {
    #[error("unsupported format: {0}")]
    UnsupportedFormat(String),
    #[error("conversion failed: {0}")]
    ConversionFailed(String),
    #[error("conversion timed out after {0}s")]
    TimedOut(u64),
    #[error("io error: {0}")]
    Io(#[from] io::Error),
}

/// Output path for the PDF rendition of `source`: `<stem>.converted.pdf`
/// in the same directory. Never equal to `source`.
pub fn converted_path_for(source: &Path) -> PathBuf {
    let stem = source
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("document");
    source.with_file_name(format!("{stem}.converted.pdf"))
}
