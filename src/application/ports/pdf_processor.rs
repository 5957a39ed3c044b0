use std::path::Path;

use async_trait::async_trait;

use crate::domain::ProcessingResult;

#[async_trait]
pub trait PdfProcessor: Send + Sync {
    async fn process(&self, pdf: &Path) -> Result<ProcessingResult, PdfProcessorError>;
}

#[derive(Debug, thiserror::Error)]
pub enum PdfProcessorError {
    #[error("extraction failed: {0}")]
    ExtractionFailed(String),
    #[error("extraction timed out after {0}s")]
    TimedOut(u64),
}
