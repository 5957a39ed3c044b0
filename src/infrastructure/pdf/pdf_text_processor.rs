use std::path::{Path, PathBuf};
use std::time::Duration;

use async_trait::async_trait;
use pdf_oxide::PdfDocument;

use crate::application::ports::{PdfProcessor, PdfProcessorError};
use crate::domain::{PageText, ProcessingResult};
use crate::infrastructure::blocking::run_blocking;

use super::text_sanitizer::sanitize_page_text;

/// Extracts page text from a PDF on disk with `pdf_oxide`.
pub struct PdfTextProcessor {
    timeout: Duration,
}

impl PdfTextProcessor {
    pub fn new(timeout: Duration) -> Self {
        Self { timeout }
    }

    fn extract_pages(path: &Path) -> Result<(usize, Vec<PageText>), PdfProcessorError> {
        let mut doc = PdfDocument::open(path).map_err(|e| {
            PdfProcessorError::ExtractionFailed(format!("failed to parse PDF: {e}"))
        })?;

        let page_count = doc.page_count().map_err(|e| {
            PdfProcessorError::ExtractionFailed(format!("failed to read page count: {e}"))
        })?;

        let mut pages = Vec::with_capacity(page_count);

        for page_index in 0..page_count {
            let raw = match doc.extract_text(page_index) {
                Ok(text) => text,
                Err(e) => {
                    tracing::warn!(page = page_index + 1, error = %e, "Skipping unreadable page");
                    continue;
                }
            };

            let text = sanitize_page_text(&raw);
            if !text.is_empty() {
                pages.push(PageText {
                    page_number: (page_index + 1) as u32,
                    text,
                });
            }
        }

        Ok((page_count, pages))
    }
}

#[async_trait]
impl PdfProcessor for PdfTextProcessor {
    #[tracing::instrument(skip(self), fields(pdf = %pdf.display()))]
    async fn process(&self, pdf: &Path) -> Result<ProcessingResult, PdfProcessorError> {
        let path: PathBuf = pdf.to_path_buf();

        let (page_count, pages) =
            run_blocking(self.timeout, move || Self::extract_pages(&path)).await??;

        tracing::info!(
            page_count,
            pages_with_text = pages.len(),
            "PDF text extraction complete"
        );

        Ok(ProcessingResult::from_pages(page_count, pages))
    }
}
