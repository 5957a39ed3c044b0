use std::path::{Path, PathBuf};

use async_trait::async_trait;

use crate::application::ports::{ConversionError, DocumentConverter, converted_path_for};

use super::text_layout::render_text_pdf;

/// Renders plain-text uploads as paginated PDFs.
#[derive(Default)]
pub struct TextConverter;

impl TextConverter {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl DocumentConverter for TextConverter {
    #[tracing::instrument(skip(self), fields(source = %source.display()))]
    async fn convert_to_pdf(&self, source: &Path) -> Result<PathBuf, ConversionError> {
        let raw = tokio::fs::read(source).await?;
        let text = String::from_utf8(raw).map_err(|e| {
            ConversionError::ConversionFailed(format!("text is not valid UTF-8: {e}"))
        })?;

        let (bytes, page_count) = render_text_pdf(&text);

        let output = converted_path_for(source);
        tokio::fs::write(&output, bytes).await?;

        tracing::info!(page_count, output = %output.display(), "Text conversion complete");

        Ok(output)
    }
}
