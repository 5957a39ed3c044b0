use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use async_trait::async_trait;

use crate::application::ports::{ConversionError, DocumentConverter};

/// Routes a source file to a converter by its file extension.
pub struct CompositeConverter {
    converters: HashMap<String, Arc<dyn DocumentConverter>>,
}

impl CompositeConverter {
    pub fn new(converters: Vec<(&str, Arc<dyn DocumentConverter>)>) -> Self {
        Self {
            converters: converters
                .into_iter()
                .map(|(ext, c)| (ext.to_ascii_lowercase(), c))
                .collect(),
        }
    }

    pub fn supported_extensions(&self) -> Vec<&str> {
        let mut exts: Vec<&str> = self.converters.keys().map(String::as_str).collect();
        exts.sort_unstable();
        exts
    }
}

#[async_trait]
impl DocumentConverter for CompositeConverter {
    async fn convert_to_pdf(&self, source: &Path) -> Result<PathBuf, ConversionError> {
        let ext = source
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase)
            .unwrap_or_default();

        let converter = self.converters.get(&ext).ok_or_else(|| {
            ConversionError::UnsupportedFormat(if ext.is_empty() {
                "<no extension>".to_string()
            } else {
                ext.clone()
            })
        })?;

        converter.convert_to_pdf(source).await
    }
}
