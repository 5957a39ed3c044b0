use std::io;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use bytes::Bytes;
use futures::stream;

use crate::application::ports::{
    ConversionError, DocumentConverter, PdfProcessor, PdfProcessorError, StagingStore,
    StagingStoreError, converted_path_for,
};
use crate::domain::{
    MediaKind, ProcessingResult, StorageNaming, StoragePath, StoragePathError, UploadedFile,
};

/// A file part as received from the caller.
#[derive(Debug, Clone)]
pub struct IncomingUpload {
    pub original_name: String,
    pub media_type: Option<String>,
    pub data: Bytes,
}

#[derive(Debug, Clone)]
pub struct UploadOutcome {
    pub file: UploadedFile,
    pub converted: bool,
    pub result: ProcessingResult,
}

pub struct UploadService<C, P>
where
    C: DocumentConverter,
    P: PdfProcessor,
{
    staging_store: Arc<dyn StagingStore>,
    converter: Arc<C>,
    pdf_processor: Arc<P>,
    naming: StorageNaming,
    retain_artifacts: bool,
}

impl<C, P> UploadService<C, P>
where
    C: DocumentConverter,
    P: PdfProcessor,
{
    pub fn new(
        staging_store: Arc<dyn StagingStore>,
        converter: Arc<C>,
        pdf_processor: Arc<P>,
        naming: StorageNaming,
        retain_artifacts: bool,
    ) -> Self {
        Self {
            staging_store,
            converter,
            pdf_processor,
            naming,
            retain_artifacts,
        }
    }

    /// Stores the upload, converts it to PDF unless it is declared as one,
    /// and runs the PDF through the processor.
    pub async fn process_upload(
        &self,
        upload: IncomingUpload,
    ) -> Result<UploadOutcome, UploadError> {
        let file = UploadedFile::new(
            upload.original_name,
            upload.media_type,
            upload.data.len() as u64,
        );
        let storage_path = StoragePath::new(&file.id, &file.original_name, self.naming)?;

        let data = upload.data;
        let written = self
            .staging_store
            .store(
                &storage_path,
                Box::pin(stream::once(async move { Ok::<_, io::Error>(data) })),
                Some(file.size_bytes),
            )
            .await?;

        tracing::debug!(
            upload_id = %file.id,
            path = %storage_path,
            bytes = written,
            "Upload stored"
        );

        let stored = self.staging_store.resolve(&storage_path);
        let mut converted = None;
        let routed = self.route(&file, &stored, &mut converted).await;

        if !self.retain_artifacts {
            // A converter that failed or timed out may still have written
            // its output at the expected path.
            let expected = file
                .kind()
                .needs_conversion()
                .then(|| converted_path_for(&stored));
            let mut renditions: Vec<&Path> = expected.iter().map(PathBuf::as_path).collect();
            if let Some(pdf) = converted.as_deref() {
                if !renditions.contains(&pdf) {
                    renditions.push(pdf);
                }
            }
            self.discard_artifacts(&storage_path, &renditions).await;
        }

        let result = routed?;

        tracing::info!(
            upload_id = %file.id,
            filename = %file.original_name,
            converted = converted.is_some(),
            page_count = result.page_count,
            "Upload processed"
        );

        Ok(UploadOutcome {
            file,
            converted: converted.is_some(),
            result,
        })
    }

    async fn route(
        &self,
        file: &UploadedFile,
        stored: &Path,
        converted: &mut Option<PathBuf>,
    ) -> Result<ProcessingResult, UploadError> {
        let kind = file.kind();
        tracing::debug!(
            upload_id = %file.id,
            media_type = file.media_type.as_deref().unwrap_or("<none>"),
            kind = kind.as_str(),
            "Upload classified"
        );

        match kind {
            MediaKind::Pdf => Ok(self.pdf_processor.process(stored).await?),
            MediaKind::NeedsConversion => {
                let pdf = self.converter.convert_to_pdf(stored).await?;
                tracing::debug!(upload_id = %file.id, pdf = %pdf.display(), "Upload converted");
                let pdf = converted.insert(pdf);
                Ok(self.pdf_processor.process(pdf.as_path()).await?)
            }
        }
    }

    async fn discard_artifacts(&self, stored: &StoragePath, renditions: &[&Path]) {
        if let Err(e) = self.staging_store.delete(stored).await {
            tracing::warn!(error = %e, path = %stored, "Failed to delete stored upload");
        }

        for pdf in renditions {
            match tokio::fs::remove_file(pdf).await {
                Ok(()) => {}
                Err(e) if e.kind() == io::ErrorKind::NotFound => {}
                Err(e) => {
                    tracing::warn!(error = %e, path = %pdf.display(), "Failed to delete converted PDF");
                }
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UploadErrorKind {
    InvalidInput,
    Storage,
    Conversion,
    Processing,
}

impl UploadErrorKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::InvalidInput => "invalid_input",
            Self::Storage => "storage",
            Self::Conversion => "conversion",
            Self::Processing => "processing",
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum UploadError {
    #[error("invalid file name: {0}")]
    InvalidFilename(#[from] StoragePathError),
    #[error("storage: {0}")]
    Storage(#[from] StagingStoreError),
    #[error("conversion: {0}")]
    Conversion(#[from] ConversionError),
    #[error("processing: {0}")]
    Processing(#[from] PdfProcessorError),
}

impl UploadError {
    pub fn kind(&self) -> UploadErrorKind {
        match self {
            Self::InvalidFilename(_) => UploadErrorKind::InvalidInput,
            Self::Storage(_) => UploadErrorKind::Storage,
            Self::Conversion(_) => UploadErrorKind::Conversion,
            Self::Processing(_) => UploadErrorKind::Processing,
        }
    }
}
