use std::sync::Arc;

use crate::application::ports::{DocumentConverter, PdfProcessor};
use crate::application::services::UploadService;
use crate::presentation::config::Settings;

pub struct AppState<C, P>
where
    C: DocumentConverter,
    P: PdfProcessor,
{
    pub upload_service: Arc<UploadService<C, P>>,
    pub settings: Settings,
}

impl<C, P> Clone for AppState<C, P>
where
    C: DocumentConverter,
    P: PdfProcessor,
{
    fn clone(&self) -> Self {
        Self {
            upload_service: Arc::clone(&self.upload_service),
            settings: self.settings.clone(),
        }
    }
}
