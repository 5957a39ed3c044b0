mod document_converter;
mod pdf_processor;
mod staging_store;

pub use document_converter::{ConversionError, DocumentConverter, converted_path_for};
pub use pdf_processor::{PdfProcessor, PdfProcessorError};
pub use staging_store::{StagingStore, StagingStoreError};
