mod media_kind;
mod processing_result;
mod storage_path;
mod upload;
mod upload_id;

pub use media_kind::{MediaKind, PDF_MEDIA_TYPE};
pub use processing_result::{PageText, ProcessingResult};
pub use storage_path::{StorageNaming, StoragePath, StoragePathError, sanitize_filename};
pub use upload::UploadedFile;
pub use upload_id::UploadId;
