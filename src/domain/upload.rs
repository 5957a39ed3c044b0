use super::media_kind::MediaKind;
use super::upload_id::UploadId;

/// Metadata of a file received on `/upload`. Name and media type come from
/// the caller and are not trusted.
#[derive(Debug, Clone, PartialEq)]
pub struct UploadedFile {
    pub id: UploadId,
    pub original_name: String,
    pub media_type: Option<String>,
    pub size_bytes: u64,
}

impl UploadedFile {
    pub fn new(original_name: String, media_type: Option<String>, size_bytes: u64) -> Self {
        Self {
            id: UploadId::new(),
            original_name,
            media_type,
            size_bytes,
        }
    }

    pub fn kind(&self) -> MediaKind {
        MediaKind::classify(self.media_type.as_deref())
    }
}
