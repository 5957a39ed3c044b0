mod upload_service;

pub use upload_service::{
    IncomingUpload, UploadError, UploadErrorKind, UploadOutcome, UploadService,
};
