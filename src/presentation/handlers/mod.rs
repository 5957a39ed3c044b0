mod health;
mod upload;

pub use health::health_handler;
pub use upload::{
    ErrorResponse, FILE_FIELD, GENERIC_FAILURE_MESSAGE, NO_FILE_MESSAGE, UploadResponse,
    upload_handler,
};
