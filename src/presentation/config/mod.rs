mod environment;
mod settings;

pub use environment::Environment;
pub use settings::{
    DEFAULT_PORT, DEFAULT_UPLOAD_DIR, ErrorResponseMode, ErrorSettings, LoggingSettings,
    ProcessingSettings, ServerSettings, Settings, StorageSettings,
};
