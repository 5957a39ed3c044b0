use std::net::{AddrParseError, SocketAddr};
use std::time::Duration;

use ::config::Environment as EnvironmentSource;
use ::config::{Config, ConfigError, File};
use serde::Deserialize;

use crate::domain::StorageNaming;
use crate::infrastructure::observability::DEFAULT_LOG_FILTER;

use super::Environment;

pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_UPLOAD_DIR: &str = "./uploads";
pub const DEFAULT_MAX_UPLOAD_SIZE_MB: usize = 25;
pub const DEFAULT_CONVERSION_TIMEOUT_SECS: u64 = 60;
pub const DEFAULT_EXTRACTION_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Settings {
    pub server: ServerSettings,
    pub storage: StorageSettings,
    pub processing: ProcessingSettings,
    pub errors: ErrorSettings,
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone, Deserialize)]
pub struct StorageSettings {
    pub upload_dir: String,
    pub naming: StorageNaming,
    pub retain_artifacts: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ProcessingSettings {
    pub max_upload_size_mb: usize,
    pub conversion_timeout_secs: u64,
    pub extraction_timeout_secs: u64,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ErrorSettings {
    pub mode: ErrorResponseMode,
}

/// How failures are reported to callers. `Generic` answers every failure
/// with the same 500 body; `Classified` tells storage, conversion and
/// extraction failures apart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ErrorResponseMode {
    #[default]
    Generic,
    Classified,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSettings {
    pub level: String,
    pub enable_json: bool,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
        }
    }
}

impl Default for StorageSettings {
    fn default() -> Self {
        Self {
            upload_dir: DEFAULT_UPLOAD_DIR.to_string(),
            naming: StorageNaming::default(),
            retain_artifacts: false,
        }
    }
}

impl Default for ProcessingSettings {
    fn default() -> Self {
        Self {
            max_upload_size_mb: DEFAULT_MAX_UPLOAD_SIZE_MB,
            conversion_timeout_secs: DEFAULT_CONVERSION_TIMEOUT_SECS,
            extraction_timeout_secs: DEFAULT_EXTRACTION_TIMEOUT_SECS,
        }
    }
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: DEFAULT_LOG_FILTER.to_string(),
            enable_json: false,
        }
    }
}

impl Settings {
    /// Defaults, then `appsettings.<environment>.*` if present, then `APP_*`
    /// variables (`APP_SERVER__PORT=8080`).
    pub fn load(environment: Environment) -> Result<Self, ConfigError> {
        Config::builder()
            .set_default("server.host", DEFAULT_HOST)?
            .set_default("server.port", i64::from(DEFAULT_PORT))?
            .set_default("storage.upload_dir", DEFAULT_UPLOAD_DIR)?
            .set_default("storage.naming", "unique")?
            .set_default("storage.retain_artifacts", false)?
            .set_default("processing.max_upload_size_mb", DEFAULT_MAX_UPLOAD_SIZE_MB as i64)?
            .set_default(
                "processing.conversion_timeout_secs",
                DEFAULT_CONVERSION_TIMEOUT_SECS as i64,
            )?
            .set_default(
                "processing.extraction_timeout_secs",
                DEFAULT_EXTRACTION_TIMEOUT_SECS as i64,
            )?
            .set_default("errors.mode", "generic")?
            .set_default("logging.level", DEFAULT_LOG_FILTER)?
            .set_default("logging.enable_json", false)?
            .add_source(
                File::with_name(&format!("appsettings.{}", environment.as_str())).required(false),
            )
            .add_source(
                EnvironmentSource::with_prefix("APP")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize()
    }

    pub fn socket_addr(&self) -> Result<SocketAddr, AddrParseError> {
        format!("{}:{}", self.server.host, self.server.port).parse()
    }
}

impl ProcessingSettings {
    pub fn max_upload_bytes(&self) -> usize {
        self.max_upload_size_mb.saturating_mul(1024 * 1024)
    }

    pub fn conversion_timeout(&self) -> Duration {
        Duration::from_secs(self.conversion_timeout_secs)
    }

    pub fn extraction_timeout(&self) -> Duration {
        Duration::from_secs(self.extraction_timeout_secs)
    }
}
