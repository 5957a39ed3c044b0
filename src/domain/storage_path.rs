use std::fmt;

use serde::Deserialize;

use super::upload_id::UploadId;

// 37-byte `<uuid>-` prefix + stem + extension + `.converted.pdf` stays under 255.
const MAX_STEM_BYTES: usize = 180;
const MAX_EXTENSION_BYTES: usize = 16;
const FALLBACK_FILENAME: &str = "file";

/// How a stored file is named inside the upload directory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StorageNaming {
    /// `<upload-id>-<name>`, one file per request.
    #[default]
    Unique,
    /// `<name>` only. Same-name uploads overwrite each other.
    Original,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StoragePathError {
    #[error("filename contains path traversal: {0}")]
    PathTraversal(String),
}

/// Key of a stored upload, relative to the upload directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoragePath(String);

impl StoragePath {
    pub fn new(
        upload_id: &UploadId,
        original_name: &str,
        naming: StorageNaming,
    ) -> Result<Self, StoragePathError> {
        let name = sanitize_filename(original_name)?;
        Ok(match naming {
            StorageNaming::Unique => Self(format!("{}-{}", upload_id.as_uuid(), name)),
            StorageNaming::Original => Self(name),
        })
    }

    pub fn from_raw(path: impl Into<String>) -> Self {
        Self(path.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for StoragePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Reduces a caller-supplied name to a single safe path component.
///
/// The stem is capped at `MAX_STEM_BYTES` so that the upload-id prefix, the
/// store's staging suffix and `.converted.pdf` still fit in one filesystem
/// name. The extension survives truncation and the fallback name because
/// conversion is routed on it.
pub fn sanitize_filename(filename: &str) -> Result<String, StoragePathError> {
    // Both separators, since Path only splits on '/' on unix.
    let component = filename.rsplit(['/', '\\']).next().unwrap_or(filename);

    if component == "." || component == ".." {
        return Err(StoragePathError::PathTraversal(filename.to_string()));
    }

    let sanitized: String = component
        .chars()
        .map(|c| {
            if c.is_alphanumeric() || c == '.' || c == '-' || c == '_' {
                c
            } else {
                '_'
            }
        })
        .collect();

    let (stem, extension) = split_extension(&sanitized);
    let stem = truncate_to_bytes(stem, MAX_STEM_BYTES);

    if stem.trim_matches('.').is_empty() || sanitized.chars().count() < 3 {
        return Ok(with_extension(FALLBACK_FILENAME, extension));
    }

    Ok(with_extension(stem, extension))
}

fn split_extension(name: &str) -> (&str, Option<&str>) {
    match name.rsplit_once('.') {
        Some((stem, ext))
            if !ext.is_empty()
                && ext.len() <= MAX_EXTENSION_BYTES
                && ext.chars().all(|c| c.is_ascii_alphanumeric()) =>
        {
            (stem, Some(ext))
        }
        _ => (name, None),
    }
}

fn truncate_to_bytes(s: &str, max: usize) -> &str {
    if s.len() <= max {
        return s;
    }
    let mut end = max;
    while !s.is_char_boundary(end) {
        end -= 1;
    }
    &s[..end]
}

fn with_extension(stem: &str, extension: Option<&str>) -> String {
    match extension {
        Some(ext) => format!("{stem}.{ext}"),
        None => stem.to_string(),
    }
}
