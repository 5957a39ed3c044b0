use axum::Json;
use axum::extract::multipart::{MultipartError, MultipartRejection};
use axum::extract::{Multipart, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use crate::application::ports::{DocumentConverter, PdfProcessor};
use crate::application::services::{IncomingUpload, UploadErrorKind, UploadOutcome};
use crate::domain::PageText;
use crate::presentation::config::ErrorResponseMode;
use crate::presentation::state::AppState;

pub const FILE_FIELD: &str = "file";
pub const NO_FILE_MESSAGE: &str = "No file uploaded";
pub const GENERIC_FAILURE_MESSAGE: &str = "Failed to process the file";

#[derive(Serialize)]
pub struct UploadResponse {
    pub upload_id: String,
    pub filename: String,
    pub media_type: Option<String>,
    pub converted: bool,
    pub page_count: usize,
    pub pages: Vec<PageText>,
    pub text: String,
}

impl From<UploadOutcome> for UploadResponse {
    fn from(outcome: UploadOutcome) -> Self {
        Self {
            upload_id: outcome.file.id.to_string(),
            filename: outcome.file.original_name,
            media_type: outcome.file.media_type,
            converted: outcome.converted,
            page_count: outcome.result.page_count,
            pages: outcome.result.pages,
            text: outcome.result.text,
        }
    }
}

#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

fn error_response(status: StatusCode, message: &str) -> Response {
    (
        status,
        Json(ErrorResponse {
            error: message.to_string(),
        }),
    )
        .into_response()
}

fn no_file_response() -> Response {
    error_response(StatusCode::BAD_REQUEST, NO_FILE_MESSAGE)
}

fn failure_response(mode: ErrorResponseMode, kind: UploadErrorKind) -> Response {
    match mode {
        ErrorResponseMode::Generic => {
            error_response(StatusCode::INTERNAL_SERVER_ERROR, GENERIC_FAILURE_MESSAGE)
        }
        ErrorResponseMode::Classified => match kind {
            UploadErrorKind::InvalidInput => {
                error_response(StatusCode::BAD_REQUEST, "Invalid file name")
            }
            UploadErrorKind::Storage => {
                error_response(StatusCode::INTERNAL_SERVER_ERROR, "Failed to store the file")
            }
            UploadErrorKind::Conversion => error_response(
                StatusCode::UNPROCESSABLE_ENTITY,
                "Failed to convert the file to PDF",
            ),
            UploadErrorKind::Processing => error_response(
                StatusCode::UNPROCESSABLE_ENTITY,
                "Failed to extract content from the PDF",
            ),
        },
    }
}

/// Pulls the first part named `file` that carries a file name. Parts with
/// other names are skipped; further `file` parts are ignored.
async fn read_file_part(mut multipart: Multipart) -> Result<Option<IncomingUpload>, MultipartError> {
    let mut upload: Option<IncomingUpload> = None;

    loop {
        let field = match multipart.next_field().await {
            Ok(Some(field)) => field,
            Ok(None) => break,
            Err(e) if upload.is_some() => {
                tracing::warn!(error = %e, "Ignoring malformed trailing multipart data");
                break;
            }
            Err(e) => return Err(e),
        };

        if field.name() != Some(FILE_FIELD) {
            continue;
        }

        let Some(original_name) = field.file_name().map(str::to_string) else {
            continue;
        };

        if upload.is_some() {
            tracing::warn!(filename = %original_name, "Ignoring additional file part");
            continue;
        }

        let media_type = field.content_type().map(str::to_string);
        let data = field.bytes().await?;

        tracing::debug!(
            filename = %original_name,
            media_type = media_type.as_deref().unwrap_or("<none>"),
            bytes = data.len(),
            "File part received"
        );

        upload = Some(IncomingUpload {
            original_name,
            media_type,
            data,
        });
    }

    Ok(upload)
}

#[tracing::instrument(skip(state, multipart))]
pub async fn upload_handler<C, P>(
    State(state): State<AppState<C, P>>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Response
where
    C: DocumentConverter + 'static,
    P: PdfProcessor + 'static,
{
    let mode = state.settings.errors.mode;

    let multipart = match multipart {
        Ok(m) => m,
        Err(e) => {
            tracing::warn!(error = %e, "Upload request is not multipart");
            return no_file_response();
        }
    };

    let upload = match read_file_part(multipart).await {
        Ok(Some(upload)) => upload,
        Ok(None) => {
            tracing::warn!("Upload request with no file");
            return no_file_response();
        }
        Err(e) => {
            tracing::warn!(error = %e, "Failed to read multipart body");
            if mode == ErrorResponseMode::Classified
                && e.status() == StatusCode::PAYLOAD_TOO_LARGE
            {
                return error_response(StatusCode::PAYLOAD_TOO_LARGE, "File too large");
            }
            return no_file_response();
        }
    };

    match state.upload_service.process_upload(upload).await {
        Ok(outcome) => (StatusCode::OK, Json(UploadResponse::from(outcome))).into_response(),
        Err(e) => {
            tracing::error!(
                error = %e,
                kind = e.kind().as_str(),
                "An error occurred while processing the file"
            );
            failure_response(mode, e.kind())
        }
    }
}
