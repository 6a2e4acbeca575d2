use axum::extract::{Multipart, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde::Serialize;

use crate::application::ports::{DocumentStore, LlmClient, TextExtractor};
use crate::application::services::{UploadError, UPLOAD_FIELD};
use crate::domain::Document;
use crate::presentation::handlers::envelope::error_response;
use crate::presentation::state::AppState;

#[derive(Serialize)]
pub struct UploadResponse {
    pub success: bool,
    pub message: String,
    pub files: Vec<FileDescriptor>,
}

#[derive(Serialize)]
pub struct FileDescriptor {
    pub filename: String,
    pub originalname: String,
    pub mimetype: String,
    pub size: u64,
}

/// Accept up to 5 files under the `documents` multipart field. Validation
/// happens per field during the streaming parse: a failing field rejects
/// the request, but files accepted before it are already on disk.
#[tracing::instrument(skip(state, multipart))]
pub async fn upload_handler<D, X, L>(
    State(state): State<AppState<D, X, L>>,
    mut multipart: Multipart,
) -> impl IntoResponse
where
    D: DocumentStore + 'static,
    X: TextExtractor + 'static,
    L: LlmClient + 'static,
{
    let mut accepted: Vec<Document> = Vec::new();

    loop {
        let field = match multipart.next_field().await {
            Ok(Some(f)) => f,
            Ok(None) => break,
            Err(e) => {
                tracing::warn!(error = %e, "Failed to read multipart body");
                return error_response(StatusCode::BAD_REQUEST, e.to_string());
            }
        };

        if field.name() != Some(UPLOAD_FIELD) {
            tracing::warn!(
                field = field.name().unwrap_or("<unnamed>"),
                "Unexpected multipart field"
            );
            return error_response(StatusCode::BAD_REQUEST, "Unexpected field");
        }

        if accepted.len() >= state.upload_service.max_files_per_request() {
            tracing::warn!("Upload exceeds the per-request file limit");
            return error_response(StatusCode::BAD_REQUEST, "Too many files");
        }

        let original_name = field.file_name().unwrap_or("unknown").to_string();
        let mimetype = field
            .content_type()
            .unwrap_or("application/octet-stream")
            .to_string();

        tracing::debug!(filename = %original_name, content_type = %mimetype, "Processing file upload");

        let content_type = match state.upload_service.validate_content_type(&mimetype) {
            Ok(ct) => ct,
            Err(_) => {
                tracing::warn!(content_type = %mimetype, "Disallowed content type");
                return error_response(
                    StatusCode::BAD_REQUEST,
                    "Invalid file type. Only PDF, JPEG, PNG, and Excel files are allowed.",
                );
            }
        };

        let data = match field.bytes().await {
            Ok(d) => d,
            Err(e) => {
                tracing::warn!(error = %e, "Failed to read file bytes");
                return error_response(StatusCode::BAD_REQUEST, e.to_string());
            }
        };

        match state
            .upload_service
            .store_document(&original_name, content_type, data)
            .await
        {
            Ok(document) => accepted.push(document),
            Err(UploadError::FileTooLarge { size_bytes, .. }) => {
                tracing::warn!(size_bytes, "Uploaded file exceeds the size limit");
                return error_response(StatusCode::BAD_REQUEST, "File too large");
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to store uploaded file");
                return error_response(
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Server error during upload",
                );
            }
        }
    }

    if accepted.is_empty() {
        return error_response(StatusCode::BAD_REQUEST, "No files uploaded");
    }

    tracing::info!(count = accepted.len(), "Files uploaded");

    let files = accepted
        .into_iter()
        .map(|d| FileDescriptor {
            filename: d.stored_name.as_str().to_string(),
            originalname: d.original_name,
            mimetype: d.content_type.as_mime().to_string(),
            size: d.size_bytes,
        })
        .collect();

    (
        StatusCode::OK,
        Json(UploadResponse {
            success: true,
            message: "Files uploaded successfully".to_string(),
            files,
        }),
    )
        .into_response()
}
