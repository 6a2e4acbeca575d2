use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::application::ports::{DocumentStore, LlmClient, TextExtractor, TextExtractorError};
use crate::application::services::AnalysisError;
use crate::domain::TaxExtraction;
use crate::presentation::handlers::envelope::error_response;
use crate::presentation::state::AppState;

#[derive(Deserialize)]
pub struct ProcessRequest {
    #[serde(default)]
    pub filename: Option<String>,
}

#[derive(Serialize)]
pub struct ProcessResponse {
    pub success: bool,
    pub message: String,
    pub data: TaxExtraction,
}

#[tracing::instrument(skip(state, request))]
pub async fn process_handler<D, X, L>(
    State(state): State<AppState<D, X, L>>,
    Json(request): Json<ProcessRequest>,
) -> impl IntoResponse
where
    D: DocumentStore + 'static,
    X: TextExtractor + 'static,
    L: LlmClient + 'static,
{
    let Some(filename) = request.filename.as_deref().filter(|f| !f.is_empty()) else {
        return error_response(StatusCode::BAD_REQUEST, "Filename is required");
    };

    match state.analysis_service.analyze(filename).await {
        Ok(data) => (
            StatusCode::OK,
            Json(ProcessResponse {
                success: true,
                message: "Document processed successfully".to_string(),
                data,
            }),
        )
            .into_response(),
        Err(AnalysisError::InvalidFilename(reason)) => {
            tracing::warn!(reason = %reason, "Rejected filename");
            error_response(StatusCode::BAD_REQUEST, "Invalid filename")
        }
        Err(AnalysisError::DocumentNotFound(name)) => {
            tracing::warn!(filename = %name, "Requested document does not exist");
            error_response(StatusCode::NOT_FOUND, "File not found")
        }
        Err(AnalysisError::Extraction(TextExtractorError::UnsupportedFileType(_))) => {
            error_response(
                StatusCode::BAD_REQUEST,
                "Only PDF processing is currently implemented",
            )
        }
        Err(e) => {
            tracing::error!(error = %e, "Document processing failed");
            error_response(
                StatusCode::INTERNAL_SERVER_ERROR,
                "Server error during document processing",
            )
        }
    }
}
