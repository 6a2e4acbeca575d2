use axum::extract::DefaultBodyLimit;
use axum::http::{header, HeaderValue, Method};
use axum::middleware;
use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

use crate::application::ports::{DocumentStore, LlmClient, TextExtractor};
use crate::infrastructure::observability::request_id_middleware;
use crate::presentation::config::{CorsSettings, UploadSettings};
use crate::presentation::handlers::{health_handler, process_handler, upload_handler};
use crate::presentation::state::AppState;

pub fn create_router<D, X, L>(state: AppState<D, X, L>) -> Router
where
    D: DocumentStore + 'static,
    X: TextExtractor + 'static,
    L: LlmClient + 'static,
{
    let cors = build_cors(&state.settings.cors);
    let body_limit = DefaultBodyLimit::max(request_body_limit(&state.settings.uploads));

    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
        .on_response(DefaultOnResponse::new().level(Level::INFO));

    Router::new()
        .route("/", get(root_handler))
        .route("/api/health", get(health_handler))
        .route("/api/documents/upload", post(upload_handler::<D, X, L>))
        .route("/api/documents/process", post(process_handler::<D, X, L>))
        .layer(body_limit)
        .layer(middleware::from_fn(request_id_middleware))
        .layer(trace_layer)
        .layer(cors)
        .with_state(state)
}

async fn root_handler() -> &'static str {
    "Indian Tax Calculator API is running"
}

fn build_cors(settings: &CorsSettings) -> CorsLayer {
    let cors = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION]);

    if settings.allowed_origin == "*" {
        return cors.allow_origin(Any);
    }

    match settings.allowed_origin.parse::<HeaderValue>() {
        Ok(origin) => cors.allow_origin(origin),
        Err(_) => {
            tracing::warn!(origin = %settings.allowed_origin, "Unparsable CORS origin, allowing any");
            cors.allow_origin(Any)
        }
    }
}

// Whole-request cap; the per-file limit is enforced by the upload service.
fn request_body_limit(settings: &UploadSettings) -> usize {
    (settings.max_file_size_bytes as usize) * settings.max_files_per_request + 64 * 1024
}
