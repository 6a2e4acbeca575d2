use std::net::SocketAddr;
use std::sync::Arc;

use tokio::net::TcpListener;

use taxdoc::application::services::{AnalysisService, UploadService};
use taxdoc::infrastructure::llm::GeminiClient;
use taxdoc::infrastructure::observability::{init_tracing, TracingConfig};
use taxdoc::infrastructure::storage::LocalDocumentStore;
use taxdoc::infrastructure::text_processing::PdfAdapter;
use taxdoc::presentation::{create_router, AppState, Settings};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let settings = Settings::from_env();

    init_tracing(TracingConfig::default(), settings.server.port);

    if settings.gemini.api_key.is_empty() {
        tracing::warn!("GEMINI_API_KEY is not set; document analysis requests will fail");
    }

    let store = Arc::new(LocalDocumentStore::new(settings.uploads.directory.clone())?);
    let extractor = Arc::new(PdfAdapter::new());
    let llm = Arc::new(GeminiClient::new(
        settings.gemini.api_key.clone(),
        settings.gemini.model.clone(),
    ));

    let upload_service = Arc::new(UploadService::new(
        Arc::clone(&store),
        settings.uploads.max_file_size_bytes,
        settings.uploads.max_files_per_request,
    ));
    let analysis_service = Arc::new(AnalysisService::new(
        Arc::clone(&store),
        extractor,
        llm,
    ));

    let state = AppState {
        upload_service,
        analysis_service,
        settings: settings.clone(),
    };

    let router = create_router(state);

    let addr: SocketAddr = format!("{}:{}", settings.server.host, settings.server.port).parse()?;
    tracing::info!("Listening on {}", addr);

    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, router).await?;

    Ok(())
}
