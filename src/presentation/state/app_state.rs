use std::sync::Arc;

use crate::application::ports::{DocumentStore, LlmClient, TextExtractor};
use crate::application::services::{AnalysisService, UploadService};
use crate::presentation::config::Settings;

pub struct AppState<D, X, L>
where
    D: DocumentStore,
    X: TextExtractor,
    L: LlmClient,
{
    pub upload_service: Arc<UploadService<D>>,
    pub analysis_service: Arc<AnalysisService<D, X, L>>,
    pub settings: Settings,
}

impl<D, X, L> Clone for AppState<D, X, L>
where
    D: DocumentStore,
    X: TextExtractor,
    L: LlmClient,
{
    fn clone(&self) -> Self {
        Self {
            upload_service: Arc::clone(&self.upload_service),
            analysis_service: Arc::clone(&self.analysis_service),
            settings: self.settings.clone(),
        }
    }
}
