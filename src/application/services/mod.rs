mod analysis_service;
mod upload_service;

pub use analysis_service::{
    build_extraction_prompt, parse_extraction_response, AnalysisError, AnalysisService,
    ResponseParseError,
};
pub use upload_service::{UploadError, UploadService, UPLOAD_FIELD};
