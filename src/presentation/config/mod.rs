mod settings;

pub use settings::{CorsSettings, GeminiSettings, ServerSettings, Settings, UploadSettings};
