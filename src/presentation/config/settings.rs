use std::path::PathBuf;

const DEFAULT_PORT: u16 = 5000;
const DEFAULT_UPLOAD_DIR: &str = "uploads";
const DEFAULT_GEMINI_MODEL: &str = "gemini-pro";
const MAX_FILE_SIZE_BYTES: u64 = 10 * 1024 * 1024;
const MAX_FILES_PER_REQUEST: usize = 5;

/// Process-wide configuration, read once at startup and passed explicitly
/// into the components that need it.
#[derive(Debug, Clone)]
pub struct Settings {
    pub server: ServerSettings,
    pub cors: CorsSettings,
    pub uploads: UploadSettings,
    pub gemini: GeminiSettings,
}

#[derive(Debug, Clone)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone)]
pub struct CorsSettings {
    pub allowed_origin: String,
}

#[derive(Debug, Clone)]
pub struct UploadSettings {
    pub directory: PathBuf,
    pub max_file_size_bytes: u64,
    pub max_files_per_request: usize,
}

#[derive(Debug, Clone)]
pub struct GeminiSettings {
    pub api_key: String,
    pub model: String,
}

impl Settings {
    pub fn from_env() -> Self {
        let port = std::env::var("PORT")
            .ok()
            .and_then(|p| p.parse().ok())
            .unwrap_or(DEFAULT_PORT);
        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
        let allowed_origin = std::env::var("CORS_ORIGIN").unwrap_or_else(|_| "*".to_string());
        let directory = std::env::var("UPLOAD_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(DEFAULT_UPLOAD_DIR));
        let api_key = std::env::var("GEMINI_API_KEY").unwrap_or_default();
        let model =
            std::env::var("GEMINI_MODEL").unwrap_or_else(|_| DEFAULT_GEMINI_MODEL.to_string());

        Self {
            server: ServerSettings { host, port },
            cors: CorsSettings { allowed_origin },
            uploads: UploadSettings {
                directory,
                max_file_size_bytes: MAX_FILE_SIZE_BYTES,
                max_files_per_request: MAX_FILES_PER_REQUEST,
            },
            gemini: GeminiSettings { api_key, model },
        }
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            server: ServerSettings {
                host: "0.0.0.0".to_string(),
                port: DEFAULT_PORT,
            },
            cors: CorsSettings {
                allowed_origin: "*".to_string(),
            },
            uploads: UploadSettings {
                directory: PathBuf::from(DEFAULT_UPLOAD_DIR),
                max_file_size_bytes: MAX_FILE_SIZE_BYTES,
                max_files_per_request: MAX_FILES_PER_REQUEST,
            },
            gemini: GeminiSettings {
                api_key: String::new(),
                model: DEFAULT_GEMINI_MODEL.to_string(),
            },
        }
    }
}
