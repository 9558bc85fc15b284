use std::path::PathBuf;
use std::time::Duration;

const DEFAULT_PORT: u16 = 3000;
const DEFAULT_MODEL: &str = "qwen3:latest";
const DEFAULT_OLLAMA_URL: &str = "http://localhost:11434";
const DEFAULT_TIMEOUT_SECS: u64 = 300;
const DEFAULT_MAX_UPLOAD_MB: usize = 10;

#[derive(Debug, Clone)]
pub struct Settings {
    pub server: ServerSettings,
    pub model: ModelSettings,
    pub storage: StorageSettings,
    pub limits: UploadLimits,
}

#[derive(Debug, Clone)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone)]
pub struct ModelSettings {
    pub base_url: String,
    pub model: String,
    pub request_timeout_secs: u64,
}

#[derive(Debug, Clone)]
pub struct StorageSettings {
    pub downloads_dir: PathBuf,
}

#[derive(Debug, Clone)]
pub struct UploadLimits {
    pub max_upload_bytes: usize,
}

impl Settings {
    pub fn from_env() -> Self {
        Self {
            server: ServerSettings {
                host: env_or("SERVER_HOST", "0.0.0.0"),
                port: env_parsed("SERVER_PORT", DEFAULT_PORT),
            },
            model: ModelSettings {
                base_url: env_or("OLLAMA_URL", DEFAULT_OLLAMA_URL),
                model: env_or("MODEL_NAME", DEFAULT_MODEL),
                request_timeout_secs: env_parsed("MODEL_TIMEOUT_SECS", DEFAULT_TIMEOUT_SECS),
            },
            storage: StorageSettings {
                downloads_dir: PathBuf::from(env_or("DOWNLOADS_DIR", "downloads")),
            },
            limits: UploadLimits {
                max_upload_bytes: env_parsed("MAX_UPLOAD_MB", DEFAULT_MAX_UPLOAD_MB)
                    * 1024
                    * 1024,
            },
        }
    }
}

impl ModelSettings {
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

fn env_parsed<T: std::str::FromStr>(key: &str, default: T) -> T {
    std::env::var(key)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}
