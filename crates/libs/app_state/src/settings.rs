use serde::Deserialize;
use std::path::PathBuf;

#[derive(Debug, Deserialize, Clone)]
pub struct AppSettings {
    pub analyzer: AnalyzerSettings,
    pub logging: LoggingSettings,
}

#[derive(Debug, Deserialize, Clone)]
pub struct AnalyzerSettings {
    pub clip: ClipSettings,
}

/// Where the pretrained image-text encoder weights come from.
#[derive(Debug, Deserialize, Clone)]
pub struct ClipSettings {
    /// Hugging Face model id, e.g. `openai/clip-vit-base-patch32`.
    pub model_id: String,
    /// Repo revision to fetch weights from.
    #[serde(default = "default_revision")]
    pub revision: String,
    /// Local safetensors file to load instead of fetching from the hub.
    #[serde(default)]
    pub weights_file: Option<PathBuf>,
}

fn default_revision() -> String {
    "main".to_string()
}

/// Logging configuration.
#[derive(Debug, Deserialize, Clone)]
pub struct LoggingSettings {
    pub level: String,
}
