use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::domain::DomainError;
use crate::infrastructure::ollama::{BASE_URL_ENV, DEFAULT_BASE_URL};

pub const CONFIG_PATH_ENV: &str = "FAQ_AGENT_CONFIG";

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub llm: LlmConfig,
    pub embedding: EmbeddingConfig,
    pub resolver: ResolverConfig,
    pub index: IndexConfig,
    pub server: ServerConfig,
    pub cors: CorsConfig,
    pub ui: UiConfig,
    /// YAML list of `{question, answer}` replacing the built-in dataset.
    pub knowledge_base_path: Option<PathBuf>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LlmConfig {
    pub base_url: String,
    pub model: String,
    pub timeout_seconds: u64,
}

impl Default for LlmConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            model: "llama3.1:latest".to_string(),
            timeout_seconds: 60,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct EmbeddingConfig {
    pub base_url: String,
    pub model: String,
}

impl Default for EmbeddingConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            model: "nomic-embed-text".to_string(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ResolverConfig {
    pub threshold: f32,
    pub clarification_message: String,
    pub error_prefix: String,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            threshold: 0.50,
            clarification_message: "I didn’t catch that. Could you rephrase your question?"
                .to_string(),
            error_prefix: "Oops, something went wrong: ".to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IndexBackend {
    #[default]
    Memory,
    Qdrant,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct IndexConfig {
    pub backend: IndexBackend,
    pub qdrant_url: String,
    pub collection: String,
}

impl Default for IndexConfig {
    fn default() -> Self {
        Self {
            backend: IndexBackend::Memory,
            qdrant_url: "http://localhost:6334".to_string(),
            collection: "faq".to_string(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct CorsConfig {
    pub allowed_origins: Vec<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    pub title: String,
    pub placeholder: String,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            title: "Thoughtful AI Support Agent".to_string(),
            placeholder: "Ask me about Thoughtful AI...".to_string(),
        }
    }
}

impl AppConfig {
    /// Defaults, then the YAML file named by `FAQ_AGENT_CONFIG`, then env overrides.
    pub fn load() -> Result<Self, DomainError> {
        let mut config = match std::env::var(CONFIG_PATH_ENV) {
            Ok(path) => Self::from_file(path)?,
            Err(_) => Self::default(),
        };
        config.apply_env_overrides()?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, DomainError> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path)
            .map_err(|e| DomainError::config(format!("{}: {e}", path.display())))?;
        Self::from_yaml(&raw)
    }

    pub fn from_yaml(raw: &str) -> Result<Self, DomainError> {
        serde_yaml::from_str(raw).map_err(|e| DomainError::config(e.to_string()))
    }

    /// Ollama endpoint applies to both the completion and embedding clients.
    fn apply_env_overrides(&mut self) -> Result<(), DomainError> {
        if let Ok(host) = std::env::var("SERVER_HOST") {
            self.server.host = host;
        }
        if let Ok(port) = std::env::var("SERVER_PORT") {
            self.server.port = port
                .parse()
                .map_err(|e| DomainError::config(format!("SERVER_PORT: {e}")))?;
        }
        if let Ok(url) = std::env::var(BASE_URL_ENV) {
            self.llm.base_url = url.clone();
            self.embedding.base_url = url;
        }
        if let Ok(url) = std::env::var("QDRANT_URL") {
            self.index.qdrant_url = url;
        }
        if let Ok(threshold) = std::env::var("FAQ_THRESHOLD") {
            self.resolver.threshold = threshold
                .parse()
                .map_err(|e| DomainError::config(format!("FAQ_THRESHOLD: {e}")))?;
        }
        Ok(())
    }

    pub fn validate(&self) -> Result<(), DomainError> {
        if !(0.0..=1.0).contains(&self.resolver.threshold) {
            return Err(DomainError::config(format!(
                "resolver.threshold must be within [0, 1], got {}",
                self.resolver.threshold
            )));
        }
        if self.llm.timeout_seconds == 0 {
            return Err(DomainError::config("llm.timeout_seconds must be positive"));
        }
        Ok(())
    }
}
