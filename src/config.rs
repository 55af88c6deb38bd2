use config::{Config, ConfigError, Environment};
use serde::Deserialize;
use std::net::SocketAddr;
use std::path::PathBuf;

/// Application configuration loaded from environment variables.
///
/// All settings can be configured via environment variables with the
/// `SENTIMENT_` prefix, e.g. `SENTIMENT_SERVER__PORT=5000`. With nothing
/// set, the defaults reproduce the original deployment: artifacts read
/// from the working directory, server bound to all interfaces on 5000.
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    /// Model artifact configuration
    #[serde(default)]
    pub model: ModelConfig,

    /// Server configuration
    #[serde(default)]
    pub server: ServerConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            model: ModelConfig::default(),
            server: ServerConfig::default(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct ModelConfig {
    /// Path to the serialized classifier (ONNX graph, weights included)
    #[serde(default = "default_model_path")]
    pub model_path: PathBuf,

    /// Path to the token-to-index vocabulary produced alongside the model
    #[serde(default = "default_vocab_path")]
    pub vocab_path: PathBuf,
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            model_path: default_model_path(),
            vocab_path: default_vocab_path(),
        }
    }
}

fn default_model_path() -> PathBuf {
    PathBuf::from("cnn.onnx")
}

fn default_vocab_path() -> PathBuf {
    PathBuf::from("vocabulary.json")
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// Host to bind to
    #[serde(default = "default_host")]
    pub host: String,

    /// Port to listen on
    #[serde(default = "default_port")]
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    5000
}

impl ServerConfig {
    /// Returns the socket address for binding the server
    pub fn socket_addr(&self) -> SocketAddr {
        format!("{}:{}", self.host, self.port)
            .parse()
            .expect("Invalid socket address")
    }
}

impl AppConfig {
    /// Load configuration from environment variables.
    ///
    /// Environment variables should be prefixed with `SENTIMENT_` and use
    /// double underscores for nested values:
    /// - `SENTIMENT_MODEL__MODEL_PATH` -> model.model_path
    /// - `SENTIMENT_MODEL__VOCAB_PATH` -> model.vocab_path
    /// - `SENTIMENT_SERVER__PORT` -> server.port
    pub fn load() -> Result<Self, ConfigError> {
        let config = Config::builder()
            .add_source(
                Environment::with_prefix("SENTIMENT")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        config.try_deserialize()
    }
}
