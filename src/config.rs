use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::error::{Error, Result};
use crate::text::StemmerKind;

/// Main configuration for the sentiment service
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Model artifact configuration
    pub model: ModelConfig,

    /// Text normalization configuration
    pub text: TextConfig,

    /// HTTP server configuration (if enabled)
    #[cfg(feature = "http-server")]
    pub server: ServerConfig,
}

/// Model artifact configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ModelConfig {
    /// Path to the serialized classifier
    pub classifier_path: PathBuf,

    /// Path to the serialized TF-IDF vectorizer
    pub vectorizer_path: PathBuf,
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            classifier_path: PathBuf::from("twitter_sentiment_model.json"),
            vectorizer_path: PathBuf::from("tfidf_vectorizer.json"),
        }
    }
}

impl ModelConfig {
    /// Required artifact paths that do not exist on disk
    pub fn missing_artifacts(&self) -> Vec<&PathBuf> {
        [&self.classifier_path, &self.vectorizer_path]
            .into_iter()
            .filter(|path| !path.exists())
            .collect()
    }
}

/// Text normalization configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TextConfig {
    /// Stopword list, one word per line. Falls back to `$NLTK_DATA` and then
    /// to the bundled list.
    pub stopwords_path: Option<PathBuf>,

    /// Stemming algorithm, `porter` unless the vocabulary was fitted with
    /// Snowball stems
    pub stemmer: StemmerKind,
}

/// HTTP server configuration
#[cfg(feature = "http-server")]
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Server host
    pub host: String,

    /// Server port
    pub port: u16,

    /// Number of worker threads
    pub workers: usize,
}

#[cfg(feature = "http-server")]
impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 5000,
            workers: num_cpus::get(),
        }
    }
}

impl Config {
    /// Load configuration from file
    pub fn from_file(path: impl AsRef<std::path::Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = serde_json::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Save configuration to file
    pub fn to_file(&self, path: impl AsRef<std::path::Path>) -> Result<()> {
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Check values that would otherwise only fail once the server starts
    pub fn validate(&self) -> Result<()> {
        if self.model.classifier_path.as_os_str().is_empty() {
            return Err(Error::config("model.classifier_path must not be empty"));
        }
        if self.model.vectorizer_path.as_os_str().is_empty() {
            return Err(Error::config("model.vectorizer_path must not be empty"));
        }

        #[cfg(feature = "http-server")]
        {
            if self.server.host.trim().is_empty() {
                return Err(Error::config("server.host must not be empty"));
            }
            if self.server.port == 0 {
                return Err(Error::config("server.port must be non-zero"));
            }
            if self.server.workers == 0 {
                return Err(Error::config("server.workers must be at least 1"));
            }
        }

        Ok(())
    }
}
