//! tweet-sentiment - Sentiment prediction service for short texts
//!
//! Serves predictions from a pre-trained TF-IDF vectorizer and linear
//! classifier over HTTP.
//!
//! # Features
//!
//! - Deterministic text normalization (letters only, stopwords, stemming)
//! - TF-IDF vectorization with logistic regression or naive Bayes
//! - JSON or bincode model artifacts
//! - actix-web HTTP surface (`http-server` feature)
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use tweet_sentiment::{Normalizer, SentimentModel, StopwordSet, Result};
//!
//! fn main() -> Result<()> {
//!     let normalizer = Normalizer::new(StopwordSet::bundled());
//!     let model = SentimentModel::load("tfidf_vectorizer.json", "twitter_sentiment_model.json")?;
//!     let processed = normalizer.normalize("I love this!");
//!     let result = model.predict(&processed)?;
//!     println!("{} ({}%)", result.sentiment, result.confidence);
//!     Ok(())
//! }
//! ```

// Core modules
pub mod config;
pub mod error;

pub mod model;
pub mod text;

// API module (optional)
#[cfg(feature = "http-server")]
pub mod api;

// Re-export commonly used types
pub use config::Config;
pub use error::{Error, Result};
pub use model::{PredictionResult, Sentiment, SentimentModel};
pub use text::{Normalizer, StemmerKind, StopwordSet};

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const NAME: &str = env!("CARGO_PKG_NAME");

/// Initialize the library logger
pub fn init() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .try_init()
        .map_err(|e| Error::config(format!("Failed to initialize logger: {}", e)))?;
    log::info!("{} {} initialized", NAME, VERSION);
    Ok(())
}
