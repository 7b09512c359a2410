//! Inference over the pre-trained sentiment model
//!
//! The vectorizer and classifier are decoded once at startup and then only
//! read. `SentimentModel::predict` is synchronous and safe to call from any
//! number of workers.

pub mod artifact;
pub mod classifier;
pub mod predictor;
pub mod vectorizer;

pub use artifact::{ClassifierArtifact, Norm, VectorizerArtifact};
pub use classifier::{Classification, Classifier};
pub use predictor::{PredictionResult, Sentiment, SentimentModel, POSITIVE_LABEL};
pub use vectorizer::{SparseVector, TfidfVectorizer};
