use std::fmt;
use std::path::Path;

use log::{debug, info};
use serde::{Deserialize, Serialize};

use super::artifact::{read_artifact, ClassifierArtifact, VectorizerArtifact};
use super::classifier::Classifier;
use super::vectorizer::TfidfVectorizer;
use crate::error::{Error, Result, WithErrorContext};

/// Class label the training pipeline used for positive tweets
pub const POSITIVE_LABEL: i64 = 1;

/// Predicted sentiment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Sentiment {
    Positive,
    Negative,
}

impl Sentiment {
    /// Map a training-time class label to a sentiment
    pub fn from_label(label: i64) -> Self {
        if label == POSITIVE_LABEL {
            Sentiment::Positive
        } else {
            Sentiment::Negative
        }
    }
}

impl fmt::Display for Sentiment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Sentiment::Positive => write!(f, "Positive"),
            Sentiment::Negative => write!(f, "Negative"),
        }
    }
}

/// Result of one prediction
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictionResult {
    pub sentiment: Sentiment,
    /// Highest class probability as a percentage, two decimals
    pub confidence: f64,
    pub processed_text: String,
}

/// Loaded vectorizer and classifier
#[derive(Debug, Clone)]
pub struct SentimentModel {
    vectorizer: TfidfVectorizer,
    classifier: Classifier,
}

impl SentimentModel {
    /// Build from already decoded artifacts, checking they fit together
    pub fn from_artifacts(
        vectorizer: VectorizerArtifact,
        classifier: ClassifierArtifact,
    ) -> Result<Self> {
        let vectorizer = TfidfVectorizer::from_artifact(vectorizer)?;
        let classifier = Classifier::from_artifact(classifier, vectorizer.dimension())?;
        Ok(Self {
            vectorizer,
            classifier,
        })
    }

    /// Read both artifacts from disk
    pub fn load(
        vectorizer_path: impl AsRef<Path>,
        classifier_path: impl AsRef<Path>,
    ) -> Result<Self> {
        let vectorizer_path = vectorizer_path.as_ref();
        let classifier_path = classifier_path.as_ref();

        let vectorizer = read_artifact::<VectorizerArtifact>(vectorizer_path)?;
        let classifier = read_artifact::<ClassifierArtifact>(classifier_path)?;

        let model = Self::from_artifacts(vectorizer, classifier).with_context(format!(
            "{} + {}",
            vectorizer_path.display(),
            classifier_path.display()
        ))?;

        info!(
            "Loaded {} classifier over {} TF-IDF features (classes {:?})",
            model.classifier.kind(),
            model.vectorizer.dimension(),
            model.classifier.classes()
        );
        Ok(model)
    }

    /// Predict the sentiment of already normalized text
    pub fn predict(&self, normalized: &str) -> Result<PredictionResult> {
        if normalized.trim().is_empty() {
            return Err(Error::validation("nothing to classify"));
        }

        let features = self.vectorizer.transform(normalized)?;
        let classification = self.classifier.classify(&features)?;
        let sentiment = Sentiment::from_label(classification.label);
        let confidence = round_percent(classification.max_probability());

        debug!(
            "Predicted {} ({}%) from {} features",
            sentiment,
            confidence,
            features.nnz()
        );

        Ok(PredictionResult {
            sentiment,
            confidence,
            processed_text: normalized.to_string(),
        })
    }

    pub fn dimension(&self) -> usize {
        self.vectorizer.dimension()
    }
}

/// Probability to percentage rounded to two decimals
fn round_percent(probability: f64) -> f64 {
    (probability * 100.0 * 100.0).round() / 100.0
}
