//! Serialized model artifacts
//!
//! Plain data exported from the fitted scikit-learn objects. Decoding picks
//! bincode for `.bin`/`.bincode` files and JSON for everything else.

use std::collections::HashMap;
use std::path::Path;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result, WithErrorContext};

/// Default sklearn token pattern: words of two or more characters
pub const DEFAULT_TOKEN_PATTERN: &str = r"(?u)\b\w\w+\b";

/// Row normalization applied after weighting
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Norm {
    L1,
    L2,
    None,
}

impl Default for Norm {
    fn default() -> Self {
        Norm::L2
    }
}

/// Fitted TF-IDF vectorizer parameters
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VectorizerArtifact {
    /// 词到列索引的映射
    pub vocabulary: HashMap<String, usize>,
    /// IDF值，每列一个
    pub idf: Vec<f64>,
    /// n-gram范围
    #[serde(default = "default_ngram_range")]
    pub ngram_range: (usize, usize),
    #[serde(default = "default_token_pattern")]
    pub token_pattern: String,
    #[serde(default = "default_true")]
    pub lowercase: bool,
    #[serde(default)]
    pub binary: bool,
    #[serde(default)]
    pub sublinear_tf: bool,
    #[serde(default = "default_true")]
    pub use_idf: bool,
    #[serde(default)]
    pub norm: Norm,
}

/// Fitted classifier parameters, keyed by model kind
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ClassifierArtifact {
    /// Binary logistic regression
    LogisticRegression {
        classes: Vec<i64>,
        coef: Vec<f64>,
        intercept: f64,
    },
    /// Multinomial naive Bayes
    MultinomialNb {
        classes: Vec<i64>,
        class_log_prior: Vec<f64>,
        feature_log_prob: Vec<Vec<f64>>,
    },
}

impl ClassifierArtifact {
    pub fn classes(&self) -> &[i64] {
        match self {
            ClassifierArtifact::LogisticRegression { classes, .. } => classes,
            ClassifierArtifact::MultinomialNb { classes, .. } => classes,
        }
    }
}

fn default_ngram_range() -> (usize, usize) {
    (1, 1)
}

fn default_token_pattern() -> String {
    DEFAULT_TOKEN_PATTERN.to_string()
}

fn default_true() -> bool {
    true
}

/// Read and decode an artifact file
pub fn read_artifact<T: DeserializeOwned>(path: impl AsRef<Path>) -> Result<T> {
    let path = path.as_ref();
    let context = path.display().to_string();
    let bytes = std::fs::read(path).map_err(Error::from).with_context(context.as_str())?;
    decode(path, &bytes).with_context(context)
}

/// Encode an artifact using the format implied by the file extension
pub fn write_artifact<T: Serialize>(path: impl AsRef<Path>, artifact: &T) -> Result<()> {
    let path = path.as_ref();
    let bytes = if is_bincode(path) {
        bincode::serialize(artifact)?
    } else {
        serde_json::to_vec_pretty(artifact)?
    };
    std::fs::write(path, bytes)?;
    Ok(())
}

fn decode<T: DeserializeOwned>(path: &Path, bytes: &[u8]) -> Result<T> {
    if is_bincode(path) {
        Ok(bincode::deserialize(bytes)?)
    } else {
        Ok(serde_json::from_slice(bytes)?)
    }
}

fn is_bincode(path: &Path) -> bool {
    matches!(
        path.extension().and_then(|ext| ext.to_str()),
        Some("bin") | Some("bincode")
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_vectorizer_defaults() {
        let json = r#"{"vocabulary": {"love": 0, "hate": 1}, "idf": [1.5, 2.0]}"#;
        let artifact: VectorizerArtifact = serde_json::from_str(json).unwrap();
        assert_eq!(artifact.ngram_range, (1, 1));
        assert_eq!(artifact.token_pattern, DEFAULT_TOKEN_PATTERN);
        assert!(artifact.lowercase);
        assert!(artifact.use_idf);
        assert!(!artifact.sublinear_tf);
        assert_eq!(artifact.norm, Norm::L2);
    }

    #[test]
    fn test_classifier_kind_key() {
        let json = r#"{"logistic_regression":
            {"classes": [0, 1], "coef": [0.5], "intercept": -0.1}}"#;
        let artifact: ClassifierArtifact = serde_json::from_str(json).unwrap();
        assert_eq!(artifact.classes(), &[0, 1]);

        let json = r#"{"multinomial_nb": {"classes": [0, 1],
            "class_log_prior": [-0.69, -0.69], "feature_log_prob": [[-1.0], [-2.0]]}}"#;
        let artifact: ClassifierArtifact = serde_json::from_str(json).unwrap();
        assert!(matches!(artifact, ClassifierArtifact::MultinomialNb { .. }));
    }

    #[test]
    fn test_bincode_file_by_extension() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("model.bin");
        let artifact = ClassifierArtifact::LogisticRegression {
            classes: vec![0, 1],
            coef: vec![1.0, -1.0],
            intercept: 0.25,
        };
        write_artifact(&path, &artifact).unwrap();

        // not JSON on disk
        let bytes = std::fs::read(&path).unwrap();
        assert!(serde_json::from_slice::<serde_json::Value>(&bytes).is_err());

        match read_artifact::<ClassifierArtifact>(&path).unwrap() {
            ClassifierArtifact::LogisticRegression { coef, intercept, .. } => {
                assert_eq!(coef, vec![1.0, -1.0]);
                assert_eq!(intercept, 0.25);
            }
            other => panic!("unexpected artifact {:?}", other),
        }
    }

    #[test]
    fn test_corrupt_file_reports_path() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("tfidf_vectorizer.json");
        std::fs::write(&path, b"\x80\x04pickle").unwrap();

        let err = read_artifact::<VectorizerArtifact>(&path).unwrap_err();
        assert!(matches!(err, Error::Serialization(_)));
        assert!(err.to_string().contains("tfidf_vectorizer.json"));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let dir = tempdir().unwrap();
        let err = read_artifact::<VectorizerArtifact>(dir.path().join("absent.json")).unwrap_err();
        assert!(matches!(err, Error::Io(_)));
    }
}
