//! Linear text classifiers
//!
//! Both supported models score a sparse TF-IDF row and return the predicted
//! class label together with the per-class probability distribution.

use super::artifact::ClassifierArtifact;
use super::vectorizer::SparseVector;
use crate::error::{Error, Result};

/// Output of a single classification
#[derive(Debug, Clone, PartialEq)]
pub struct Classification {
    /// Predicted class label as encoded at training time
    pub label: i64,
    /// Probability per class, aligned with the classifier's classes
    pub probabilities: Vec<f64>,
}

impl Classification {
    /// Largest class probability
    pub fn max_probability(&self) -> f64 {
        self.probabilities
            .iter()
            .copied()
            .fold(f64::NEG_INFINITY, f64::max)
    }
}

/// Fitted classifier
#[derive(Debug, Clone)]
pub enum Classifier {
    LogisticRegression(LogisticRegression),
    MultinomialNb(MultinomialNb),
}

impl Classifier {
    /// Validate an artifact against the vectorizer dimension
    pub fn from_artifact(artifact: ClassifierArtifact, dimension: usize) -> Result<Self> {
        match artifact {
            ClassifierArtifact::LogisticRegression {
                classes,
                coef,
                intercept,
            } => LogisticRegression::new(classes, coef, intercept, dimension)
                .map(Classifier::LogisticRegression),
            ClassifierArtifact::MultinomialNb {
                classes,
                class_log_prior,
                feature_log_prob,
            } => MultinomialNb::new(classes, class_log_prior, feature_log_prob, dimension)
                .map(Classifier::MultinomialNb),
        }
    }

    pub fn classify(&self, features: &SparseVector) -> Result<Classification> {
        let classification = match self {
            Classifier::LogisticRegression(model) => model.classify(features)?,
            Classifier::MultinomialNb(model) => model.classify(features)?,
        };

        if classification.probabilities.iter().any(|p| !p.is_finite()) {
            return Err(Error::inference("classifier produced a non-finite probability"));
        }
        Ok(classification)
    }

    pub fn kind(&self) -> &'static str {
        match self {
            Classifier::LogisticRegression(_) => "logistic_regression",
            Classifier::MultinomialNb(_) => "multinomial_nb",
        }
    }

    pub fn classes(&self) -> &[i64] {
        match self {
            Classifier::LogisticRegression(model) => &model.classes,
            Classifier::MultinomialNb(model) => &model.classes,
        }
    }
}

/// Binary logistic regression
#[derive(Debug, Clone)]
pub struct LogisticRegression {
    classes: Vec<i64>,
    coef: Vec<f64>,
    intercept: f64,
}

impl LogisticRegression {
    pub fn new(
        classes: Vec<i64>,
        coef: Vec<f64>,
        intercept: f64,
        dimension: usize,
    ) -> Result<Self> {
        if classes.len() != 2 {
            return Err(Error::artifact(format!(
                "logistic regression needs exactly 2 classes, got {}",
                classes.len()
            )));
        }
        if coef.len() != dimension {
            return Err(Error::artifact(format!(
                "classifier has {} coefficients but the vectorizer produces {} features",
                coef.len(),
                dimension
            )));
        }
        if !intercept.is_finite() || coef.iter().any(|c| !c.is_finite()) {
            return Err(Error::artifact("logistic regression parameters must be finite"));
        }

        Ok(Self {
            classes,
            coef,
            intercept,
        })
    }

    pub fn decision_function(&self, features: &SparseVector) -> Result<f64> {
        Ok(features.dot(&self.coef)? + self.intercept)
    }

    fn classify(&self, features: &SparseVector) -> Result<Classification> {
        let decision = self.decision_function(features)?;
        let positive = sigmoid(decision);
        let label = if decision > 0.0 {
            self.classes[1]
        } else {
            self.classes[0]
        };

        Ok(Classification {
            label,
            probabilities: vec![1.0 - positive, positive],
        })
    }
}

/// Multinomial naive Bayes
#[derive(Debug, Clone)]
pub struct MultinomialNb {
    classes: Vec<i64>,
    class_log_prior: Vec<f64>,
    feature_log_prob: Vec<Vec<f64>>,
}

impl MultinomialNb {
    pub fn new(
        classes: Vec<i64>,
        class_log_prior: Vec<f64>,
        feature_log_prob: Vec<Vec<f64>>,
        dimension: usize,
    ) -> Result<Self> {
        if classes.len() < 2 {
            return Err(Error::artifact("naive Bayes needs at least 2 classes"));
        }
        if class_log_prior.len() != classes.len() || feature_log_prob.len() != classes.len() {
            return Err(Error::artifact(format!(
                "naive Bayes has {} classes, {} priors and {} feature rows",
                classes.len(),
                class_log_prior.len(),
                feature_log_prob.len()
            )));
        }
        for (row, probs) in feature_log_prob.iter().enumerate() {
            if probs.len() != dimension {
                return Err(Error::artifact(format!(
                    "feature_log_prob row {} has {} columns but the vectorizer produces {} features",
                    row,
                    probs.len(),
                    dimension
                )));
            }
            if probs.iter().any(|p| !p.is_finite()) {
                return Err(Error::artifact(format!(
                    "feature_log_prob row {} contains non-finite values",
                    row
                )));
            }
        }
        if class_log_prior.iter().any(|p| !p.is_finite()) {
            return Err(Error::artifact("class_log_prior must be finite"));
        }

        Ok(Self {
            classes,
            class_log_prior,
            feature_log_prob,
        })
    }

    fn joint_log_likelihood(&self, features: &SparseVector) -> Result<Vec<f64>> {
        self.feature_log_prob
            .iter()
            .zip(&self.class_log_prior)
            .map(|(row, prior)| Ok(features.dot(row)? + prior))
            .collect()
    }

    fn classify(&self, features: &SparseVector) -> Result<Classification> {
        let jll = self.joint_log_likelihood(features)?;

        // first maximum wins on ties
        let mut best = 0;
        for (i, value) in jll.iter().enumerate() {
            if *value > jll[best] {
                best = i;
            }
        }

        let max = jll[best];
        let log_norm = max + jll.iter().map(|v| (v - max).exp()).sum::<f64>().ln();
        let probabilities = jll.iter().map(|v| (v - log_norm).exp()).collect();

        Ok(Classification {
            label: self.classes[best],
            probabilities,
        })
    }
}

fn sigmoid(x: f64) -> f64 {
    if x >= 0.0 {
        1.0 / (1.0 + (-x).exp())
    } else {
        let e = x.exp();
        e / (1.0 + e)
    }
}
