// TF-IDF 向量化器
// Applies a fitted vocabulary and idf weights to normalized text

use std::collections::{BTreeMap, HashMap, HashSet};

use log::debug;
use regex::Regex;

use super::artifact::{Norm, VectorizerArtifact};
use crate::error::{Error, Result};

/// Sparse feature row: `(column, value)` pairs sorted by column
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SparseVector {
    pub dimension: usize,
    pub entries: Vec<(usize, f64)>,
}

impl SparseVector {
    /// Dot product against a dense weight row
    pub fn dot(&self, weights: &[f64]) -> Result<f64> {
        let mut sum = 0.0;
        for &(index, value) in &self.entries {
            let weight = weights.get(index).ok_or_else(|| {
                Error::inference(format!(
                    "feature index {} out of range for {} weights",
                    index,
                    weights.len()
                ))
            })?;
            sum += value * weight;
        }
        Ok(sum)
    }

    pub fn nnz(&self) -> usize {
        self.entries.len()
    }
}

/// Fitted TF-IDF vectorizer
#[derive(Debug, Clone)]
pub struct TfidfVectorizer {
    vocabulary: HashMap<String, usize>,
    idf: Vec<f64>,
    token_pattern: Regex,
    ngram_range: (usize, usize),
    lowercase: bool,
    binary: bool,
    sublinear_tf: bool,
    use_idf: bool,
    norm: Norm,
}

impl TfidfVectorizer {
    /// Validate an artifact and compile it into a vectorizer
    pub fn from_artifact(artifact: VectorizerArtifact) -> Result<Self> {
        let dimension = artifact.idf.len();
        if artifact.vocabulary.len() != dimension {
            return Err(Error::artifact(format!(
                "vocabulary has {} terms but idf has {} entries",
                artifact.vocabulary.len(),
                dimension
            )));
        }

        let mut seen = HashSet::with_capacity(dimension);
        for (term, &index) in &artifact.vocabulary {
            if index >= dimension {
                return Err(Error::artifact(format!(
                    "term '{}' maps to column {} outside {} columns",
                    term, index, dimension
                )));
            }
            if !seen.insert(index) {
                return Err(Error::artifact(format!("column {} assigned twice", index)));
            }
        }

        if let Some(position) = artifact.idf.iter().position(|v| !v.is_finite()) {
            return Err(Error::artifact(format!("idf[{}] is not finite", position)));
        }

        let (min_n, max_n) = artifact.ngram_range;
        if min_n == 0 || min_n > max_n {
            return Err(Error::artifact(format!(
                "invalid ngram_range ({}, {})",
                min_n, max_n
            )));
        }

        let token_pattern = Regex::new(&artifact.token_pattern)?;

        Ok(Self {
            vocabulary: artifact.vocabulary,
            idf: artifact.idf,
            token_pattern,
            ngram_range: artifact.ngram_range,
            lowercase: artifact.lowercase,
            binary: artifact.binary,
            sublinear_tf: artifact.sublinear_tf,
            use_idf: artifact.use_idf,
            norm: artifact.norm,
        })
    }

    /// Number of feature columns
    pub fn dimension(&self) -> usize {
        self.idf.len()
    }

    /// 转换为特征向量
    pub fn transform(&self, document: &str) -> Result<SparseVector> {
        let mut term_freq: BTreeMap<usize, f64> = BTreeMap::new();
        for term in self.analyze(document) {
            if let Some(&index) = self.vocabulary.get(&term) {
                *term_freq.entry(index).or_insert(0.0) += 1.0;
            }
        }

        let mut entries = Vec::with_capacity(term_freq.len());
        for (index, freq) in term_freq {
            let tf = if self.binary {
                1.0
            } else if self.sublinear_tf {
                1.0 + freq.ln()
            } else {
                freq
            };

            let idf = if self.use_idf {
                *self.idf.get(index).ok_or_else(|| {
                    Error::inference(format!("no idf weight for column {}", index))
                })?
            } else {
                1.0
            };

            entries.push((index, tf * idf));
        }

        normalize(&mut entries, self.norm);
        debug!("Vectorized document into {} non-zero features", entries.len());

        Ok(SparseVector {
            dimension: self.dimension(),
            entries,
        })
    }

    /// Tokenize and expand into word n-grams
    fn analyze(&self, document: &str) -> Vec<String> {
        let document = if self.lowercase {
            document.to_lowercase()
        } else {
            document.to_string()
        };

        let tokens: Vec<&str> = self
            .token_pattern
            .find_iter(&document)
            .map(|m| m.as_str())
            .collect();

        let (min_n, max_n) = self.ngram_range;
        let mut terms = Vec::new();
        for n in min_n..=max_n.min(tokens.len()) {
            for window in tokens.windows(n) {
                terms.push(window.join(" "));
            }
        }
        terms
    }
}

fn normalize(entries: &mut [(usize, f64)], norm: Norm) {
    let total = match norm {
        Norm::L1 => entries.iter().map(|(_, v)| v.abs()).sum::<f64>(),
        Norm::L2 => entries.iter().map(|(_, v)| v * v).sum::<f64>().sqrt(),
        Norm::None => return,
    };

    if total > 0.0 {
        for (_, value) in entries.iter_mut() {
            *value /= total;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::artifact::DEFAULT_TOKEN_PATTERN;

    fn artifact() -> VectorizerArtifact {
        VectorizerArtifact {
            vocabulary: [("love", 0), ("hate", 1), ("movi", 2), ("love movi", 3)]
                .into_iter()
                .map(|(t, i)| (t.to_string(), i))
                .collect(),
            idf: vec![1.0, 2.0, 1.5, 3.0],
            ngram_range: (1, 1),
            token_pattern: DEFAULT_TOKEN_PATTERN.to_string(),
            lowercase: true,
            binary: false,
            sublinear_tf: false,
            use_idf: true,
            norm: Norm::L2,
        }
    }

    fn assert_close(a: f64, b: f64) {
        assert!((a - b).abs() < 1e-9, "{} != {}", a, b);
    }

    #[test]
    fn test_l2_normalized_row() {
        let vectorizer = TfidfVectorizer::from_artifact(artifact()).unwrap();
        let row = vectorizer.transform("love love hate").unwrap();

        // raw weights: love = 2 * 1.0, hate = 1 * 2.0
        let norm = (2.0f64 * 2.0 + 2.0 * 2.0).sqrt();
        assert_eq!(row.dimension, 4);
        assert_eq!(row.nnz(), 2);
        assert_eq!(row.entries[0].0, 0);
        assert_close(row.entries[0].1, 2.0 / norm);
        assert_eq!(row.entries[1].0, 1);
        assert_close(row.entries[1].1, 2.0 / norm);
    }

    #[test]
    fn test_unknown_terms_ignored() {
        let vectorizer = TfidfVectorizer::from_artifact(artifact()).unwrap();
        let row = vectorizer.transform("zebra quokka").unwrap();
        assert_eq!(row.nnz(), 0);
        assert_eq!(row.dimension, 4);
    }

    #[test]
    fn test_single_character_tokens_dropped() {
        let mut artifact = artifact();
        artifact.vocabulary.remove("love movi");
        artifact.vocabulary.insert("x".to_string(), 3);
        let vectorizer = TfidfVectorizer::from_artifact(artifact).unwrap();
        let row = vectorizer.transform("x x x").unwrap();
        assert_eq!(row.nnz(), 0);
    }

    #[test]
    fn test_bigrams() {
        let mut artifact = artifact();
        artifact.ngram_range = (1, 2);
        artifact.norm = Norm::None;
        let vectorizer = TfidfVectorizer::from_artifact(artifact).unwrap();

        let row = vectorizer.transform("love movi").unwrap();
        let columns: Vec<usize> = row.entries.iter().map(|(i, _)| *i).collect();
        assert_eq!(columns, vec![0, 2, 3]);
        assert_close(row.entries[2].1, 3.0);
    }

    #[test]
    fn test_sublinear_and_binary_tf() {
        let mut sublinear = artifact();
        sublinear.sublinear_tf = true;
        sublinear.norm = Norm::None;
        let row = TfidfVectorizer::from_artifact(sublinear)
            .unwrap()
            .transform("hate hate hate")
            .unwrap();
        assert_close(row.entries[0].1, (1.0 + 3.0f64.ln()) * 2.0);

        let mut binary = artifact();
        binary.binary = true;
        binary.norm = Norm::None;
        let row = TfidfVectorizer::from_artifact(binary)
            .unwrap()
            .transform("hate hate hate")
            .unwrap();
        assert_close(row.entries[0].1, 2.0);
    }

    #[test]
    fn test_l1_norm() {
        let mut artifact = artifact();
        artifact.norm = Norm::L1;
        let row = TfidfVectorizer::from_artifact(artifact)
            .unwrap()
            .transform("love hate")
            .unwrap();
        let total: f64 = row.entries.iter().map(|(_, v)| v).sum();
        assert_close(total, 1.0);
    }

    #[test]
    fn test_rejects_mismatched_idf() {
        let mut artifact = artifact();
        artifact.idf.pop();
        assert!(matches!(
            TfidfVectorizer::from_artifact(artifact),
            Err(Error::Artifact(_))
        ));
    }

    #[test]
    fn test_rejects_out_of_range_column() {
        let mut artifact = artifact();
        artifact.vocabulary.insert("love movi".to_string(), 9);
        assert!(TfidfVectorizer::from_artifact(artifact).is_err());
    }

    #[test]
    fn test_rejects_bad_pattern_and_ngrams() {
        let mut bad_pattern = artifact();
        bad_pattern.token_pattern = "(".to_string();
        assert!(TfidfVectorizer::from_artifact(bad_pattern).is_err());

        let mut bad_range = artifact();
        bad_range.ngram_range = (2, 1);
        assert!(TfidfVectorizer::from_artifact(bad_range).is_err());
    }

    #[test]
    fn test_dot_out_of_range() {
        let row = SparseVector {
            dimension: 3,
            entries: vec![(2, 1.0)],
        };
        assert!(matches!(row.dot(&[1.0, 2.0]), Err(Error::Inference(_))));
        assert_close(row.dot(&[0.0, 0.0, 4.0]).unwrap(), 4.0);
    }
}
