use std::fmt;

use rust_stemmers::{Algorithm, Stemmer};
use serde::{Deserialize, Serialize};

use super::porter::PorterStemmer;

/// Stemming algorithm applied to each surviving token
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StemmerKind {
    /// Porter (1980) with NLTK's extensions, the stems NLTK-fitted
    /// vocabularies contain
    #[default]
    Porter,
    /// Snowball English (Porter2) from `rust-stemmers`
    Snowball,
}

impl fmt::Display for StemmerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StemmerKind::Porter => write!(f, "porter"),
            StemmerKind::Snowball => write!(f, "snowball"),
        }
    }
}

/// A constructed stemmer
pub enum WordStemmer {
    Porter(PorterStemmer),
    Snowball(Stemmer),
}

impl WordStemmer {
    pub fn new(kind: StemmerKind) -> Self {
        match kind {
            StemmerKind::Porter => WordStemmer::Porter(PorterStemmer::new()),
            StemmerKind::Snowball => WordStemmer::Snowball(Stemmer::create(Algorithm::English)),
        }
    }

    pub fn kind(&self) -> StemmerKind {
        match self {
            WordStemmer::Porter(_) => StemmerKind::Porter,
            WordStemmer::Snowball(_) => StemmerKind::Snowball,
        }
    }

    pub fn stem(&self, token: &str) -> String {
        match self {
            WordStemmer::Porter(stemmer) => stemmer.stem(token),
            WordStemmer::Snowball(stemmer) => stemmer.stem(token).into_owned(),
        }
    }
}

impl fmt::Debug for WordStemmer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "WordStemmer({})", self.kind())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_porter() {
        assert_eq!(StemmerKind::default(), StemmerKind::Porter);
        assert_eq!(WordStemmer::new(StemmerKind::default()).kind(), StemmerKind::Porter);
    }

    #[test]
    fn test_kind_serde() {
        let kind: StemmerKind = serde_json::from_str("\"snowball\"").unwrap();
        assert_eq!(kind, StemmerKind::Snowball);
        assert_eq!(serde_json::to_string(&StemmerKind::Porter).unwrap(), "\"porter\"");
    }

    #[test]
    fn test_porter_and_snowball_diverge() {
        let porter = WordStemmer::new(StemmerKind::Porter);
        let snowball = WordStemmer::new(StemmerKind::Snowball);

        assert_eq!(porter.stem("generously"), "gener");
        assert_eq!(snowball.stem("generously"), "generous");

        // shared vocabulary
        for (word, stem) in [("loving", "love"), ("running", "run"), ("cats", "cat")] {
            assert_eq!(porter.stem(word), stem);
            assert_eq!(snowball.stem(word), stem);
        }
    }

    #[test]
    fn test_irregular_forms_follow_porter_table() {
        let porter = WordStemmer::new(StemmerKind::Porter);
        assert_eq!(porter.stem("dying"), "die");
        assert_eq!(porter.stem("skies"), "sky");
        assert_eq!(porter.stem("lying"), "lie");
    }

    #[test]
    fn test_restemming_is_not_a_fixed_point() {
        let porter = WordStemmer::new(StemmerKind::Porter);
        let once = porter.stem("agreed");
        assert_eq!(once, "agre");
        assert_eq!(porter.stem(&once), "agr");

        let snowball = WordStemmer::new(StemmerKind::Snowball);
        let once = snowball.stem("early");
        assert_eq!(once, "earli");
        assert_eq!(snowball.stem(&once), "ear");
    }
}
