use super::stemmer::{StemmerKind, WordStemmer};
use super::stopwords::StopwordSet;

/// Lexical normalizer
///
/// Maps raw text to a space-joined sequence of lowercase, stemmed tokens with
/// stopwords removed. Holds no mutable state and is shared across workers.
pub struct Normalizer {
    /// 停用词集合
    stopwords: StopwordSet,
    /// 词干提取器
    stemmer: WordStemmer,
}

impl Normalizer {
    /// Normalizer with the default (Porter) stemmer
    pub fn new(stopwords: StopwordSet) -> Self {
        Self::with_stemmer(stopwords, StemmerKind::default())
    }

    pub fn with_stemmer(stopwords: StopwordSet, kind: StemmerKind) -> Self {
        Self {
            stopwords,
            stemmer: WordStemmer::new(kind),
        }
    }

    /// Normalize raw text. Never fails; the result may be empty.
    pub fn normalize(&self, raw: &str) -> String {
        let letters_only: String = raw
            .chars()
            .map(|c| {
                if c.is_ascii_alphabetic() {
                    c.to_ascii_lowercase()
                } else {
                    ' '
                }
            })
            .collect();

        letters_only
            .split_whitespace()
            .filter(|token| !self.stopwords.contains(token))
            .map(|token| self.stemmer.stem(token))
            .collect::<Vec<_>>()
            .join(" ")
    }

    pub fn stopwords(&self) -> &StopwordSet {
        &self.stopwords
    }

    pub fn stemmer_kind(&self) -> StemmerKind {
        self.stemmer.kind()
    }
}

impl std::fmt::Debug for Normalizer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Normalizer")
            .field("stopwords", &self.stopwords.len())
            .field("source", self.stopwords.source())
            .field("stemmer", &self.stemmer)
            .finish()
    }
}

impl Clone for Normalizer {
    fn clone(&self) -> Self {
        // Stemmer 不能直接克隆
        Self::with_stemmer(self.stopwords.clone(), self.stemmer.kind())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn normalizer() -> Normalizer {
        Normalizer::new(StopwordSet::bundled())
    }

    #[test]
    fn test_removes_stopwords_and_punctuation() {
        assert_eq!(normalizer().normalize("I love this!"), "love");
    }

    #[test]
    fn test_stems_tokens() {
        let n = normalizer();
        assert_eq!(n.normalize("loving"), "love");
        assert_eq!(n.normalize("running dogs"), "run dog");
        assert_eq!(n.normalize("The cats"), "cat");
    }

    #[test]
    fn test_stems_match_nltk_porter() {
        let n = normalizer();
        assert_eq!(n.stemmer_kind(), StemmerKind::Porter);
        assert_eq!(n.normalize("generously"), "gener");
        assert_eq!(n.normalize("the skies"), "sky");
        assert_eq!(n.normalize("dying"), "die");
        assert_eq!(n.normalize("this terrible movie"), "terribl movi");
    }

    #[test]
    fn test_snowball_stemmer_selectable() {
        let n = Normalizer::with_stemmer(StopwordSet::bundled(), StemmerKind::Snowball);
        assert_eq!(n.normalize("generously"), "generous");
        assert_eq!(n.normalize("loving"), "love");
        assert_eq!(n.clone().stemmer_kind(), StemmerKind::Snowball);
    }

    #[test]
    fn test_non_letters_become_separators() {
        let n = normalizer();
        assert_eq!(n.normalize("dog2cat"), "dog cat");
        assert_eq!(n.normalize("dog_cat"), "dog cat");
        assert_eq!(n.normalize("héllo"), "h llo");
    }

    #[test]
    fn test_contraction_fragments_removed() {
        // "don't" splits into "don" and "t", both stopwords
        assert_eq!(normalizer().normalize("I don't care"), "care");
    }

    #[test]
    fn test_no_letters_yields_empty() {
        let n = normalizer();
        for input in ["", "   ", "1234 !!! ???", "\t\n42", "😀 🎉", "你好"] {
            assert_eq!(n.normalize(input), "", "input {:?}", input);
        }
    }

    #[test]
    fn test_only_stopwords_yields_empty() {
        assert_eq!(normalizer().normalize("this is the dog that was it"), "dog");
        assert_eq!(normalizer().normalize("It is what it is"), "");
    }

    #[test]
    fn test_case_insensitive() {
        let n = normalizer();
        for input in [
            "I love this!",
            "Running Dogs and CATS",
            "The weather is nice today.",
            "mIxEd CaSe tExT 123",
        ] {
            assert_eq!(n.normalize(input), n.normalize(&input.to_uppercase()));
        }
    }

    #[test]
    fn test_idempotent_on_common_text() {
        let n = normalizer();
        for input in [
            "I love this!",
            "This is terrible and doesn't work at all.",
            "The weather is nice today.",
            "running dogs, jumping cats",
            "",
        ] {
            let once = n.normalize(input);
            assert_eq!(n.normalize(&once), once, "input {:?}", input);
        }
    }

    #[test]
    fn test_not_idempotent_when_stems_restem() {
        let n = normalizer();
        let once = n.normalize("We agreed");
        assert_eq!(once, "agre");
        assert_eq!(n.normalize(&once), "agr");

        let snowball = Normalizer::with_stemmer(StopwordSet::bundled(), StemmerKind::Snowball);
        let once = snowball.normalize("early birds");
        assert_eq!(once, "earli bird");
        assert_eq!(snowball.normalize(&once), "ear bird");
    }

    #[test]
    fn test_single_spaces_between_tokens() {
        let out = normalizer().normalize("  love ,,, \t  cake  ");
        assert_eq!(out, "love cake");
    }

    #[test]
    fn test_file_and_bundled_lists_agree() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("english");
        let bundled_set = StopwordSet::bundled();
        let bundled_words: Vec<&str> = bundled_set.words().collect();
        std::fs::write(&path, bundled_words.join("\n")).unwrap();

        let from_file = Normalizer::new(StopwordSet::from_file(&path).unwrap());
        let bundled = normalizer();
        for input in [
            "I absolutely love this new feature!",
            "This is terrible and doesn't work at all.",
            "I'm so excited about the weekend!",
            "they won't have been there",
        ] {
            assert_eq!(from_file.normalize(input), bundled.normalize(input));
        }
    }
}
