//! Stopword set resolution
//!
//! The set is resolved once at startup: an external word list is preferred,
//! and the bundled English list is used whenever that list cannot be read.

use std::collections::HashSet;
use std::fmt;
use std::path::{Path, PathBuf};

use log::{info, warn};
use stop_words::{get, LANGUAGE};

use crate::error::{Error, Result};

/// Environment variable pointing at an NLTK data directory
pub const NLTK_DATA_ENV: &str = "NLTK_DATA";

/// Location of the English list inside an NLTK data directory
const NLTK_ENGLISH_RELATIVE: &str = "corpora/stopwords/english";

/// Where a stopword set came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StopwordSource {
    /// Read from an external word list
    File(PathBuf),
    /// Compiled-in fallback list
    Bundled,
}

impl fmt::Display for StopwordSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StopwordSource::File(path) => write!(f, "file {}", path.display()),
            StopwordSource::Bundled => write!(f, "bundled list"),
        }
    }
}

/// Immutable set of lowercase stopwords
#[derive(Debug, Clone)]
pub struct StopwordSet {
    words: HashSet<String>,
    source: StopwordSource,
}

impl StopwordSet {
    /// The NLTK English list compiled in by the `stop_words` crate
    pub fn bundled() -> Self {
        Self {
            words: get(LANGUAGE::English)
                .into_iter()
                .map(|w| w.to_string().to_lowercase())
                .collect(),
            source: StopwordSource::Bundled,
        }
    }

    /// Read a word list: one word per line, `#` starts a comment line
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)?;
        let words: HashSet<String> = content
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty() && !line.starts_with('#'))
            .map(str::to_lowercase)
            .collect();

        if words.is_empty() {
            return Err(Error::config(format!(
                "stopword list {} contains no words",
                path.display()
            )));
        }

        Ok(Self {
            words,
            source: StopwordSource::File(path.to_path_buf()),
        })
    }

    /// Resolve the stopword set, falling back to the bundled list.
    ///
    /// The configured path wins over `$NLTK_DATA`. Failures are logged and
    /// never fatal.
    pub fn resolve(configured: Option<&Path>) -> Self {
        let candidate = configured.map(Path::to_path_buf).or_else(nltk_data_english);

        match candidate {
            Some(path) => match Self::from_file(&path) {
                Ok(set) => {
                    info!("Loaded {} stopwords from {}", set.len(), path.display());
                    set
                }
                Err(e) => {
                    warn!(
                        "Failed to load stopwords from {} ({}), using bundled list",
                        path.display(),
                        e
                    );
                    Self::bundled()
                }
            },
            None => {
                info!("No external stopword list configured, using bundled list");
                Self::bundled()
            }
        }
    }

    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn source(&self) -> &StopwordSource {
        &self.source
    }

    pub fn words(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(String::as_str)
    }
}

fn nltk_data_english() -> Option<PathBuf> {
    let root = std::env::var_os(NLTK_DATA_ENV)?;
    Some(PathBuf::from(root).join(NLTK_ENGLISH_RELATIVE))
}
