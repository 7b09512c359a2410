//! Text normalization
//!
//! Turns raw tweet text into the token string the vectorizer was fitted on.

pub mod normalizer;
pub mod porter;
pub mod stemmer;
pub mod stopwords;

pub use normalizer::Normalizer;
pub use porter::PorterStemmer;
pub use stemmer::{StemmerKind, WordStemmer};
pub use stopwords::{StopwordSet, StopwordSource};
