//! API服务器状态管理
//! Shared read-only state handed to every request handler

use std::sync::Arc;

use crate::config::Config;
use crate::model::{PredictionResult, SentimentModel};
use crate::text::{Normalizer, StopwordSet};
use crate::Result;

/// API服务器状态
///
/// Built once before the server binds; handlers only ever read it.
#[derive(Debug)]
pub struct ApiServerState {
    /// 文本规范化器
    pub normalizer: Normalizer,
    /// 情感模型
    pub model: SentimentModel,
}

impl ApiServerState {
    pub fn new(normalizer: Normalizer, model: SentimentModel) -> Self {
        Self { normalizer, model }
    }

    /// Resolve stopwords and load both artifacts named by the config
    pub fn from_config(config: &Config) -> Result<Self> {
        let stopwords = StopwordSet::resolve(config.text.stopwords_path.as_deref());
        log::info!(
            "Using {} stopwords from {}",
            stopwords.len(),
            stopwords.source()
        );

        let model = SentimentModel::load(
            &config.model.vectorizer_path,
            &config.model.classifier_path,
        )?;

        log::info!("Stemming tokens with {}", config.text.stemmer);
        let normalizer = Normalizer::with_stemmer(stopwords, config.text.stemmer);

        Ok(Self::new(normalizer, model))
    }

    pub fn normalize(&self, raw: &str) -> String {
        self.normalizer.normalize(raw)
    }

    pub fn predict(&self, normalized: &str) -> Result<PredictionResult> {
        self.model.predict(normalized)
    }

    /// Always true once constructed
    pub fn is_model_loaded(&self) -> bool {
        true
    }
}

/// 初始化API服务器状态
pub fn init_api_server_state(config: &Config) -> Result<Arc<ApiServerState>> {
    ApiServerState::from_config(config).map(Arc::new)
}
