//! API request handlers

use std::sync::Arc;

use actix_web::{error::JsonPayloadError, web, HttpRequest, HttpResponse};
use log::{error, info, warn};

use crate::api::response::{
    ApiError, HealthResponse, PredictRequest, EMPTY_TEXT_MESSAGE, NO_MEANINGFUL_WORDS_MESSAGE,
};
use crate::api::server::ApiServerState;

const INDEX_HTML: &str = include_str!("../../static/index.html");
const INDEX_JS: &str = include_str!("../../static/index.js");

/// 配置所有API路由
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::JsonConfig::default().error_handler(json_error_handler))
        .route("/", web::get().to(index))
        .route("/static/index.js", web::get().to(index_js))
        .route("/health", web::get().to(health_check))
        .route("/predict", web::post().to(predict));
}

/// 首页
async fn index() -> HttpResponse {
    HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body(INDEX_HTML)
}

async fn index_js() -> HttpResponse {
    HttpResponse::Ok()
        .content_type("application/javascript; charset=utf-8")
        .body(INDEX_JS)
}

/// 健康检查处理器
async fn health_check(state: web::Data<Arc<ApiServerState>>) -> HttpResponse {
    let mut health = HealthResponse::healthy();
    health.model_loaded = state.is_model_loaded();
    HttpResponse::Ok().json(health)
}

/// 情感预测处理器
async fn predict(
    state: web::Data<Arc<ApiServerState>>,
    body: web::Json<PredictRequest>,
) -> Result<HttpResponse, ApiError> {
    let text = body.into_inner().text.unwrap_or_default();
    if text.trim().is_empty() {
        warn!("Rejected prediction request without text");
        return Err(ApiError::BadRequest(EMPTY_TEXT_MESSAGE.to_string()));
    }

    let processed = state.normalize(&text);
    if processed.trim().is_empty() {
        warn!("Rejected prediction request: no words left after normalization");
        return Err(ApiError::BadRequest(NO_MEANINGFUL_WORDS_MESSAGE.to_string()));
    }

    match state.predict(&processed) {
        Ok(result) => {
            info!(
                "Predicted {} with {}% confidence for {:?}",
                result.sentiment, result.confidence, result.processed_text
            );
            Ok(HttpResponse::Ok().json(result))
        }
        Err(err) => {
            error!("Prediction failed: {}", err);
            Err(ApiError::from(err))
        }
    }
}

fn json_error_handler(err: JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    warn!("Rejected malformed request body: {}", err);
    ApiError::BadRequest(format!("Invalid request body: {}", err)).into()
}
