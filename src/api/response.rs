//! API响应模块
//! Request and response payloads for the HTTP surface

use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::error::Error;

/// Message returned when the request carries no text
pub const EMPTY_TEXT_MESSAGE: &str = "Please enter some text";

/// Message returned when normalization leaves nothing to classify
pub const NO_MEANINGFUL_WORDS_MESSAGE: &str = "Text contains no meaningful words after processing";

/// Body of `POST /predict`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PredictRequest {
    /// Missing and `null` are both treated as empty text
    #[serde(default)]
    pub text: Option<String>,
}

/// 健康检查响应
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HealthResponse {
    /// 服务状态
    pub status: String,
    /// Artifacts are loaded before the server binds, so always true
    pub model_loaded: bool,
}

impl HealthResponse {
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            model_loaded: true,
        }
    }
}

/// 错误响应体
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// Per-request failure, rendered as `{"error": ...}`
#[derive(Debug, Error)]
pub enum ApiError {
    /// Client input rejected (400)
    #[error("{0}")]
    BadRequest(String),

    /// Vectorization or classification failed (500)
    #[error("Prediction error: {0}")]
    Prediction(String),
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::Prediction(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(ErrorResponse {
            error: self.to_string(),
        })
    }
}

impl From<Error> for ApiError {
    fn from(err: Error) -> Self {
        match err {
            Error::Validation(msg) => ApiError::BadRequest(msg),
            Error::Inference(msg) => ApiError::Prediction(msg),
            other => ApiError::Prediction(other.to_string()),
        }
    }
}
