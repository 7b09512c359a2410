//! HTTP API module
//!
//! Serves the prediction page, the health check and the prediction endpoint.

pub mod handlers;

// API响应类型
pub mod response;

// API服务器状态
pub mod server;

pub use handlers::configure_routes;
pub use response::{ApiError, ErrorResponse, HealthResponse, PredictRequest};
pub use server::{init_api_server_state, ApiServerState};
