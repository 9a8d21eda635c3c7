//! HTTP Routes
//!
//! API Endpoints:
//! - /                              GET   存活检查 + 用法
//! - /api/prompt/{character_id}     POST  指定角色语音合成，返回 WAV
//! - /api/characters                GET   角色一览

use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;

use super::handlers;
use super::state::AppState;

/// 创建所有路由
pub fn create_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/", get(handlers::root))
        .nest("/api", api_routes())
}

/// API 路由
fn api_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/prompt/:character_id", post(handlers::synthesize_prompt))
        .route("/characters", get(handlers::list_characters))
}
