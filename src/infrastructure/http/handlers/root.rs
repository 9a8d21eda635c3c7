//! Root Handler
//!
//! 存活检查 + 用法说明

use axum::{extract::State, Json};
use serde::Serialize;
use serde_json::{json, Value};
use std::sync::Arc;

use crate::infrastructure::http::state::AppState;

/// 根路径响应
#[derive(Serialize)]
pub struct RootResponse {
    pub message: &'static str,
    pub version: &'static str,
    pub started_at: String,
    pub endpoints: Vec<&'static str>,
    pub example: Value,
}

/// GET / - 存活检查
pub async fn root(State(state): State<Arc<AppState>>) -> Json<RootResponse> {
    Json(RootResponse {
        message: "AI Alarm Server is running!",
        version: env!("CARGO_PKG_VERSION"),
        started_at: state.started_at.to_rfc3339(),
        endpoints: vec![
            "POST /api/prompt/:character_id - 指定キャラクターで音声合成",
            "GET /api/characters - キャラクター一覧",
        ],
        example: json!({
            "url": "POST /api/prompt/gentle_mother",
            "body": { "text": "おはようございます！" }
        }),
    })
}
