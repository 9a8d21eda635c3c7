//! Character Handlers

use axum::{extract::State, Json};
use std::sync::Arc;

use crate::application::ListCharacters;
use crate::infrastructure::http::dto::{CharacterListResponse, CharacterResponse, USAGE};
use crate::infrastructure::http::state::AppState;

/// 获取角色列表
pub async fn list_characters(State(state): State<Arc<AppState>>) -> Json<CharacterListResponse> {
    let characters = state
        .list_characters_handler
        .handle(ListCharacters)
        .into_iter()
        .map(CharacterResponse::from)
        .collect();

    Json(CharacterListResponse {
        characters,
        usage: USAGE,
    })
}
