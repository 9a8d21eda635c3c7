//! Prompt Handler - 角色语音合成

use axum::{
    extract::{FromRequest, Path, Request, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Form, Json,
};
use std::sync::Arc;

use crate::application::{Stopwatch, SynthesizePrompt};
use crate::infrastructure::http::dto::{PromptRequest, PROCESSING_TIME_HEADER};
use crate::infrastructure::http::error::ApiError;
use crate::infrastructure::http::state::AppState;

/// 合成指定角色的语音
///
/// 请求体支持 JSON 和 `application/x-www-form-urlencoded`；
/// 缺失或无法解析时按 text 缺失处理
pub async fn synthesize_prompt(
    State(state): State<Arc<AppState>>,
    Path(character_id): Path<String>,
    request: Request,
) -> Result<Response, ApiError> {
    // 计时在读取请求体之前开始
    let stopwatch = Stopwatch::start();
    let body = read_prompt_request(request).await;

    let command = SynthesizePrompt {
        character_id,
        text: body.text,
        stopwatch,
    };

    let result = state.synthesize_prompt_handler.handle(command).await?;

    let headers = [
        (header::CONTENT_TYPE.as_str(), "audio/wav".to_string()),
        (header::CONTENT_LENGTH.as_str(), result.audio_data.len().to_string()),
        (
            header::CONTENT_DISPOSITION.as_str(),
            format!("attachment; filename=\"{}\"", result.filename),
        ),
        (PROCESSING_TIME_HEADER, result.elapsed_ms.to_string()),
    ];

    Ok((StatusCode::OK, headers, result.audio_data).into_response())
}

/// 按 Content-Type 选择 Form 或 Json 解析请求体
async fn read_prompt_request(request: Request) -> PromptRequest {
    let is_form = request
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .map(|v| v.starts_with("application/x-www-form-urlencoded"))
        .unwrap_or(false);

    let parsed = if is_form {
        Form::<PromptRequest>::from_request(request, &())
            .await
            .map(|Form(body)| body)
            .map_err(|e| e.body_text())
    } else {
        Json::<PromptRequest>::from_request(request, &())
            .await
            .map(|Json(body)| body)
            .map_err(|e| e.body_text())
    };

    parsed.unwrap_or_else(|reason| {
        tracing::debug!(reason = %reason, "Prompt body not parsed, treating text as missing");
        PromptRequest::default()
    })
}
