//! HTTP Error Handling
//!
//! 所有失败都在这里转换为 HTTP 状态码 + JSON 错误体，不再向上传播

use axum::{
    http::{HeaderName, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use serde_json::{json, Value};

use super::dto::PROCESSING_TIME_HEADER;
use crate::application::{PromptError, PromptFailure, SynthesisError};

/// 统一错误响应格式
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub errno: i32,
    /// 机器可读的错误类别
    pub kind: &'static str,
    /// 面向用户的错误信息（日语）
    pub error: String,
    pub processing_time_ms: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub available_characters: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub example: Option<Value>,
}

/// 错误码定义
pub mod errno {
    pub const BAD_REQUEST: i32 = 400;
    pub const INTERNAL_ERROR: i32 = 500;
}

/// API 错误
#[derive(Debug)]
pub struct ApiError(PromptFailure);

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match &self.0.error {
            PromptError::UnknownCharacter { .. } | PromptError::MissingText => {
                StatusCode::BAD_REQUEST
            }
            PromptError::Synthesis(SynthesisError::InvalidInput(_)) => StatusCode::BAD_REQUEST,
            PromptError::Synthesis(SynthesisError::EngineUnavailable(_))
            | PromptError::Synthesis(SynthesisError::SynthesisFailure(_)) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    fn body(&self) -> ErrorResponse {
        let failure = &self.0;
        let errno = if self.status().is_server_error() {
            errno::INTERNAL_ERROR
        } else {
            errno::BAD_REQUEST
        };

        let mut body = ErrorResponse {
            errno,
            kind: failure.error.kind(),
            error: String::new(),
            processing_time_ms: failure.elapsed_ms,
            available_characters: None,
            example: None,
        };

        match &failure.error {
            PromptError::UnknownCharacter { key, available } => {
                body.error = format!(
                    "キャラクター「{}」は存在しません。available_characters から指定してください",
                    key
                );
                body.available_characters = Some(available.clone());
            }
            PromptError::MissingText => {
                body.error = "textパラメータが必要です".to_string();
                body.example = Some(json!({ "text": "合成したいテキストをここに入力" }));
            }
            PromptError::Synthesis(SynthesisError::EngineUnavailable(_)) => {
                body.error =
                    "VOICEVOXエンジンに接続できません。起動していることを確認してください。"
                        .to_string();
            }
            PromptError::Synthesis(SynthesisError::InvalidInput(_)) => {
                body.error =
                    "音声合成に失敗しました。テキストが無効な可能性があります。".to_string();
            }
            PromptError::Synthesis(SynthesisError::SynthesisFailure(_)) => {
                body.error = "音声生成に失敗しました".to_string();
            }
        }

        body
    }
}

impl From<PromptFailure> for ApiError {
    fn from(failure: PromptFailure) -> Self {
        Self(failure)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = self.body();

        // 失败已由 SynthesizePromptHandler 带耗时记录过，这里只留 debug
        tracing::debug!(
            status = %status.as_u16(),
            errno = body.errno,
            kind = body.kind,
            error = %self.0,
            "Error response built"
        );

        let mut response = (status, Json(body)).into_response();
        response.headers_mut().insert(
            HeaderName::from_static(PROCESSING_TIME_HEADER),
            HeaderValue::from(self.0.elapsed_ms),
        );
        response
    }
}
