//! HTTP Engine Client - 调用本地 VOICEVOX 引擎
//!
//! 实现 SynthesisEnginePort trait
//!
//! 引擎 API:
//! POST {base}/audio_query?text=...&speaker=<id>  → audio_query (JSON)
//! POST {base}/synthesis?speaker=<id>             body: audio_query → audio/wav binary
//! GET  {base}/version                            → "x.y.z"

use async_trait::async_trait;
use reqwest::{header, Client, Response, StatusCode};
use std::time::Duration;

use crate::application::ports::{SynthesisEnginePort, SynthesisError, UtteranceQuery};
use crate::domain::character::SpeakerId;

/// HTTP 引擎客户端配置
#[derive(Debug, Clone)]
pub struct HttpEngineClientConfig {
    /// 引擎基础 URL
    pub base_url: String,
    /// 请求超时时间（秒），None 表示不设客户端超时
    pub timeout_secs: Option<u64>,
}

impl Default for HttpEngineClientConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:50021".to_string(),
            timeout_secs: None,
        }
    }
}

impl HttpEngineClientConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Default::default()
        }
    }

    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = Some(secs);
        self
    }
}

/// HTTP 引擎客户端
///
/// 不重试，不限制响应大小；一次失败即返回。
pub struct HttpEngineClient {
    client: Client,
    config: HttpEngineClientConfig,
}

impl HttpEngineClient {
    /// 创建新的引擎客户端
    pub fn new(config: HttpEngineClientConfig) -> Result<Self, SynthesisError> {
        let mut builder = Client::builder();
        if let Some(secs) = config.timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        let client = builder
            .build()
            .map_err(|e| SynthesisError::SynthesisFailure(e.to_string()))?;

        Ok(Self { client, config })
    }

    pub fn base_url(&self) -> &str {
        &self.config.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.config.base_url.trim_end_matches('/'), path)
    }
}

/// 传输层错误分类：连接失败视为引擎未启动
fn classify_transport(err: reqwest::Error) -> SynthesisError {
    if err.is_connect() {
        SynthesisError::EngineUnavailable(err.to_string())
    } else {
        SynthesisError::SynthesisFailure(err.to_string())
    }
}

/// HTTP 状态分类：422 为引擎的语义校验失败
async fn check_status(response: Response) -> Result<Response, SynthesisError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let error_text = response.text().await.unwrap_or_default();
    if status == StatusCode::UNPROCESSABLE_ENTITY {
        Err(SynthesisError::InvalidInput(error_text))
    } else {
        Err(SynthesisError::SynthesisFailure(format!(
            "HTTP {}: {}",
            status, error_text
        )))
    }
}

#[async_trait]
impl SynthesisEnginePort for HttpEngineClient {
    async fn fetch_query(
        &self,
        text: &str,
        speaker_id: SpeakerId,
    ) -> Result<UtteranceQuery, SynthesisError> {
        let url = self.url("audio_query");
        tracing::debug!(
            url = %url,
            speaker_id = %speaker_id,
            text_chars = text.chars().count(),
            "Sending audio_query request"
        );

        let response = self
            .client
            .post(&url)
            .query(&[("text", text.to_string()), ("speaker", speaker_id.to_string())])
            .header(header::ACCEPT, "application/json")
            .send()
            .await
            .map_err(classify_transport)?;

        let query = check_status(response)
            .await?
            .json::<UtteranceQuery>()
            .await
            .map_err(|e| SynthesisError::SynthesisFailure(format!("Invalid audio_query: {}", e)))?;

        tracing::info!(
            speaker_id = %speaker_id,
            fields = query.fields().len(),
            "audio_query generated"
        );

        Ok(query)
    }

    async fn render(
        &self,
        query: &UtteranceQuery,
        speaker_id: SpeakerId,
    ) -> Result<Vec<u8>, SynthesisError> {
        let url = self.url("synthesis");
        tracing::debug!(url = %url, speaker_id = %speaker_id, "Sending synthesis request");

        let response = self
            .client
            .post(&url)
            .query(&[("speaker", speaker_id.to_string())])
            .header(header::ACCEPT, "audio/wav")
            .json(query)
            .send()
            .await
            .map_err(classify_transport)?;

        let audio_data = check_status(response)
            .await?
            .bytes()
            .await
            .map_err(|e| SynthesisError::SynthesisFailure(format!("Failed to read audio: {}", e)))?
            .to_vec();

        tracing::info!(
            speaker_id = %speaker_id,
            audio_size = audio_data.len(),
            "Synthesis completed"
        );

        Ok(audio_data)
    }

    async fn version(&self) -> Result<String, SynthesisError> {
        let response = self
            .client
            .get(self.url("version"))
            .send()
            .await
            .map_err(classify_transport)?;

        let body = check_status(response)
            .await?
            .text()
            .await
            .map_err(|e| SynthesisError::SynthesisFailure(e.to_string()))?;

        // 引擎返回 JSON 字符串，如 "0.14.5"
        Ok(serde_json::from_str::<String>(&body).unwrap_or(body))
    }
}
