//! Fake Engine Client - 用于测试的引擎客户端
//!
//! 始终返回固定的 audio_query 和音频，并记录每一次调用

use async_trait::async_trait;
use std::sync::Mutex;

use crate::application::ports::{SynthesisEnginePort, SynthesisError, UtteranceQuery};
use crate::domain::character::SpeakerId;

/// 记录下来的引擎调用
#[derive(Debug, Clone, PartialEq)]
pub enum EngineCall {
    FetchQuery { text: String, speaker_id: SpeakerId },
    Render { query: UtteranceQuery, speaker_id: SpeakerId },
}

/// 注入的失败类型
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FakeFailure {
    Unavailable,
    InvalidInput,
    Failure,
}

impl FakeFailure {
    fn to_error(self) -> SynthesisError {
        match self {
            Self::Unavailable => SynthesisError::EngineUnavailable("connection refused".into()),
            Self::InvalidInput => SynthesisError::InvalidInput("unprocessable entity".into()),
            Self::Failure => SynthesisError::SynthesisFailure("engine error".into()),
        }
    }
}

/// Fake Engine Client
pub struct FakeEngineClient {
    query: UtteranceQuery,
    audio_data: Vec<u8>,
    query_failure: Option<FakeFailure>,
    render_failure: Option<FakeFailure>,
    calls: Mutex<Vec<EngineCall>>,
}

impl FakeEngineClient {
    pub fn new(query: UtteranceQuery, audio_data: Vec<u8>) -> Self {
        Self {
            query,
            audio_data,
            query_failure: None,
            render_failure: None,
            calls: Mutex::new(Vec::new()),
        }
    }

    /// audio_query 阶段失败
    pub fn with_query_failure(mut self, failure: FakeFailure) -> Self {
        self.query_failure = Some(failure);
        self
    }

    /// synthesis 阶段失败
    pub fn with_render_failure(mut self, failure: FakeFailure) -> Self {
        self.render_failure = Some(failure);
        self
    }

    /// 按顺序返回所有调用
    pub fn calls(&self) -> Vec<EngineCall> {
        self.calls.lock().map(|c| c.clone()).unwrap_or_default()
    }

    /// 提交给 synthesis 的所有 audio_query
    pub fn rendered_queries(&self) -> Vec<UtteranceQuery> {
        self.calls()
            .into_iter()
            .filter_map(|call| match call {
                EngineCall::Render { query, .. } => Some(query),
                _ => None,
            })
            .collect()
    }

    fn record(&self, call: EngineCall) {
        if let Ok(mut calls) = self.calls.lock() {
            calls.push(call);
        }
    }
}

#[async_trait]
impl SynthesisEnginePort for FakeEngineClient {
    async fn fetch_query(
        &self,
        text: &str,
        speaker_id: SpeakerId,
    ) -> Result<UtteranceQuery, SynthesisError> {
        self.record(EngineCall::FetchQuery {
            text: text.to_string(),
            speaker_id,
        });
        match self.query_failure {
            Some(failure) => Err(failure.to_error()),
            None => Ok(self.query.clone()),
        }
    }

    async fn render(
        &self,
        query: &UtteranceQuery,
        speaker_id: SpeakerId,
    ) -> Result<Vec<u8>, SynthesisError> {
        self.record(EngineCall::Render {
            query: query.clone(),
            speaker_id,
        });
        match self.render_failure {
            Some(failure) => Err(failure.to_error()),
            None => Ok(self.audio_data.clone()),
        }
    }

    async fn version(&self) -> Result<String, SynthesisError> {
        Ok("fake".to_string())
    }
}
