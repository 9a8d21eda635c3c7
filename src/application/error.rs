//! 应用层错误定义
//!
//! 合成请求的错误分类，以及附带耗时的失败结果

use thiserror::Error;

use crate::application::ports::SynthesisError;
use crate::domain::character::UnknownCharacter;

/// 合成请求错误
#[derive(Debug, Error)]
pub enum PromptError {
    /// 角色 key 无法解析
    #[error("Unknown character: {key}")]
    UnknownCharacter {
        key: String,
        /// 所有合法的人设 key
        available: Vec<String>,
    },

    /// text 缺失或 trim 后为空
    #[error("Missing text")]
    MissingText,

    /// 引擎调用失败
    #[error(transparent)]
    Synthesis(#[from] SynthesisError),
}

impl PromptError {
    /// 机器可读的错误类别
    pub fn kind(&self) -> &'static str {
        match self {
            Self::UnknownCharacter { .. } => "UnknownCharacter",
            Self::MissingText => "MissingText",
            Self::Synthesis(SynthesisError::EngineUnavailable(_)) => "EngineUnavailable",
            Self::Synthesis(SynthesisError::InvalidInput(_)) => "InvalidInput",
            Self::Synthesis(SynthesisError::SynthesisFailure(_)) => "SynthesisFailure",
        }
    }
}

impl From<UnknownCharacter> for PromptError {
    fn from(err: UnknownCharacter) -> Self {
        Self::UnknownCharacter {
            key: err.key.to_string(),
            available: err.available,
        }
    }
}

/// 失败结果：错误 + 从请求开始到失败的耗时
#[derive(Debug, Error)]
#[error("{error} (after {elapsed_ms}ms)")]
pub struct PromptFailure {
    pub error: PromptError,
    pub elapsed_ms: u64,
}
