//! 应用层 - 用例编排
//!
//! 包含：
//! - ports: 六边形架构端口定义（SynthesisEngine）
//! - commands: CQRS 命令及处理器（语音合成）
//! - queries: CQRS 查询及处理器（角色一览）
//! - error: 应用层错误定义
//! - timing: 请求耗时测量

pub mod commands;
pub mod error;
pub mod ports;
pub mod queries;
pub mod timing;

// Re-exports
pub use commands::{
    handlers::{SynthesizePromptHandler, SynthesizePromptResponse},
    SynthesizePrompt,
};

pub use error::{PromptError, PromptFailure};

pub use ports::{SynthesisEnginePort, SynthesisError, UtteranceQuery};

pub use queries::{
    handlers::{CharacterSummary, ListCharactersHandler},
    ListCharacters,
};

pub use timing::Stopwatch;
