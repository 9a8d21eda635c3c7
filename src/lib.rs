//! Alarm Voice - 角色语音闹钟 TTS 网关
//!
//! 架构设计: DDD + CQRS + Hexagonal Architecture
//!
//! 领域层 (domain/):
//! - Character Context: 人设 → 话者 ID + 韵律参数
//!
//! 应用层 (application/):
//! - Ports: SynthesisEngine（audio_query → synthesis 两阶段协议）
//! - Commands: 语音合成（编排 + 错误分类 + 计时）
//! - Queries: 角色一览
//!
//! 基础设施层 (infrastructure/):
//! - HTTP: RESTful API
//! - Adapters: VOICEVOX HTTP Client, Fake Client

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use config::{load_config, AppConfig};
