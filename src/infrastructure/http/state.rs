//! Application State
//!
//! Registry 和引擎在启动时显式构建后注入各 handler，请求处理期间只读

use chrono::{DateTime, Utc};
use std::sync::Arc;

use crate::application::{ListCharactersHandler, SynthesisEnginePort, SynthesizePromptHandler};
use crate::domain::character::CharacterRegistry;

/// 应用状态
pub struct AppState {
    pub started_at: DateTime<Utc>,

    // ========== Command Handlers ==========
    pub synthesize_prompt_handler: SynthesizePromptHandler,

    // ========== Query Handlers ==========
    pub list_characters_handler: ListCharactersHandler,
}

impl AppState {
    /// 创建应用状态
    ///
    /// `image_base_url` 为立绘 URL 前缀
    pub fn new(
        registry: Arc<CharacterRegistry>,
        engine: Arc<dyn SynthesisEnginePort>,
        image_base_url: impl Into<String>,
    ) -> Self {
        Self {
            started_at: Utc::now(),

            synthesize_prompt_handler: SynthesizePromptHandler::new(registry.clone(), engine),

            list_characters_handler: ListCharactersHandler::new(registry, image_base_url),
        }
    }
}
