//! Data Transfer Objects

use serde::{Deserialize, Serialize};

use crate::application::CharacterSummary;
use crate::domain::character::Prosody;

/// 处理耗时响应头（毫秒）
pub const PROCESSING_TIME_HEADER: &str = "x-processing-time";

/// 用法说明
pub const USAGE: &str = r#"POST /api/prompt/{character_id} with { "text": "your text" }"#;

// ============================================================================
// Prompt DTOs
// ============================================================================

/// 合成请求体
///
/// text 缺失与空字符串同样按 MissingText 处理，所以这里是 Option
#[derive(Debug, Default, Deserialize)]
pub struct PromptRequest {
    #[serde(default)]
    pub text: Option<String>,
}

// ============================================================================
// Character DTOs
// ============================================================================

#[derive(Debug, Serialize)]
pub struct CharacterResponse {
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub number: Option<u32>,
    pub name: String,
    pub description: String,
    pub prompt: String,
    pub speaker_id: u32,
    pub prosody: Prosody,
    pub image_url: Option<String>,
}

impl From<CharacterSummary> for CharacterResponse {
    fn from(summary: CharacterSummary) -> Self {
        Self {
            id: summary.id,
            number: summary.number,
            name: summary.name,
            description: summary.description,
            prompt: summary.prompt,
            speaker_id: summary.speaker_id,
            prosody: summary.prosody,
            image_url: summary.image_url,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct CharacterListResponse {
    pub characters: Vec<CharacterResponse>,
    pub usage: &'static str,
}
