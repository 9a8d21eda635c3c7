//! Character Query Handlers

use std::sync::Arc;

use crate::application::queries::ListCharacters;
use crate::domain::character::{CharacterRegistry, Prosody, VoiceProfile};

// ============================================================================
// Response DTOs
// ============================================================================

/// 角色一览条目
#[derive(Debug, Clone)]
pub struct CharacterSummary {
    pub id: String,
    pub number: Option<u32>,
    pub name: String,
    pub description: String,
    pub prompt: String,
    pub speaker_id: u32,
    pub prosody: Prosody,
    pub image_url: Option<String>,
}

impl CharacterSummary {
    fn from_profile(profile: &VoiceProfile, image_base_url: &str) -> Self {
        Self {
            id: profile.key().to_string(),
            number: profile.number(),
            name: profile.name().to_string(),
            description: profile.description().to_string(),
            prompt: profile.prompt().to_string(),
            speaker_id: profile.speaker_id().value(),
            prosody: *profile.prosody(),
            image_url: profile
                .image()
                .map(|image| format!("{}/{}", image_base_url, image)),
        }
    }
}

// ============================================================================
// Handlers
// ============================================================================

/// ListCharacters Handler
pub struct ListCharactersHandler {
    registry: Arc<CharacterRegistry>,
    /// 立绘 URL 前缀，如 `http://localhost:3000/images`
    image_base_url: String,
}

impl ListCharactersHandler {
    pub fn new(registry: Arc<CharacterRegistry>, image_base_url: impl Into<String>) -> Self {
        let image_base_url = image_base_url.into().trim_end_matches('/').to_string();
        Self {
            registry,
            image_base_url,
        }
    }

    pub fn handle(&self, _query: ListCharacters) -> Vec<CharacterSummary> {
        self.registry
            .profiles()
            .iter()
            .map(|p| CharacterSummary::from_profile(p, &self.image_base_url))
            .collect()
    }
}
