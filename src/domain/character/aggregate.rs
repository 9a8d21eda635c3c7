//! Character Context - VoiceProfile

use serde::Serialize;

use super::{Prosody, SpeakerId};

/// 声音档案
///
/// 不变量:
/// - key 在 Registry 内唯一
/// - 启动后不可变，生命周期与进程相同
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VoiceProfile {
    key: String,
    number: Option<u32>,
    name: String,
    description: String,
    speaker_id: SpeakerId,
    prosody: Prosody,
    prompt: String,
    image: Option<String>,
}

impl VoiceProfile {
    pub fn new(
        key: impl Into<String>,
        name: impl Into<String>,
        speaker_id: SpeakerId,
        prosody: Prosody,
    ) -> Self {
        Self {
            key: key.into(),
            number: None,
            name: name.into(),
            description: String::new(),
            speaker_id,
            prosody,
            prompt: String::new(),
            image: None,
        }
    }

    /// 设置旧版数字编号
    pub fn with_number(mut self, number: u32) -> Self {
        self.number = Some(number);
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// 设置人设台词模板
    pub fn with_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.prompt = prompt.into();
        self
    }

    /// 设置立绘文件名
    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.image = Some(image.into());
        self
    }

    // Getters
    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn number(&self) -> Option<u32> {
        self.number
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn speaker_id(&self) -> SpeakerId {
        self.speaker_id
    }

    pub fn prosody(&self) -> &Prosody {
        &self.prosody
    }

    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    pub fn image(&self) -> Option<&str> {
        self.image.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_profile_builder() {
        let profile = VoiceProfile::new("test", "テスト", SpeakerId::new(1), Prosody::default())
            .with_number(7)
            .with_description("desc")
            .with_prompt("おはよう")
            .with_image("test.png");

        assert_eq!(profile.key(), "test");
        assert_eq!(profile.number(), Some(7));
        assert_eq!(profile.speaker_id().value(), 1);
        assert_eq!(profile.prompt(), "おはよう");
        assert_eq!(profile.image(), Some("test.png"));
    }
}
