//! Prompt Command Handlers
//!
//! 单个请求内的流程是线性的：
//! 解析角色 → 校验 text → audio_query → 覆盖韵律 → synthesis → 返回。
//! 任一步失败立即结束，不重试。

use std::sync::Arc;

use crate::application::commands::SynthesizePrompt;
use crate::application::error::{PromptError, PromptFailure};
use crate::application::ports::SynthesisEnginePort;
use crate::domain::character::{CharacterKey, CharacterRegistry, VoiceProfile};

/// 合成成功响应
#[derive(Debug, Clone)]
pub struct SynthesizePromptResponse {
    /// 解析后的人设 key
    pub character_key: String,
    /// 建议的下载文件名（按请求中的 key 生成）
    pub filename: String,
    /// 引擎返回的原始 WAV 字节，不做任何处理
    pub audio_data: Vec<u8>,
    /// 从请求开始的耗时（毫秒）
    pub elapsed_ms: u64,
}

/// SynthesizePrompt Handler
pub struct SynthesizePromptHandler {
    registry: Arc<CharacterRegistry>,
    engine: Arc<dyn SynthesisEnginePort>,
}

impl SynthesizePromptHandler {
    pub fn new(registry: Arc<CharacterRegistry>, engine: Arc<dyn SynthesisEnginePort>) -> Self {
        Self { registry, engine }
    }

    pub async fn handle(
        &self,
        command: SynthesizePrompt,
    ) -> Result<SynthesizePromptResponse, PromptFailure> {
        let stopwatch = command.stopwatch;
        let key = CharacterKey::parse(&command.character_id);

        tracing::info!(
            character_id = %command.character_id,
            text_len = command.text.as_deref().map(str::len).unwrap_or(0),
            "Prompt synthesis requested"
        );

        match self.synthesize(&key, command.text.as_deref()).await {
            Ok((profile, audio_data)) => {
                let elapsed_ms = stopwatch.elapsed_ms();
                tracing::info!(
                    character = %profile.key(),
                    audio_size = audio_data.len(),
                    elapsed_ms,
                    "音声合成完了: {} ({}ms)",
                    profile.name(),
                    elapsed_ms
                );
                Ok(SynthesizePromptResponse {
                    character_key: profile.key().to_string(),
                    filename: key.audio_filename(),
                    audio_data,
                    elapsed_ms,
                })
            }
            Err(error) => {
                let elapsed_ms = stopwatch.elapsed_ms();
                match &error {
                    PromptError::Synthesis(e) => tracing::error!(
                        character_id = %command.character_id,
                        kind = error.kind(),
                        elapsed_ms,
                        "音声合成失敗: {} ({}ms)",
                        e,
                        elapsed_ms
                    ),
                    _ => tracing::warn!(
                        character_id = %command.character_id,
                        kind = error.kind(),
                        elapsed_ms,
                        "Prompt request rejected ({}ms)",
                        elapsed_ms
                    ),
                }
                Err(PromptFailure { error, elapsed_ms })
            }
        }
    }

    async fn synthesize(
        &self,
        key: &CharacterKey,
        text: Option<&str>,
    ) -> Result<(&VoiceProfile, Vec<u8>), PromptError> {
        // 校验顺序固定：先角色后 text
        let profile = self.registry.resolve(key)?;

        let text = text
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .ok_or(PromptError::MissingText)?;

        let speaker_id = profile.speaker_id();
        tracing::debug!(
            character = %profile.key(),
            speaker_id = %speaker_id,
            text_chars = text.chars().count(),
            "Profile resolved"
        );

        let mut query = self.engine.fetch_query(text, speaker_id).await?;
        tracing::debug!(fields = query.fields().len(), "audio_query fetched");

        query.apply_prosody(profile.prosody());

        let audio_data = self.engine.render(&query, speaker_id).await?;
        tracing::debug!(audio_size = audio_data.len(), "Audio rendered");

        Ok((profile, audio_data))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::timing::Stopwatch;
    use crate::application::ports::{
        SynthesisError, UtteranceQuery, INTONATION_SCALE, PITCH_SCALE, SPEED_SCALE,
        VOLUME_SCALE,
    };
    use crate::domain::character::{Prosody, SpeakerId};
    use crate::infrastructure::adapters::{EngineCall, FakeEngineClient, FakeFailure};
    use serde_json::json;

    fn fixed_query() -> UtteranceQuery {
        serde_json::from_value(json!({
            "accent_phrases": [{"moras": [{"text": "オ", "vowel": "o"}], "accent": 1}],
            "speedScale": 1.0,
            "pitchScale": 0.0,
            "intonationScale": 1.0,
            "volumeScale": 1.0,
            "prePhonemeLength": 0.1,
            "postPhonemeLength": 0.1,
            "outputSamplingRate": 24000,
            "outputStereo": false,
            "kana": "オハヨウ"
        }))
        .unwrap()
    }

    fn handler(engine: Arc<FakeEngineClient>) -> SynthesizePromptHandler {
        let registry = Arc::new(CharacterRegistry::builtin().unwrap());
        SynthesizePromptHandler::new(registry, engine)
    }

    fn command(character_id: &str, text: Option<&str>) -> SynthesizePrompt {
        SynthesizePrompt {
            character_id: character_id.to_string(),
            text: text.map(str::to_string),
            stopwatch: Stopwatch::start(),
        }
    }

    #[tokio::test]
    async fn test_gentle_mother_end_to_end() {
        let engine = Arc::new(FakeEngineClient::new(fixed_query(), b"RIFFdata".to_vec()));
        let handler = handler(engine.clone());

        let response = handler
            .handle(command("gentle_mother", Some("おはよう")))
            .await
            .unwrap();

        assert_eq!(response.audio_data, b"RIFFdata".to_vec());
        assert_eq!(response.character_key, "gentle_mother");
        assert!(response.filename.contains("gentle_mother"));

        let calls = engine.calls();
        assert_eq!(calls.len(), 2);
        assert_eq!(
            calls[0],
            EngineCall::FetchQuery {
                text: "おはよう".to_string(),
                speaker_id: SpeakerId::new(20),
            }
        );
        match &calls[1] {
            EngineCall::Render { query, speaker_id } => {
                assert_eq!(*speaker_id, SpeakerId::new(20));
                assert_eq!(query.get(SPEED_SCALE), Some(&json!(1.0)));
                assert_eq!(query.get(PITCH_SCALE), Some(&json!(0.0)));
                assert_eq!(query.get(INTONATION_SCALE), Some(&json!(1.1)));
                assert_eq!(query.get(VOLUME_SCALE), Some(&json!(0.95)));
            }
            other => panic!("unexpected call: {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_legacy_number_filename() {
        let engine = Arc::new(FakeEngineClient::new(fixed_query(), vec![0]));
        let handler = handler(engine);

        let response = handler.handle(command("2", Some("おはよう"))).await.unwrap();
        assert_eq!(response.character_key, "zundamon");
        assert_eq!(response.filename, "character2_audio.wav");
    }

    #[tokio::test]
    async fn test_elapsed_counts_from_command_stopwatch() {
        let engine = Arc::new(FakeEngineClient::new(fixed_query(), vec![0]));
        let handler = handler(engine);

        // 计时从请求入口开始，而不是从 handle() 开始
        let command = command("gentle_mother", Some("おはよう"));
        tokio::time::sleep(std::time::Duration::from_millis(20)).await;

        let response = handler.handle(command).await.unwrap();
        assert!(response.elapsed_ms >= 20);

        let command = SynthesizePrompt {
            character_id: "gentle_mother".to_string(),
            text: None,
            stopwatch: Stopwatch::start(),
        };
        tokio::time::sleep(std::time::Duration::from_millis(20)).await;
        let failure = handler.handle(command).await.unwrap_err();
        assert!(failure.elapsed_ms >= 20);
    }

    #[tokio::test]
    async fn test_render_receives_phase_one_document() {
        let engine = Arc::new(FakeEngineClient::new(fixed_query(), vec![1, 2, 3]));
        let handler = handler(engine.clone());

        handler
            .handle(command("strict_teacher", Some("起きなさい")))
            .await
            .unwrap();

        let mut expected = fixed_query();
        expected.apply_prosody(&Prosody::new(1.05, -0.02, 0.9, 1.0));

        let rendered = engine.rendered_queries();
        assert_eq!(rendered.len(), 1);
        assert_eq!(rendered[0], expected);
        assert_eq!(
            serde_json::to_string(&rendered[0]).unwrap(),
            serde_json::to_string(&expected).unwrap()
        );
    }

    #[tokio::test]
    async fn test_text_is_trimmed_before_fetch() {
        let engine = Arc::new(FakeEngineClient::new(fixed_query(), vec![0]));
        let handler = handler(engine.clone());

        handler
            .handle(command("1", Some("  おはようございます！ \n")))
            .await
            .unwrap();

        assert_eq!(
            engine.calls()[0],
            EngineCall::FetchQuery {
                text: "おはようございます！".to_string(),
                speaker_id: SpeakerId::new(2),
            }
        );
    }

    #[tokio::test]
    async fn test_unknown_character_skips_engine() {
        let engine = Arc::new(FakeEngineClient::new(fixed_query(), vec![0]));
        let handler = handler(engine.clone());

        let failure = handler
            .handle(command("nobody", Some("おはよう")))
            .await
            .unwrap_err();

        match failure.error {
            PromptError::UnknownCharacter { available, .. } => {
                assert_eq!(available, CharacterRegistry::builtin().unwrap().keys());
            }
            other => panic!("unexpected: {:?}", other),
        }
        assert!(engine.calls().is_empty());
    }

    #[tokio::test]
    async fn test_blank_text_is_missing() {
        let engine = Arc::new(FakeEngineClient::new(fixed_query(), vec![0]));
        let handler = handler(engine.clone());

        for text in [None, Some(""), Some("   "), Some("\t\n")] {
            let failure = handler
                .handle(command("gentle_mother", text))
                .await
                .unwrap_err();
            assert!(matches!(failure.error, PromptError::MissingText));
        }
        assert!(engine.calls().is_empty());
    }

    #[tokio::test]
    async fn test_unknown_character_checked_before_text() {
        let engine = Arc::new(FakeEngineClient::new(fixed_query(), vec![0]));
        let handler = handler(engine);

        let failure = handler.handle(command("nobody", None)).await.unwrap_err();
        assert_eq!(failure.error.kind(), "UnknownCharacter");
    }

    #[tokio::test]
    async fn test_fetch_failure_skips_render() {
        let engine = Arc::new(
            FakeEngineClient::new(fixed_query(), vec![0])
                .with_query_failure(FakeFailure::Unavailable),
        );
        let handler = handler(engine.clone());

        let failure = handler
            .handle(command("gentle_mother", Some("おはよう")))
            .await
            .unwrap_err();

        assert!(matches!(
            failure.error,
            PromptError::Synthesis(SynthesisError::EngineUnavailable(_))
        ));
        assert_eq!(engine.calls().len(), 1);
        assert!(engine.rendered_queries().is_empty());
    }

    #[tokio::test]
    async fn test_render_failure_is_reported() {
        let engine = Arc::new(
            FakeEngineClient::new(fixed_query(), vec![0])
                .with_render_failure(FakeFailure::InvalidInput),
        );
        let handler = handler(engine.clone());

        let failure = handler
            .handle(command("zundamon", Some("おはよう")))
            .await
            .unwrap_err();

        assert_eq!(failure.error.kind(), "InvalidInput");
        assert_eq!(engine.calls().len(), 2);
    }
}
