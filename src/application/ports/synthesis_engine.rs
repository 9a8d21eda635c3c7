//! Synthesis Engine Port - 语音合成引擎抽象
//!
//! 两阶段协议：先用文本 + 话者取得 audio_query，改写韵律字段后再提交合成。
//! 具体实现在 infrastructure/adapters 层

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use thiserror::Error;

use crate::domain::character::{Prosody, SpeakerId};

/// 合成错误
#[derive(Debug, Error)]
pub enum SynthesisError {
    /// 连接被拒绝等传输层连接失败
    #[error("Engine unavailable: {0}")]
    EngineUnavailable(String),

    /// 引擎语义校验失败（HTTP 422）
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// 其他所有远端失败
    #[error("Synthesis failure: {0}")]
    SynthesisFailure(String),
}

/// audio_query 中的韵律字段名
pub const SPEED_SCALE: &str = "speedScale";
pub const PITCH_SCALE: &str = "pitchScale";
pub const INTONATION_SCALE: &str = "intonationScale";
pub const VOLUME_SCALE: &str = "volumeScale";

/// 引擎返回的 audio_query 文档
///
/// 除四个韵律字段外视为不透明数据，字段顺序原样保留
/// （依赖 serde_json 的 `preserve_order`）。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UtteranceQuery(Map<String, Value>);

impl UtteranceQuery {
    /// 覆盖四个韵律字段，其余字段不动
    ///
    /// 只改写文档中已有的字段，原位覆盖，不新增字段也不改变顺序。
    pub fn apply_prosody(&mut self, prosody: &Prosody) {
        let overrides = [
            (SPEED_SCALE, prosody.speed),
            (PITCH_SCALE, prosody.pitch),
            (INTONATION_SCALE, prosody.intonation),
            (VOLUME_SCALE, prosody.volume),
        ];
        for (field, value) in overrides {
            if let Some(slot) = self.0.get_mut(field) {
                *slot = json_number(value);
            }
        }
    }

    pub fn get(&self, field: &str) -> Option<&Value> {
        self.0.get(field)
    }

    pub fn fields(&self) -> &Map<String, Value> {
        &self.0
    }
}

/// NaN/Infinity 无法用 JSON 表示，按 null 发送，由引擎拒绝
fn json_number(value: f64) -> Value {
    serde_json::Number::from_f64(value)
        .map(Value::Number)
        .unwrap_or(Value::Null)
}

/// Synthesis Engine Port
///
/// 两个调用必须在同一请求内严格按顺序执行：`render` 依赖 `fetch_query` 的结果
#[async_trait]
pub trait SynthesisEnginePort: Send + Sync {
    /// 阶段一：生成 audio_query（调用方负责 trim，text 非空）
    async fn fetch_query(
        &self,
        text: &str,
        speaker_id: SpeakerId,
    ) -> Result<UtteranceQuery, SynthesisError>;

    /// 阶段二：提交（已改写韵律的）audio_query，返回完整 WAV 字节
    async fn render(
        &self,
        query: &UtteranceQuery,
        speaker_id: SpeakerId,
    ) -> Result<Vec<u8>, SynthesisError>;

    /// 引擎版本，仅用于启动时的连通性探测
    async fn version(&self) -> Result<String, SynthesisError>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample_query() -> UtteranceQuery {
        let value = json!({
            "accent_phrases": [{"moras": [], "accent": 1}],
            "speedScale": 1.0,
            "pitchScale": 0.0,
            "intonationScale": 1.0,
            "volumeScale": 1.0,
            "prePhonemeLength": 0.1,
            "postPhonemeLength": 0.1,
            "outputSamplingRate": 24000,
            "outputStereo": false,
            "kana": "オハヨー"
        });
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_apply_prosody_overwrites_only_prosody() {
        let original = sample_query();
        let mut query = original.clone();
        query.apply_prosody(&Prosody::new(1.0, 0.0, 1.1, 0.95));

        assert_eq!(query.get(SPEED_SCALE), Some(&json!(1.0)));
        assert_eq!(query.get(PITCH_SCALE), Some(&json!(0.0)));
        assert_eq!(query.get(INTONATION_SCALE), Some(&json!(1.1)));
        assert_eq!(query.get(VOLUME_SCALE), Some(&json!(0.95)));

        let prosody_fields = [SPEED_SCALE, PITCH_SCALE, INTONATION_SCALE, VOLUME_SCALE];
        for (field, value) in original.fields() {
            if !prosody_fields.contains(&field.as_str()) {
                assert_eq!(query.get(field), Some(value), "field {} changed", field);
            }
        }
        assert_eq!(query.fields().len(), original.fields().len());
    }

    #[test]
    fn test_apply_prosody_keeps_field_order() {
        let original = sample_query();
        let mut query = original.clone();
        query.apply_prosody(&Prosody::new(1.2, 0.1, 0.9, 0.8));

        let before: Vec<&String> = original.fields().keys().collect();
        let after: Vec<&String> = query.fields().keys().collect();
        assert_eq!(before, after);
    }

    #[test]
    fn test_apply_prosody_never_adds_fields() {
        let mut query: UtteranceQuery = serde_json::from_value(json!({
            "accent_phrases": [],
            "speedScale": 1.0,
            "outputStereo": false
        }))
        .unwrap();
        query.apply_prosody(&Prosody::new(1.2, 0.1, 0.9, 0.8));

        assert_eq!(query.get(SPEED_SCALE), Some(&json!(1.2)));
        assert_eq!(query.get(PITCH_SCALE), None);
        assert_eq!(query.get(INTONATION_SCALE), None);
        assert_eq!(query.get(VOLUME_SCALE), None);
        let keys: Vec<&String> = query.fields().keys().collect();
        assert_eq!(keys, ["accent_phrases", "speedScale", "outputStereo"]);
    }

    #[test]
    fn test_serialize_is_transparent() {
        let query = sample_query();
        let text = serde_json::to_string(&query).unwrap();
        assert!(text.starts_with("{\"accent_phrases\""));
        assert!(text.ends_with("\"kana\":\"オハヨー\"}"));
    }

    #[test]
    fn test_non_finite_value_becomes_null() {
        let mut query = sample_query();
        query.apply_prosody(&Prosody::new(f64::NAN, 0.0, 1.0, 1.0));
        assert_eq!(query.get(SPEED_SCALE), Some(&Value::Null));
    }
}
