//! Character Context - Value Objects

use serde::{Deserialize, Serialize};

/// 角色查找键
///
/// 路径参数既可能是旧版的数字编号（`/api/prompt/1`），也可能是人设名
/// （`/api/prompt/gentle_mother`），统一解析为同一种 key 后交给 Registry。
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum CharacterKey {
    /// 旧版数字编号
    Number(u32),
    /// 人设名
    Name(String),
}

impl CharacterKey {
    /// 解析路径参数（前后空白不参与匹配）
    pub fn parse(raw: &str) -> Self {
        let raw = raw.trim();
        match raw.parse::<u32>() {
            Ok(number) => Self::Number(number),
            Err(_) => Self::Name(raw.to_string()),
        }
    }

    /// 下载文件名，按请求中的 key 生成
    ///
    /// 旧版编号沿用 `character{n}_audio.wav`
    pub fn audio_filename(&self) -> String {
        match self {
            Self::Number(n) => format!("character{}_audio.wav", n),
            Self::Name(name) => format!("{}_audio.wav", name),
        }
    }
}

impl std::fmt::Display for CharacterKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{}", n),
            Self::Name(name) => write!(f, "{}", name),
        }
    }
}

/// VOICEVOX 话者 ID
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SpeakerId(u32);

impl SpeakerId {
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    pub fn value(&self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for SpeakerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// 韵律参数
///
/// 取值范围由引擎决定，这里不做任何校验或截断，越界值交给引擎自己报错。
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Prosody {
    /// 语速（speedScale）
    pub speed: f64,
    /// 音高（pitchScale）
    pub pitch: f64,
    /// 抑扬（intonationScale）
    pub intonation: f64,
    /// 音量（volumeScale）
    pub volume: f64,
}

impl Prosody {
    pub const fn new(speed: f64, pitch: f64, intonation: f64, volume: f64) -> Self {
        Self {
            speed,
            pitch,
            intonation,
            volume,
        }
    }
}

impl Default for Prosody {
    /// 引擎默认值
    fn default() -> Self {
        Self::new(1.0, 0.0, 1.0, 1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_number_key() {
        assert_eq!(CharacterKey::parse("3"), CharacterKey::Number(3));
        assert_eq!(CharacterKey::parse(" 5 "), CharacterKey::Number(5));
    }

    #[test]
    fn test_parse_name_key() {
        assert_eq!(
            CharacterKey::parse("gentle_mother"),
            CharacterKey::Name("gentle_mother".to_string())
        );
        // 负数不是合法编号，按名字处理
        assert_eq!(CharacterKey::parse("-1"), CharacterKey::Name("-1".to_string()));
    }

    #[test]
    fn test_audio_filename_follows_request_key() {
        assert_eq!(
            CharacterKey::parse("2").audio_filename(),
            "character2_audio.wav"
        );
        assert_eq!(
            CharacterKey::parse("gentle_mother").audio_filename(),
            "gentle_mother_audio.wav"
        );
    }

    #[test]
    fn test_prosody_default() {
        let prosody = Prosody::default();
        assert_eq!(prosody.speed, 1.0);
        assert_eq!(prosody.pitch, 0.0);
        assert_eq!(prosody.intonation, 1.0);
        assert_eq!(prosody.volume, 1.0);
    }
}
