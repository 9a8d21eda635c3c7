//! Character Registry - 人设查找表
//!
//! 启动时显式构建，之后以 `Arc<CharacterRegistry>` 的形式注入到各 handler，
//! 运行期只读，不提供任何注册/修改接口。

use std::collections::HashMap;

use super::{builtin_profiles, CharacterError, CharacterKey, UnknownCharacter, VoiceProfile};

/// 人设查找表
#[derive(Debug, Clone)]
pub struct CharacterRegistry {
    /// 按注册顺序保存
    profiles: Vec<VoiceProfile>,
    by_key: HashMap<String, usize>,
    by_number: HashMap<u32, usize>,
}

impl CharacterRegistry {
    /// 从档案列表构建
    ///
    /// key 或旧版编号重复时返回错误
    pub fn new(profiles: Vec<VoiceProfile>) -> Result<Self, CharacterError> {
        let mut by_key = HashMap::with_capacity(profiles.len());
        let mut by_number = HashMap::new();

        for (index, profile) in profiles.iter().enumerate() {
            if by_key.insert(profile.key().to_string(), index).is_some() {
                return Err(CharacterError::DuplicateKey(profile.key().to_string()));
            }
            if let Some(number) = profile.number() {
                if by_number.insert(number, index).is_some() {
                    return Err(CharacterError::DuplicateNumber(number));
                }
            }
        }

        Ok(Self {
            profiles,
            by_key,
            by_number,
        })
    }

    /// 内置人设表
    pub fn builtin() -> Result<Self, CharacterError> {
        Self::new(builtin_profiles())
    }

    /// 精确匹配查找
    pub fn resolve(&self, key: &CharacterKey) -> Result<&VoiceProfile, UnknownCharacter> {
        let index = match key {
            CharacterKey::Number(number) => self.by_number.get(number),
            CharacterKey::Name(name) => self.by_key.get(name.as_str()),
        };

        index
            .map(|&i| &self.profiles[i])
            .ok_or_else(|| UnknownCharacter {
                key: key.clone(),
                available: self.keys(),
            })
    }

    /// 所有人设 key（按注册顺序）
    pub fn keys(&self) -> Vec<String> {
        self.profiles.iter().map(|p| p.key().to_string()).collect()
    }

    pub fn profiles(&self) -> &[VoiceProfile] {
        &self.profiles
    }

    pub fn len(&self) -> usize {
        self.profiles.len()
    }
}
