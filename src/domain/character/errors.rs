//! Character Context - Errors

use thiserror::Error;

use super::CharacterKey;

/// 构建 Registry 时的错误
#[derive(Debug, Error)]
pub enum CharacterError {
    #[error("角色 key 重复: {0}")]
    DuplicateKey(String),

    #[error("旧版编号重复: {0}")]
    DuplicateNumber(u32),
}

/// 查找失败：key 不在 Registry 中
#[derive(Debug, Error)]
#[error("角色不存在: {key}")]
pub struct UnknownCharacter {
    pub key: CharacterKey,
    /// 所有合法的人设 key（按注册顺序）
    pub available: Vec<String>,
}
