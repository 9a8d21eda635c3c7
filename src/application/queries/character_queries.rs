//! Character Queries

/// 列出所有角色查询
#[derive(Debug, Clone)]
pub struct ListCharacters;
