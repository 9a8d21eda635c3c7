//! Domain Layer - 领域层
//!
//! 限界上下文:
//! - Character Context: 人设与声音档案

pub mod character;
