//! 应用层 - 查询（读操作）
//!
//! CQRS 查询侧：角色一览

mod character_queries;

pub mod handlers;

pub use character_queries::*;
