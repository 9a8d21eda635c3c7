//! Prompt Commands

use crate::application::timing::Stopwatch;

/// 合成角色语音命令
#[derive(Debug, Clone)]
pub struct SynthesizePrompt {
    /// 路径中的角色 key（数字编号或人设名）
    pub character_id: String,
    /// 请求体中的 text，未 trim
    pub text: Option<String>,
    /// 请求入口处启动的计时器
    pub stopwatch: Stopwatch,
}
