//! 请求耗时测量
//!
//! 使用单调时钟，只用于日志和响应头，不参与任何控制决策（不做超时）。

use std::time::Instant;

/// 请求耗时计时器
#[derive(Debug, Clone, Copy)]
pub struct Stopwatch {
    started_at: Instant,
}

impl Stopwatch {
    /// 在请求入口处开始计时
    pub fn start() -> Self {
        Self {
            started_at: Instant::now(),
        }
    }

    /// 已耗时（毫秒）
    pub fn elapsed_ms(&self) -> u64 {
        u64::try_from(self.started_at.elapsed().as_millis()).unwrap_or(u64::MAX)
    }
}

impl Default for Stopwatch {
    fn default() -> Self {
        Self::start()
    }
}
