//! # 比赛计时
//!
//! 与控制核心同样的合成时间约定：时钟不自己读壁钟，
//! 由外层循环逐周期传入 `dt_secs` 推进。
//! 比赛全长 120 秒，1:15（75 秒）处触发一次性提醒
//! （提示操作手还剩 45 秒）。

use tracing::info;

/// 比赛全长（秒）
pub const MATCH_LENGTH_SECS: f64 = 120.0;

/// 提醒时刻（秒）：1 分 15 秒
pub const ALERT_AT_SECS: f64 = 75.0;

/// 比赛时钟（一次性提醒）
#[derive(Debug, Clone)]
pub struct MatchClock {
    elapsed: f64,
    alert_at: f64,
    alert_fired: bool,
}

impl Default for MatchClock {
    fn default() -> Self {
        Self::new(ALERT_AT_SECS)
    }
}

impl MatchClock {
    /// 创建时钟，提醒时刻可配
    pub fn new(alert_at_secs: f64) -> Self {
        Self {
            elapsed: 0.0,
            alert_at: alert_at_secs,
            alert_fired: false,
        }
    }

    /// 推进一个周期；仅在提醒触发的那个周期返回 `true`
    pub fn advance(&mut self, dt_secs: f64) -> bool {
        self.elapsed += dt_secs;
        if !self.alert_fired && self.elapsed >= self.alert_at {
            self.alert_fired = true;
            info!(elapsed = self.elapsed, "match clock alert");
            return true;
        }
        false
    }

    /// 重新开局：清零并重新武装提醒
    pub fn reset(&mut self) {
        self.elapsed = 0.0;
        self.alert_fired = false;
    }

    /// 已经过秒数
    pub fn elapsed_secs(&self) -> f64 {
        self.elapsed
    }

    /// 距比赛结束的剩余秒数（不为负）
    pub fn remaining_secs(&self) -> f64 {
        (MATCH_LENGTH_SECS - self.elapsed).max(0.0)
    }

    /// 提醒是否已触发
    pub fn alert_fired(&self) -> bool {
        self.alert_fired
    }
}

/// `MM:SS` 显示格式
pub fn format_mm_ss(secs: f64) -> String {
    let total = secs.max(0.0) as u64;
    format!("{}:{:02}", total / 60, total % 60)
}
