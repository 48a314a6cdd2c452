//! # 死区输出整形
//!
//! 把调节器的原始输出整形成有界电机功率的三档策略，
//! 防止电机在目标点附近 ±1 tick 的噪声带里来回抖动。
//!
//! | 档位 | 条件 | 输出 |
//! |------|------|------|
//! | 全功率 | `\|error\| > 5` | `clamp(raw, -1, 1)` |
//! | 微动 | `0 < \|error\| ≤ 5` | `±0.1`（只取误差符号） |
//! | 停止 | `error == 0` | `0` |
//!
//! 边界判定严格沿用源策略 `> 5 → 全功率`：误差恰为 5 tick 走微动档。
//! 微动档故意忽略调节器的幅值，只保留方向——这是原始行为，按规格保留。

/// 死区参数
///
/// 无状态；`shape()` 是 (误差, 原始输出) 的纯函数。
#[derive(Debug, Clone, Copy, PartialEq, serde::Deserialize)]
#[serde(default)]
pub struct Deadband {
    /// 全功率档阈值（tick），误差绝对值大于此值才使用 PID 输出
    pub full_output_threshold_ticks: i32,
    /// 微动功率幅值
    pub creep_power: f64,
}

impl Default for Deadband {
    fn default() -> Self {
        Self {
            full_output_threshold_ticks: 5,
            creep_power: 0.1,
        }
    }
}

impl Deadband {
    /// 整形一次输出
    ///
    /// `error` 单位是编码器 tick，`raw_output` 是未限幅的调节器输出。
    /// 返回 `[-1, 1]` 内的功率。
    pub fn shape(&self, error: i32, raw_output: f64) -> f64 {
        if error.abs() > self.full_output_threshold_ticks {
            raw_output.clamp(-1.0, 1.0)
        } else if error > 0 {
            self.creep_power
        } else if error < 0 {
            -self.creep_power
        } else {
            0.0
        }
    }

    /// 误差是否落在全功率档（调节器只在该档被调用）
    pub fn wants_full_output(&self, error: i32) -> bool {
        error.abs() > self.full_output_threshold_ticks
    }
}
