//! # 位置保持监督器
//!
//! 包裹 PID 调节器的状态机：手动接管检测、死区输出整形、
//! 堵转超时检测、自适应重定目标、受扰后自动恢复。
//!
//! ## 状态
//!
//! - `Manual`：调用方开环直驱该轴，监督器不计算也不输出功率。
//! - `Holding`：闭环保持激活，把轴保持在 `target`。
//! - `Protected`：堵转超时后放弃原目标，轴停在放弃时刻的位置，
//!   除非再次受扰，否则不做任何主动修正。
//!
//! ## 每周期调用约定
//!
//! 调用方每个控制周期调用一次 [`HoldSupervisor::advance`]，传入手动
//! 接管意图、当前编码器读数和本周期的壁钟秒数；返回 `None` 表示
//! 手动模式（功率由调用方自己的开环逻辑决定），否则返回 `[-1, 1]`
//! 内的功率命令。单线程、每轴独占一个实例（见 crate 文档）。

use tracing::{debug, info, trace, warn};

use crate::config::ControlConfig;
use crate::pid::PidRegulator;

/// 监督器状态
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HoldMode {
    /// 手动直驱，闭环挂起
    Manual,
    /// 闭环保持中
    Holding,
    /// 堵转保护：已放弃原目标，零功率停驻
    Protected,
}

impl HoldMode {
    /// 状态名（日志/显示用）
    pub fn as_str(&self) -> &'static str {
        match self {
            HoldMode::Manual => "MANUAL",
            HoldMode::Holding => "HOLDING",
            HoldMode::Protected => "PROTECTED",
        }
    }
}

/// 位置保持监督器（每轴一个）
///
/// 独占持有自己的 [`PidRegulator`] 与全部堵转/自适应状态；
/// 传感器与执行器归调用方所有，读数按值逐周期传入。
#[derive(Debug, Clone)]
pub struct HoldSupervisor {
    config: ControlConfig,
    pid: PidRegulator,
    mode: HoldMode,
    /// 保持目标（tick）。只由监督器自己赋值。
    target: i32,
    /// 误差连续非零的累计秒数（回到目标即清零）
    stall_timer: f64,
    last_error: i32,
}

impl HoldSupervisor {
    /// 创建监督器，初始状态 `Manual`（尚未记录目标）
    pub fn new(config: ControlConfig) -> Self {
        let pid = PidRegulator::new(config.gains);
        Self {
            config,
            pid,
            mode: HoldMode::Manual,
            target: 0,
            stall_timer: 0.0,
            last_error: 0,
        }
    }

    /// 推进一个控制周期
    ///
    /// - `manual_override_active`：本周期调用方的开环命令是否优先
    /// - `current_position`：传感器当前读数（tick）
    /// - `dt_secs`：本周期经过的壁钟秒数
    ///
    /// 返回 `None`（手动模式，不输出）或 `Some(power)`，
    /// `power ∈ [-1, 1]`。
    pub fn advance(
        &mut self,
        manual_override_active: bool,
        current_position: i32,
        dt_secs: f64,
    ) -> Option<f64> {
        if manual_override_active {
            if self.mode != HoldMode::Manual {
                debug!(from = self.mode.as_str(), "manual override, hold suspended");
            }
            self.mode = HoldMode::Manual;
            return None;
        }

        if self.mode == HoldMode::Manual {
            // 手动释放：在当前位置接合闭环
            self.engage(current_position);
            info!(target = self.target, "hold engaged");
        }

        if self.mode == HoldMode::Protected {
            let error = self.target - current_position;
            self.last_error = error;
            if error.abs() > self.config.hold.recover_threshold_ticks {
                // 受扰超过恢复阈值：朝已适配的目标恢复闭环修正，
                // 目标保持不变，本周期内立即按 Holding 逻辑重算
                self.pid.reset_integral();
                self.stall_timer = 0.0;
                self.mode = HoldMode::Holding;
                info!(
                    target = self.target,
                    current = current_position,
                    "disturbance detected, resuming hold"
                );
            } else {
                return Some(0.0);
            }
        }

        // ==== Holding ====
        let error = self.target - current_position;
        self.last_error = error;
        // 堵转计时衡量的是误差连续非零的时长：回到目标即清零，
        // 停稳后的轻扰不会立刻触发保护
        if error == 0 {
            self.stall_timer = 0.0;
        } else {
            self.stall_timer += dt_secs;
        }

        // 堵转判定优先于输出：本周期越过阈值就直接进保护，
        // 不再发出一拍过期的 PID 输出
        if self.stall_timer >= self.config.hold.stall_timeout_secs && error != 0 {
            warn!(
                abandoned_target = self.target,
                adopted_target = current_position,
                "stall timeout, adopting current position"
            );
            self.target = current_position;
            self.pid.reset_integral();
            self.stall_timer = 0.0;
            self.mode = HoldMode::Protected;
            return Some(0.0);
        }

        let band = self.config.deadband;
        let power = if band.wants_full_output(error) {
            let raw = self
                .pid
                .update(self.target as f64, current_position as f64, dt_secs);
            band.shape(error, raw)
        } else {
            // 微动/停止档不消耗调节器
            band.shape(error, 0.0)
        };
        trace!(error, power, stall = self.stall_timer, "hold cycle");
        Some(power)
    }

    /// 在 `position` 处接合闭环保持
    fn engage(&mut self, position: i32) {
        self.target = position;
        self.pid.reset_integral();
        self.stall_timer = 0.0;
        self.mode = HoldMode::Holding;
    }

    // ==== 只读诊断接口 ====

    /// 当前状态
    pub fn mode(&self) -> HoldMode {
        self.mode
    }

    /// 当前保持目标（tick）；`Manual` 下为上一次保持的残值
    pub fn target(&self) -> i32 {
        self.target
    }

    /// 最近一次闭环周期的误差（tick）
    pub fn last_error(&self) -> i32 {
        self.last_error
    }

    /// 堵转计时器当前值（秒）
    pub fn stall_timer_secs(&self) -> f64 {
        self.stall_timer
    }

    /// 内部调节器（诊断/测试用）
    pub fn regulator(&self) -> &PidRegulator {
        &self.pid
    }
}
