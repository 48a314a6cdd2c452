//! # 控制配置
//!
//! 监督器的全部可调参数：PID 增益、堵转超时、死区阈值、微动功率。
//! 构造时一次性提供，会话期间不再变化（参数持久化是明确的 non-goal，
//! 因此只有加载，没有保存）。
//!
//! ## 配置文件
//!
//! ```toml
//! [gains]
//! kp = 0.1
//! ki = 0.0
//! kd = 0.001
//!
//! [hold]
//! stall_timeout_secs = 3.0
//! recover_threshold_ticks = 3
//!
//! [deadband]
//! full_output_threshold_ticks = 5
//! creep_power = 0.1
//! ```
//!
//! 所有字段都有默认值（源示教程序的常量），缺省段可省略。

use std::fs;
use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

use crate::deadband::Deadband;
use crate::pid::PidGains;

/// 配置错误
#[derive(Debug, Error)]
pub enum ConfigError {
    /// 读文件失败
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    /// TOML 解析失败
    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    /// 参数校验失败
    #[error("invalid config: {reason}")]
    Invalid { reason: String },
}

/// 保持行为参数
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct HoldSettings {
    /// 堵转超时（秒）：误差连续非零超过此时长即放弃原目标
    pub stall_timeout_secs: f64,
    /// 恢复阈值（tick）：保护状态下偏离超过此值即恢复闭环。
    /// 必须严格小于死区的全功率阈值，否则恢复后的第一拍会直接
    /// 落进全功率档之外的区间，轴永远缓不回来。
    pub recover_threshold_ticks: i32,
}

impl Default for HoldSettings {
    fn default() -> Self {
        Self {
            stall_timeout_secs: 3.0,
            recover_threshold_ticks: 3,
        }
    }
}

/// 单轴控制配置
#[derive(Debug, Clone, Copy, PartialEq, Default, Deserialize)]
#[serde(default)]
pub struct ControlConfig {
    /// PID 增益
    pub gains: PidGains,
    /// 保持行为
    pub hold: HoldSettings,
    /// 死区整形
    pub deadband: Deadband,
}

impl ControlConfig {
    /// 从 TOML 文件加载并校验
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path)?;
        let config: ControlConfig = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// 校验参数
    pub fn validate(&self) -> Result<(), ConfigError> {
        fn invalid(reason: impl Into<String>) -> ConfigError {
            ConfigError::Invalid {
                reason: reason.into(),
            }
        }

        for (name, value) in [
            ("kp", self.gains.kp),
            ("ki", self.gains.ki),
            ("kd", self.gains.kd),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(invalid(format!(
                    "gain {name} must be finite and non-negative, got {value}"
                )));
            }
        }

        if !self.hold.stall_timeout_secs.is_finite() || self.hold.stall_timeout_secs <= 0.0 {
            return Err(invalid(format!(
                "stall_timeout_secs must be positive, got {}",
                self.hold.stall_timeout_secs
            )));
        }

        if self.hold.recover_threshold_ticks <= 0 {
            return Err(invalid(format!(
                "recover_threshold_ticks must be positive, got {}",
                self.hold.recover_threshold_ticks
            )));
        }

        if self.deadband.full_output_threshold_ticks <= 0 {
            return Err(invalid(format!(
                "full_output_threshold_ticks must be positive, got {}",
                self.deadband.full_output_threshold_ticks
            )));
        }

        if !self.deadband.creep_power.is_finite()
            || self.deadband.creep_power <= 0.0
            || self.deadband.creep_power > 1.0
        {
            return Err(invalid(format!(
                "creep_power must be in (0, 1], got {}",
                self.deadband.creep_power
            )));
        }

        if self.hold.recover_threshold_ticks >= self.deadband.full_output_threshold_ticks {
            return Err(invalid(format!(
                "recover_threshold_ticks ({}) must be smaller than \
                 full_output_threshold_ticks ({})",
                self.hold.recover_threshold_ticks, self.deadband.full_output_threshold_ticks
            )));
        }

        Ok(())
    }
}
