//! # Magpie Control - 位置保持控制核心
//!
//! 比赛机器人遥控程序里的闭环位置保持核心：
//!
//! - [`pid`] - 位置式 PID 调节器（显式时间步长）
//! - [`deadband`] - 三档死区输出整形（防目标点附近振荡）
//! - [`supervisor`] - 位置保持监督器状态机
//!   （手动接管 / 堵转保护 / 自适应重定目标 / 受扰恢复）
//! - [`config`] - TOML 控制配置与校验
//!
//! ## 并发模型
//!
//! 单线程、同步、协作式：一个控制周期（读传感器 → 推状态机 →
//! 发功率）跑完才开始下一个。每个物理轴独占一对
//! [`HoldSupervisor`] / [`PidRegulator`]，多轴并行时各自独立持有，
//! 互不共享可变状态。周期长度由外层控制循环决定，时间以
//! `dt_secs` 参数逐周期显式传入。
//!
//! ## 使用示例
//!
//! ```
//! use magpie_control::{ControlConfig, HoldMode, HoldSupervisor};
//!
//! let mut arm = HoldSupervisor::new(ControlConfig::default());
//!
//! // 操作手直驱期间：监督器不输出
//! assert_eq!(arm.advance(true, 480, 0.02), None);
//!
//! // 松手：在当前位置接合闭环保持
//! let power = arm.advance(false, 500, 0.02);
//! assert_eq!(arm.mode(), HoldMode::Holding);
//! assert_eq!(arm.target(), 500);
//! assert_eq!(power, Some(0.0));
//! ```

pub mod config;
pub mod deadband;
pub mod pid;
pub mod supervisor;

// 重新导出常用类型
pub use config::{ConfigError, ControlConfig, HoldSettings};
pub use deadband::Deadband;
pub use pid::{PidGains, PidRegulator};
pub use supervisor::{HoldMode, HoldSupervisor};
