//! # Magpie Match - 比赛辅助
//!
//! 与控制无关的比赛期间小工具：
//!
//! - [`score`] - 三球筐计分板，操作历史栈支持连续撤销
//! - [`clock`] - 比赛时钟，1:15 一次性提醒，合成时间推进
//!
//! 不涉及反馈控制，也不触碰硬件（震动、语音等提醒的物理表现
//! 由调用方根据返回的触发事件自行执行）。

pub mod clock;
pub mod score;

pub use clock::{ALERT_AT_SECS, MATCH_LENGTH_SECS, MatchClock, format_mm_ss};
pub use score::{Basket, ScoreBoard};
