//! # Magpie Input - 手柄输入整形
//!
//! 遥控程序的输入侧协作者。控制核心（`magpie-control`）只消费
//! 布尔的手动接管意图和开环功率；本 crate 负责把原始手柄信号
//! 整形成这些量：
//!
//! - [`edge`] - 上升沿检测、开关、循环计数（按输入身份各持一份）
//! - [`intent`] - 方向键对 → 手动接管意图 + 开环功率
//! - [`teleop`] - 无状态映射（坦克驱动、扳机阈值、按住出力）
//!
//! 不触碰任何硬件：输入输出都是普通标量。

pub mod edge;
pub mod intent;
pub mod teleop;

pub use edge::{EdgeDetector, StateCycler, Toggle};
pub use intent::ManualIntent;
pub use teleop::{hold_to_run, tank_drive, trigger_held};
