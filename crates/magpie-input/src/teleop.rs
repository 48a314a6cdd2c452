//! # 无状态遥控映射
//!
//! 摇杆/扳机到功率的直接映射。这些都是纯函数：
//! 没有反馈、没有状态机，只是信号整形。

/// 坦克式驱动映射
///
/// 摇杆 Y 轴向前为负（游戏手柄惯例），这里取反成「前推为正功率」，
/// 再按速度档缩放并限幅到 `[-1, 1]`。
pub fn tank_drive(left_stick_y: f64, right_stick_y: f64, scale: f64) -> (f64, f64) {
    let left = (-left_stick_y * scale).clamp(-1.0, 1.0);
    let right = (-right_stick_y * scale).clamp(-1.0, 1.0);
    (left, right)
}

/// 模拟扳机是否视为按下（源程序阈值 0.5）
pub fn trigger_held(value: f64, threshold: f64) -> bool {
    value > threshold
}

/// 按住出力、松手归零
pub fn hold_to_run(pressed: bool, power: f64) -> f64 {
    if pressed { power } else { 0.0 }
}
