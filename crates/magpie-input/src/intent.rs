//! # 手动意图解析
//!
//! 把一对方向键解析成监督器消费的手动接管信号：
//! 只按负向键 → 负向开环功率；只按正向键 → 正向开环功率；
//! 都没按或同时按下 → 无手动意图，闭环保持接管。
//!
//! 同时按下视为冲突、当作松手处理，与源示教程序的 else 分支一致。

/// 方向键对 → 开环功率
#[derive(Debug, Clone, Copy)]
pub struct ManualIntent {
    /// 开环功率幅值（源程序为 0.5）
    pub magnitude: f64,
}

impl Default for ManualIntent {
    fn default() -> Self {
        Self { magnitude: 0.5 }
    }
}

impl ManualIntent {
    pub fn new(magnitude: f64) -> Self {
        Self { magnitude }
    }

    /// 解析本周期的按键对
    ///
    /// 返回 `Some(power)` 表示手动接管（`manual_override_active = true`，
    /// 功率直接下发给执行器），`None` 表示交还闭环。
    pub fn resolve(&self, negative_pressed: bool, positive_pressed: bool) -> Option<f64> {
        match (negative_pressed, positive_pressed) {
            (true, false) => Some(-self.magnitude),
            (false, true) => Some(self.magnitude),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_direction_yields_signed_power() {
        let intent = ManualIntent::default();
        assert_eq!(intent.resolve(true, false), Some(-0.5));
        assert_eq!(intent.resolve(false, true), Some(0.5));
    }

    #[test]
    fn test_released_or_conflicting_yields_none() {
        let intent = ManualIntent::default();
        assert_eq!(intent.resolve(false, false), None);
        // 两键同按是冲突输入，按松手处理
        assert_eq!(intent.resolve(true, true), None);
    }

    #[test]
    fn test_custom_magnitude() {
        let intent = ManualIntent::new(0.8);
        assert_eq!(intent.resolve(false, true), Some(0.8));
    }
}
