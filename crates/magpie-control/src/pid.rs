//! # PID 调节器
//!
//! 位置式 PID 计算，时间步长由调用方显式传入（每周期一次）。
//!
//! ## 设计说明
//!
//! - **无内部时钟**：积分/微分使用调用方传入的 `dt_secs`，而不是隐藏的
//!   全局计时器。这使调节器成为「显式状态 + 输入」的纯函数，可以用
//!   合成时间做确定性测试。
//! - **输出不限幅**：`update()` 返回原始输出，限幅是调用方（监督器的
//!   死区整形）的职责。
//! - **每轴一个实例**：积分状态绝不跨轴共享。

/// 时间步长下限（秒）
///
/// 第一次 `update()` 或两次调用间隔极短时，`dt` 可能为零或接近零，
/// 直接做除法会产生微分尖峰甚至 NaN。除法前将 `dt` 钳制到此下限。
pub const MIN_DT_SECS: f64 = 1e-3;

/// PID 增益（构造时固定）
#[derive(Debug, Clone, Copy, PartialEq, serde::Deserialize)]
#[serde(default)]
pub struct PidGains {
    /// 比例增益
    pub kp: f64,
    /// 积分增益
    pub ki: f64,
    /// 微分增益
    pub kd: f64,
}

impl Default for PidGains {
    fn default() -> Self {
        // 源自原始示教程序的右臂电机整定值
        Self {
            kp: 0.1,
            ki: 0.0,
            kd: 0.001,
        }
    }
}

/// PID 调节器
///
/// 运行状态只有积分累加和上一次误差，生命周期内由所属的
/// 监督器独占持有。
#[derive(Debug, Clone)]
pub struct PidRegulator {
    gains: PidGains,
    integral_sum: f64,
    last_error: f64,
}

impl PidRegulator {
    /// 创建调节器（增益此后不可变）
    pub fn new(gains: PidGains) -> Self {
        Self {
            gains,
            integral_sum: 0.0,
            last_error: 0.0,
        }
    }

    /// 计算一次 PID 输出
    ///
    /// `error = target - current`；微分用 `(error - last_error) / dt`，
    /// 积分用 `error * dt` 累加。`dt_secs` 是距上一次 `update()` 或
    /// [`reset_integral()`](Self::reset_integral) 的壁钟秒数，
    /// 内部钳制到 [`MIN_DT_SECS`]。
    ///
    /// 返回值不限幅。
    pub fn update(&mut self, target: f64, current: f64, dt_secs: f64) -> f64 {
        let dt = dt_secs.max(MIN_DT_SECS);

        let error = target - current;
        let derivative = (error - self.last_error) / dt;
        self.integral_sum += error * dt;

        let output = self.gains.kp * error
            + self.gains.ki * self.integral_sum
            + self.gains.kd * derivative;

        self.last_error = error;
        output
    }

    /// 清除积分累加和上一次误差
    ///
    /// 监督器每次进入或重新接合闭环保持时调用，避免上一段无关
    /// 误差信号残留进微分/积分项。
    pub fn reset_integral(&mut self) {
        self.integral_sum = 0.0;
        self.last_error = 0.0;
    }

    /// 当前增益
    pub fn gains(&self) -> PidGains {
        self.gains
    }

    /// 积分累加（诊断用）
    pub fn integral_sum(&self) -> f64 {
        self.integral_sum
    }

    /// 上一次误差（诊断用）
    pub fn last_error(&self) -> f64 {
        self.last_error
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn p_only(kp: f64) -> PidRegulator {
        PidRegulator::new(PidGains {
            kp,
            ki: 0.0,
            kd: 0.0,
        })
    }

    #[test]
    fn test_proportional_term() {
        let mut pid = p_only(0.5);
        assert_eq!(pid.update(100.0, 60.0, 0.02), 20.0);
        assert_eq!(pid.update(100.0, 110.0, 0.02), -5.0);
    }

    #[test]
    fn test_integral_accumulates_error_times_dt() {
        let mut pid = PidRegulator::new(PidGains {
            kp: 0.0,
            ki: 2.0,
            kd: 0.0,
        });

        // 误差 10 持续两个 0.5s 周期 → 积分 = 10.0
        let out1 = pid.update(10.0, 0.0, 0.5);
        let out2 = pid.update(10.0, 0.0, 0.5);
        assert!((out1 - 10.0).abs() < 1e-9);
        assert!((out2 - 20.0).abs() < 1e-9);
        assert!((pid.integral_sum() - 10.0).abs() < 1e-9);
    }

    #[test]
    fn test_derivative_uses_previous_error() {
        let mut pid = PidRegulator::new(PidGains {
            kp: 0.0,
            ki: 0.0,
            kd: 1.0,
        });

        // 第一次：last_error = 0 → d = (4 - 0) / 0.1 = 40
        assert!((pid.update(4.0, 0.0, 0.1) - 40.0).abs() < 1e-9);
        // 误差不变 → 微分为零
        assert!(pid.update(4.0, 0.0, 0.1).abs() < 1e-9);
        // 误差减小 → 微分为负
        assert!(pid.update(2.0, 0.0, 0.1) < 0.0);
    }

    #[test]
    fn test_zero_dt_is_clamped_not_divided() {
        let mut pid = PidRegulator::new(PidGains {
            kp: 0.0,
            ki: 0.0,
            kd: 1.0,
        });

        let out = pid.update(1.0, 0.0, 0.0);
        assert!(out.is_finite());
        // dt 被钳到 MIN_DT_SECS
        assert!((out - 1.0 / MIN_DT_SECS).abs() < 1e-9);
    }

    #[test]
    fn test_reset_integral_clears_history() {
        let mut pid = PidRegulator::new(PidGains {
            kp: 0.0,
            ki: 1.0,
            kd: 1.0,
        });

        pid.update(50.0, 0.0, 0.5);
        assert!(pid.integral_sum() != 0.0);
        assert!(pid.last_error() != 0.0);

        pid.reset_integral();
        assert_eq!(pid.integral_sum(), 0.0);
        assert_eq!(pid.last_error(), 0.0);

        // 复位后的第一次更新不携带旧误差历史
        let out = pid.update(2.0, 0.0, 1.0);
        assert!((out - (2.0 + 2.0)).abs() < 1e-9); // i = 2*1, d = (2-0)/1
    }

    #[test]
    fn test_default_gains_match_source_tuning() {
        let gains = PidGains::default();
        assert_eq!(gains.kp, 0.1);
        assert_eq!(gains.ki, 0.0);
        assert_eq!(gains.kd, 0.001);
    }
}
