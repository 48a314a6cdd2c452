//! # 边沿检测
//!
//! 遥控循环里到处重复的「这周期按下且上周期没按」模式，
//! 收敛成按输入身份各持一份的小型检测器。

/// 上升沿检测器（每个按键一个实例）
///
/// [`update()`](Self::update) 每周期调用一次；只在按下的那个周期
/// 返回 `true`，长按期间不重复触发。
#[derive(Debug, Clone, Copy, Default)]
pub struct EdgeDetector {
    last: bool,
}

impl EdgeDetector {
    pub fn new() -> Self {
        Self::default()
    }

    /// 输入本周期的按键状态，返回是否出现上升沿
    pub fn update(&mut self, pressed: bool) -> bool {
        let rising = pressed && !self.last;
        self.last = pressed;
        rising
    }
}

/// 边沿触发的布尔开关
///
/// 每个上升沿翻转一次（速度档 1.0 ↔ 0.5 之类的用法）。
#[derive(Debug, Clone, Copy, Default)]
pub struct Toggle {
    edge: EdgeDetector,
    state: bool,
}

impl Toggle {
    pub fn new(initial: bool) -> Self {
        Self {
            edge: EdgeDetector::new(),
            state: initial,
        }
    }

    /// 输入本周期按键状态，返回翻转后的当前档位
    pub fn update(&mut self, pressed: bool) -> bool {
        if self.edge.update(pressed) {
            self.state = !self.state;
        }
        self.state
    }

    pub fn state(&self) -> bool {
        self.state
    }
}

/// 边沿触发的模 N 循环计数器
///
/// 飞轮的 停 → 低速 → 高速 → 停 三态循环。
#[derive(Debug, Clone, Copy)]
pub struct StateCycler {
    edge: EdgeDetector,
    state: u8,
    len: u8,
}

impl StateCycler {
    /// `len` 为状态数，从状态 0 开始
    pub fn new(len: u8) -> Self {
        debug_assert!(len > 0);
        Self {
            edge: EdgeDetector::new(),
            state: 0,
            len,
        }
    }

    /// 输入本周期按键状态，返回（可能已步进的）当前状态
    pub fn update(&mut self, pressed: bool) -> u8 {
        if self.edge.update(pressed) {
            self.state = (self.state + 1) % self.len;
        }
        self.state
    }

    pub fn state(&self) -> u8 {
        self.state
    }
}
