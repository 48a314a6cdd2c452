//! # 仿真轴与脚本场景
//!
//! 一个够用的单轴模型（位置按功率积分，可被外物卡死），
//! 加上一段演示完整状态机的时间脚本：
//!
//! ```text
//! 0.0s  操作手按住正向键，开环 +0.5 驱动
//! 1.0s  松手 → 在当前位置接合闭环保持
//! 1.5s  外力把轴拖离目标 60 tick 并卡死
//! ~4.5s 堵转 3 秒 → 自适应放弃原目标，进入保护
//! 6.0s  外力再把轴推开 10 tick → 受扰恢复，闭环调回
//! 8.0s  脚本结束
//! ```

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use anyhow::Result;
use magpie_control::{ControlConfig, HoldMode, HoldSupervisor};
use magpie_input::ManualIntent;
use magpie_match::{MatchClock, format_mm_ss};
use tracing::info;

/// 仿真单轴：位置按功率积分
pub struct SimAxis {
    /// 位置（tick，连续量；编码器读数取整）
    position: f64,
    /// 满功率速度（tick/s）
    full_power_rate: f64,
    /// 被外物卡死时的位置
    pinned_at: Option<f64>,
}

impl SimAxis {
    pub fn new(position: f64) -> Self {
        Self {
            position,
            full_power_rate: 600.0,
            pinned_at: None,
        }
    }

    pub fn encoder(&self) -> i32 {
        self.position.round() as i32
    }

    pub fn apply(&mut self, power: f64, dt: f64) {
        match self.pinned_at {
            Some(pin) => self.position = pin,
            None => self.position += power * self.full_power_rate * dt,
        }
    }

    pub fn pin(&mut self, at: f64) {
        self.position = at;
        self.pinned_at = Some(at);
    }

    pub fn release_pin(&mut self) {
        self.pinned_at = None;
    }

    pub fn push_to(&mut self, position: f64) {
        self.position = position;
    }
}

/// 跑完脚本场景
pub fn run_scenario(config: ControlConfig, dt: f64, realtime: bool) -> Result<()> {
    let running = Arc::new(AtomicBool::new(true));
    {
        let running = running.clone();
        ctrlc::set_handler(move || running.store(false, Ordering::SeqCst))?;
    }

    let mut supervisor = HoldSupervisor::new(config);
    let mut axis = SimAxis::new(0.0);
    let intent = ManualIntent::default();
    let mut clock = MatchClock::default();

    let mut elapsed = 0.0f64;
    let mut last_mode = supervisor.mode();

    while elapsed < 8.0 && running.load(Ordering::SeqCst) {
        // ==== 脚本事件 ====
        if (elapsed - 1.5).abs() < dt / 2.0 {
            let dragged = supervisor.target() as f64 - 60.0;
            info!(at = dragged, "scripted: obstruction drags and pins the axis");
            axis.pin(dragged);
        }
        if (elapsed - 6.0).abs() < dt / 2.0 {
            info!("scripted: obstruction removed, axis pushed 10 ticks");
            axis.release_pin();
            axis.push_to(axis.position + 10.0);
        }

        // 操作手：前 1 秒按住正向键，之后松手
        let positive_pressed = elapsed < 1.0;
        let manual_power = intent.resolve(false, positive_pressed);

        // ==== 控制周期 ====
        let command = supervisor.advance(manual_power.is_some(), axis.encoder(), dt);
        let power = match (manual_power, command) {
            (Some(open_loop), _) => open_loop,
            (None, Some(closed_loop)) => closed_loop,
            (None, None) => 0.0, // 不可达：无手动意图时监督器必有输出
        };
        axis.apply(power, dt);

        if clock.advance(dt) {
            info!("match clock alert (45 s remaining)");
        }

        if supervisor.mode() != last_mode {
            info!(
                t = format!("{elapsed:.2}s"),
                from = last_mode.as_str(),
                to = supervisor.mode().as_str(),
                target = supervisor.target(),
                position = axis.encoder(),
                "mode transition"
            );
            last_mode = supervisor.mode();
        }

        elapsed += dt;
        if realtime {
            std::thread::sleep(std::time::Duration::from_secs_f64(dt));
        }
    }

    info!(
        mode = supervisor.mode().as_str(),
        target = supervisor.target(),
        position = axis.encoder(),
        error = supervisor.last_error(),
        clock = format_mm_ss(clock.elapsed_secs()),
        "scenario finished"
    );

    if running.load(Ordering::SeqCst) && supervisor.mode() != HoldMode::Holding {
        anyhow::bail!(
            "expected scenario to end holding the adapted target, ended in {}",
            supervisor.mode().as_str()
        );
    }
    Ok(())
}
