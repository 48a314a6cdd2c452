//! 保持监督器性能基准测试
//!
//! 控制周期必须远快于 50 Hz 的调度节拍，这里量化单周期开销。

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use magpie_control::{ControlConfig, HoldSupervisor, PidRegulator};

const DT: f64 = 0.02;

fn bench_pid_update(c: &mut Criterion) {
    let config = ControlConfig::default();

    c.bench_function("pid_update", |b| {
        let mut pid = PidRegulator::new(config.gains);
        b.iter(|| black_box(pid.update(black_box(100.0), black_box(37.0), black_box(DT))));
    });
}

fn bench_holding_cycle(c: &mut Criterion) {
    let config = ControlConfig::default();

    // 稳态保持周期：误差落在慢速爬行档。
    // 每轮先回到零误差清掉堵转计时，避免长时间迭代后滑入保护态。
    c.bench_function("supervisor_cycle_creep", |b| {
        let mut supervisor = HoldSupervisor::new(ControlConfig::default());
        supervisor.advance(false, 100, DT);
        b.iter(|| {
            supervisor.advance(false, 100, DT);
            black_box(supervisor.advance(black_box(false), black_box(103), DT))
        });
    });

    // 大误差周期：走完整的 PID + 死区整形路径
    c.bench_function("supervisor_cycle_full", |b| {
        let mut supervisor = HoldSupervisor::new(config);
        supervisor.advance(false, 100, DT);
        b.iter(|| {
            supervisor.advance(false, 100, DT);
            black_box(supervisor.advance(black_box(false), black_box(40), DT))
        });
    });
}

fn bench_protection_round_trip(c: &mut Criterion) {
    // 完整一轮：接合 → 堵转进入保护 → 受扰恢复
    c.bench_function("supervisor_protection_round_trip", |b| {
        b.iter(|| {
            let mut supervisor = HoldSupervisor::new(ControlConfig::default());
            supervisor.advance(false, 100, DT);
            let stall_cycles = (3.0 / DT) as usize + 1;
            for _ in 0..stall_cycles {
                supervisor.advance(false, 40, DT);
            }
            black_box(supervisor.advance(false, 50, DT))
        });
    });
}

criterion_group!(
    benches,
    bench_pid_update,
    bench_holding_cycle,
    bench_protection_round_trip
);
criterion_main!(benches);
