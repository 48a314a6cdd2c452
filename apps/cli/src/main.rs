//! # Magpie CLI
//!
//! 位置保持控制核心的演示与配置工具。
//!
//! ```bash
//! # 快进跑完演示场景（日志里能看到完整的状态机轨迹）
//! magpie-cli simulate
//!
//! # 实时速度 + 自定义配置
//! magpie-cli simulate --realtime --config magpie.toml
//!
//! # 校验配置文件
//! magpie-cli check-config magpie.toml
//! ```

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use magpie_control::ControlConfig;

mod sim;

/// Magpie CLI - 保持控制演示工具
#[derive(Parser, Debug)]
#[command(name = "magpie-cli")]
#[command(about = "Demo driver for the magpie hold-control core", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// 对仿真轴跑脚本场景：手动 → 保持 → 堵转保护 → 受扰恢复
    Simulate {
        /// 控制周期（秒）
        #[arg(long, default_value_t = 0.02)]
        dt: f64,

        /// 每周期真实休眠一个 dt（默认快进）
        #[arg(long)]
        realtime: bool,

        /// 控制配置文件（缺省用内置整定值）
        #[arg(short, long)]
        config: Option<PathBuf>,
    },

    /// 加载并校验 TOML 控制配置
    CheckConfig {
        /// 配置文件路径
        path: PathBuf,
    },
}

fn main() -> Result<()> {
    // 初始化日志
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("magpie_cli=info".parse()?)
                .add_directive("magpie_control=info".parse()?)
                .add_directive("magpie_match=info".parse()?),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Simulate {
            dt,
            realtime,
            config,
        } => {
            anyhow::ensure!(dt > 0.0 && dt.is_finite(), "dt must be positive");
            let config = match config {
                Some(path) => ControlConfig::load_from_file(&path)
                    .with_context(|| format!("loading {}", path.display()))?,
                None => ControlConfig::default(),
            };
            sim::run_scenario(config, dt, realtime)
        },

        Commands::CheckConfig { path } => {
            let config = ControlConfig::load_from_file(&path)
                .with_context(|| format!("loading {}", path.display()))?;
            println!("config ok: {config:#?}");
            Ok(())
        },
    }
}
