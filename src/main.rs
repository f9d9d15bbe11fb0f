use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use lemonade::{cli, logging, state_machine::Stage, tui, LemonadeConfig};

/// Lemonade
///
/// 点击柠檬树、挤柠檬、喝掉、再来一杯
#[derive(Parser)]
#[command(name = "lemonade")]
#[command(author, version = env!("APP_VERSION"), about)]
#[command(
    long_about = "A tap-driven lemonade maker.\n\
                  Pick a lemon, squeeze it a few times, drink it, and start again."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// 随机种子（固定挤压次数序列）
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// JSON 配置文件路径
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// 输出调试日志
    #[arg(short, long, global = true)]
    verbose: bool,

    /// 日志文件（TUI 模式下日志只写这里）
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// 启动终端界面（默认）
    Play {
        /// 事件轮询间隔（毫秒）
        #[arg(long)]
        tick_rate: Option<u64>,

        /// 在状态栏显示剩余挤压次数
        #[arg(long)]
        show_count: bool,
    },

    /// 不启动界面，连续点击 N 次并输出轨迹
    Run {
        /// 点击次数
        #[arg(short = 'n', long, default_value_t = 6)]
        taps: usize,

        /// 以 JSON 输出
        #[arg(long)]
        json: bool,
    },

    /// 列出所有阶段
    Stages,

    /// 显示阶段循环图
    Graph {
        /// 高亮的阶段（select, squeeze, drink, empty）
        #[arg(short, long)]
        stage: Option<Stage>,
    },
}

// ═══════════════════════════════════════════════════════════════════
// Main
// ═══════════════════════════════════════════════════════════════════

fn init_headless_logging(cli: &Cli) -> Result<()> {
    match &cli.log_file {
        Some(path) => logging::init_file(path, cli.verbose),
        None => {
            logging::init_stderr(cli.verbose);
            Ok(())
        }
    }
}

fn main() -> Result<()> {
    let mut cli = Cli::parse();
    let file_config = LemonadeConfig::load_or_default(cli.config.as_deref())?;

    let command = cli.command.take().unwrap_or(Commands::Play {
        tick_rate: None,
        show_count: false,
    });

    match command {
        Commands::Play {
            tick_rate,
            show_count,
        } => {
            // TUI 占用屏幕，日志只能写文件
            if let Some(path) = &cli.log_file {
                logging::init_file(path, cli.verbose)?;
            }
            let config = file_config.with_overrides(cli.seed, tick_rate, show_count)?;
            tui::run(&config)
        }
        Commands::Run { taps, json } => {
            init_headless_logging(&cli)?;
            let config = file_config.with_overrides(cli.seed, None, false)?;
            cli::run_taps(taps, config.seed, json)
        }
        Commands::Stages => {
            init_headless_logging(&cli)?;
            cli::list_stages()
        }
        Commands::Graph { stage } => {
            init_headless_logging(&cli)?;
            cli::show_graph(stage)
        }
    }
}
