mod cli;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use log_triage::io::DEFAULT_OUTPUT_PATH;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

/// Console Log Triage Tool
///
/// 粘贴前端控制台 / 终端日志，匹配已知错误签名并给出修复建议
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// RUST_LOG 未设置时使用
    #[arg(long, global = true, default_value = "warn")]
    log_level: String,

    /// 控制台输出 JSON (文件仍为纯文本报告)
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// 🔬 诊断日志 (默认)
    Diagnose {
        /// 从文件读取整段日志，不再交互提示
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// 报告输出路径
        #[arg(short, long, default_value = DEFAULT_OUTPUT_PATH)]
        output: PathBuf,
    },

    /// 📋 列出内置错误签名
    Rules,
}

impl Default for Command {
    fn default() -> Self {
        Command::Diagnose {
            input: None,
            output: PathBuf::from(DEFAULT_OUTPUT_PATH),
        }
    }
}

fn main() -> Result<()> {
    let args = Args::parse();

    // 日志只走 stderr，stdout 留给报告
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&args.log_level))
        .context("invalid log level")?;
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .context("setting default subscriber failed")?;

    cli::handle_command(args.command.unwrap_or_default(), args.json)
}
