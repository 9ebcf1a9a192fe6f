//! Motivation Agent CLI
//!
//! 在 CI 中运行：读取触发事件，向聊天 webhook 发送激励消息

use clap::Parser;
use motivation_agent::cli::{handle_run, RunArgs};
use tracing::error;
use tracing_subscriber::{fmt, EnvFilter};

#[derive(Parser)]
#[command(name = "motivate")]
#[command(about = "Motivation Agent - 为 CI 事件发送激励消息")]
#[command(version)]
struct Cli {
    #[command(flatten)]
    run: RunArgs,
}

fn main() {
    // 通过 RUST_LOG 环境变量控制日志级别，默认为 info
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("motivation_agent=info,motivate=info"));

    fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(filter)
        .with_target(false)
        .with_thread_ids(false)
        .init();

    let cli = Cli::parse();

    if let Err(e) = handle_run(cli.run) {
        error!(error = %e, "Motivational agent failed");
        eprintln!("❌ {:#}", e);
        std::process::exit(1);
    }
}
