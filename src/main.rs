use clap::Parser;
use dotenv::dotenv;
use human_panic::setup_panic;
use std::process::ExitCode;
use std::sync::Arc;
use tracing::{debug, error};

// 从 lib.rs 导入模块
use rust_edu_console::cli::{self, Cli};
use rust_edu_console::config::AppConfig;
use rust_edu_console::notify::ConsoleNotifier;
use rust_edu_console::services::EduClient;

#[tokio::main]
async fn main() -> ExitCode {
    dotenv().ok();

    let started = chrono::Utc::now();
    let args = Cli::parse();

    // 初始化配置
    setup_panic!();
    if let Err(e) = AppConfig::init() {
        eprintln!("Failed to initialize configuration: {e}");
        return ExitCode::FAILURE;
    }
    let config = AppConfig::get();

    // 初始化日志，输出到标准错误，标准输出只留给命令结果
    let (non_blocking_writer, _guard) = tracing_appender::non_blocking(std::io::stderr());
    let level = if args.verbose {
        "debug"
    } else {
        config.app.log_level.as_str()
    };
    let filter = tracing_subscriber::EnvFilter::new(level);
    let tracing_format = tracing_subscriber::fmt::format()
        .with_level(true)
        .with_ansi(true);

    let tracing_builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(non_blocking_writer)
        .event_format(tracing_format);

    if config.is_development() {
        tracing_builder
            .with_file(true)
            .with_line_number(true)
            .init();
    } else {
        tracing_builder.json().init();
    }

    debug!(
        "{} {} targeting {}",
        env!("CARGO_PKG_NAME"),
        env!("CARGO_PKG_VERSION"),
        config.api.base_url
    );

    let client = match EduClient::from_config(config, Arc::new(ConsoleNotifier)) {
        Ok(client) => client,
        Err(e) => {
            eprintln!("{}", e.user_message());
            return ExitCode::FAILURE;
        }
    };

    let result = cli::run(args.command, &client, config).await;

    debug!(
        "Command finished in {} ms",
        chrono::Utc::now()
            .signed_duration_since(started)
            .num_milliseconds()
    );

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("Command failed: {}", e);
            // 传输层错误已经提示过
            if !e.is_surfaced() {
                eprintln!("{}", e.user_message());
            }
            ExitCode::FAILURE
        }
    }
}
