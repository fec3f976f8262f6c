use anyhow::Context;
use clap::Parser;

use leadintake::cli::Cli;
use leadintake::config::{LoggingConfig, get_config, init_config, init_config_with_path};
use leadintake::runtime::modes::{self, Mode};
use leadintake::system::logging::init_logging;
use leadintake::system::panic_handler::{RunMode, install_panic_hook};

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.config.as_deref() {
        Some(path) => init_config_with_path(path)
            .with_context(|| format!("Failed to load configuration from {}", path))?,
        None => init_config().context("Failed to load configuration")?,
    }

    match modes::detect_mode(cli.command.as_ref()) {
        Mode::Server => {
            install_panic_hook(RunMode::Server);
            let config = get_config();
            // guard 必须存活到进程结束，否则缓冲日志会丢失
            let _guard = init_logging(&config.logging)?;
            modes::run_server().await
        }
        Mode::Cli => {
            install_panic_hook(RunMode::Cli);
            // CLI 只输出警告及以上级别的日志
            let cli_logging = LoggingConfig {
                level: "warn".to_string(),
                file: None,
                ..get_config().logging.clone()
            };
            let _guard = init_logging(&cli_logging)?;

            let Some(command) = cli.command else {
                return Ok(());
            };
            if let Err(e) = modes::run_cli(command).await {
                eprintln!("{}", e.format_colored());
                std::process::exit(1);
            }
            Ok(())
        }
    }
}
