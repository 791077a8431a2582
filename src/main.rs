use std::sync::Arc;

use clap::{CommandFactory, Parser};

use linkfront::cli::Cli;
use linkfront::config::StaticConfig;
use linkfront::runtime::modes::{self, Mode};
use linkfront::system::{init_logging, install_panic_hook};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // .env 可覆盖 LF__ 前缀的配置项
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let mut config = StaticConfig::load(cli.config.as_deref());
    if let Some(site) = cli.site {
        config.site.url = site;
    }
    let config = Arc::new(config);

    let mode = modes::detect_mode(cli.command);
    let run_mode = mode.run_mode();
    install_panic_hook(run_mode);

    // guard 存活期间日志才会落盘
    let guard = init_logging(&config.logging, run_mode);

    match mode {
        Mode::Cli(cmd) => {
            if let Err(e) = modes::run_cli(config, cmd).await {
                eprintln!("{}", e.format_colored());
                drop(guard);
                std::process::exit(1);
            }
        }
        #[cfg(feature = "tui")]
        Mode::Tui => {
            modes::run_tui(config)
                .await
                .map_err(|e| anyhow::anyhow!("{:?}", e))?;
        }
        Mode::Help => {
            Cli::command().print_help()?;
            println!();
        }
    }

    Ok(())
}
