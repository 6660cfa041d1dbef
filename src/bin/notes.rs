use clap::Parser;
use notesum::cli::{self, Cli};
use notesum::core::config::AppConfig;
use notesum::{LogFormat, setup_logging_with};

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    setup_logging_with(if cli.json_logs {
        LogFormat::Json
    } else {
        LogFormat::Compact
    });

    if let Err(e) = cli::run(cli, AppConfig::from_env()).await {
        eprintln!("{e:#}");
        std::process::exit(1);
    }
}
