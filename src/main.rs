use clap::Parser;
use diveharder::cli::Args;
use diveharder::config::Config;
use diveharder::error::AppError;
use diveharder::{commands, logging};
use tracing::{error, info};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    let args = Args::parse();

    let config = Config::load().await?;

    // Keep the guard alive so buffered log lines are flushed on exit
    let (log_file_path, _guard) = logging::setup_logging(&args, &config).await?;
    info!(
        "Starting {} {} (logging to {log_file_path})",
        diveharder::NAME,
        diveharder::VERSION
    );

    let result = commands::run(&args.command, &config).await;
    if let Err(e) = &result {
        error!("Command failed: {e}");
    }
    result
}
