use clap::Parser;
use color_eyre::eyre::Result;
use tracing::{debug, info};
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use smiley_pack::infrastructure::{AppConfig, CliArgs, StorageManager};
use smiley_pack::presentation::CommandRunner;

fn init_logging(config: &AppConfig) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.log_level.to_string()));

    if let Some(log_path) = &config.log_path {
        if let Some(parent) = log_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(log_path)?;

        let file_layer = fmt::layer()
            .with_writer(file)
            .with_ansi(false)
            .with_target(true)
            .with_thread_ids(false);

        tracing_subscriber::registry()
            .with(filter)
            .with(file_layer)
            .init();

        info!(path = %log_path.display(), "Logging initialized");
    } else {
        let stderr_layer = fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(false);

        tracing_subscriber::registry()
            .with(filter)
            .with(stderr_layer)
            .init();
    }

    Ok(())
}

fn main() -> Result<()> {
    color_eyre::install()?;

    let args = CliArgs::parse();
    let storage = match &args.config {
        Some(path) => StorageManager::with_dir(
            path.parent().map(std::path::Path::to_path_buf).unwrap_or_default(),
        ),
        None => StorageManager::new()?,
    };
    let mut config = storage.load_config(args.config.as_deref())?;
    config.merge_with_args(&args);

    init_logging(&config)?;
    debug!(version = smiley_pack::VERSION, command = ?args.command, "Starting smiley-pack");

    let mut runner = CommandRunner::new(config, storage);
    let stdout = std::io::stdout();
    runner.run(&args.command, &mut stdout.lock())
}
