mod cli;
mod handlers;
mod output;

use clap::{CommandFactory, Parser};
use cli::{Cli, Commands};
use std::sync::Arc;
use vault_backend::SimulatedBackend;
use vault_core::AppConfig;
use vault_tui::App;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    if let Ok(log_path) = std::env::var("CONTENTVAULT_DEBUG_LOG") {
        let log_file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&log_path)?;

        tracing_subscriber::fmt()
            .with_writer(log_file)
            .with_max_level(tracing::Level::DEBUG)
            .with_target(true)
            .with_thread_ids(true)
            .with_file(true)
            .with_line_number(true)
            .with_ansi(false)
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_writer(std::io::stderr)
            .with_max_level(tracing::Level::WARN)
            .init();
    }

    let cli = Cli::parse();
    let config = match &cli.config {
        Some(path) => AppConfig::load_from(path),
        None => AppConfig::load(),
    };

    match cli.command {
        None => {
            let backend = SimulatedBackend::from_config(&config);
            let mut app = App::new(Arc::new(backend), &config);
            app.run().await?;
        }
        Some(Commands::Batch(args)) => handlers::batch::handle(&config, args).await?,
        Some(Commands::Icons) => handlers::icons::handle()?,
        Some(Commands::Completions { shell }) => {
            clap_complete::generate(
                shell,
                &mut Cli::command(),
                "contentvault",
                &mut std::io::stdout(),
            );
        }
    }

    Ok(())
}
