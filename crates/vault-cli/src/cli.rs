use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "contentvault")]
#[command(about = "Organize saved links into folders from the terminal", long_about = None)]
#[command(version, arg_required_else_help = false)]
pub struct Cli {
    /// Path to a config file (defaults to the platform config dir)
    #[arg(long, value_name = "FILE", env = "CONTENTVAULT_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run newline-delimited JSON requests against an in-memory vault
    Batch(BatchArgs),
    /// List the icons offered when creating a folder
    Icons,
    /// Generate shell completions
    Completions {
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

#[derive(Args)]
pub struct BatchArgs {
    /// Read requests from FILE instead of stdin
    #[arg(long, value_name = "FILE")]
    pub input: Option<PathBuf>,
    /// Start without the sample folders
    #[arg(long)]
    pub empty: bool,
    /// Delay applied to create and add requests
    #[arg(long, value_name = "MS")]
    pub latency_ms: Option<u64>,
}
