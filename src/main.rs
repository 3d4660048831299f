use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use termscribe::clipboard::BackendKind;

mod cli;

#[derive(Parser)]
#[command(name = "termscribe")]
#[command(about = "Capture terminal sessions and save clean, timestamped transcripts")]
#[command(version)]
struct Cli {
    /// Workspace directory transcripts are saved into (defaults to current directory)
    #[arg(short, long, global = true)]
    path: Option<PathBuf>,

    /// Path to the config file (defaults to .termscribe/config.toml in the workspace)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Record a shell session in a PTY and save the transcript on exit
    Record {
        /// Command to run instead of the default shell
        #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
        command: Vec<String>,
    },

    /// Save the current clipboard content as a transcript
    Clip {
        /// Clipboard backend to use (overrides the configured one)
        #[arg(long, value_enum)]
        backend: Option<BackendKind>,
    },

    /// Initialize a .termscribe/config.toml configuration file
    Init {
        /// Overwrite existing config file
        #[arg(long)]
        force: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level)),
        )
        .init();

    // Determine the working directory
    let work_dir = cli.path.unwrap_or_else(|| PathBuf::from("."));

    match cli.command {
        Commands::Record { command } => {
            cli::record::record_command(&work_dir, cli.config, command).await?;
        }
        Commands::Clip { backend } => {
            cli::clip::clip_command(&work_dir, cli.config, backend).await?;
        }
        Commands::Init { force } => {
            cli::init::init_command(&work_dir, cli.config, force).await?;
        }
    }

    Ok(())
}
