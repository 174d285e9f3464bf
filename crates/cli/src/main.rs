//! Mentor CLI — the main entry point.
//!
//! Commands:
//! - `onboard`    — Initialize the config file
//! - `chat`       — Interactive chat or single-message mode
//! - `curriculum` — Show the curriculum the mentor is grounded with

use clap::{Parser, Subcommand};
use mentor_core::ModelChoice;

mod commands;

#[derive(Parser)]
#[command(
    name = "mentor",
    about = "Mentor — curriculum-grounded AI learning mentor",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Initialize the configuration file
    Onboard,

    /// Chat with the mentor
    Chat {
        /// Send a single message instead of entering interactive mode
        #[arg(short, long)]
        message: Option<String>,

        /// Override the backend model for this session
        #[arg(long)]
        model: Option<ModelChoice>,

        /// Response detail level, 1 (brief) to 5 (comprehensive)
        #[arg(short, long, value_parser = clap::value_parser!(u8).range(1..=5))]
        detail: Option<u8>,
    },

    /// Show the curriculum the mentor is grounded with
    Curriculum,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    // Initialize tracing
    let filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(filter)),
        )
        .with_target(false)
        .init();

    match cli.command {
        Commands::Onboard => commands::onboard::run().await?,
        Commands::Chat {
            message,
            model,
            detail,
        } => commands::chat::run(message, model, detail).await?,
        Commands::Curriculum => commands::curriculum_cmd::run().await?,
    }

    Ok(())
}
