//! Discourse logout CLI.

mod commands;
mod config;
mod logging;
mod output;

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use config::Overrides;

/// Log application users out of their Discourse forums
#[derive(Parser)]
#[command(name = "discourse-logout")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Output format
    #[arg(short, long, global = true, default_value = "plain")]
    format: output::OutputFormat,

    /// Show verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Configuration file (defaults to discourse-logout.toml next to the executable)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Comma-separated forum base URLs
    #[arg(long, global = true, env = "DISCOURSE_URL")]
    url: Option<String>,

    /// Comma-separated admin API keys
    #[arg(long, global = true, env = "DISCOURSE_API_KEY", hide_env_values = true)]
    api_key: Option<String>,

    /// Comma-separated admin API usernames
    #[arg(long, global = true, env = "DISCOURSE_API_USER")]
    api_user: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Log a user out of every configured forum
    Logout {
        /// Application user ID (the Discourse external id)
        user_id: String,
    },

    /// List configured forums
    #[command(alias = "t")]
    Tenants,

    /// Show current configuration
    Config,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let path = config::config_path(cli.config.as_deref())?;
    let cfg = config::load_config(&path)?.with_overrides(Overrides {
        url: cli.url,
        api_key: cli.api_key,
        api_user: cli.api_user,
    });
    tracing::debug!("Using config {}", path.display());

    match cli.command {
        Commands::Logout { user_id } => commands::logout::handle(&user_id, cfg, cli.format).await,
        Commands::Tenants => commands::tenants::handle(&cfg, cli.format),
        Commands::Config => {
            println!("Config file: {}", path.display());
            println!("Exists: {}", path.exists());
            let tenants = discourse_logout::DiscourseSettings::from_repository(&cfg).tenants();
            println!("Active tenants: {}", tenants.len());
            Ok(())
        }
    }
}
