// crates/oilseed-cli/src/main.rs
//
// CLI entrypoint for the Oilseed Value Chain Platform tools.
//
// Provides subcommands for seeding demo data, tracking a batch through
// the traceability chain, and printing the role dashboards, analytics,
// and credit summaries against a local RocksDB-backed store.

mod commands;
mod config;
mod output;

use clap::{Parser, Subcommand};
use uuid::Uuid;

use config::CliConfig;

/// Oilseed Value Chain Platform CLI.
#[derive(Parser, Debug)]
#[command(
    name = "oilseed",
    version = "0.1.0",
    about = "Oilseed Value Chain Platform CLI: traceability and role dashboards"
)]
struct Cli {
    /// Path to the TOML configuration file [default: ~/.oilseed/config.toml].
    #[arg(long, global = true)]
    config: Option<String>,

    /// Emit JSON instead of tables.
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Top-level subcommands.
#[derive(Debug, Subcommand)]
enum Commands {
    /// Seed the local store with demo profiles, rows, and a sample batch.
    Seed,

    /// Track a batch: print its custody chain and integrity status.
    Trace {
        /// Batch identifier, e.g. BATCH-SOY-2024-001.
        batch_id: String,
    },

    /// Print the dashboard for a signed-in profile.
    Dashboard {
        /// Profile id of the caller.
        profile: Uuid,
    },

    /// Print platform-wide analytics metrics.
    Analytics,

    /// Print a farmer's credit and insurance summary.
    Credit {
        /// Profile id of the farmer.
        farmer: Uuid,
    },

    /// List the views each role may reach.
    Views,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    // Load configuration, falling back to defaults if the file is absent
    // or unreadable. The warning is emitted after the subscriber is up.
    let config_path = cli
        .config
        .clone()
        .unwrap_or_else(config::default_config_path);
    let (cli_config, load_err) = match CliConfig::load(&config_path) {
        Ok(cfg) => (cfg, None),
        Err(e) => (CliConfig::default(), Some(e)),
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&cli_config.log_level)),
        )
        .init();

    match load_err {
        None => tracing::info!("Loaded configuration from {}", config_path),
        Some(e) => tracing::warn!(
            "Could not load config from {}: {}. Using defaults.",
            config_path,
            e
        ),
    }

    match &cli.command {
        Commands::Seed => commands::seed::run(&cli_config).await?,
        Commands::Trace { batch_id } => {
            commands::trace::run(&cli_config, batch_id, cli.json).await?
        }
        Commands::Dashboard { profile } => {
            commands::dashboard::run(&cli_config, profile, cli.json).await?
        }
        Commands::Analytics => commands::analytics::run(&cli_config, cli.json).await?,
        Commands::Credit { farmer } => {
            commands::credit::run(&cli_config, farmer, cli.json).await?
        }
        Commands::Views => commands::views::run(cli.json)?,
    }

    Ok(())
}
