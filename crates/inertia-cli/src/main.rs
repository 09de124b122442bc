use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::warn;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use inertia_core::AppConfig;
use inertia_tui::scroll::UiConfigExt;

mod commands;

#[derive(Parser)]
#[command(name = "inertia")]
#[command(author, version, about = "Momentum wheel scrolling for the terminal")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Path to the configuration file (default: ~/.config/inertia/config.toml)
    #[arg(short = 'c', long = "config", global = true)]
    config: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// View a text file with momentum scrolling
    Run {
        /// File to view (a built-in sample when omitted)
        file: Option<PathBuf>,
    },
    /// Run the engine headless and print every tick
    Simulate {
        /// Wheel delta to inject (repeatable, positive = down)
        #[arg(short = 'd', long = "delta", allow_negative_numbers = true, default_value = "100")]
        deltas: Vec<f64>,
        /// Frames delivered between consecutive wheel events
        #[arg(long, default_value_t = 0)]
        gap: u32,
        /// Total content height
        #[arg(long, default_value_t = 10_000.0)]
        scroll_height: f64,
        /// Visible viewport height
        #[arg(long, default_value_t = 600.0)]
        viewport_height: f64,
        /// Initial scroll offset
        #[arg(long, default_value_t = 0.0)]
        start: f64,
        /// Deliver frames from a real timer at the configured frame interval
        #[arg(long)]
        realtime: bool,
    },
    /// Print the effective configuration
    Config {
        /// Print only the configuration file path
        #[arg(long)]
        path: bool,
        /// Write the effective configuration to the file
        #[arg(long, conflicts_with = "path")]
        write: bool,
    },
}

/// Initialize logging; the TUI only logs when RUST_LOG asks for it so the
/// alternate screen stays clean
fn init_logging(config: &AppConfig, interactive: bool) {
    let filter = match std::env::var("RUST_LOG") {
        Ok(filter) => filter,
        Err(_) if interactive => return,
        Err(_) => config.general.log_level.clone(),
    };

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(filter))
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .try_init()
        .ok();
}

/// Load the configuration file, logging why it was rejected before bailing out
fn load_config(path: &Path) -> Result<AppConfig> {
    match AppConfig::load_from(path) {
        Ok(config) => Ok(config),
        Err(err) => {
            init_logging(&AppConfig::default(), false);
            warn!(path = %path.display(), error = %err, "Rejected configuration file");
            Err(err).with_context(|| format!("Failed to load {}", path.display()))
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Load configuration
    let config_path = cli.config.unwrap_or_else(AppConfig::config_path);
    let config = load_config(&config_path)?;

    let interactive = matches!(cli.command, Some(Commands::Run { .. }) | None);
    init_logging(&config, interactive);

    // Handle commands
    match cli.command {
        Some(Commands::Run { file }) => commands::run::run(config, file.as_deref()).await,
        None => commands::run::run(config, None).await,
        Some(Commands::Simulate {
            deltas,
            gap,
            scroll_height,
            viewport_height,
            start,
            realtime,
        }) => {
            let options = commands::simulate::SimulateOptions {
                deltas,
                gap,
                scroll_height,
                viewport_height,
                start,
                pace: realtime.then(|| config.ui.frame_interval()),
            };
            commands::simulate::run(&config, &options).await
        }
        Some(Commands::Config { path, write }) => {
            commands::config::run(&config, &config_path, path, write)
        }
    }
}
