//! Testboard CLI - Main Entry Point

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use testboard_cli::commands::{action, config as config_cmd, list, show, watch};
use testboard_cli::config::{default_config_path, CliConfig, Settings};
use testboard_cli::output::{self, OutputFormat};
use testboard_common::CleanupAction;

/// Testboard - follow, filter and replay recorded test runs
#[derive(Parser)]
#[command(name = "testboard")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Dashboard URL; a `q` parameter seeds the search query
    #[arg(long, env = "TESTBOARD_URL", global = true)]
    url: Option<String>,

    /// Configuration file path [default: ~/.testboard/config.toml]
    #[arg(short, long, env = "TESTBOARD_CONFIG", global = true)]
    config: Option<PathBuf>,

    /// Output format
    #[arg(long, global = true)]
    format: Option<OutputFormat>,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Follow the dashboard, polling for new tests
    Watch(watch::WatchArgs),

    /// List the dashboard's tests once
    List(list::ListArgs),

    /// Show details, video and logs of one test
    Show(show::ShowArgs),

    /// Delete recorded videos and logs on the dashboard
    Cleanup(action::ActionArgs),

    /// Reset the dashboard listing
    Reset(action::ActionArgs),

    /// Manage the config file
    #[command(subcommand)]
    Config(config_cmd::ConfigCommands),

    /// Show version information
    Version,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level)),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let config_path = cli.config.clone().unwrap_or_else(default_config_path);
    let config = CliConfig::load(&config_path)?;

    let result = match cli.command {
        Commands::Config(cmd) => config_cmd::execute(cmd, &config, &config_path),
        Commands::Version => {
            println!("Testboard CLI v{}", env!("CARGO_PKG_VERSION"));
            println!("Core library v{}", testboard_common::VERSION);
            Ok(())
        }
        command => match config.resolve(cli.url.as_deref(), cli.format) {
            Ok(settings) => run(command, &settings).await,
            Err(e) => Err(e),
        },
    };

    if let Err(e) = result {
        output::print_error(&format!("{:#}", e));
        std::process::exit(1);
    }
    Ok(())
}

async fn run(command: Commands, settings: &Settings) -> anyhow::Result<()> {
    match command {
        Commands::Watch(args) => watch::execute(args, settings).await,
        Commands::List(args) => list::execute(args, settings).await,
        Commands::Show(args) => show::execute(args, settings).await,
        Commands::Cleanup(args) => action::execute(CleanupAction::Cleanup, args, settings).await,
        Commands::Reset(args) => action::execute(CleanupAction::Reset, args, settings).await,
        Commands::Config(_) | Commands::Version => Ok(()),
    }
}
