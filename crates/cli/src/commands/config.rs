//! Config file management

use std::path::Path;

use anyhow::{bail, Result};
use clap::Subcommand;

use crate::config::CliConfig;
use crate::output::print_success;

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Print the effective configuration
    Show,

    /// Write a config file with default values
    Init {
        /// Dashboard URL to store
        #[arg(long)]
        dashboard_url: Option<String>,

        /// Overwrite an existing file
        #[arg(short, long)]
        force: bool,
    },
}

pub fn execute(cmd: ConfigCommands, config: &CliConfig, path: &Path) -> Result<()> {
    match cmd {
        ConfigCommands::Show => {
            println!("# {}", path.display());
            print!("{}", toml::to_string_pretty(config)?);
        }

        ConfigCommands::Init {
            dashboard_url,
            force,
        } => {
            if path.exists() && !force {
                bail!("{} already exists; use --force to overwrite", path.display());
            }
            let config = CliConfig {
                dashboard_url,
                ..Default::default()
            };
            config.save(path)?;
            print_success(&format!("Wrote {}", path.display()));
        }
    }

    Ok(())
}
