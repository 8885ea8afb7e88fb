//! Init-config command - write a default config.toml

use std::path::PathBuf;

use anyhow::{Context, Result};
use battle_themes_core::{Config, config};
use clap::Args;

/// Arguments for the init-config command
#[derive(Args)]
pub struct InitConfigArgs {
    /// Where to write the file (defaults to --config, then the platform config directory)
    #[arg(long)]
    pub path: Option<PathBuf>,

    /// Overwrite an existing file
    #[arg(long)]
    pub force: bool,
}

/// Execute the init-config command
///
/// Writes to `--path`, else `--config`, else the platform config directory.
pub fn execute(args: InitConfigArgs, config_path: Option<PathBuf>) -> Result<()> {
    let path = args
        .path
        .or(config_path)
        .or_else(config::config_path)
        .context("Could not determine the config directory; pass --config")?;

    if path.exists() && !args.force {
        anyhow::bail!(
            "Config already exists: {} (use --force to overwrite)",
            path.display()
        );
    }

    Config::default()
        .save_to(&path)
        .with_context(|| format!("Failed to write config: {}", path.display()))?;
    println!("Wrote default config to {}", path.display());
    Ok(())
}
