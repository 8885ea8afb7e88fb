//! Battle Themes CLI - register mod battle music for a game
//!
//! # Commands
//!
//! - `battle-themes register` - Scan every mod in a folder and build the routing table
//! - `battle-themes init-config` - Write a default config.toml
//! - `battle-themes games` - List supported games and their base BGM ids
//!
//! # Usage
//!
//! ```bash
//! # Register all mods for Persona 5 Royal and save the routing table
//! battle-themes register --app-id p5rpc.exe --mods ./mods --output routes.json
//!
//! # Use an explicit config file
//! battle-themes --config ./config.toml games
//! ```

mod games;
mod init_config;
mod register;
mod router;

use std::path::PathBuf;

use anyhow::{Context, Result};
use battle_themes_core::{Config, config};
use clap::{Parser, Subcommand};

/// Battle Themes - register mod battle music for a game
#[derive(Parser)]
#[command(name = "battle-themes")]
#[command(about = "Register mod battle music with a game's audio engine")]
#[command(version)]
struct Cli {
    /// Config file (defaults to the platform config directory)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Register every mod's music and print the resulting songs
    Register(register::RegisterArgs),

    /// Write a default config.toml
    InitConfig(init_config::InitConfigArgs),

    /// List supported games with their base BGM ids
    Games,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => Config::load_from(path)
            .with_context(|| format!("Failed to load config: {}", path.display()))?,
        None => config::load(),
    };

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&config.log_level)),
        )
        .init();

    match cli.command {
        Commands::Register(args) => register::execute(args, config),
        Commands::InitConfig(args) => init_config::execute(args, cli.config),
        Commands::Games => games::execute(&config),
    }
}
