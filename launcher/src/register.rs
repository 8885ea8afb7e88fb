//! Register command - scan mods and build the routing table

use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{Context, Result};
use battle_themes_core::{
    AudioRegistration, Config, Game, ModSong, MusicRegistry, RegistrationReport, discover_mods,
    register_mods,
};
use clap::Args;
use serde::Serialize;

use crate::router::ManifestRouter;

/// Arguments for the register command
#[derive(Args)]
pub struct RegisterArgs {
    /// Host application id used to detect the game (e.g. p5rpc.exe)
    #[arg(long)]
    pub app_id: String,

    /// Folder containing one subfolder per mod (folder name = mod id)
    #[arg(long)]
    pub mods: PathBuf,

    /// Write the routing table and song list to this JSON file
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Routing table written by `--output`.
#[derive(Serialize)]
struct RoutingTable<'a> {
    game: Game,
    base_bgm_id: u32,
    registrations: Vec<AudioRegistration>,
    songs: &'a [ModSong],
}

/// Execute the register command
pub fn execute(args: RegisterArgs, mut config: Config) -> Result<()> {
    let game = Game::from_app_id(&args.app_id)?;
    tracing::info!(game = %game, "Detected {}", game.title());

    config.migrate_legacy_defaults(game);

    if !args.mods.is_dir() {
        anyhow::bail!("Mods folder not found: {}", args.mods.display());
    }

    let router = Arc::new(ManifestRouter::new());
    let mut registry = MusicRegistry::new(router.clone(), game, &config);
    let mods = discover_mods(&args.mods);
    let report = register_mods(&mut registry, &mods);

    print_summary(&registry, &report);

    if let Some(output) = &args.output {
        let table = RoutingTable {
            game,
            base_bgm_id: registry.base_bgm_id(),
            registrations: router.registrations(),
            songs: registry.songs(),
        };
        write_json(output, &table)?;
        println!("Routing table written to {}", output.display());
    }

    Ok(())
}

fn print_summary(registry: &MusicRegistry, report: &RegistrationReport) {
    println!("=== {} ===", registry.game().title());
    for (mod_id, count) in &report.registered {
        if *count == 0 {
            continue;
        }
        println!("  {mod_id} ({count} songs)");
        for song in registry.mod_songs(mod_id) {
            println!("    {:>6}  {}", song.bgm_id, song.name);
        }
    }
    for (mod_id, error) in &report.failed {
        println!("  {mod_id} FAILED: {error}");
        for song in registry.mod_songs(mod_id) {
            println!("    {:>6}  {}", song.bgm_id, song.name);
        }
    }
    println!("  {} songs registered", registry.len());
}

fn write_json(path: &Path, value: &impl Serialize) -> Result<()> {
    let json = serde_json::to_string_pretty(value).context("Failed to serialize routing table")?;
    std::fs::write(path, json)
        .with_context(|| format!("Failed to write routing table: {}", path.display()))
}
