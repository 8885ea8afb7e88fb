//! Games command - list supported games

use anyhow::Result;
use battle_themes_core::{Config, Game};
use battle_themes_shared::P3P_BGM_PATH_TEMPLATE;

/// Execute the games command
pub fn execute(config: &Config) -> Result<()> {
    println!("{:<10} {:>8}  {:<32} Route", "Game", "Base ID", "Title");
    for game in Game::all() {
        println!(
            "{:<10} {:>8}  {:<32} {}",
            game.as_str(),
            config.base_bgm_id(*game),
            game.title(),
            route_summary(*game)
        );
    }
    Ok(())
}

fn route_summary(game: Game) -> String {
    match game.cue_table() {
        Some(table) => format!("cue in {} {:?}", table.acb_name, table.category_ids),
        None => format!("file {P3P_BGM_PATH_TEMPLATE}"),
    }
}
