//! Per-game audio engine constants.
//!
//! This module is the single source of truth for how each game's audio engine
//! groups cues. The container names and category ids must match the engine
//! exactly, otherwise playback requests never reach the registered file.
//!
//! # Example
//!
//! ```
//! use battle_themes_shared::{Game, P4G_CUE_TABLE};
//!
//! assert_eq!(P4G_CUE_TABLE.acb_name, "snd00_bgm");
//! assert_eq!(P4G_CUE_TABLE.category_ids, &[6, 13]);
//! assert_eq!(Game::P4G.cue_table(), Some(&P4G_CUE_TABLE));
//! ```

use crate::Game;

/// Cue-sheet layout for a game whose audio engine resolves music by cue name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CueTable {
    /// Name of the cue sheet (ACB) that holds background music
    pub acb_name: &'static str,

    /// Category ids every added cue is tagged with
    pub category_ids: &'static [u32],
}

impl CueTable {
    /// Create a new cue table description.
    pub const fn new(acb_name: &'static str, category_ids: &'static [u32]) -> Self {
        Self {
            acb_name,
            category_ids,
        }
    }
}

/// Persona 3 Reload: `bgm` sheet, categories 0 and 13.
pub const P3R_CUE_TABLE: CueTable = CueTable::new("bgm", &[0, 13]);

/// Persona 5 Royal: `bgm` sheet, categories 1 and 8.
pub const P5R_CUE_TABLE: CueTable = CueTable::new("bgm", &[1, 8]);

/// Persona 4 Golden: `snd00_bgm` sheet, categories 6 and 13.
pub const P4G_CUE_TABLE: CueTable = CueTable::new("snd00_bgm", &[6, 13]);

/// Metaphor: ReFantazio.
pub const METAPHOR_CUE_TABLE: CueTable = CueTable::new("bgm", &[0, 9, 12]);

/// Shin Megami Tensei V: Vengeance.
pub const SMT5V_CUE_TABLE: CueTable = CueTable::new("bgm", &[0, 4, 9, 40, 11, 35, 50]);

/// Persona 3 Portable replaces whole files; `{id}` is substituted with the BGM id.
pub const P3P_BGM_PATH_TEMPLATE: &str = "data/sound/bgm/{id}.adx";

/// File extensions (without the dot) picked up from a mod's music folder.
pub const SUPPORTED_MUSIC_EXTENSIONS: &[&str] = &["hca"];

impl Game {
    /// Cue table for cue-based games, `None` for file-substitution games.
    pub fn cue_table(&self) -> Option<&'static CueTable> {
        match self {
            Game::P3R => Some(&P3R_CUE_TABLE),
            Game::P5R => Some(&P5R_CUE_TABLE),
            Game::P4G => Some(&P4G_CUE_TABLE),
            Game::P3P => None,
            Game::Metaphor => Some(&METAPHOR_CUE_TABLE),
            Game::Smt5v => Some(&SMT5V_CUE_TABLE),
        }
    }
}
