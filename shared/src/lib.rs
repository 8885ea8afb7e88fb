//! Shared types for Battle Themes.
//!
//! Plain data used by both the music registry and the hosts that drive it:
//! the closed set of supported games, the per-game cue tables, and the
//! registration records handed to the audio router.

pub mod cue_table;
pub mod game;
pub mod ids;
pub mod route;

pub use cue_table::{
    CueTable, METAPHOR_CUE_TABLE, P3P_BGM_PATH_TEMPLATE, P3R_CUE_TABLE, P4G_CUE_TABLE,
    P5R_CUE_TABLE, SMT5V_CUE_TABLE, SUPPORTED_MUSIC_EXTENSIONS,
};
pub use game::{Game, GameParseError};
pub use ids::is_valid_mod_id;
pub use route::{AudioRegistration, AudioRoute, CategoryIds};
