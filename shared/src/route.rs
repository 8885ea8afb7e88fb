//! Registration records handed to the audio router.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::cue_table::{CueTable, P3P_BGM_PATH_TEMPLATE};
use crate::Game;

/// Category ids attached to a cue (never more than a handful).
pub type CategoryIds = SmallVec<[u32; 8]>;

/// How the audio engine should find a contributed file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum AudioRoute {
    /// Add a new cue to a cue sheet; the cue name is the decimal BGM id.
    Cue {
        cue_name: String,
        acb_name: String,
        category_ids: CategoryIds,
    },
    /// Substitute the engine file at `audio_file_path`.
    FilePath { audio_file_path: String },
}

impl AudioRoute {
    /// Build the route for `bgm_id` in `game`.
    ///
    /// Total over [`Game`]: cue-based games get a cue named after the id,
    /// file-substitution games get the id embedded in a synthesized path.
    pub fn for_game(game: Game, bgm_id: u32) -> Self {
        match game.cue_table() {
            Some(table) => Self::cue(table, bgm_id),
            None => AudioRoute::FilePath {
                audio_file_path: P3P_BGM_PATH_TEMPLATE.replace("{id}", &bgm_id.to_string()),
            },
        }
    }

    fn cue(table: &CueTable, bgm_id: u32) -> Self {
        AudioRoute::Cue {
            cue_name: bgm_id.to_string(),
            acb_name: table.acb_name.to_string(),
            category_ids: table.category_ids.iter().copied().collect(),
        }
    }
}

/// One file handed to the audio router together with its route.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AudioRegistration {
    /// Contributed audio file on disk
    pub file: PathBuf,
    /// Where the engine should find it
    pub route: AudioRoute,
}

impl AudioRegistration {
    /// Build the registration record for `file` allocated to `bgm_id` in `game`.
    pub fn new(game: Game, bgm_id: u32, file: &Path) -> Self {
        Self {
            file: file.to_path_buf(),
            route: AudioRoute::for_game(game, bgm_id),
        }
    }
}
