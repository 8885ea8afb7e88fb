//! Configuration management (config.toml)
//!
//! Holds the base BGM id reserved for mod music in each game, plus the log
//! level used by hosts. Settings are stored in TOML format in the
//! platform-specific config directory.

use std::path::{Path, PathBuf};

use battle_themes_shared::Game;
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Legacy P5R default base id.
const LEGACY_P5R_BASE_BGM_ID: u32 = 12000;
/// Legacy P4G default base id.
const LEGACY_P4G_BASE_BGM_ID: u32 = 693;

/// Application configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Log filter used when `RUST_LOG` is not set (default: "info")
    #[serde(default = "default_log_level")]
    pub log_level: String,
    /// First BGM id handed out to mod music, per game
    #[serde(default)]
    pub base_bgm_ids: BaseBgmIds,
}

/// Base BGM id per game.
///
/// Songs registered for a game receive `base + n` where `n` counts songs
/// registered before them. The range must not overlap the game's own tracks;
/// the registry does not check this.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BaseBgmIds {
    #[serde(default = "default_base_bgm_id")]
    pub p3p: u32,
    #[serde(default = "default_base_bgm_id")]
    pub p4g: u32,
    #[serde(default = "default_base_bgm_id")]
    pub p5r: u32,
    #[serde(default = "default_base_bgm_id")]
    pub p3r: u32,
    #[serde(default = "default_base_bgm_id")]
    pub metaphor: u32,
    #[serde(default = "default_base_bgm_id")]
    pub smt5v: u32,
}

fn default_log_level() -> String {
    "info".to_string()
}
fn default_base_bgm_id() -> u32 {
    4000
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            base_bgm_ids: BaseBgmIds::default(),
        }
    }
}

impl Default for BaseBgmIds {
    fn default() -> Self {
        Self {
            p3p: default_base_bgm_id(),
            p4g: default_base_bgm_id(),
            p5r: default_base_bgm_id(),
            p3r: default_base_bgm_id(),
            metaphor: default_base_bgm_id(),
            smt5v: default_base_bgm_id(),
        }
    }
}

impl BaseBgmIds {
    /// Base id for `game`.
    pub fn for_game(&self, game: Game) -> u32 {
        match game {
            Game::P3P => self.p3p,
            Game::P4G => self.p4g,
            Game::P5R => self.p5r,
            Game::P3R => self.p3r,
            Game::Metaphor => self.metaphor,
            Game::Smt5v => self.smt5v,
        }
    }

    /// Mutable base id for `game`.
    pub fn for_game_mut(&mut self, game: Game) -> &mut u32 {
        match game {
            Game::P3P => &mut self.p3p,
            Game::P4G => &mut self.p4g,
            Game::P5R => &mut self.p5r,
            Game::P3R => &mut self.p3r,
            Game::Metaphor => &mut self.metaphor,
            Game::Smt5v => &mut self.smt5v,
        }
    }
}

impl Config {
    /// Base id for `game`.
    pub fn base_bgm_id(&self, game: Game) -> u32 {
        self.base_bgm_ids.for_game(game)
    }

    /// Rewrites base ids left at an old default to the current default.
    ///
    /// Only the running game's id is touched: P5R `12000` and P4G `693`
    /// become `4000`. Returns true if the config changed.
    pub fn migrate_legacy_defaults(&mut self, game: Game) -> bool {
        let legacy = match game {
            Game::P5R => LEGACY_P5R_BASE_BGM_ID,
            Game::P4G => LEGACY_P4G_BASE_BGM_ID,
            Game::P3R | Game::P3P | Game::Metaphor | Game::Smt5v => return false,
        };

        let base = self.base_bgm_ids.for_game_mut(game);
        if *base != legacy {
            return false;
        }

        *base = default_base_bgm_id();
        tracing::info!(
            game = %game,
            from = legacy,
            to = *base,
            "Base BGM ID updated from legacy default"
        );
        true
    }

    /// Reads a config file, failing if it is missing or malformed.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Writes the config file, creating parent directories as needed.
    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        let content = toml::to_string_pretty(self)?;
        let io_err = |source: std::io::Error| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        };
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent).map_err(io_err)?;
        }
        std::fs::write(path, content).map_err(io_err)
    }
}

/// Returns the platform-specific configuration directory.
///
/// On Windows: `%APPDATA%\BattleThemes\config`
/// On macOS: `~/Library/Application Support/io.bgme.BattleThemes`
/// On Linux: `~/.config/BattleThemes`
///
/// Returns `None` if the home directory cannot be determined.
pub fn config_dir() -> Option<PathBuf> {
    directories::ProjectDirs::from("io.bgme", "", "BattleThemes")
        .map(|dirs| dirs.config_dir().to_path_buf())
}

/// Returns the default config file path (`<config_dir>/config.toml`).
pub fn config_path() -> Option<PathBuf> {
    config_dir().map(|dir| dir.join("config.toml"))
}

/// Loads the configuration from the platform config directory.
///
/// Returns default values if the file doesn't exist or cannot be parsed.
pub fn load() -> Config {
    config_path()
        .and_then(|path| match Config::load_from(&path) {
            Ok(config) => Some(config),
            Err(ConfigError::Io { .. }) => None,
            Err(e) => {
                tracing::warn!(error = %e, "Ignoring invalid config file");
                None
            }
        })
        .unwrap_or_default()
}
