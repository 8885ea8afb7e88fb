//! Battle Themes Core - mod music registry
//!
//! This crate adds battle music supplied by mods to a running game's audio
//! engine.
//!
//! # Architecture
//!
//! - [`MusicRegistry`] - Scans a mod's music folder, allocates BGM ids and
//!   records ownership
//! - [`AudioRouter`] - Host-supplied hook that applies a registration to the
//!   audio engine
//! - [`Config`] - Per-game base ids and log level (config.toml)
//! - [`register_mods`] - Host loop that registers many mods, isolating failures
//! - [`SharedMusicRegistry`] - Lock wrapper for hosts that register from
//!   several threads

pub mod config;
pub mod error;
pub mod host;
pub mod music;
pub mod router;
pub mod sync;
#[cfg(test)]
pub mod test_utils;

pub use config::{BaseBgmIds, Config};
pub use error::{ConfigError, RegistryError, RegistryResult};
pub use host::{ModSource, RegistrationReport, discover_mods, register_mods};
pub use music::{Catalog, ModSong, MusicRegistry};
pub use router::AudioRouter;
pub use sync::SharedMusicRegistry;

// Re-export shared types for convenience
pub use battle_themes_shared::{AudioRegistration, AudioRoute, Game, GameParseError};
