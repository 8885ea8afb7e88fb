//! Mod music registration
//!
//! Discovers audio files shipped by mods, assigns each a BGM id, routes it
//! into the game's audio engine, and records which mod owns which id.

mod catalog;
mod registry;
mod scanning;

pub use catalog::{Catalog, ModSong};
pub use registry::MusicRegistry;
pub use scanning::{MUSIC_SUBDIR, find_music_files, music_dir};
