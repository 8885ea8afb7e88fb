//! In-memory record of every registered mod song.

use hashbrown::HashMap;
use serde::Serialize;

/// A song contributed by a mod and registered with the audio engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ModSong {
    /// Id of the mod that contributed the song
    pub mod_owner: String,
    /// File name without extension (display only, not unique)
    pub name: String,
    /// BGM id the song was registered under
    pub bgm_id: u32,
}

/// Append-only list of registered songs.
///
/// Songs are kept in registration order. A per-mod index makes
/// [`Catalog::songs_for`] proportional to that mod's song count.
#[derive(Debug, Default)]
pub struct Catalog {
    songs: Vec<ModSong>,
    by_mod: HashMap<String, Vec<usize>>,
}

impl Catalog {
    /// Create an empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a song.
    pub fn push(&mut self, song: ModSong) {
        self.by_mod
            .entry(song.mod_owner.clone())
            .or_default()
            .push(self.songs.len());
        self.songs.push(song);
    }

    /// Number of registered songs.
    pub fn len(&self) -> usize {
        self.songs.len()
    }

    /// Returns true if nothing has been registered.
    pub fn is_empty(&self) -> bool {
        self.songs.is_empty()
    }

    /// All songs in registration order.
    pub fn songs(&self) -> &[ModSong] {
        &self.songs
    }

    /// Songs contributed by `mod_id`, in registration order.
    pub fn songs_for(&self, mod_id: &str) -> Vec<&ModSong> {
        self.by_mod
            .get(mod_id)
            .map(|indices| indices.iter().map(|&i| &self.songs[i]).collect())
            .unwrap_or_default()
    }

    /// Ids of mods that have at least one song, in first-registration order.
    pub fn mod_ids(&self) -> Vec<&str> {
        let mut ids: Vec<&str> = self.by_mod.keys().map(String::as_str).collect();
        ids.sort_by_key(|id| self.by_mod[*id][0]);
        ids
    }
}
