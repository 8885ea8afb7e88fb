//! Thread-safe registry handle
//!
//! [`MusicRegistry`] assumes one caller at a time. Hosts that register mods
//! from several threads share a [`SharedMusicRegistry`], which holds a single
//! lock across id allocation and catalog append.

use std::path::Path;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use battle_themes_shared::Game;

use crate::error::RegistryResult;
use crate::music::{ModSong, MusicRegistry};

/// Cloneable, lock-guarded handle to a [`MusicRegistry`].
#[derive(Clone)]
pub struct SharedMusicRegistry {
    inner: Arc<Mutex<MusicRegistry>>,
}

impl SharedMusicRegistry {
    pub fn new(registry: MusicRegistry) -> Self {
        Self {
            inner: Arc::new(Mutex::new(registry)),
        }
    }

    /// See [`MusicRegistry::register_mod_music`]. Holds the lock for the
    /// whole mod.
    pub fn register_mod_music(&self, mod_id: &str, mod_dir: &Path) -> RegistryResult<()> {
        self.lock().register_mod_music(mod_id, mod_dir)
    }

    /// Songs added by `mod_id`, in registration order.
    pub fn mod_songs(&self, mod_id: &str) -> Vec<ModSong> {
        self.lock().mod_songs(mod_id).into_iter().cloned().collect()
    }

    /// Every registered song, in registration order.
    pub fn songs(&self) -> Vec<ModSong> {
        self.lock().songs().to_vec()
    }

    pub fn game(&self) -> Game {
        self.lock().game()
    }

    /// Run `f` with exclusive access to the registry.
    pub fn with<R>(&self, f: impl FnOnce(&mut MusicRegistry) -> R) -> R {
        f(&mut self.lock())
    }

    // A panic while holding the lock cannot leave the catalog half-written:
    // songs are appended only after the router accepts them.
    fn lock(&self) -> MutexGuard<'_, MusicRegistry> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
