//! Music registry: scan, allocate, route, record.

use std::path::Path;
use std::sync::Arc;

use battle_themes_shared::{
    AudioRegistration, Game, SUPPORTED_MUSIC_EXTENSIONS, is_valid_mod_id,
};

use super::catalog::{Catalog, ModSong};
use super::scanning::{find_music_files, music_dir};
use crate::config::Config;
use crate::error::{RegistryError, RegistryResult};
use crate::router::AudioRouter;

/// Registers mod music with the game's audio engine and remembers who owns
/// which BGM id.
///
/// Ids are handed out sequentially from the game's base id across all mods:
/// the `k`-th song ever registered gets `base + k`. One registry exists per
/// process; hosts that register from several threads wrap it in
/// [`SharedMusicRegistry`](crate::SharedMusicRegistry).
pub struct MusicRegistry {
    router: Arc<dyn AudioRouter>,
    game: Game,
    base_bgm_id: u32,
    extensions: Vec<String>,
    catalog: Catalog,
}

impl MusicRegistry {
    /// Create an empty registry for `game`, taking its base id from `config`.
    pub fn new(router: Arc<dyn AudioRouter>, game: Game, config: &Config) -> Self {
        Self {
            router,
            game,
            base_bgm_id: config.base_bgm_id(game),
            extensions: SUPPORTED_MUSIC_EXTENSIONS
                .iter()
                .map(|ext| ext.to_string())
                .collect(),
            catalog: Catalog::new(),
        }
    }

    /// Replace the list of file extensions (without the dot) picked up from
    /// music folders.
    pub fn with_extensions<I, S>(mut self, extensions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.extensions = extensions.into_iter().map(Into::into).collect();
        self
    }

    /// Register every supported file under `<mod_dir>/battle-themes/music`.
    ///
    /// A mod without a music folder contributes nothing and is not an error.
    /// Files are registered in sorted walk order. If the router rejects a
    /// file, registration of this mod stops there and the error is returned;
    /// songs registered before the failure stay in the catalog, and the
    /// rejected file does not use up an id.
    pub fn register_mod_music(&mut self, mod_id: &str, mod_dir: &Path) -> RegistryResult<()> {
        if !is_valid_mod_id(mod_id) {
            return Err(RegistryError::InvalidModId {
                mod_id: mod_id.to_string(),
            });
        }

        let dir = music_dir(mod_dir);
        if !dir.is_dir() {
            tracing::debug!(mod_id, dir = %dir.display(), "Mod has no music folder");
            return Ok(());
        }

        for file in find_music_files(&dir, self.extensions.as_slice())? {
            let name = song_name(&file);
            let bgm_id = self
                .next_bgm_id()
                .ok_or_else(|| RegistryError::IdSpaceExhausted {
                    base: self.base_bgm_id,
                    count: self.catalog.len(),
                })?;

            let registration = AudioRegistration::new(self.game, bgm_id, &file);
            self.router
                .add_audio_path(&registration)
                .map_err(|source| RegistryError::Routing {
                    path: file.clone(),
                    bgm_id,
                    source,
                })?;

            tracing::info!(song = %name, mod_id, bgm_id, "Registered song");
            self.catalog.push(ModSong {
                mod_owner: mod_id.to_string(),
                name,
                bgm_id,
            });
        }

        Ok(())
    }

    /// Songs added by `mod_id`, in registration order.
    ///
    /// Empty for unknown mods.
    pub fn mod_songs(&self, mod_id: &str) -> Vec<&ModSong> {
        self.catalog.songs_for(mod_id)
    }

    /// Every registered song, in registration order.
    pub fn songs(&self) -> &[ModSong] {
        self.catalog.songs()
    }

    /// The underlying catalog.
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Number of registered songs.
    pub fn len(&self) -> usize {
        self.catalog.len()
    }

    /// Returns true if no song has been registered.
    pub fn is_empty(&self) -> bool {
        self.catalog.is_empty()
    }

    /// The game this registry routes into.
    pub fn game(&self) -> Game {
        self.game
    }

    /// First id handed out by this registry.
    pub fn base_bgm_id(&self) -> u32 {
        self.base_bgm_id
    }

    /// Id the next registered song will receive.
    ///
    /// `None` once `base + len` no longer fits in a `u32`.
    pub fn next_bgm_id(&self) -> Option<u32> {
        u32::try_from(self.catalog.len())
            .ok()
            .and_then(|count| self.base_bgm_id.checked_add(count))
    }
}

/// File name without extension.
fn song_name(file: &Path) -> String {
    file.file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_default()
}
