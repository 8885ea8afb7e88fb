//! Host-side registration loop
//!
//! Hosts register each loaded mod in turn. One mod's failure is logged and
//! recorded but never stops the others.

use std::path::{Path, PathBuf};

use crate::error::RegistryError;
use crate::music::MusicRegistry;

/// A mod to register: its id and installation folder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModSource {
    /// Unique mod identifier
    pub id: String,
    /// Mod installation root
    pub dir: PathBuf,
}

impl ModSource {
    pub fn new(id: impl Into<String>, dir: impl Into<PathBuf>) -> Self {
        Self {
            id: id.into(),
            dir: dir.into(),
        }
    }
}

/// Outcome of [`register_mods`].
#[derive(Debug, Default)]
pub struct RegistrationReport {
    /// Mods that registered cleanly, with the number of songs each added
    pub registered: Vec<(String, usize)>,
    /// Mods whose registration failed; songs added before the failure remain
    pub failed: Vec<(String, RegistryError)>,
}

impl RegistrationReport {
    /// Returns true if every mod registered without error.
    pub fn is_ok(&self) -> bool {
        self.failed.is_empty()
    }

    /// Total songs added by the mods that registered cleanly.
    pub fn song_count(&self) -> usize {
        self.registered.iter().map(|(_, count)| count).sum()
    }
}

/// Register every mod in `mods`, in order.
pub fn register_mods(registry: &mut MusicRegistry, mods: &[ModSource]) -> RegistrationReport {
    let mut report = RegistrationReport::default();

    for source in mods {
        let before = registry.len();
        match registry.register_mod_music(&source.id, &source.dir) {
            Ok(()) => {
                let added = registry.len() - before;
                if added > 0 {
                    tracing::debug!(mod_id = %source.id, songs = added, "Mod registered");
                }
                report.registered.push((source.id.clone(), added));
            }
            Err(e) => {
                tracing::error!(mod_id = %source.id, error = %e, "Failed to register mod music");
                report.failed.push((source.id.clone(), e));
            }
        }
    }

    report
}

/// Lists the mods installed under `mods_dir`.
///
/// Every immediate subdirectory is a mod whose id is the directory name.
/// Sorted by id. A missing `mods_dir` yields no mods.
pub fn discover_mods(mods_dir: &Path) -> Vec<ModSource> {
    let Ok(entries) = std::fs::read_dir(mods_dir) else {
        return vec![];
    };

    let mut mods: Vec<ModSource> = entries
        .filter_map(|entry| {
            let entry = entry.ok()?;
            let path = entry.path();
            if !path.is_dir() {
                return None;
            }
            let id = entry.file_name().to_str()?.to_string();
            Some(ModSource::new(id, path))
        })
        .collect();

    mods.sort_by(|a, b| a.id.cmp(&b.id));
    mods
}
