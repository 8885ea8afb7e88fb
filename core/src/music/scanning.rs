//! Music folder discovery
//!
//! Finds the audio files a mod contributes under
//! `<mod_dir>/battle-themes/music`, recursing into subfolders.

use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::error::{RegistryError, RegistryResult};

/// Folder (relative to a mod's root) that holds its battle music.
pub const MUSIC_SUBDIR: [&str; 2] = ["battle-themes", "music"];

/// Returns `<mod_dir>/battle-themes/music`.
pub fn music_dir(mod_dir: &Path) -> PathBuf {
    MUSIC_SUBDIR
        .iter()
        .fold(mod_dir.to_path_buf(), |dir, part| dir.join(part))
}

/// Lists every file under `dir` whose extension is in `extensions`.
///
/// Extensions are given without the dot and compared ignoring ASCII case.
/// Entries are visited depth-first with each folder's entries sorted by file
/// name, so the result is the same on every platform.
///
/// A missing or unreadable `dir` yields an empty list. Errors below `dir`
/// are returned.
pub fn find_music_files<S: AsRef<str>>(dir: &Path, extensions: &[S]) -> RegistryResult<Vec<PathBuf>> {
    if !dir.is_dir() {
        return Ok(vec![]);
    }

    let mut files = Vec::new();
    for entry in WalkDir::new(dir).sort_by_file_name() {
        let entry = match entry {
            Ok(entry) => entry,
            // The root itself could not be opened
            Err(e) if e.depth() == 0 => {
                tracing::debug!(dir = %dir.display(), error = %e, "Music folder unreadable");
                return Ok(vec![]);
            }
            Err(source) => {
                return Err(RegistryError::Scan {
                    dir: dir.to_path_buf(),
                    source,
                });
            }
        };

        // Links are not followed into folders, but a linked file is a song
        let is_file = entry.file_type().is_file()
            || (entry.path_is_symlink() && entry.path().is_file());
        if !is_file {
            continue;
        }

        let path = entry.into_path();
        if has_extension(&path, extensions) {
            files.push(path);
        } else {
            tracing::debug!(file = %path.display(), "Skipping unsupported file");
        }
    }

    Ok(files)
}

fn has_extension<S: AsRef<str>>(path: &Path, extensions: &[S]) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| {
            extensions
                .iter()
                .any(|supported| supported.as_ref().eq_ignore_ascii_case(ext))
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    const HCA: &[&str] = &["hca"];

    fn touch(path: &Path) {
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, b"HCA\0").unwrap();
    }

    fn names(files: &[PathBuf], root: &Path) -> Vec<String> {
        files
            .iter()
            .map(|f| {
                f.strip_prefix(root)
                    .unwrap()
                    .to_string_lossy()
                    .replace('\\', "/")
            })
            .collect()
    }

    #[test]
    fn test_music_dir_layout() {
        assert_eq!(
            music_dir(Path::new("mods/alice")),
            Path::new("mods/alice").join("battle-themes").join("music")
        );
    }

    #[test]
    fn test_missing_dir_is_empty() {
        let files = find_music_files(Path::new("/nonexistent/path/that/does/not/exist"), HCA).unwrap();
        assert!(files.is_empty());
    }

    #[test]
    fn test_file_instead_of_dir_is_empty() {
        let temp_dir = TempDir::new().unwrap();
        let not_a_dir = temp_dir.path().join("music");
        fs::write(&not_a_dir, b"").unwrap();
        assert!(find_music_files(&not_a_dir, HCA).unwrap().is_empty());
    }

    #[test]
    fn test_finds_files_recursively_in_name_order() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();
        touch(&root.join("zeta.hca"));
        touch(&root.join("alpha.hca"));
        touch(&root.join("bosses").join("final.hca"));
        touch(&root.join("bosses").join("deep").join("hidden.hca"));

        let files = find_music_files(root, HCA).unwrap();
        assert_eq!(
            names(&files, root),
            vec!["alpha.hca", "bosses/deep/hidden.hca", "bosses/final.hca", "zeta.hca"]
        );
    }

    #[test]
    fn test_extension_match_ignores_case() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();
        touch(&root.join("a.HCA"));
        touch(&root.join("b.Hca"));

        let files = find_music_files(root, HCA).unwrap();
        assert_eq!(names(&files, root), vec!["a.HCA", "b.Hca"]);
    }

    #[test]
    fn test_skips_unsupported_files() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();
        touch(&root.join("song.hca"));
        touch(&root.join("song.wav"));
        touch(&root.join("readme.txt"));
        touch(&root.join("hca"));
        fs::create_dir_all(root.join("folder.hca")).unwrap();

        let files = find_music_files(root, HCA).unwrap();
        assert_eq!(names(&files, root), vec!["song.hca"]);
    }

    #[cfg(unix)]
    #[test]
    fn test_symlinked_files_are_included() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path().join("music");
        touch(&root.join("plain.hca"));
        let target = temp_dir.path().join("elsewhere").join("real.hca");
        touch(&target);
        std::os::unix::fs::symlink(&target, root.join("linked.hca")).unwrap();
        std::os::unix::fs::symlink(temp_dir.path().join("missing.hca"), root.join("dangling.hca"))
            .unwrap();

        let files = find_music_files(&root, HCA).unwrap();
        assert_eq!(names(&files, &root), vec!["linked.hca", "plain.hca"]);
    }

    #[cfg(unix)]
    #[test]
    fn test_symlinked_folders_are_not_followed() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path().join("music");
        touch(&root.join("song.hca"));
        std::os::unix::fs::symlink(&root, root.join("loop")).unwrap();

        let files = find_music_files(&root, HCA).unwrap();
        assert_eq!(names(&files, &root), vec!["song.hca"]);
    }

    #[cfg(unix)]
    #[test]
    fn test_unreadable_root_is_empty() {
        use std::os::unix::fs::PermissionsExt;

        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path().join("music");
        touch(&root.join("song.hca"));
        fs::set_permissions(&root, fs::Permissions::from_mode(0o000)).unwrap();
        // Permission bits do not apply to privileged users
        if fs::read_dir(&root).is_ok() {
            fs::set_permissions(&root, fs::Permissions::from_mode(0o755)).unwrap();
            return;
        }

        let result = find_music_files(&root, HCA);
        fs::set_permissions(&root, fs::Permissions::from_mode(0o755)).unwrap();

        assert!(result.unwrap().is_empty());
    }

    #[test]
    fn test_custom_extension_list() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();
        touch(&root.join("a.hca"));
        touch(&root.join("b.adx"));

        let files = find_music_files(root, &["adx".to_string()]).unwrap();
        assert_eq!(names(&files, root), vec!["b.adx"]);
    }
}
