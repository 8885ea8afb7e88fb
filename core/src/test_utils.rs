//! Shared test utilities for unit tests

use std::path::{Path, PathBuf};
use std::sync::Mutex;

use battle_themes_shared::AudioRegistration;

use crate::music::music_dir;
use crate::router::AudioRouter;

// ============================================================================
// Test Router Implementation
// ============================================================================

/// Router that records every accepted registration.
///
/// Optionally rejects the n-th call (zero-based) to simulate the audio engine
/// refusing a file.
pub struct RecordingRouter {
    accepted: Mutex<Vec<AudioRegistration>>,
    calls: Mutex<usize>,
    fail_on: Option<usize>,
}

impl RecordingRouter {
    /// Router that accepts everything.
    pub fn new() -> Self {
        Self {
            accepted: Mutex::new(Vec::new()),
            calls: Mutex::new(0),
            fail_on: None,
        }
    }

    /// Router that rejects the `call`-th registration it sees.
    pub fn failing_on(call: usize) -> Self {
        Self {
            fail_on: Some(call),
            ..Self::new()
        }
    }

    /// Registrations accepted so far, in call order.
    pub fn registrations(&self) -> Vec<AudioRegistration> {
        self.accepted.lock().unwrap().clone()
    }

    /// Number of calls made, including rejected ones.
    pub fn call_count(&self) -> usize {
        *self.calls.lock().unwrap()
    }
}

impl AudioRouter for RecordingRouter {
    fn add_audio_path(&self, registration: &AudioRegistration) -> anyhow::Result<()> {
        let call = {
            let mut calls = self.calls.lock().unwrap();
            *calls += 1;
            *calls - 1
        };
        if self.fail_on == Some(call) {
            anyhow::bail!("audio engine rejected {}", registration.file.display());
        }
        self.accepted.lock().unwrap().push(registration.clone());
        Ok(())
    }
}

// ============================================================================
// Mod Folder Fixtures
// ============================================================================

/// Create `<mod_dir>/battle-themes/music/<relative>` with dummy contents.
///
/// Returns the full path of the created file.
pub fn add_song(mod_dir: &Path, relative: &str) -> PathBuf {
    let path = music_dir(mod_dir).join(relative);
    std::fs::create_dir_all(path.parent().expect("song path has a parent"))
        .expect("failed to create test music directory");
    std::fs::write(&path, b"HCA\0dummy").expect("failed to write test song");
    path
}
