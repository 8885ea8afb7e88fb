//! In-memory audio router
//!
//! Collects registrations instead of applying them to a live audio engine, so
//! the CLI can print and save the routing table.

use std::sync::{Mutex, PoisonError};

use battle_themes_core::{AudioRegistration, AudioRouter};

/// Router that records every registration it receives.
#[derive(Default)]
pub struct ManifestRouter {
    registrations: Mutex<Vec<AudioRegistration>>,
}

impl ManifestRouter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registrations received so far, in order.
    pub fn registrations(&self) -> Vec<AudioRegistration> {
        self.registrations
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

impl AudioRouter for ManifestRouter {
    fn add_audio_path(&self, registration: &AudioRegistration) -> anyhow::Result<()> {
        if !registration.file.is_file() {
            anyhow::bail!("audio file missing: {}", registration.file.display());
        }
        self.registrations
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(registration.clone());
        Ok(())
    }
}
