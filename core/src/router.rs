//! Audio routing abstraction
//!
//! The registry never talks to an audio engine directly. Each host supplies
//! an [`AudioRouter`] that applies registrations to whatever audio layer the
//! running game uses.

use anyhow::Result;
use battle_themes_shared::AudioRegistration;

/// Applies audio registrations to the running game's audio engine.
///
/// Called once per contributed file, synchronously. An `Err` is treated as a
/// rejection of that file and stops registration of the mod being processed.
///
/// # Example
///
/// ```ignore
/// struct LoggingRouter;
///
/// impl AudioRouter for LoggingRouter {
///     fn add_audio_path(&self, registration: &AudioRegistration) -> anyhow::Result<()> {
///         println!("{} -> {:?}", registration.file.display(), registration.route);
///         Ok(())
///     }
/// }
/// ```
pub trait AudioRouter: Send + Sync {
    /// Route playback requests described by `registration.route` to
    /// `registration.file`.
    fn add_audio_path(&self, registration: &AudioRegistration) -> Result<()>;
}
