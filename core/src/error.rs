//! Error types for the music registry.

use std::path::PathBuf;

/// Result type for registry operations.
pub type RegistryResult<T> = Result<T, RegistryError>;

/// Errors raised while registering a mod's music.
#[derive(Debug, thiserror::Error)]
pub enum RegistryError {
    /// The mod id has no visible characters.
    #[error("invalid mod id {mod_id:?}")]
    InvalidModId { mod_id: String },

    /// Walking the music folder failed below its root.
    #[error("failed to scan music folder {}: {source}", dir.display())]
    Scan {
        dir: PathBuf,
        #[source]
        source: walkdir::Error,
    },

    /// The next id would not fit in a `u32`.
    #[error("BGM id space exhausted: base {base} with {count} songs already registered")]
    IdSpaceExhausted { base: u32, count: usize },

    /// The audio router rejected a registration.
    #[error("failed to register {} as BGM {bgm_id}: {source}", path.display())]
    Routing {
        path: PathBuf,
        bgm_id: u32,
        #[source]
        source: anyhow::Error,
    },
}

/// Errors raised while loading or saving configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to access config file {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config file {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_routing_error_mentions_file_and_id() {
        let err = RegistryError::Routing {
            path: PathBuf::from("music/boss.hca"),
            bgm_id: 4002,
            source: anyhow::anyhow!("audio engine not ready"),
        };
        let message = err.to_string();
        assert!(message.contains("boss.hca"));
        assert!(message.contains("4002"));
        assert!(message.contains("audio engine not ready"));
    }

    #[test]
    fn test_routing_error_exposes_source() {
        use std::error::Error;

        let err = RegistryError::Routing {
            path: PathBuf::from("a.hca"),
            bgm_id: 1,
            source: anyhow::anyhow!("rejected"),
        };
        assert_eq!(err.source().map(|s| s.to_string()), Some("rejected".to_string()));
    }

    #[test]
    fn test_invalid_mod_id_message() {
        let err = RegistryError::InvalidModId {
            mod_id: String::new(),
        };
        assert_eq!(err.to_string(), "invalid mod id \"\"");
    }
}
