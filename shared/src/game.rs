//! Supported games.
//!
//! The set of games is closed: every piece of per-game knowledge (cue tables,
//! base ids, route construction) is an exhaustive `match` over [`Game`], so a
//! new variant cannot be added without the compiler pointing at each site.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// A game whose audio engine the registry knows how to route into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Game {
    /// Persona 3 Reload (PC)
    P3R,
    /// Persona 5 Royal (PC)
    P5R,
    /// Persona 4 Golden (PC)
    P4G,
    /// Persona 3 Portable (PC), legacy file-substitution audio
    P3P,
    /// Metaphor: ReFantazio
    Metaphor,
    /// Shin Megami Tensei V: Vengeance
    Smt5v,
}

/// Errors produced when resolving a [`Game`] from host-provided text.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GameParseError {
    /// The string is not one of the short game names.
    #[error("unknown game: {0}")]
    UnknownGame(String),
    /// No known game keyword appears in the host application id.
    #[error("unknown game for app id: {0}")]
    UnknownAppId(String),
}

impl Game {
    /// Short identifier, also used as the app-id keyword and config key.
    pub fn as_str(&self) -> &'static str {
        match self {
            Game::P3R => "p3r",
            Game::P5R => "p5r",
            Game::P4G => "p4g",
            Game::P3P => "p3p",
            Game::Metaphor => "metaphor",
            Game::Smt5v => "smt5v",
        }
    }

    /// Human-readable title.
    pub fn title(&self) -> &'static str {
        match self {
            Game::P3R => "Persona 3 Reload",
            Game::P5R => "Persona 5 Royal",
            Game::P4G => "Persona 4 Golden",
            Game::P3P => "Persona 3 Portable",
            Game::Metaphor => "Metaphor: ReFantazio",
            Game::Smt5v => "Shin Megami Tensei V: Vengeance",
        }
    }

    /// All supported games, in app-id detection order.
    pub fn all() -> &'static [Game] {
        &[
            Game::P3R,
            Game::P5R,
            Game::P4G,
            Game::P3P,
            Game::Metaphor,
            Game::Smt5v,
        ]
    }

    /// Detect the game from the host application id (e.g. `p5rpc.exe`).
    ///
    /// The first game whose keyword appears anywhere in the lowercased id wins.
    /// Matching ignores case on purpose, so `P5RPC.EXE` resolves too.
    pub fn from_app_id(app_id: &str) -> Result<Self, GameParseError> {
        let lower = app_id.to_lowercase();
        Self::all()
            .iter()
            .copied()
            .find(|game| lower.contains(game.as_str()))
            .ok_or_else(|| GameParseError::UnknownAppId(app_id.to_string()))
    }
}

impl fmt::Display for Game {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Game {
    type Err = GameParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::all()
            .iter()
            .copied()
            .find(|game| game.as_str() == s)
            .ok_or_else(|| GameParseError::UnknownGame(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_game_as_str_roundtrips_through_from_str() {
        for game in Game::all() {
            assert_eq!(game.as_str().parse::<Game>(), Ok(*game));
        }
    }

    #[test]
    fn test_game_from_str_is_case_sensitive() {
        assert_eq!(
            "P5R".parse::<Game>(),
            Err(GameParseError::UnknownGame("P5R".to_string()))
        );
        assert!("".parse::<Game>().is_err());
    }

    #[test]
    fn test_from_app_id_detects_games() {
        assert_eq!(Game::from_app_id("p3r.exe"), Ok(Game::P3R));
        assert_eq!(Game::from_app_id("p5rpc.exe"), Ok(Game::P5R));
        assert_eq!(Game::from_app_id("p4g.exe"), Ok(Game::P4G));
        assert_eq!(Game::from_app_id("p3p.exe"), Ok(Game::P3P));
        assert_eq!(Game::from_app_id("metaphor.exe"), Ok(Game::Metaphor));
        assert_eq!(Game::from_app_id("smt5v-win64-shipping.exe"), Ok(Game::Smt5v));
    }

    #[test]
    fn test_from_app_id_ignores_case() {
        assert_eq!(Game::from_app_id("P5RPC.EXE"), Ok(Game::P5R));
    }

    #[test]
    fn test_from_app_id_unknown() {
        assert_eq!(
            Game::from_app_id("notepad.exe"),
            Err(GameParseError::UnknownAppId("notepad.exe".to_string()))
        );
    }

    #[test]
    fn test_all_contains_every_game_once() {
        let all = Game::all();
        assert_eq!(all.len(), 6);
        for (i, a) in all.iter().enumerate() {
            assert!(!all[i + 1..].contains(a));
        }
    }

    #[test]
    fn test_display_matches_as_str() {
        assert_eq!(Game::Smt5v.to_string(), "smt5v");
        assert_eq!(Game::Metaphor.to_string(), "metaphor");
    }
}
