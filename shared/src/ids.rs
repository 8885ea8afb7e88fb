//! Helpers for validating mod identifiers.

/// Returns true if `id` can own songs in the catalog.
///
/// Mod ids are opaque to the registry; they only need to contain at least one
/// visible character.
pub fn is_valid_mod_id(id: &str) -> bool {
    id.chars().any(|c| !c.is_whitespace() && !c.is_control())
}
