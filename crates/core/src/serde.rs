//! Serde helper functions for request deserialization.
//!
//! Clients often send `""` for optional text fields they left empty; those
//! are stored as absent rather than as empty strings.

use serde::{Deserialize, Deserializer};

/// Deserialize an optional string, treating empty or whitespace-only strings as None.
pub fn deserialize_optional_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let s: Option<String> = Option::deserialize(deserializer)?;
    Ok(s.filter(|s| !s.trim().is_empty()))
}
