//! Canonical resolution of the watched flag.
//!
//! Older clients send the flag as `Watched`, newer ones as `watched`, and
//! stored rows may carry no value at all. Every reader goes through
//! [`resolve_watched`] so an absent flag always means "not watched".

use serde::{Deserialize, Deserializer};

/// Resolve an optional watched flag to a boolean (absent => `false`).
pub fn resolve_watched(flag: Option<bool>) -> bool {
    flag.unwrap_or(false)
}

/// Merge the two spellings of the input flag. The legacy `Watched` key
/// takes precedence whenever it is present.
pub fn merge_watched(watched: Option<bool>, legacy: Option<bool>) -> Option<bool> {
    legacy.or(watched)
}

/// Serde adapter: deserialize a nullable/missing flag via [`resolve_watched`].
///
/// Pair with `#[serde(default)]` so a missing key also resolves.
pub fn deserialize_watched<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<bool>::deserialize(deserializer).map(resolve_watched)
}
