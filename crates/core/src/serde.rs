//! Serde helper functions for request bodies.

use serde::{Deserialize, Deserializer};

/// Deserialize a value, treating an explicit `null` like an absent key.
///
/// Pair with `#[serde(default)]` so both forms land on the zero value and are
/// reported by validation instead of failing the parse.
pub fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}
