//! Serde helpers for the bank service's wire conventions
//!
//! The service is loose about absent values: identifiers, strings and
//! collections may arrive as `null`, and an inapplicable reference is sent
//! as the nil UUID. These helpers normalise that on the way in.

use serde::{Deserialize, Deserializer, Serializer};
use uuid::Uuid;

/// Deserialize `null` as `T::default()`
///
/// Use together with `#[serde(default)]` so a missing field behaves the same
/// as an explicit `null`. Collections therefore always decode to an empty
/// sequence, never to an absent one.
pub fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// An optional reference encoded as a UUID where nil means "none"
pub mod optional_uuid {
    use super::*;

    pub fn serialize<S: Serializer>(value: &Option<Uuid>, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(&value.unwrap_or_else(Uuid::nil))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<Uuid>, D::Error> {
        let value = Option::<Uuid>::deserialize(deserializer)?;
        Ok(value.filter(|id| !id.is_nil()))
    }
}
