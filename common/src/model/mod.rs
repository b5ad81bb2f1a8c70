pub mod analysis;
pub mod card;
pub mod identity;
pub mod status;

use serde::{Deserialize, Deserializer};

/// Deserializes a string field that the backend may send as `null`.
pub(crate) fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}
