use serde::{Deserialize, Serialize};

use super::null_as_empty;

/// One memorized character as returned by `GET /api/cards`.
///
/// The backend names the character `title` and the mnemonic `con`; the Rust
/// side uses the domain names and maps them with `serde(rename)`.
#[derive(Deserialize, Serialize, Clone, Debug, PartialEq, Eq)]
pub struct Card {
    /// Server-assigned row id. Absent in older backend revisions.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,

    /// The Mandarin character (first half of the identity key).
    #[serde(rename = "title", default, deserialize_with = "null_as_empty")]
    pub character: String,

    /// Romanized pronunciation, usually with tone marks (second half of the key).
    #[serde(default, deserialize_with = "null_as_empty")]
    pub pinyin: String,

    #[serde(default, deserialize_with = "null_as_empty")]
    pub meaning: String,

    /// Mnemonic text linking the character's shape to its meaning.
    #[serde(rename = "con", default, deserialize_with = "null_as_empty")]
    pub connection: String,

    /// Server-assigned creation timestamp, passed through verbatim.
    #[serde(default)]
    pub created: Option<String>,
}

impl Card {
    /// Composite identity used for duplicate elimination.
    pub fn key(&self) -> (&str, &str) {
        (&self.character, &self.pinyin)
    }
}
