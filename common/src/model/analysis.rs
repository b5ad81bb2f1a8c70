use serde::{Deserialize, Serialize};

use super::card::Card;
use super::null_as_empty;
use crate::deck::store::deduplicate;

/// Body of a successful `POST /api/result`.
#[derive(Deserialize, Serialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct AnalysisResponse {
    /// Free-text explanation of the character (pronunciation, radical).
    #[serde(default, deserialize_with = "null_as_empty")]
    pub result: String,

    /// Generated mnemonic.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub connections: String,

    #[serde(default, deserialize_with = "null_as_empty")]
    pub pinyin: String,

    #[serde(default, deserialize_with = "null_as_empty")]
    pub meaning: String,

    /// Related cards. The backend does not deduplicate these.
    #[serde(default)]
    pub cards: Vec<Card>,
}

/// An analysis the user has not saved yet. At most one is alive at a time.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PendingResult {
    /// The raw input that was submitted.
    pub title: String,
    pub pinyin: String,
    pub meaning: String,
    pub connection: String,
    pub summary: String,
    pub related: Vec<Card>,
}

impl PendingResult {
    pub fn from_response(title: impl Into<String>, response: AnalysisResponse) -> Self {
        Self {
            title: title.into(),
            pinyin: response.pinyin,
            meaning: response.meaning,
            connection: response.connections,
            summary: response.result,
            related: deduplicate(response.cards),
        }
    }
}
