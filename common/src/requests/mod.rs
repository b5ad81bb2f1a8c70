use serde::{Deserialize, Serialize};

use crate::model::analysis::PendingResult;

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
/// Request payload for the character analysis endpoint.
/// Carries the raw text the user typed, unmodified.
pub struct AnalysisRequest {
    pub user_input: String,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
/// Request payload for the save endpoint.
/// Field names follow the backend's `cards` table columns.
pub struct NewCardRequest {
    pub title: String,
    pub pinyin: String,
    pub meaning: String,
    pub con: String,
}

impl From<&PendingResult> for NewCardRequest {
    fn from(result: &PendingResult) -> Self {
        Self {
            title: result.title.clone(),
            pinyin: result.pinyin.clone(),
            meaning: result.meaning.clone(),
            con: result.connection.clone(),
        }
    }
}
