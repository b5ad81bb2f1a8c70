use serde::{Deserialize, Serialize};

/// Body of `GET /api/status`.
#[derive(Deserialize, Serialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct BackendStatus {
    /// Database backend name or health string (e.g. `"postgresql"`).
    #[serde(default, deserialize_with = "super::null_as_empty")]
    pub database: String,
    #[serde(default)]
    pub ai_available: bool,
}
