use serde::{Deserialize, Serialize};

/// The signed-in user as reported by the identity provider.
#[derive(Deserialize, Serialize, Clone, Debug, PartialEq, Eq)]
pub struct Identity {
    /// Session token, sent as a bearer credential.
    pub token: String,
    pub email: String,
    #[serde(alias = "id")]
    pub user_id: String,
}
