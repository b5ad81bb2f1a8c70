//! Endpoint paths, base-URL configuration and the request context that every
//! call to the backend carries.
//!
//! The identity headers are never installed as ambient defaults on a shared
//! client. Each effect that reaches the network holds its own
//! [`RequestContext`], taken from the deck at the moment the effect was
//! produced.

use thiserror::Error;

use crate::model::identity::Identity;

pub const CARDS_PATH: &str = "/api/cards";
pub const ANALYZE_PATH: &str = "/api/result";
pub const SAVE_PATH: &str = "/api/post";
pub const STATUS_PATH: &str = "/api/status";

pub const AUTHORIZATION_HEADER: &str = "Authorization";
pub const USER_EMAIL_HEADER: &str = "X-User-Email";
pub const USER_ID_HEADER: &str = "X-User-ID";

/// Where the backend lives.
///
/// An empty `base_url` keeps requests same-origin (`/api/...`), which is how
/// the application is served in production.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ApiConfig {
    pub base_url: String,
}

impl ApiConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

/// Per-request identity, threaded explicitly through every API call.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RequestContext {
    pub identity: Option<Identity>,
}

impl RequestContext {
    pub fn anonymous() -> Self {
        Self::default()
    }

    pub fn for_identity(identity: Identity) -> Self {
        Self {
            identity: Some(identity),
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.identity.is_some()
    }

    /// Headers to attach to a request. Empty when signed out.
    pub fn headers(&self) -> Vec<(&'static str, String)> {
        match &self.identity {
            Some(identity) => vec![
                (AUTHORIZATION_HEADER, format!("Bearer {}", identity.token)),
                (USER_EMAIL_HEADER, identity.email.clone()),
                (USER_ID_HEADER, identity.user_id.clone()),
            ],
            None => Vec::new(),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    #[error("network error: {0}")]
    Network(String),

    #[error("server responded with {status}: {body}")]
    Status { status: u16, body: String },

    #[error("could not decode response: {0}")]
    Decode(String),
}

/// Any non-2xx status is a failure.
pub fn is_success(status: u16) -> bool {
    (200..300).contains(&status)
}
