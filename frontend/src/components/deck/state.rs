//! Runtime state of the deck component.

use common::api::{ApiConfig, RequestContext};
use common::deck::Deck;
use common::model::identity::Identity;

use crate::session::{self, SessionListener};

pub struct DeckComponent {
    /// Card store, search query and submission workflow.
    pub deck: Deck,

    /// Backend location, copied from the props at creation.
    pub api: ApiConfig,

    /// Identity last seen from the provider; used to ignore duplicate
    /// session events.
    pub identity: Option<Identity>,

    /// Live session-change subscription. Dropping it unsubscribes.
    pub session_listener: Option<SessionListener>,

    /// Guard for the one-time first-render work.
    pub mounted: bool,
}

impl DeckComponent {
    /// Starts with whatever identity the provider already published, so the
    /// first card fetch is already scoped to the user.
    pub fn new(api: ApiConfig) -> Self {
        let identity = session::current_identity();
        let context = identity
            .clone()
            .map(RequestContext::for_identity)
            .unwrap_or_default();

        Self {
            deck: Deck::with_context(context),
            api,
            identity,
            session_listener: None,
            mounted: false,
        }
    }
}
