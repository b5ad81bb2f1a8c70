use common::api::ApiConfig;
use yew::prelude::*;

/// Properties for the `DeckComponent`.
#[derive(Properties, PartialEq, Clone)]
pub struct DeckProps {
    /// Backend location. Every request the deck issues is built from it.
    pub api: ApiConfig,
}
