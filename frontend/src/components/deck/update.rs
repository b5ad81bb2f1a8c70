//! Update function for the deck component.
//!
//! `update` hands every deck message to `Deck::update` and runs the effects
//! it returns. Effects that reach the network are spawned on the browser's
//! event loop; their outcome comes back through `link.send_message` as the
//! matching `common::deck::Msg` variant, tagged with the submission sequence
//! number so the core can drop stale replies.

use common::deck::submission::{SaveStatus, SubmissionState};
use common::deck::{Effect, Msg as DeckMsg};
use yew::platform::spawn_local;
use yew::prelude::*;

use super::helpers::{alert, show_toast};
use super::messages::Msg;
use super::state::DeckComponent;
use crate::api;
use crate::session;

pub fn update(component: &mut DeckComponent, ctx: &Context<DeckComponent>, msg: Msg) -> bool {
    match msg {
        Msg::Deck(msg) => {
            let confirms_save = matches!(msg, DeckMsg::SaveResolved { result: Ok(()), .. });

            let effects = component.deck.update(msg);
            run_effects(component, ctx, effects);

            if confirms_save
                && matches!(
                    component.deck.submission(),
                    SubmissionState::Loaded {
                        save: SaveStatus::Saved,
                        ..
                    }
                )
            {
                show_toast("Card saved.");
            }
            true
        }
        Msg::SessionChanged => {
            let identity = session::current_identity();
            if identity == component.identity {
                return false;
            }
            component.identity = identity.clone();

            let msg = match identity {
                Some(identity) => DeckMsg::SignedIn(identity),
                None => DeckMsg::SignedOut,
            };
            ctx.link().send_message(Msg::Deck(msg));
            false
        }
    }
}

/// Executes the side effects requested by the deck.
fn run_effects(component: &DeckComponent, ctx: &Context<DeckComponent>, effects: Vec<Effect>) {
    for effect in effects {
        let link = ctx.link().clone();
        let config = component.api.clone();

        match effect {
            Effect::FetchCards { seq, context } => spawn_local(async move {
                let result = api::fetch_cards(&config, &context).await;
                link.send_message(Msg::Deck(DeckMsg::CardsFetched { seq, result }));
            }),
            Effect::Analyze {
                seq,
                input,
                context,
            } => spawn_local(async move {
                let result = api::analyze(&config, &context, input).await;
                link.send_message(Msg::Deck(DeckMsg::AnalysisResolved { seq, result }));
            }),
            Effect::Persist { seq, card, context } => spawn_local(async move {
                let result = api::save_card(&config, &context, &card).await;
                link.send_message(Msg::Deck(DeckMsg::SaveResolved { seq, result }));
            }),
            Effect::CheckStatus => spawn_local(async move {
                let result = api::fetch_status(&config).await;
                link.send_message(Msg::Deck(DeckMsg::StatusLoaded(result)));
            }),
            Effect::Alert(message) => alert(&message),
        }
    }
}
