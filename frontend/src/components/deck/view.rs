//! View rendering for the deck component.
//!
//! Layout, top to bottom: navbar, submission form, the submission panel for
//! the current workflow state, the search box, and the masonry grid of saved
//! cards. The submission panel is a total match over `SubmissionState`, so
//! the spinner, the rejection notice, the error and the result are never on
//! screen together.

use common::api::RequestContext;
use common::deck::submission::{SaveStatus, SubmissionState};
use common::deck::Msg as DeckMsg;
use common::model::analysis::PendingResult;
use yew::html::Scope;
use yew::prelude::*;

use super::helpers::render_text;
use super::messages::Msg;
use super::state::DeckComponent;
use crate::components::card::CardView;
use crate::components::card_form::CardForm;
use crate::components::masonry_grid::MasonryGrid;
use crate::components::navbar::Navbar;
use crate::components::search::Search;

const GRID_COLUMNS: usize = 4;

pub fn view(component: &DeckComponent, ctx: &Context<DeckComponent>) -> Html {
    let link = ctx.link();
    let deck = &component.deck;

    html! {
        <div class="deck-root">
            <Navbar
                card_count={deck.store().len()}
                status={deck.status().cloned()}
                session={session_label(deck.context())}
            />
            <CardForm on_submit={link.callback(|input: String| Msg::Deck(DeckMsg::Submit(input)))} />
            { build_submission_panel(deck.submission(), link) }
            <Search on_search={link.callback(|query: String| Msg::Deck(DeckMsg::Search(query)))} />
            { build_card_grid(component) }
        </div>
    }
}

fn session_label(context: &RequestContext) -> String {
    match &context.identity {
        Some(identity) => identity.email.clone(),
        None => "Signed out".to_string(),
    }
}

fn build_submission_panel(state: &SubmissionState, link: &Scope<DeckComponent>) -> Html {
    match state {
        SubmissionState::Idle => html! {},
        SubmissionState::Loading { input, .. } => html! {
            <div class="submission loading">
                <div class="spinner" />
                <span>{ format!("Analyzing {input}…") }</span>
            </div>
        },
        SubmissionState::Invalid { input } => html! {
            <div class="submission invalid">
                { format!("\"{input}\" does not contain any Chinese characters.") }
            </div>
        },
        SubmissionState::Failed { input, reason } => html! {
            <div class="submission failed">
                <strong>{ format!("Could not analyze {input}.") }</strong>
                <p>{ reason.clone() }</p>
            </div>
        },
        SubmissionState::Loaded { result, save, .. } => build_result(result, *save, link),
    }
}

fn build_result(result: &PendingResult, save: SaveStatus, link: &Scope<DeckComponent>) -> Html {
    let save_control = match save {
        SaveStatus::Unsaved => html! {
            <button class="save-button" onclick={link.callback(|_| Msg::Deck(DeckMsg::Save))}>
                {"Save card"}
            </button>
        },
        SaveStatus::Saving => html! {
            <button class="save-button" disabled=true>{"Saving…"}</button>
        },
        SaveStatus::Saved => html! {
            <span class="badge saved">{"Saved"}</span>
        },
    };

    html! {
        <div class="submission loaded">
            <div class="result-head">
                <h2 class="character">{ result.title.clone() }</h2>
                <h4 class="pinyin">{ result.pinyin.clone() }</h4>
                <p class="meaning">{ result.meaning.clone() }</p>
            </div>
            <p class="conn">{ result.connection.clone() }</p>
            <div class="summary">{ render_text(&result.summary) }</div>
            {
                if result.related.is_empty() {
                    html! {}
                } else {
                    html! {
                        <p class="related">
                            { format!("Related cards: {}", related_titles(result)) }
                        </p>
                    }
                }
            }
            { save_control }
        </div>
    }
}

fn related_titles(result: &PendingResult) -> String {
    result
        .related
        .iter()
        .map(|card| format!("{} ({})", card.character, card.pinyin))
        .collect::<Vec<_>>()
        .join(", ")
}

fn build_card_grid(component: &DeckComponent) -> Html {
    let cards = component.deck.visible_cards();
    if cards.is_empty() {
        return html! { <p class="empty">{"No cards saved yet."}</p> };
    }

    html! {
        <MasonryGrid columns={GRID_COLUMNS}>
            { for cards.into_iter().map(|card| html! { <CardView card={card.clone()} /> }) }
        </MasonryGrid>
    }
}
