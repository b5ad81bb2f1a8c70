//! Card deck: the root stateful component of the application.
//!
//! Responsibilities
//! - Own the `common::deck::Deck` aggregate and forward every user action and
//!   network completion to `Deck::update`.
//! - Execute the `Effect`s it returns (`update::run_effects`) and feed their
//!   outcomes back as messages.
//! - On first render, subscribe to identity-provider session changes and
//!   announce the mount so the card list and backend status are loaded.

use yew::prelude::*;

mod helpers;
mod messages;
mod props;
mod state;
mod update;
mod view;

pub use messages::Msg;
pub use props::DeckProps;
pub use state::DeckComponent;

use crate::session::SessionListener;

impl Component for DeckComponent {
    type Message = Msg;
    type Properties = DeckProps;

    fn create(ctx: &Context<Self>) -> Self {
        DeckComponent::new(ctx.props().api.clone())
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        update::update(self, ctx, msg)
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        view::view(self, ctx)
    }

    fn rendered(&mut self, ctx: &Context<Self>, first_render: bool) {
        if first_render && !self.mounted {
            self.mounted = true;

            let link = ctx.link().clone();
            self.session_listener =
                SessionListener::register(move || link.send_message(Msg::SessionChanged));
            if self.session_listener.is_none() {
                log::warn!("could not subscribe to session changes");
            }

            ctx.link().send_message(Msg::Deck(common::deck::Msg::Mounted));
        }
    }
}
