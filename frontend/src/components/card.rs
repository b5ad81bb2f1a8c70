use common::model::card::Card;
use yew::{html, Component, Context, Html, Properties};

#[derive(Properties, PartialEq)]
pub struct CardProps {
    pub card: Card,
}

/// One saved card inside the masonry grid.
pub struct CardView;

impl Component for CardView {
    type Message = ();
    type Properties = CardProps;

    fn create(_ctx: &Context<Self>) -> Self {
        CardView
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let card = &ctx.props().card;
        html! {
            <div class="grid-item">
                <div class="cards">
                    <div class="row">
                        <div class="col-head">
                            <h2 class="character">{ card.character.clone() }</h2>
                            <h4 class="pinyin">{ card.pinyin.clone() }</h4>
                        </div>
                        <div class="col">
                            <p>{ card.meaning.clone() }</p>
                        </div>
                    </div>
                    <p class="conn">{ card.connection.clone() }</p>
                    {
                        match &card.created {
                            Some(created) => html! {
                                <span class="badge">{ format!("Added on: {created}") }</span>
                            },
                            None => html! {},
                        }
                    }
                </div>
            </div>
        }
    }
}
