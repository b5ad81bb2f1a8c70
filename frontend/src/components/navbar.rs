use common::model::status::BackendStatus;
use num_format::{Locale, ToFormattedString};
use yew::{html, Component, Context, Html, Properties};

#[derive(Properties, PartialEq)]
pub struct NavbarProps {
    pub card_count: usize,
    #[prop_or_default]
    pub status: Option<BackendStatus>,
    pub session: String,
}

pub struct Navbar;

impl Component for Navbar {
    type Message = ();
    type Properties = NavbarProps;

    fn create(_ctx: &Context<Self>) -> Self {
        Navbar
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let props = ctx.props();
        let count = format!("{} cards", props.card_count.to_formatted_string(&Locale::en));
        let ai_badge = match &props.status {
            Some(status) if status.ai_available => html! { <span class="badge ai-on">{"AI ready"}</span> },
            Some(_) => html! { <span class="badge ai-off">{"AI offline"}</span> },
            None => html! {},
        };

        html! {
            <nav class="navbar">
                <div class="brand">{"PinyImage"}</div>
                <div class="nav-item">{"Card Search"}</div>
                <div class="nav-item">{ count }</div>
                { ai_badge }
                <div class="nav-item session">{ props.session.clone() }</div>
            </nav>
        }
    }
}
