use crate::components::deck::DeckComponent;
use crate::config::AppConfig;
use yew::{html, Component, Context, Html, Properties};

#[derive(Properties, PartialEq)]
pub struct AppProps {
    pub config: AppConfig,
}

impl From<AppConfig> for AppProps {
    fn from(config: AppConfig) -> Self {
        Self { config }
    }
}

pub struct App;

impl Component for App {
    type Message = ();
    type Properties = AppProps;

    fn create(_ctx: &Context<Self>) -> Self {
        Self
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        html! {
            <div class="app">
                <DeckComponent api={ctx.props().config.api.clone()} />
            </div>
        }
    }
}
