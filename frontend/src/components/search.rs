use web_sys::HtmlInputElement;
use yew::prelude::*;

pub enum Msg {
    Input(String),
}

#[derive(Properties, PartialEq)]
pub struct SearchProps {
    /// Emitted on every keystroke with the full query.
    pub on_search: Callback<String>,
}

pub struct Search {
    term: String,
}

impl Component for Search {
    type Message = Msg;
    type Properties = SearchProps;

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            term: String::new(),
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::Input(term) => {
                self.term = term.clone();
                ctx.props().on_search.emit(term);
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        html! {
            <div class="search">
                <h2>{"Search for Cards Here"}</h2>
                <input
                    type="text"
                    placeholder="Search by Character Pinyin"
                    value={self.term.clone()}
                    oninput={ctx.link().callback(|e: InputEvent| {
                        let input: HtmlInputElement = e.target_unchecked_into();
                        Msg::Input(input.value())
                    })}
                />
            </div>
        }
    }
}
