use web_sys::HtmlInputElement;
use yew::prelude::*;

pub enum Msg {
    Input(String),
    Submit,
}

#[derive(Properties, PartialEq)]
pub struct CardFormProps {
    /// Receives the raw input. The form clears itself afterwards.
    pub on_submit: Callback<String>,
}

pub struct CardForm {
    input: String,
}

impl Component for CardForm {
    type Message = Msg;
    type Properties = CardFormProps;

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            input: String::new(),
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::Input(value) => {
                self.input = value;
                true
            }
            Msg::Submit => {
                if self.input.is_empty() {
                    return false;
                }
                ctx.props().on_submit.emit(std::mem::take(&mut self.input));
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();
        html! {
            <div class="card-form">
                <form onsubmit={link.callback(|e: SubmitEvent| {
                    e.prevent_default();
                    Msg::Submit
                })}>
                    <label class="input-label">{"Input Mandarin Character Here:"}</label>
                    <input
                        type="text"
                        id="user_input"
                        name="user_input"
                        value={self.input.clone()}
                        oninput={link.callback(|e: InputEvent| {
                            let input: HtmlInputElement = e.target_unchecked_into();
                            Msg::Input(input.value())
                        })}
                        required=true
                    />
                    <button class="submit-button" type="submit">{"Get Connections"}</button>
                </form>
            </div>
        }
    }
}
