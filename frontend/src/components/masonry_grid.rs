use yew::{html, Children, Component, Context, Html, Properties};

#[derive(Properties, PartialEq)]
pub struct MasonryGridProps {
    pub columns: usize,
    pub children: Children,
}

/// Masonry layout built on CSS multi-column flow: items fill each column top
/// to bottom and keep their natural height, so no layout pass in script is
/// needed when cards or the window change size.
pub struct MasonryGrid;

impl Component for MasonryGrid {
    type Message = ();
    type Properties = MasonryGridProps;

    fn create(_ctx: &Context<Self>) -> Self {
        MasonryGrid
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let props = ctx.props();
        let style = format!(
            "column-count: {};
             column-gap: 16px;
             width: 100%;
             margin: auto;
             padding: 8px;",
            props.columns.max(1)
        );

        html! {
            <div class="grid" style={style}>
                { for props.children.iter().map(|child| html! {
                    <div style="break-inside: avoid; margin-bottom: 16px;">{ child }</div>
                }) }
            </div>
        }
    }
}
