//! Utility functions for the deck component.
//!
//! - **User feedback**: a non-blocking toast for confirmations and a blocking
//!   `window.alert` for the one failure the user must acknowledge (a save that
//!   did not go through).
//! - **Rendering**: the analysis summary arrives as free text with markdown-ish
//!   line breaks. It is HTML-escaped first, then rendered with
//!   `pulldown_cmark`. Links and images whose destination is not `http`,
//!   `https`, `mailto` or relative are unwrapped to their text.

use pulldown_cmark::{html, Event, Parser, Tag, TagEnd};
use wasm_bindgen::JsCast;
use web_sys::HtmlElement;
use yew::{AttrValue, Html};

/// Displays a temporary notification at the bottom of the screen.
///
/// The toast is appended to `<body>` and removes itself after three seconds.
pub fn show_toast(message: &str) {
    if let Some(window) = web_sys::window() {
        if let Some(document) = window.document() {
            if let (Ok(toast), Some(body)) = (document.create_element("div"), document.body()) {
                toast.set_text_content(Some(message));
                let html_toast: HtmlElement = toast.unchecked_into();
                let style = html_toast.style();
                style.set_property("position", "fixed").ok();
                style.set_property("bottom", "20px").ok();
                style.set_property("left", "50%").ok();
                style.set_property("transform", "translateX(-50%)").ok();
                style.set_property("background", "rgba(0, 0, 0, 0.8)").ok();
                style.set_property("color", "#fff").ok();
                style.set_property("padding", "10px 20px").ok();
                style.set_property("border-radius", "4px").ok();
                style.set_property("z-index", "10000").ok();

                if body.append_child(&html_toast).is_ok() {
                    wasm_bindgen_futures::spawn_local(async move {
                        gloo_timers::future::TimeoutFuture::new(3000).await;
                        if let Some(parent) = html_toast.parent_node() {
                            parent.remove_child(&html_toast).ok();
                        }
                    });
                }
            }
        }
    }
}

/// Blocks on a native alert dialog.
pub fn alert(message: &str) {
    if let Some(window) = web_sys::window() {
        if window.alert_with_message(message).is_err() {
            log::error!("could not show alert: {message}");
        }
    }
}

/// Escapes special HTML characters in a string.
pub fn escape_html(input: &str) -> String {
    input
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

/// True for relative URLs and the `http`, `https` and `mailto` schemes.
///
/// Browsers ignore whitespace and control characters inside a scheme, so they
/// are removed before the scheme is read.
fn is_safe_destination(url: &str) -> bool {
    let compact: String = url
        .chars()
        .filter(|c| !c.is_whitespace() && !c.is_control())
        .collect::<String>()
        .to_ascii_lowercase();

    match compact.split_once(':') {
        Some((scheme, _)) if !scheme.contains(['/', '?', '#']) => {
            matches!(scheme, "http" | "https" | "mailto")
        }
        _ => true,
    }
}

/// Renders analysis text to an HTML string.
pub fn render_markdown(text: &str) -> String {
    let escaped = escape_html(text);
    // One entry per open link or image: whether its start tag was kept.
    let mut kept: Vec<bool> = Vec::new();
    let events = Parser::new(&escaped).filter(|event| match event {
        Event::Start(Tag::Link { dest_url, .. }) | Event::Start(Tag::Image { dest_url, .. }) => {
            let safe = is_safe_destination(dest_url);
            kept.push(safe);
            safe
        }
        Event::End(TagEnd::Link) | Event::End(TagEnd::Image) => kept.pop().unwrap_or(true),
        _ => true,
    });

    let mut html_output = String::new();
    html::push_html(&mut html_output, events);
    html_output
}

/// Renders analysis text as HTML.
pub fn render_text(text: &str) -> Html {
    Html::from_html_unchecked(AttrValue::from(format!("<div>{}</div>", render_markdown(text))))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escapes_markup_in_model_output() {
        assert_eq!(
            escape_html(r#"<img src="x" onerror='y'> & more"#),
            "&lt;img src=&quot;x&quot; onerror=&#39;y&#39;&gt; &amp; more"
        );
    }

    #[test]
    fn script_links_are_reduced_to_text() {
        let html = render_markdown("see [water](javascript:alert(1)) and [fire](JAVASCRIPT:x)");
        assert!(!html.to_lowercase().contains("javascript"));
        assert!(!html.contains("<a"));
        assert!(html.contains("water"));
        assert!(html.contains("fire"));
    }

    #[test]
    fn script_images_are_dropped() {
        let html = render_markdown("![drop](data:text/html;base64,PHNjcmlwdD4=)");
        assert!(!html.contains("<img"));
        assert!(!html.contains("data:"));
    }

    #[test]
    fn web_and_relative_links_survive() {
        let html = render_markdown("[ccdb](https://ccdb.hemiola.com/) [card](/cards/7)");
        assert!(html.contains(r#"<a href="https://ccdb.hemiola.com/">ccdb</a>"#));
        assert!(html.contains(r#"<a href="/cards/7">card</a>"#));
    }

    #[test]
    fn destination_schemes() {
        assert!(is_safe_destination("https://example.com"));
        assert!(is_safe_destination("mailto:learner@example.com"));
        assert!(is_safe_destination("/relative/path?q=a:b"));
        assert!(!is_safe_destination("javascript:alert(1)"));
        assert!(!is_safe_destination(" java\nscript:alert(1)"));
        assert!(!is_safe_destination("vbscript:x"));
    }
}
