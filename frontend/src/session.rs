//! Bridge to the identity provider embedded in the host page.
//!
//! The provider's script publishes the signed-in user on
//! `window.__PINYIMAGE_SESSION__` as `{ token, email, id }` (or removes it on
//! sign-out) and then dispatches a `pinyimage:session` event on `window`.
//! The deck component listens for that event and re-reads the object.

use common::model::identity::Identity;
use js_sys::Reflect;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::Event;

pub const SESSION_GLOBAL: &str = "__PINYIMAGE_SESSION__";
pub const SESSION_EVENT: &str = "pinyimage:session";

fn string_field(object: &JsValue, field: &str) -> Option<String> {
    Reflect::get(object, &JsValue::from_str(field))
        .ok()
        .and_then(|value| value.as_string())
        .filter(|value| !value.is_empty())
}

/// The currently signed-in user, if the provider has published one.
pub fn current_identity() -> Option<Identity> {
    let window = web_sys::window()?;
    let session = Reflect::get(&window, &JsValue::from_str(SESSION_GLOBAL)).ok()?;
    if session.is_undefined() || session.is_null() {
        return None;
    }

    Some(Identity {
        token: string_field(&session, "token")?,
        email: string_field(&session, "email")?,
        user_id: string_field(&session, "id")?,
    })
}

/// Keeps a session-change listener registered until dropped.
pub struct SessionListener {
    callback: Closure<dyn Fn(Event)>,
}

impl SessionListener {
    pub fn register(on_change: impl Fn() + 'static) -> Option<Self> {
        let window = web_sys::window()?;
        let callback = Closure::<dyn Fn(Event)>::new(move |_event: Event| on_change());
        window
            .add_event_listener_with_callback(SESSION_EVENT, callback.as_ref().unchecked_ref())
            .ok()?;
        Some(Self { callback })
    }
}

impl Drop for SessionListener {
    fn drop(&mut self) {
        if let Some(window) = web_sys::window() {
            let _ = window.remove_event_listener_with_callback(
                SESSION_EVENT,
                self.callback.as_ref().unchecked_ref(),
            );
        }
    }
}
