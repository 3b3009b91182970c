//! Subscriptions
//!
//! Keyboard and hash-change handling. The decision of what to dispatch is a
//! pure function of the key and the current input values; [`subscriptions`]
//! binds it to the window.

use leptos::ev;
use leptos::prelude::*;
use wasm_bindgen::JsCast;

use crate::models::Route;
use crate::update::Action;

pub const ENTER_KEY: &str = "Enter";
pub const ESCAPE_KEY: &str = "Escape";

/// Input values visible when a key is released
#[derive(Debug, Clone, Copy, Default)]
pub struct KeyContext<'a> {
    /// Current text of `#new-todo`
    pub new_todo: &'a str,
    /// Current text of the inline editor, when a todo is being edited
    pub edit_value: Option<&'a str>,
}

/// What a key press asks of the runtime
#[derive(Debug, Clone, Default, PartialEq)]
pub struct KeyResponse {
    /// Actions to dispatch, in order
    pub actions: Vec<Action>,
    /// Clear and refocus `#new-todo`
    pub reset_new_todo: bool,
}

pub fn on_keyup(key: &str, ctx: &KeyContext<'_>) -> KeyResponse {
    let mut response = KeyResponse::default();
    match key {
        ENTER_KEY => {
            if let Some(value) = ctx.edit_value {
                response.actions.push(Action::Save(value.to_string()));
            }
            if !ctx.new_todo.is_empty() {
                response.actions.push(Action::Add(ctx.new_todo.to_string()));
                response.reset_new_todo = true;
            }
        }
        ESCAPE_KEY => {
            if let Some(value) = ctx.edit_value {
                response.actions.push(Action::Save(value.to_string()));
            }
        }
        _ => {}
    }
    response
}

pub fn on_hash_change(hash: &str) -> Action {
    Action::Route(Route::parse(hash))
}

// ========================
// Window Binding
// ========================

fn input_by_selector(selector: &str) -> Option<web_sys::HtmlInputElement> {
    document()
        .query_selector(selector)
        .ok()
        .flatten()
        .and_then(|element| element.dyn_into::<web_sys::HtmlInputElement>().ok())
}

/// Current location hash, `""` when unavailable
pub fn current_hash() -> String {
    window().location().hash().unwrap_or_default()
}

/// Bind `keyup` and `hashchange` on the window to `dispatch`.
///
/// Listeners are removed when the calling owner is cleaned up.
pub fn subscriptions<F>(dispatch: F)
where
    F: Fn(Action) + Clone + Send + Sync + 'static,
{
    let on_key = dispatch.clone();
    let keyup = window_event_listener(ev::keyup, move |event: web_sys::KeyboardEvent| {
        let new_todo = input_by_selector("#new-todo");
        let edit = input_by_selector(".edit");

        let new_value = new_todo.as_ref().map(|input| input.value()).unwrap_or_default();
        let edit_value = edit.as_ref().map(|input| input.value());
        let ctx = KeyContext {
            new_todo: &new_value,
            edit_value: edit_value.as_deref(),
        };

        let response = on_keyup(&event.key(), &ctx);
        for action in response.actions {
            on_key(action);
        }
        if response.reset_new_todo {
            if let Some(input) = new_todo {
                input.set_value("");
                let _ = input.focus();
            }
        }
    });

    let hashchange = window_event_listener(ev::hashchange, move |_: web_sys::HashChangeEvent| {
        let hash = current_hash();
        tracing::debug!(%hash, "route changed");
        dispatch(on_hash_change(&hash));
    });

    on_cleanup(move || {
        keyup.remove();
        hashchange.remove();
    });
}
