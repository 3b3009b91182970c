//! Todo App
//!
//! The runtime loop: owns the model signal, dispatches actions into
//! [`update`], and persists the model after every change.

use leptos::prelude::*;

use crate::config::AppConfig;
use crate::models::Model;
use crate::storage::{load_or_init, LocalStore, ModelStore};
use crate::subscriptions::{current_hash, on_hash_change, subscriptions};
use crate::update::{update, Action};
use crate::view::view;

/// Apply `action` to the model held by `set_model`, stamped with the current time
pub fn dispatch_to(set_model: WriteSignal<Model>, action: Action) {
    tracing::debug!(?action, "dispatch");
    let now = js_sys::Date::now() as u64;
    set_model.update(|model| *model = update(model, action, now));
}

#[component]
pub fn App(config: AppConfig) -> impl IntoView {
    let store = LocalStore::new(config.storage_key.clone());
    let (model, set_model) = signal(load_or_init(&store));
    let dispatch = Callback::new(move |action: Action| dispatch_to(set_model, action));

    tracing::info!(key = store.key(), persist = config.persist, "mounting todo app");

    // Sync the route with the URL we were opened at
    dispatch.run(on_hash_change(&current_hash()));
    subscriptions(move |action| dispatch.run(action));

    // Persist
    if config.persist {
        Effect::new(move |_| {
            model.with(|model| {
                if let Err(err) = store.save(model) {
                    tracing::warn!(error = %err, "could not save model");
                }
            });
        });
    }

    view(model, dispatch)
}
