//! View
//!
//! Renders the model with Leptos. Every control dispatches an [`Action`]
//! through the `dispatch` callback; nothing here mutates state.

use leptos::html::Input;
use leptos::prelude::*;

use crate::models::{Model, Route, Todo};
use crate::update::Action;

/// Heading of the app
pub const TITLE: &str = "Tudus";

/// Filter links shown in the footer
const FILTERS: &[(Route, &str, &str)] = &[
    (Route::All, "all", "All"),
    (Route::Active, "active", "Active"),
    (Route::Completed, "completed", "Completed"),
];

// ========================
// Display Rules
// ========================

/// Inline `style` for an element that is shown or hidden
pub fn display(visible: bool) -> &'static str {
    if visible {
        "display:block"
    } else {
        "display:none"
    }
}

/// Style of `#main` and `#footer`: hidden while there are no todos
pub fn section_style(model: &Model) -> &'static str {
    display(!model.todos.is_empty())
}

/// Style of the clear-completed button: shown once something is done
pub fn clear_completed_style(model: &Model) -> &'static str {
    display(model.completed() > 0)
}

/// Text following the remaining count, singular only for exactly one
pub fn items_left(remaining: usize) -> &'static str {
    if remaining == 1 {
        " item left"
    } else {
        " items left"
    }
}

/// Classes of a todo's `<li>`
pub fn item_class(item: &Todo, model: &Model) -> String {
    let mut classes = Vec::new();
    if item.done {
        classes.push("completed");
    }
    if model.editing() == Some(item.id) {
        classes.push("editing");
    }
    classes.join(" ")
}

/// `selected` on the filter link matching the current route
pub fn filter_class(current: Route, route: Route) -> &'static str {
    if current == route {
        "selected"
    } else {
        ""
    }
}

// ========================
// Rendering
// ========================

/// The whole application. The header stays mounted; the list and footer
/// re-render whenever the model changes.
pub fn view(model: ReadSignal<Model>, dispatch: Callback<Action>) -> impl IntoView {
    view! {
        <section class="todoapp">
            <header class="header">
                <h1>{TITLE}</h1>
                <input
                    id="new-todo"
                    class="new-todo"
                    placeholder="What needs to be done?"
                    autofocus=true
                />
            </header>
            {move || model.with(|model| render_main(model, dispatch))}
            {move || model.with(|model| render_footer(model, dispatch))}
        </section>
    }
}

/// One `<li>` per todo, with the focused inline editor while it is edited
pub fn render_item(item: &Todo, model: &Model, dispatch: Callback<Action>) -> impl IntoView {
    let id = item.id;
    let done = item.done;
    let label = item.title.clone();
    let value = item.title.clone();
    let editing = model.editing() == Some(id);

    let edit_ref = NodeRef::<Input>::new();
    if editing {
        Effect::new(move |_| {
            if let Some(input) = edit_ref.get() {
                let _ = input.focus();
            }
        });
    }

    view! {
        <li data-id=id.to_string() id=id.to_string() class=item_class(item, model)>
            <div class="view">
                <input
                    class="toggle"
                    type="checkbox"
                    prop:checked=done
                    on:click=move |_| dispatch.run(Action::Toggle(id))
                />
                <label on:click=move |_| dispatch.run(Action::Edit(id))>{label}</label>
                <button class="destroy" on:click=move |_| dispatch.run(Action::Delete(id))></button>
            </div>
            {editing.then(move || view! {
                <input class="edit" data-id=id.to_string() prop:value=value node_ref=edit_ref />
            })}
        </li>
    }
}

/// The todo list section, filtered by the current route
pub fn render_main(model: &Model, dispatch: Callback<Action>) -> impl IntoView {
    let all_done = model.all_done;
    let items = model
        .visible()
        .map(|item| render_item(item, model, dispatch))
        .collect_view();

    view! {
        <section class="main" id="main" style=section_style(model)>
            <input
                id="toggle-all"
                class="toggle-all"
                type="checkbox"
                prop:checked=all_done
                on:click=move |_| dispatch.run(Action::ToggleAll)
            />
            <label for="toggle-all">"Mark all as complete"</label>
            <ul class="todo-list">{items}</ul>
        </section>
    }
}

/// Remaining count, filter links and the clear-completed button
pub fn render_footer(model: &Model, dispatch: Callback<Action>) -> impl IntoView {
    let remaining = model.remaining();
    let completed = model.completed();
    let current = model.hash;

    let filters = FILTERS
        .iter()
        .map(|&(route, id, label)| {
            view! {
                <li>
                    <a href=route.hash() id=id class=filter_class(current, route)>{label}</a>
                </li>
            }
        })
        .collect_view();

    view! {
        <footer class="footer" id="footer" style=section_style(model)>
            <span class="todo-count" id="count">
                <strong>{remaining}</strong>
                {items_left(remaining)}
            </span>
            <ul class="filters">{filters}</ul>
            <button
                class="clear-completed"
                style=clear_completed_style(model)
                on:click=move |_| dispatch.run(Action::ClearCompleted)
            >
                "Clear completed ["
                <span id="completed-count">{completed}</span>
                "]"
            </button>
        </footer>
    }
}
