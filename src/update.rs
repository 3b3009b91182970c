//! Update
//!
//! The state transition function. Every mutation of the model goes through
//! [`update`]; the input model is never touched.

use crate::models::{EditState, Model, Route, Timestamp, Todo, TodoId, DOUBLE_CLICK_MS};

/// A request to change the model. Payloads read from the page (input values,
/// the clock) are carried here instead of being looked up during the update.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// Append a todo with the given (untrimmed) title
    Add(String),
    Toggle(TodoId),
    ToggleAll,
    Delete(TodoId),
    /// A click on a todo label
    Edit(TodoId),
    /// Commit the edit field's value to the todo being edited
    Save(String),
    ClearCompleted,
    Route(Route),
}

impl Action {
    /// Parse the string-tagged form of an action, e.g. `("TOGGLE", Some("3"))`.
    ///
    /// Returns `None` for unknown tags and for ids that do not parse.
    pub fn from_tag(tag: &str, data: Option<&str>) -> Option<Self> {
        let id = || data.and_then(|raw| raw.trim().parse::<TodoId>().ok());
        let text = || data.unwrap_or_default().to_string();
        match tag {
            "ADD" => Some(Action::Add(text())),
            "TOGGLE" => id().map(Action::Toggle),
            "TOGGLE_ALL" => Some(Action::ToggleAll),
            "DELETE" => id().map(Action::Delete),
            "EDIT" => id().map(Action::Edit),
            "SAVE" => Some(Action::Save(text())),
            "CLEAR_COMPLETED" => Some(Action::ClearCompleted),
            "ROUTE" => Some(Action::Route(Route::parse(data.unwrap_or_default()))),
            _ => None,
        }
    }
}

/// Compute the model that follows `model` once `action` is applied at `now`.
pub fn update(model: &Model, action: Action, now: Timestamp) -> Model {
    let mut next = model.clone();
    match action {
        Action::Add(title) => {
            let title = title.trim();
            if title.is_empty() {
                return next;
            }
            let Some(id) = next.next_id() else {
                tracing::warn!("todo ids exhausted, ignoring add");
                return next;
            };
            next.todos.push(Todo::new(id, title));
            next.sync_all_done();
        }
        Action::Toggle(id) => {
            if let Some(todo) = next.todos.iter_mut().find(|todo| todo.id == id) {
                todo.done = !todo.done;
            }
            next.sync_all_done();
        }
        Action::ToggleAll => {
            next.all_done = !next.all_done;
            let done = next.all_done;
            next.todos.iter_mut().for_each(|todo| todo.done = done);
        }
        Action::Delete(id) => remove_where(&mut next, |todo| todo.id == id),
        Action::Edit(id) => {
            next.edit = match model.edit {
                EditState::Armed { id: armed, at }
                    if armed == id
                        && now.saturating_sub(at) < DOUBLE_CLICK_MS
                        && model.contains(id) =>
                {
                    tracing::debug!(id, "double click, editing");
                    EditState::Editing { id }
                }
                _ => EditState::Armed { id, at: now },
            };
        }
        Action::Save(title) => {
            let editing = next.editing();
            next.edit = EditState::Idle;
            let Some(id) = editing else {
                return next;
            };
            let title = title.trim();
            if title.is_empty() {
                return update(&next, Action::Delete(id), now);
            }
            if let Some(todo) = next.todos.iter_mut().find(|todo| todo.id == id) {
                todo.title = title.to_string();
            }
            next.sync_all_done();
        }
        Action::ClearCompleted => remove_where(&mut next, |todo| todo.done),
        Action::Route(route) => next.hash = route,
    }
    next
}

/// [`update`] driven by a string tag. Unknown tags and unparsable ids leave
/// the model unchanged.
pub fn update_tagged(model: &Model, tag: &str, data: Option<&str>, now: Timestamp) -> Model {
    match Action::from_tag(tag, data) {
        Some(action) => update(model, action, now),
        None => {
            tracing::debug!(tag, "ignoring unknown action");
            model.clone()
        }
    }
}

fn remove_where(model: &mut Model, remove: impl Fn(&Todo) -> bool) {
    model.todos.retain(|todo| !remove(todo));
    model.drop_stale_edit();
    model.sync_all_done();
}

#[cfg(test)]
mod tests {
    use super::*;

    fn model_with(titles: &[&str]) -> Model {
        titles.iter().fold(Model::default(), |model, title| {
            update(&model, Action::Add(title.to_string()), 0)
        })
    }

    fn editing(model: &Model, id: TodoId) -> Model {
        let armed = update(model, Action::Edit(id), 1_000);
        update(&armed, Action::Edit(id), 1_100)
    }

    #[test]
    fn test_unknown_tag_is_noop() {
        let model = model_with(&["Learn Rust"]);
        assert_eq!(update_tagged(&model, "UNKNOWN", None, 0), model);
        assert_eq!(update_tagged(&model, "add", Some("lowercase"), 0), model);
        assert_eq!(update_tagged(&model, "TOGGLE", Some("not-a-number"), 0), model);
    }

    #[test]
    fn test_add_to_empty_list() {
        let model = update(&Model::default(), Action::Add("X".into()), 0);
        assert_eq!(model.todos, vec![Todo { id: 1, title: "X".into(), done: false }]);
    }

    #[test]
    fn test_add_trims_and_increments_id() {
        let model = model_with(&["one", "  two  "]);
        assert_eq!(model.todos[1].id, 2);
        assert_eq!(model.todos[1].title, "two");
    }

    #[test]
    fn test_add_blank_title_ignored() {
        let model = model_with(&["one"]);
        assert_eq!(update(&model, Action::Add("   ".into()), 0), model);
    }

    #[test]
    fn test_update_leaves_input_untouched() {
        let model = model_with(&["one"]);
        let snapshot = model.clone();
        let _ = update(&model, Action::Toggle(1), 0);
        assert_eq!(model, snapshot);
    }

    #[test]
    fn test_toggle_is_involution() {
        let model = model_with(&["one", "two"]);
        let once = update(&model, Action::Toggle(1), 0);
        assert!(once.todos[0].done);
        assert!(!once.all_done);
        let twice = update(&once, Action::Toggle(1), 0);
        assert_eq!(twice.todos, model.todos);
    }

    #[test]
    fn test_toggle_last_undone_sets_all_done() {
        let model = model_with(&["one"]);
        let model = update(&model, Action::Toggle(1), 0);
        assert!(model.all_done);
    }

    #[test]
    fn test_toggle_missing_id_changes_nothing() {
        let model = model_with(&["one"]);
        let next = update(&model, Action::Toggle(42), 0);
        assert_eq!(next.todos, model.todos);
    }

    #[test]
    fn test_toggle_all_round_trip() {
        let model = model_with(&["one", "two", "three"]);
        let model = update(&model, Action::Toggle(2), 0);

        let all = update(&model, Action::ToggleAll, 0);
        assert!(all.all_done);
        assert!(all.todos.iter().all(|todo| todo.done));

        let none = update(&all, Action::ToggleAll, 0);
        assert!(!none.all_done);
        assert!(none.todos.iter().all(|todo| !todo.done));
    }

    #[test]
    fn test_delete() {
        let model = model_with(&["one", "two", "three"]);
        let model = update(&model, Action::Delete(2), 0);
        let ids: Vec<_> = model.todos.iter().map(|todo| todo.id).collect();
        assert_eq!(ids, vec![1, 3]);
    }

    #[test]
    fn test_delete_missing_id_changes_nothing() {
        let model = model_with(&["one", "two"]);
        assert_eq!(update(&model, Action::Delete(42), 0), model);
    }

    #[test]
    fn test_add_with_exhausted_ids_is_noop() {
        let model: Model = serde_json::from_str(
            r#"{"todos":[{"id":4294967295,"title":"last","done":false}]}"#,
        )
        .unwrap();
        assert_eq!(update(&model, Action::Add("y".into()), 0), model);
    }

    #[test]
    fn test_single_click_arms() {
        let model = model_with(&["one"]);
        let model = update(&model, Action::Edit(1), 500);
        assert_eq!(model.edit, EditState::Armed { id: 1, at: 500 });
        assert_eq!(model.editing(), None);
    }

    #[test]
    fn test_double_click_enters_edit_mode() {
        let model = editing(&model_with(&["one"]), 1);
        assert_eq!(model.editing(), Some(1));
    }

    #[test]
    fn test_slow_second_click_rearms() {
        let model = model_with(&["one"]);
        let model = update(&model, Action::Edit(1), 1_000);
        let model = update(&model, Action::Edit(1), 1_300);
        assert_eq!(model.edit, EditState::Armed { id: 1, at: 1_300 });
    }

    #[test]
    fn test_click_on_other_todo_rearms() {
        let model = model_with(&["one", "two"]);
        let model = update(&model, Action::Edit(1), 1_000);
        let model = update(&model, Action::Edit(2), 1_050);
        assert_eq!(model.edit, EditState::Armed { id: 2, at: 1_050 });
    }

    #[test]
    fn test_double_click_on_missing_todo_does_not_edit() {
        let model = editing(&model_with(&["one"]), 9);
        assert_eq!(model.editing(), None);
    }

    #[test]
    fn test_save_assigns_trimmed_title() {
        let model = editing(&model_with(&["one", "two"]), 2);
        let model = update(&model, Action::Save("  second  ".into()), 2_000);
        assert_eq!(model.todos[1].title, "second");
        assert_eq!(model.edit, EditState::Idle);
    }

    #[test]
    fn test_save_empty_deletes() {
        let model = editing(&model_with(&["one", "two"]), 1);
        let model = update(&model, Action::Save(String::new()), 2_000);
        assert_eq!(model.todos.len(), 1);
        assert_eq!(model.todos[0].id, 2);
        assert_eq!(model.edit, EditState::Idle);
    }

    #[test]
    fn test_save_without_editing_only_resets_clicks() {
        let model = model_with(&["one"]);
        let model = update(&model, Action::Edit(1), 1_000);
        let saved = update(&model, Action::Save("changed".into()), 1_050);
        assert_eq!(saved.todos[0].title, "one");
        assert_eq!(saved.edit, EditState::Idle);
    }

    #[test]
    fn test_save_whitespace_deletes() {
        let model = editing(&model_with(&["one", "two"]), 2);
        let model = update(&model, Action::Save("   ".into()), 2_000);
        let ids: Vec<_> = model.todos.iter().map(|todo| todo.id).collect();
        assert_eq!(ids, vec![1]);
        assert_eq!(model.edit, EditState::Idle);
    }

    #[test]
    fn test_clear_completed() {
        let model = model_with(&["one", "two", "three"]);
        let model = update(&model, Action::Toggle(1), 0);
        let model = update(&model, Action::Toggle(3), 0);
        let model = update(&model, Action::ClearCompleted, 0);
        assert_eq!(model.todos.len(), 1);
        assert_eq!(model.todos[0].title, "two");
        assert!(!model.all_done);
    }

    #[test]
    fn test_delete_edited_todo_resets_edit_state() {
        let model = editing(&model_with(&["one", "two"]), 1);
        let model = update(&model, Action::Delete(1), 2_000);
        assert_eq!(model.edit, EditState::Idle);
    }

    #[test]
    fn test_route() {
        let model = update(&Model::default(), Action::Route(Route::Active), 0);
        assert_eq!(model.hash, Route::Active);
        let model = update_tagged(&model, "ROUTE", Some("#/nowhere"), 0);
        assert_eq!(model.hash, Route::All);
    }

    #[test]
    fn test_tagged_actions() {
        let model = update_tagged(&Model::default(), "ADD", Some("tagged"), 0);
        let model = update_tagged(&model, "TOGGLE", Some("1"), 0);
        assert!(model.todos[0].done);
        let model = update_tagged(&model, "DELETE", Some("1"), 0);
        assert!(model.todos.is_empty());
    }
}
