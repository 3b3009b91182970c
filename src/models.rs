//! Todo Models
//!
//! Plain data describing the whole application state.

use serde::{Deserialize, Serialize};

/// Identifier of a todo, unique within a model
pub type TodoId = u32;

/// Wall-clock time in milliseconds since the epoch
pub type Timestamp = u64;

/// Two clicks on the same label closer than this enter edit mode
pub const DOUBLE_CLICK_MS: Timestamp = 300;

/// A single todo entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Todo {
    pub id: TodoId,
    pub title: String,
    pub done: bool,
}

impl Todo {
    pub fn new(id: TodoId, title: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            done: false,
        }
    }
}

/// Which subset of todos is displayed, selected by the URL hash
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Route {
    #[default]
    All,
    Active,
    Completed,
}

impl Route {
    /// Parse a location hash. Anything unrecognized shows all todos.
    pub fn parse(hash: &str) -> Self {
        match hash {
            "#/active" => Route::Active,
            "#/completed" => Route::Completed,
            _ => Route::All,
        }
    }

    pub fn hash(&self) -> &'static str {
        match self {
            Route::All => "#/",
            Route::Active => "#/active",
            Route::Completed => "#/completed",
        }
    }

    /// Whether a todo is shown under this route
    pub fn shows(&self, todo: &Todo) -> bool {
        match self {
            Route::All => true,
            Route::Active => !todo.done,
            Route::Completed => todo.done,
        }
    }
}

impl From<String> for Route {
    fn from(hash: String) -> Self {
        Route::parse(&hash)
    }
}

impl From<Route> for String {
    fn from(route: Route) -> Self {
        route.hash().to_string()
    }
}

/// Label click tracking.
///
/// A first click arms the detector for that todo; a second click on the same
/// todo within [`DOUBLE_CLICK_MS`] switches to editing it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum EditState {
    #[default]
    Idle,
    Armed { id: TodoId, at: Timestamp },
    Editing { id: TodoId },
}

/// The complete application state
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Model {
    /// Todos in display order
    pub todos: Vec<Todo>,
    /// Current route, persisted as its hash string
    pub hash: Route,
    /// True when every todo is done
    pub all_done: bool,
    /// Double-click / inline edit tracking
    pub edit: EditState,
}

impl Model {
    /// Id of the todo currently being edited
    pub fn editing(&self) -> Option<TodoId> {
        match self.edit {
            EditState::Editing { id } => Some(id),
            _ => None,
        }
    }

    pub fn contains(&self, id: TodoId) -> bool {
        self.todos.iter().any(|todo| todo.id == id)
    }

    /// Number of todos not yet done
    pub fn remaining(&self) -> usize {
        self.todos.iter().filter(|todo| !todo.done).count()
    }

    /// Number of done todos
    pub fn completed(&self) -> usize {
        self.todos.len() - self.remaining()
    }

    /// Todos shown under the current route, in order
    pub fn visible(&self) -> impl Iterator<Item = &Todo> + '_ {
        self.todos.iter().filter(move |todo| self.hash.shows(todo))
    }

    /// Id for the next added todo, `None` once `TodoId::MAX` is taken
    pub fn next_id(&self) -> Option<TodoId> {
        match self.todos.iter().map(|todo| todo.id).max() {
            Some(max) => max.checked_add(1),
            None => Some(1),
        }
    }

    /// Recompute `all_done` from the todos
    pub fn sync_all_done(&mut self) {
        self.all_done = self.todos.iter().all(|todo| todo.done);
    }

    /// Forget click or edit tracking that points at a removed todo
    pub fn drop_stale_edit(&mut self) {
        let tracked = match self.edit {
            EditState::Idle => None,
            EditState::Armed { id, .. } | EditState::Editing { id } => Some(id),
        };
        if tracked.is_some_and(|id| !self.contains(id)) {
            self.edit = EditState::Idle;
        }
    }

    /// Rebuild derived state after loading from outside, e.g. storage
    pub fn restored(mut self) -> Self {
        self.sync_all_done();
        self.drop_stale_edit();
        self
    }
}
