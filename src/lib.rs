//! Tudus
//!
//! A todo list built as an update loop: [`update`] maps a model and an
//! action to the next model, [`view`] renders the model with Leptos, and
//! the [`App`] component dispatches actions and persists after every change.

pub mod app;
pub mod config;
pub mod logging;
pub mod models;
pub mod storage;
pub mod subscriptions;
pub mod update;
pub mod view;

pub use app::App;
pub use config::AppConfig;
pub use models::{EditState, Model, Route, Todo, TodoId};
pub use subscriptions::subscriptions;
pub use update::{update, update_tagged, Action};
pub use view::{render_footer, render_item, render_main, view};
