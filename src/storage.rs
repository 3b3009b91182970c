//! Model Persistence
//!
//! Best-effort key-value storage of the model. Nothing here is allowed to
//! stop the app: [`load_or_init`] always yields a model and save failures are
//! only logged by the caller.

use std::cell::RefCell;

use thiserror::Error;

use crate::models::Model;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("local storage is unavailable")]
    Unavailable,
    #[error("storage access failed: {0}")]
    Access(String),
    #[error("stored model is malformed: {0}")]
    Malformed(#[from] serde_json::Error),
}

pub type StorageResult<T> = Result<T, StorageError>;

/// Somewhere a model can be kept between page loads
pub trait ModelStore {
    /// The stored model, `None` when nothing has been saved yet
    fn load(&self) -> StorageResult<Option<Model>>;

    fn save(&self, model: &Model) -> StorageResult<()>;
}

/// Load the stored model, falling back to the initial one
pub fn load_or_init(store: &impl ModelStore) -> Model {
    match store.load() {
        Ok(Some(model)) => {
            let model = model.restored();
            tracing::info!(todos = model.todos.len(), "restored stored model");
            model
        }
        Ok(None) => Model::default(),
        Err(err) => {
            tracing::warn!(error = %err, "falling back to initial model");
            Model::default()
        }
    }
}

// ========================
// Browser localStorage
// ========================

/// `window.localStorage` under a fixed key
#[derive(Debug, Clone, PartialEq)]
pub struct LocalStore {
    key: String,
}

impl LocalStore {
    pub fn new(key: impl Into<String>) -> Self {
        Self { key: key.into() }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    fn storage(&self) -> StorageResult<web_sys::Storage> {
        let window = web_sys::window().ok_or(StorageError::Unavailable)?;
        window
            .local_storage()
            .map_err(|err| StorageError::Access(format!("{:?}", err)))?
            .ok_or(StorageError::Unavailable)
    }
}

impl ModelStore for LocalStore {
    fn load(&self) -> StorageResult<Option<Model>> {
        let raw = self
            .storage()?
            .get_item(&self.key)
            .map_err(|err| StorageError::Access(format!("{:?}", err)))?;
        match raw {
            Some(json) => Ok(Some(serde_json::from_str(&json)?)),
            None => Ok(None),
        }
    }

    fn save(&self, model: &Model) -> StorageResult<()> {
        let json = serde_json::to_string(model)?;
        self.storage()?
            .set_item(&self.key, &json)
            .map_err(|err| StorageError::Access(format!("{:?}", err)))
    }
}

// ========================
// In-memory
// ========================

/// Keeps the serialized model in memory
#[derive(Debug, Default)]
pub struct MemoryStore {
    slot: RefCell<Option<String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start with raw stored JSON, as if a previous session wrote it
    pub fn with_raw(json: impl Into<String>) -> Self {
        Self {
            slot: RefCell::new(Some(json.into())),
        }
    }

    pub fn raw(&self) -> Option<String> {
        self.slot.borrow().clone()
    }
}

impl ModelStore for MemoryStore {
    fn load(&self) -> StorageResult<Option<Model>> {
        match self.slot.borrow().as_deref() {
            Some(json) => Ok(Some(serde_json::from_str(json)?)),
            None => Ok(None),
        }
    }

    fn save(&self, model: &Model) -> StorageResult<()> {
        *self.slot.borrow_mut() = Some(serde_json::to_string(model)?);
        Ok(())
    }
}
