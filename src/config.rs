//! App Configuration
//!
//! Settings read from `data-*` attributes on `<body>`, e.g.
//! `<body data-storage-key="my-todos" data-log-level="debug">`.

use std::str::FromStr;

use tracing::Level;

pub const DEFAULT_STORAGE_KEY: &str = "todos-elmish";

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// localStorage key the model is saved under
    pub storage_key: String,
    /// Most verbose level sent to the browser console
    pub log_level: Level,
    /// Save the model after every change
    pub persist: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
            log_level: Level::INFO,
            persist: true,
        }
    }
}

impl AppConfig {
    /// Build from an attribute lookup. Missing or unparsable values keep
    /// their defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();
        if let Some(key) = lookup("data-storage-key").filter(|key| !key.trim().is_empty()) {
            config.storage_key = key.trim().to_string();
        }
        if let Some(level) = lookup("data-log-level").and_then(|raw| Level::from_str(raw.trim()).ok()) {
            config.log_level = level;
        }
        if let Some(persist) = lookup("data-persist").and_then(|raw| parse_flag(&raw)) {
            config.persist = persist;
        }
        config
    }

    /// Read from the document body, defaults when there is none
    pub fn from_document() -> Self {
        let body = web_sys::window()
            .and_then(|window| window.document())
            .and_then(|document| document.body());
        match body {
            Some(body) => Self::from_lookup(|name| body.get_attribute(name)),
            None => Self::default(),
        }
    }
}

fn parse_flag(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Some(true),
        "false" | "0" | "no" | "off" => Some(false),
        _ => None,
    }
}
