//! Persistence Bridge
//!
//! Mirrors the task list and theme to a string key-value store.
//! In the browser that store is `window.localStorage`.

use std::cell::RefCell;
use std::collections::HashMap;

use thiserror::Error;
use wasm_bindgen::JsValue;

use crate::config::StorageKeys;
use crate::models::{Task, Theme};

pub type StorageResult<T> = Result<T, StorageError>;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("local storage is not available")]
    Unavailable,
    #[error("storage call failed: {0}")]
    Js(String),
    #[error("stored task list is malformed: {0}")]
    Malformed(#[source] serde_json::Error),
    #[error("failed to serialize task list: {0}")]
    Serialize(#[source] serde_json::Error),
}

impl From<JsValue> for StorageError {
    fn from(value: JsValue) -> Self {
        StorageError::Js(format!("{:?}", value))
    }
}

/// String key-value store with last-write-wins semantics
pub trait KeyValueStore {
    fn get(&self, key: &str) -> StorageResult<Option<String>>;

    fn set(&self, key: &str, value: &str) -> StorageResult<()>;
}

/// Browser `localStorage`
pub struct LocalStorage {
    inner: web_sys::Storage,
}

impl LocalStorage {
    pub fn open() -> StorageResult<Self> {
        let window = web_sys::window().ok_or(StorageError::Unavailable)?;
        let inner = window.local_storage()?.ok_or(StorageError::Unavailable)?;
        Ok(Self { inner })
    }
}

impl KeyValueStore for LocalStorage {
    fn get(&self, key: &str) -> StorageResult<Option<String>> {
        Ok(self.inner.get_item(key)?)
    }

    fn set(&self, key: &str, value: &str) -> StorageResult<()> {
        Ok(self.inner.set_item(key, value)?)
    }
}

/// In-memory store, used when `localStorage` is missing and in tests
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RefCell<HashMap<String, String>>,
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> StorageResult<Option<String>> {
        Ok(self.entries.borrow().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> StorageResult<()> {
        self.entries.borrow_mut().insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Open `localStorage`, falling back to memory so the list still works
pub fn open_default() -> Box<dyn KeyValueStore> {
    match LocalStorage::open() {
        Ok(storage) => Box::new(storage),
        Err(error) => {
            tracing::warn!(%error, "falling back to in-memory storage");
            Box::new(MemoryStore::default())
        }
    }
}

/// Missing key means an empty list
pub fn load_todos(store: &dyn KeyValueStore, keys: &StorageKeys) -> StorageResult<Vec<Task>> {
    match store.get(keys.todos)? {
        Some(raw) => serde_json::from_str(&raw).map_err(StorageError::Malformed),
        None => Ok(Vec::new()),
    }
}

pub fn save_todos(store: &dyn KeyValueStore, keys: &StorageKeys, todos: &[Task]) -> StorageResult<()> {
    let json = serde_json::to_string(todos).map_err(StorageError::Serialize)?;
    store.set(keys.todos, &json)
}

pub fn load_theme(store: &dyn KeyValueStore, keys: &StorageKeys) -> StorageResult<Theme> {
    Ok(store
        .get(keys.theme)?
        .map(|raw| Theme::from_str(&raw))
        .unwrap_or_default())
}

pub fn save_theme(store: &dyn KeyValueStore, keys: &StorageKeys, theme: Theme) -> StorageResult<()> {
    store.set(keys.theme, theme.as_str())
}
