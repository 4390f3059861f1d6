//! Local echo: the browser-side copy of every submit attempt.
//!
//! DESIGN
//! ======
//! The echo list is one JSON array under a single storage key. `LocalEcho`
//! owns the read/append cycle and talks to storage through the
//! `EchoBackend` trait, so the same code runs against `localStorage` in the
//! browser and against an in-memory map in tests.
//!
//! TRADE-OFFS
//! ==========
//! A stored value that is not a JSON array is never overwritten by an
//! append; the append fails instead and the foreign value stays for
//! inspection. Listing such a value yields an empty list.

use crate::consts::{ECHO_EXPORT_PREFIX, ECHO_STORAGE_KEY};
use crate::form::EchoEntry;

#[derive(Debug, thiserror::Error)]
pub enum EchoError {
    #[error("storage unavailable: {0}")]
    Storage(String),
    #[error("stored echo list is not a JSON array: {0}")]
    Corrupt(String),
    #[error("echo entry could not be encoded: {0}")]
    Encode(#[from] serde_json::Error),
}

/// String key/value storage, the shape of `window.localStorage`.
pub trait EchoBackend {
    /// # Errors
    ///
    /// Returns `Storage` if the backend cannot be read.
    fn read(&self, key: &str) -> Result<Option<String>, EchoError>;

    /// # Errors
    ///
    /// Returns `Storage` if the backend refuses the write (e.g. quota).
    fn write(&self, key: &str, value: &str) -> Result<(), EchoError>;
}

/// `window.localStorage` backend.
#[cfg(feature = "browser")]
pub struct BrowserStorage {
    storage: web_sys::Storage,
}

#[cfg(feature = "browser")]
impl BrowserStorage {
    /// # Errors
    ///
    /// Returns `Storage` when there is no window or storage is disabled.
    pub fn local() -> Result<Self, EchoError> {
        let window = web_sys::window().ok_or_else(|| EchoError::Storage("no window".into()))?;
        match window.local_storage() {
            Ok(Some(storage)) => Ok(Self { storage }),
            Ok(None) => Err(EchoError::Storage("localStorage disabled".into())),
            Err(e) => Err(EchoError::Storage(js_error(&e))),
        }
    }
}

#[cfg(feature = "browser")]
impl EchoBackend for BrowserStorage {
    fn read(&self, key: &str) -> Result<Option<String>, EchoError> {
        self.storage.get_item(key).map_err(|e| EchoError::Storage(js_error(&e)))
    }

    fn write(&self, key: &str, value: &str) -> Result<(), EchoError> {
        self.storage.set_item(key, value).map_err(|e| EchoError::Storage(js_error(&e)))
    }
}

#[cfg(feature = "browser")]
fn js_error(value: &wasm_bindgen::JsValue) -> String {
    value.as_string().unwrap_or_else(|| format!("{value:?}"))
}

/// Append-only list of submit echoes under one storage key.
pub struct LocalEcho<B> {
    backend: B,
    key: String,
}

impl<B: EchoBackend> LocalEcho<B> {
    pub fn new(backend: B) -> Self {
        Self::with_key(backend, ECHO_STORAGE_KEY)
    }

    pub fn with_key(backend: B, key: &str) -> Self {
        Self { backend, key: key.to_owned() }
    }

    #[cfg(test)]
    fn backend(&self) -> &B {
        &self.backend
    }

    fn load(&self) -> Result<Vec<EchoEntry>, EchoError> {
        let Some(raw) = self.backend.read(&self.key)? else {
            return Ok(Vec::new());
        };
        let parsed: Option<Vec<EchoEntry>> =
            serde_json::from_str(&raw).map_err(|e| EchoError::Corrupt(e.to_string()))?;
        Ok(parsed.unwrap_or_default())
    }

    /// Every stored entry, oldest first. Unreadable storage lists as empty.
    pub fn list(&self) -> Vec<EchoEntry> {
        self.load().unwrap_or_default()
    }

    /// Append one entry and return the new list length.
    ///
    /// # Errors
    ///
    /// Returns `Corrupt` if the stored value is not an array, or the
    /// backend's error if it cannot be read or written.
    pub fn append(&self, entry: EchoEntry) -> Result<usize, EchoError> {
        let mut entries = self.load()?;
        entries.push(entry);
        let raw = serde_json::to_string(&entries)?;
        self.backend.write(&self.key, &raw)?;
        Ok(entries.len())
    }

    /// The list pretty-printed with two-space indentation.
    pub fn export_json(&self) -> String {
        serde_json::to_string_pretty(&self.list()).unwrap_or_else(|_| "[]".to_owned())
    }

    /// Download name for an export taken at `now_ms` (JS `Date.now()`).
    pub fn export_filename(&self, now_ms: f64) -> String {
        format!("{ECHO_EXPORT_PREFIX}{:.0}.json", now_ms.max(0.0).trunc())
    }
}

#[cfg(test)]
#[path = "echo_test.rs"]
mod echo_test;
