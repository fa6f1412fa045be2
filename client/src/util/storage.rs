//! Key/value persistence behind the session store.
//!
//! SYSTEM CONTEXT
//! ==============
//! The hydrated app persists through browser `localStorage`; SSR has no
//! storage at all; tests use an in-memory map. Keeping the seam here means the
//! session logic never touches `web-sys` directly.

#[cfg(test)]
#[path = "storage_test.rs"]
mod storage_test;

/// Storage failure.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum StorageError {
    #[error("browser storage unavailable")]
    Unavailable,
    #[error("storage rejected write for `{0}`")]
    WriteRejected(String),
    #[error("could not encode value for `{key}`: {reason}")]
    Encode { key: String, reason: String },
}

/// Minimal string key/value store.
pub trait SessionStorage {
    fn get(&self, key: &str) -> Option<String>;
    /// # Errors
    ///
    /// Returns an error if the backend is missing or refuses the write.
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;
    fn remove(&self, key: &str);
}

/// `window.localStorage` in the browser; unavailable everywhere else.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserStorage;

#[cfg(feature = "hydrate")]
fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

// Keys are only consulted when a browser is present.
#[cfg_attr(not(feature = "hydrate"), allow(unused_variables))]
impl SessionStorage for BrowserStorage {
    fn get(&self, key: &str) -> Option<String> {
        #[cfg(feature = "hydrate")]
        {
            local_storage()?.get_item(key).ok().flatten()
        }
        #[cfg(not(feature = "hydrate"))]
        {
            None
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        #[cfg(feature = "hydrate")]
        {
            let storage = local_storage().ok_or(StorageError::Unavailable)?;
            storage
                .set_item(key, value)
                .map_err(|_| StorageError::WriteRejected(key.to_owned()))
        }
        #[cfg(not(feature = "hydrate"))]
        {
            Err(StorageError::Unavailable)
        }
    }

    fn remove(&self, key: &str) {
        #[cfg(feature = "hydrate")]
        {
            if let Some(storage) = local_storage() {
                if storage.remove_item(key).is_err() {
                    leptos::logging::warn!("failed to remove `{key}` from localStorage");
                }
            }
        }
    }
}

/// Serialize `value` as JSON and store it under `key`.
///
/// # Errors
///
/// Returns [`StorageError::Encode`] if serialization fails, or the backend's error.
pub fn save_json<S, T>(storage: &S, key: &str, value: &T) -> Result<(), StorageError>
where
    S: SessionStorage,
    T: serde::Serialize,
{
    let raw = serde_json::to_string(value)
        .map_err(|e| StorageError::Encode { key: key.to_owned(), reason: e.to_string() })?;
    storage.set(key, &raw)
}

/// Load and parse a JSON value stored under `key`.
pub fn load_json<S, T>(storage: &S, key: &str) -> Option<T>
where
    S: SessionStorage,
    T: serde::de::DeserializeOwned,
{
    let raw = storage.get(key)?;
    match serde_json::from_str(&raw) {
        Ok(value) => Some(value),
        Err(e) => {
            leptos::logging::warn!("discarding unreadable `{key}`: {e}");
            None
        }
    }
}

/// In-memory storage for tests, with optional write failure injection.
#[cfg(test)]
#[derive(Debug, Default)]
pub struct MemoryStorage {
    entries: std::cell::RefCell<std::collections::HashMap<String, String>>,
    reject_key: Option<String>,
}

#[cfg(test)]
impl MemoryStorage {
    /// Storage that refuses writes to `key`.
    pub fn rejecting(key: &str) -> Self {
        Self { reject_key: Some(key.to_owned()), ..Self::default() }
    }

    pub fn contains(&self, key: &str) -> bool {
        self.entries.borrow().contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.entries.borrow().len()
    }
}

#[cfg(test)]
impl SessionStorage for MemoryStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        if self.reject_key.as_deref() == Some(key) {
            return Err(StorageError::WriteRejected(key.to_owned()));
        }
        self.entries.borrow_mut().insert(key.to_owned(), value.to_owned());
        Ok(())
    }

    fn remove(&self, key: &str) {
        self.entries.borrow_mut().remove(key);
    }
}

#[cfg(test)]
impl SessionStorage for &MemoryStorage {
    fn get(&self, key: &str) -> Option<String> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        (**self).set(key, value)
    }

    fn remove(&self, key: &str) {
        (**self).remove(key);
    }
}
