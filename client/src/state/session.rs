//! Session store: the one place that reads and writes the persisted session.
//!
//! DESIGN
//! ======
//! [`SessionStore`] is the pure part: it moves a [`Session`] in and out of a
//! [`SessionStorage`] and returns the resulting [`AuthState`]. [`SessionHandle`]
//! binds a store to the app's `RwSignal<AuthState>`, which is the single
//! subscription point for every view. Token and user are persisted under two
//! fixed keys but only ever written, restored and cleared as a pair.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use leptos::prelude::*;

use crate::net::api::SessionGate;
use crate::net::types::{Session, User};
use crate::state::auth::AuthState;
use crate::util::storage::{BrowserStorage, SessionStorage, StorageError, load_json, save_json};

/// Storage key for the bearer token.
pub const TOKEN_KEY: &str = "token";
/// Storage key for the JSON user profile.
pub const USER_KEY: &str = "user";
/// Route the user is sent to when the session ends.
pub const LOGIN_PATH: &str = "/login";

/// Persists and restores the token + user pair.
#[derive(Clone, Copy, Debug, Default)]
pub struct SessionStore<S> {
    storage: S,
}

impl<S: SessionStorage> SessionStore<S> {
    pub fn new(storage: S) -> Self {
        Self { storage }
    }

    /// Read the persisted pair. A half-written or unreadable pair is cleared.
    pub fn restore(&self) -> AuthState {
        let raw_token = self.storage.get(TOKEN_KEY);
        if raw_token.is_none() && self.storage.get(USER_KEY).is_none() {
            return AuthState::signed_out();
        }
        let token = raw_token.filter(|t| !t.is_empty());
        let user = load_json::<_, User>(&self.storage, USER_KEY);
        match (token, user) {
            (Some(token), Some(user)) => AuthState::signed_in(Session { token, user }),
            _ => {
                leptos::logging::warn!("discarding incomplete persisted session");
                self.clear();
                AuthState::signed_out()
            }
        }
    }

    /// Persist both halves, rolling back the token if the user write fails.
    ///
    /// # Errors
    ///
    /// Returns the storage error; nothing is left persisted in that case.
    pub fn login(&self, session: Session) -> Result<AuthState, StorageError> {
        self.storage.set(TOKEN_KEY, &session.token)?;
        if let Err(e) = save_json(&self.storage, USER_KEY, &session.user) {
            self.storage.remove(TOKEN_KEY);
            return Err(e);
        }
        Ok(AuthState::signed_in(session))
    }

    pub fn logout(&self) -> AuthState {
        self.clear();
        AuthState::signed_out()
    }

    fn clear(&self) {
        self.storage.remove(TOKEN_KEY);
        self.storage.remove(USER_KEY);
    }
}

/// App-facing session handle: store + reactive state.
///
/// Leaving a protected view after expiry is the route guard's job: once the
/// signal turns inactive, the mounted page's guard navigates to `/login`.
#[derive(Clone, Copy, Debug)]
pub struct SessionHandle<S = BrowserStorage> {
    state: RwSignal<AuthState>,
    store: SessionStore<S>,
}

impl SessionHandle {
    pub fn new(state: RwSignal<AuthState>) -> Self {
        Self::with_storage(state, BrowserStorage)
    }
}

impl<S: SessionStorage> SessionHandle<S> {
    pub fn with_storage(state: RwSignal<AuthState>, storage: S) -> Self {
        Self { state, store: SessionStore::new(storage) }
    }

    /// The signal every view subscribes to.
    pub fn state(&self) -> RwSignal<AuthState> {
        self.state
    }

    pub fn restore(&self) {
        self.state.set(self.store.restore());
    }

    /// Persist `session` and publish it. The signal only changes once both
    /// halves are stored.
    ///
    /// # Errors
    ///
    /// Returns the storage error; the visible state is left untouched.
    pub fn login(&self, session: Session) -> Result<(), StorageError> {
        let next = self.store.login(session)?;
        self.state.set(next);
        Ok(())
    }

    pub fn logout(&self) {
        self.state.set(self.store.logout());
    }
}

impl<S: SessionStorage> SessionGate for SessionHandle<S> {
    fn bearer_token(&self) -> Option<String> {
        self.state.with_untracked(|s| s.token().map(str::to_owned))
    }

    /// Only the active to inactive transition touches the signal, so a burst of
    /// 401s from concurrent requests notifies subscribers once.
    fn expire(&self) {
        if self.state.with_untracked(AuthState::is_active) {
            leptos::logging::log!("session expired; signing out");
            self.logout();
        }
    }
}
