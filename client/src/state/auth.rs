//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Provided once as `RwSignal<AuthState>` and read by route guards, the top
//! bar and role-gated views. Nothing else derives session from storage.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use crate::net::types::{Capability, Session, User};

/// Authentication state: the active session, if any, and whether the
/// persisted session has been restored yet.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AuthState {
    pub session: Option<Session>,
    pub loading: bool,
}

impl AuthState {
    /// Initial state before the persisted session has been read.
    pub fn restoring() -> Self {
        Self { session: None, loading: true }
    }

    pub fn signed_in(session: Session) -> Self {
        Self { session: Some(session), loading: false }
    }

    pub fn signed_out() -> Self {
        Self { session: None, loading: false }
    }

    pub fn is_active(&self) -> bool {
        self.session.is_some()
    }

    pub fn user(&self) -> Option<&User> {
        self.session.as_ref().map(|s| &s.user)
    }

    pub fn token(&self) -> Option<&str> {
        self.session.as_ref().map(|s| s.token.as_str())
    }

    /// Whether the signed-in user may perform `capability`. Signed out: never.
    pub fn can(&self, capability: Capability) -> bool {
        self.user().is_some_and(|u| u.can(capability))
    }
}
