//! Shared route-guard helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every route applies the same rule: protected pages bounce to `/login`
//! without a session, public auth pages bounce to `/` with one. Decisions wait
//! until the persisted session has been restored.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;

use crate::state::auth::AuthState;
use crate::state::session::LOGIN_PATH;

/// Directory root.
pub const HOME_PATH: &str = "/";

/// Who may see a route.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RouteAccess {
    /// Login/register: only without a session.
    Public,
    /// Directory and editor: only with a session.
    Protected,
}

/// Where a route should send the user, if anywhere.
pub fn guard_redirect(access: RouteAccess, state: &AuthState) -> Option<&'static str> {
    if state.loading {
        return None;
    }
    match (access, state.is_active()) {
        (RouteAccess::Public, true) => Some(HOME_PATH),
        (RouteAccess::Protected, false) => Some(LOGIN_PATH),
        _ => None,
    }
}

/// Whether a route's content may render for `state`.
pub fn may_render(access: RouteAccess, state: &AuthState) -> bool {
    !state.loading && guard_redirect(access, state).is_none()
}

/// Redirect whenever the auth state stops matching `access`.
pub fn install_route_guard<F>(auth: RwSignal<AuthState>, access: RouteAccess, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move || {
        if let Some(target) = auth.with(|state| guard_redirect(access, state)) {
            navigate(target, NavigateOptions::default());
        }
    });
}
