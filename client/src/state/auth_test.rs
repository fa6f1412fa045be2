use super::*;
use crate::net::types::Role;

fn session(role: Role) -> Session {
    Session {
        token: "t1".to_owned(),
        user: User { username: "admin".to_owned(), email: None, role },
    }
}

// =============================================================
// AuthState defaults
// =============================================================

#[test]
fn auth_state_default_no_session() {
    let state = AuthState::default();
    assert!(state.session.is_none());
    assert!(!state.is_active());
}

#[test]
fn auth_state_default_not_loading() {
    let state = AuthState::default();
    assert!(!state.loading);
}

#[test]
fn restoring_state_is_loading_and_inactive() {
    let state = AuthState::restoring();
    assert!(state.loading);
    assert!(!state.is_active());
}

// =============================================================
// Session accessors
// =============================================================

#[test]
fn signed_in_exposes_token_and_user_together() {
    let state = AuthState::signed_in(session(Role::Admin));
    assert!(state.is_active());
    assert!(!state.loading);
    assert_eq!(state.token(), Some("t1"));
    assert_eq!(state.user().map(|u| u.username.as_str()), Some("admin"));
}

#[test]
fn signed_out_has_neither_token_nor_user() {
    let state = AuthState::signed_out();
    assert_eq!(state.token(), None);
    assert_eq!(state.user(), None);
}

// =============================================================
// Capabilities
// =============================================================

#[test]
fn admin_session_can_manage() {
    assert!(AuthState::signed_in(session(Role::Admin)).can(Capability::ManageEmployees));
}

#[test]
fn employee_session_cannot_manage() {
    let state = AuthState::signed_in(session(Role::Employee));
    assert!(!state.can(Capability::ManageEmployees));
    assert!(state.can(Capability::ViewEmployees));
}

#[test]
fn signed_out_can_do_nothing() {
    let state = AuthState::signed_out();
    assert!(!state.can(Capability::ViewEmployees));
    assert!(!state.can(Capability::ManageEmployees));
}
