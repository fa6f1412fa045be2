use super::*;
use crate::net::types::{Role, Session, User};

fn active() -> AuthState {
    AuthState::signed_in(Session {
        token: "t1".to_owned(),
        user: User { username: "admin".to_owned(), email: None, role: Role::Admin },
    })
}

#[test]
fn protected_route_redirects_to_login_without_session() {
    assert_eq!(guard_redirect(RouteAccess::Protected, &AuthState::signed_out()), Some("/login"));
}

#[test]
fn protected_route_stays_with_session() {
    assert_eq!(guard_redirect(RouteAccess::Protected, &active()), None);
    assert!(may_render(RouteAccess::Protected, &active()));
}

#[test]
fn public_route_redirects_home_with_session() {
    // Scenario: right after login the login page itself sends the user to `/`.
    assert_eq!(guard_redirect(RouteAccess::Public, &active()), Some("/"));
}

#[test]
fn public_route_stays_without_session() {
    assert_eq!(guard_redirect(RouteAccess::Public, &AuthState::signed_out()), None);
    assert!(may_render(RouteAccess::Public, &AuthState::signed_out()));
}

#[test]
fn no_redirect_while_restoring() {
    let state = AuthState::restoring();
    assert_eq!(guard_redirect(RouteAccess::Protected, &state), None);
    assert_eq!(guard_redirect(RouteAccess::Public, &state), None);
    assert!(!may_render(RouteAccess::Protected, &state));
}
