//! Login and register form state machines.
//!
//! `idle → submitting → (success → navigate) | (failure → idle + error)`.
//! Inputs live in their own signals on the page and are never cleared here, so
//! a failed attempt keeps what the user typed.

#[cfg(test)]
#[path = "auth_form_test.rs"]
mod auth_form_test;

use crate::net::error::RequestError;
use crate::net::types::{LoginRequest, RegisterRequest};
use crate::state::editor::is_plausible_email;

pub const LOGIN_FAILED_MESSAGE: &str = "Login failed";
pub const REGISTER_FAILED_MESSAGE: &str = "Registration failed";
pub const REGISTERED_NOTICE: &str = "Registration successful. Please log in.";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FormPhase {
    #[default]
    Idle,
    Submitting,
}

/// Phase + inline error for one auth form.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AuthFormState {
    pub phase: FormPhase,
    pub error: Option<String>,
}

impl AuthFormState {
    pub fn is_submitting(&self) -> bool {
        self.phase == FormPhase::Submitting
    }

    /// Clear the previous error and enter `Submitting`. Returns `false` if a
    /// submit is already in flight.
    pub fn begin(&mut self) -> bool {
        if self.is_submitting() {
            return false;
        }
        self.error = None;
        self.phase = FormPhase::Submitting;
        true
    }

    /// Client-side rejection before any request was sent.
    pub fn reject(&mut self, message: impl Into<String>) {
        self.phase = FormPhase::Idle;
        self.error = Some(message.into());
    }

    /// Server or transport failure: back to idle with a message.
    pub fn fail(&mut self, error: &RequestError, fallback: &str) {
        self.reject(error.user_message(fallback));
    }

    pub fn succeed(&mut self) {
        self.phase = FormPhase::Idle;
        self.error = None;
    }
}

/// Validate login inputs.
///
/// # Errors
///
/// Returns the message to show when a field is blank.
pub fn login_request(username: &str, password: &str) -> Result<LoginRequest, &'static str> {
    let username = username.trim();
    if username.is_empty() || password.is_empty() {
        return Err("Enter your username and password.");
    }
    Ok(LoginRequest { username: username.to_owned(), password: password.to_owned() })
}

/// Validate register inputs.
///
/// # Errors
///
/// Returns the message to show for the first failing rule.
pub fn register_request(
    username: &str,
    email: &str,
    password: &str,
    confirm_password: &str,
) -> Result<RegisterRequest, &'static str> {
    let username = username.trim();
    let email = email.trim();
    if username.is_empty() || email.is_empty() || password.is_empty() {
        return Err("All fields are required.");
    }
    if !is_plausible_email(email) {
        return Err("Enter a valid email address.");
    }
    if password != confirm_password {
        return Err("Passwords do not match.");
    }
    Ok(RegisterRequest {
        username: username.to_owned(),
        email: email.to_owned(),
        password: password.to_owned(),
    })
}
