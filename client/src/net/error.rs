//! Request failure taxonomy shared by every API call.
//!
//! ERROR HANDLING
//! ==============
//! `SessionExpired` is handled once, globally, by the API client; views only
//! ever see it as a reason to stop. Everything else is rendered inline via
//! [`RequestError::user_message`].

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

/// Message shown when the API cannot be reached.
pub const NETWORK_MESSAGE: &str = "Unable to reach the server. Check your connection and try again.";

/// Failure of a single API request.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum RequestError {
    /// Login or registration rejected by the server.
    #[error("{}", message.as_deref().unwrap_or("authentication failed"))]
    Auth { status: Option<u16>, message: Option<String> },
    /// 401 on an authenticated call. The session has already been cleared.
    #[error("session expired")]
    SessionExpired,
    /// 404 from the API.
    #[error("not found: {}", message.as_deref().unwrap_or("resource"))]
    NotFound { message: Option<String> },
    /// Any other non-2xx status.
    #[error("request failed with status {status}")]
    Rejected { status: u16, message: Option<String> },
    /// Transport failure: DNS, TLS, connection refused, CORS.
    #[error("network error: {0}")]
    Network(String),
    /// Response did not match the API contract.
    #[error("invalid response: {0}")]
    Decode(String),
}

impl RequestError {
    /// HTTP status, if the server answered.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Auth { status, .. } => *status,
            Self::SessionExpired => Some(401),
            Self::NotFound { .. } => Some(404),
            Self::Rejected { status, .. } => Some(*status),
            Self::Network(_) | Self::Decode(_) => None,
        }
    }

    /// Server-provided message, if any.
    pub fn server_message(&self) -> Option<&str> {
        match self {
            Self::Auth { message, .. } | Self::NotFound { message } | Self::Rejected { message, .. } => {
                message.as_deref()
            }
            Self::SessionExpired | Self::Network(_) | Self::Decode(_) => None,
        }
    }

    pub fn is_session_expired(&self) -> bool {
        matches!(self, Self::SessionExpired)
    }

    /// Text for an inline error banner: server message, else `fallback`.
    /// Network failures always get the retry hint.
    pub fn user_message(&self, fallback: &str) -> String {
        match self {
            Self::Network(_) => NETWORK_MESSAGE.to_owned(),
            _ => self.server_message().unwrap_or(fallback).to_owned(),
        }
    }
}
