//! Application state held in Leptos signals.
//!
//! Everything here is plain data with transition methods, so it is testable
//! without a browser.

pub mod auth;
pub mod auth_form;
pub mod directory;
pub mod editor;
pub mod session;
