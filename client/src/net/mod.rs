//! Networking modules for the remote employee API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` maps operations onto REST calls, `transport` abstracts the HTTP
//! layer, `error` classifies failures, and `types` defines the wire schema.

pub mod api;
pub mod error;
pub mod transport;
pub mod types;
