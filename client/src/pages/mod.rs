//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration (guards, fetches, navigation)
//! and delegates rendering details to `components`.

pub mod directory;
pub mod editor;
pub mod login;
pub mod register;
