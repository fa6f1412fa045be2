//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the directory chrome. They take plain props and
//! callbacks; only the navbar reads the session from context.

pub mod confirm_dialog;
pub mod directory_filters;
pub mod employee_table;
pub mod navbar;
pub mod pager;
