//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration (validation, submission, routing)
//! and delegates domain rules to the `accounts` crate.

pub mod dashboard;
pub mod home;
pub mod login;
pub mod register;
