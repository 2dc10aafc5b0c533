//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by concern (`auth`, `toast`) and provided as Leptos context
//! signals by `App`, so components depend on small focused models.

pub mod auth;
pub mod toast;
