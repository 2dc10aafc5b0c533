//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render app chrome (navigation, notifications) while reading and
//! writing shared state from Leptos context providers.

pub mod navbar;
pub mod toast;
