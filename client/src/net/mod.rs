//! Networking modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` implements `accounts::PortalApi` over browser `fetch`; the DTOs and
//! flows themselves live in the `accounts` crate.

pub mod api;
