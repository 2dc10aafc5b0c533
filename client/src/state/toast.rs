//! Transient notification state.
//!
//! DESIGN
//! ======
//! One slot: showing a toast replaces whatever is visible. Pages push a toast
//! and then navigate; `ToastHost` lives outside the route outlet, so the toast
//! survives navigation without a timing workaround. Dismissal is keyed by id,
//! so the auto-dismiss timer of a replaced toast cannot close its successor.

#[cfg(test)]
#[path = "toast_test.rs"]
mod toast_test;

/// Success confirmations and login validation hints.
pub const SHORT_MS: u32 = 2000;
/// Rejected logins and registration validation failures.
pub const MEDIUM_MS: u32 = 3000;
/// Server-side registration failures.
pub const LONG_MS: u32 = 5000;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastLevel {
    Success,
    Error,
}

/// A single notification.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Toast {
    pub id: u64,
    pub level: ToastLevel,
    pub message: String,
    pub duration_ms: u32,
}

#[derive(Clone, Debug, Default)]
pub struct ToastState {
    pub current: Option<Toast>,
    next_id: u64,
}

impl ToastState {
    /// Show a toast, replacing the visible one. Returns its id.
    pub fn show(&mut self, level: ToastLevel, message: impl Into<String>, duration_ms: u32) -> u64 {
        self.next_id += 1;
        let id = self.next_id;
        self.current = Some(Toast { id, level, message: message.into(), duration_ms });
        id
    }

    pub fn success(&mut self, message: impl Into<String>) -> u64 {
        self.show(ToastLevel::Success, message, SHORT_MS)
    }

    pub fn error(&mut self, message: impl Into<String>, duration_ms: u32) -> u64 {
        self.show(ToastLevel::Error, message, duration_ms)
    }

    /// Dismiss the toast with `id` if it is still the visible one.
    pub fn dismiss(&mut self, id: u64) -> bool {
        if self.current.as_ref().is_some_and(|t| t.id == id) {
            self.current = None;
            true
        } else {
            false
        }
    }
}
