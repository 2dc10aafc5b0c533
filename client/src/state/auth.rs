//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Provided once by `App` as `RwSignal<AuthState>`. Route guards and the
//! navbar read it; login writes the user; logout and a rejected session
//! restore clear it.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use accounts::{Role, User};

/// Authentication state tracking the current user and loading status.
#[derive(Clone, Debug, Default)]
pub struct AuthState {
    pub user: Option<User>,
    /// True while the persisted session is being restored on startup.
    pub loading: bool,
}

impl AuthState {
    /// State used before the startup session restore completes.
    #[must_use]
    pub fn restoring() -> Self {
        Self { user: None, loading: true }
    }

    /// Recognized role of the current user, if any.
    #[must_use]
    pub fn role(&self) -> Option<Role> {
        self.user.as_ref().and_then(User::role)
    }

    /// Record a freshly authenticated user.
    pub fn sign_in(&mut self, user: User) {
        self.user = Some(user);
        self.loading = false;
    }

    /// Forget the in-memory user. Persisted tokens are cleared separately.
    pub fn sign_out(&mut self) {
        self.user = None;
        self.loading = false;
    }
}
