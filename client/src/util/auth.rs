//! Shared auth UI helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Dashboard routes apply identical redirect behavior: unauthenticated users
//! go to `/login`, users of the other role go to their own dashboard.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use accounts::Role;
use leptos::prelude::*;
use leptos_router::NavigateOptions;

use crate::state::auth::AuthState;

/// True once auth has loaded and no user is present.
pub fn should_redirect_unauth(state: &AuthState) -> bool {
    !state.loading && state.user.is_none()
}

/// Where a visitor of the `required` dashboard must be sent, if anywhere.
pub fn dashboard_redirect(state: &AuthState, required: Role) -> Option<&'static str> {
    if should_redirect_unauth(state) {
        return Some("/login");
    }
    let user = state.user.as_ref()?;
    match user.role() {
        Some(role) if role == required => None,
        Some(role) => Some(role.dashboard_path()),
        None => Some("/"),
    }
}

/// Keep the current route restricted to signed-in users of `required`.
pub fn install_dashboard_guard<F>(auth: RwSignal<AuthState>, required: Role, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move || {
        let state = auth.get();
        if let Some(target) = dashboard_redirect(&state, required) {
            navigate(target, NavigateOptions::default());
        }
    });
}
