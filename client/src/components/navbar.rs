//! Top navigation bar with role-dependent links and logout.

#[cfg(test)]
#[path = "navbar_test.rs"]
mod navbar_test;

use accounts::User;
use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

use crate::state::auth::AuthState;
use crate::util::storage::LocalStorageTokenStore;

/// Link set shown next to the brand.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NavLinks {
    /// Login and register.
    Guest,
    /// Dashboard link for a recognized role.
    Dashboard { path: &'static str, label: &'static str },
    /// Signed in with a role this client does not route; logout only.
    SignedIn,
}

/// Pick exactly one link set for the current session.
pub fn nav_links(user: Option<&User>) -> NavLinks {
    match user {
        None => NavLinks::Guest,
        Some(user) => match user.role() {
            Some(role) => NavLinks::Dashboard { path: role.dashboard_path(), label: role.panel_label() },
            None => NavLinks::SignedIn,
        },
    }
}

/// Greeting shown beside the logout button.
pub fn greeting(user: &User) -> String {
    format!("Hola, {} ({})", user.first_name, user.rol)
}

#[component]
pub fn Navbar() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let navigate = use_navigate();

    let on_logout = move |_| {
        accounts::logout(&LocalStorageTokenStore);
        auth.update(AuthState::sign_out);
        navigate("/login", NavigateOptions::default());
    };

    let links = move || {
        let state = auth.get();
        match nav_links(state.user.as_ref()) {
            NavLinks::Guest => view! {
                <A href="/login" attr:class="navbar__link">"Iniciar Sesión"</A>
                <A href="/registro" attr:class="navbar__link navbar__link--primary">"Registro"</A>
            }
            .into_any(),
            NavLinks::Dashboard { path, label } => view! {
                <A href=path attr:class="navbar__link">{label}</A>
            }
            .into_any(),
            NavLinks::SignedIn => ().into_any(),
        }
    };

    let session = move || {
        auth.get().user.map(|user| {
            view! {
                <span class="navbar__greeting">{greeting(&user)}</span>
                <button class="navbar__logout" on:click=on_logout.clone()>
                    "Cerrar sesión"
                </button>
            }
        })
    };

    view! {
        <nav class="navbar">
            <A href="/" attr:class="navbar__brand">"Portal de Empleo"</A>
            <div class="navbar__links">
                {links}
                {session}
            </div>
        </nav>
    }
}
