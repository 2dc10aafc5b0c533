//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::{navbar::Navbar, toast::ToastHost};
use crate::pages::{
    dashboard::{CandidateDashboardPage, RecruiterDashboardPage},
    home::HomePage,
    login::LoginPage,
    register::RegisterPage,
};
use crate::state::{auth::AuthState, toast::ToastState};

/// Root application component.
///
/// Provides the session and notification contexts, restores any persisted
/// session, and sets up client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let auth = RwSignal::new(AuthState::restoring());
    let toasts = RwSignal::new(ToastState::default());
    provide_context(auth);
    provide_context(toasts);

    #[cfg(feature = "csr")]
    leptos::task::spawn_local(async move {
        use crate::net::api::BrowserApi;
        use crate::util::storage::LocalStorageTokenStore;

        let user = accounts::restore_session(&BrowserApi::default(), &LocalStorageTokenStore).await;
        auth.set(AuthState { user, loading: false });
    });
    #[cfg(not(feature = "csr"))]
    auth.update(|a| a.loading = false);

    view! {
        <Title text="Portal de Empleo"/>

        <Router>
            <Navbar/>
            <main class="app-main">
                <Routes fallback=|| "Página no encontrada.".into_view()>
                    <Route path=StaticSegment("") view=HomePage/>
                    <Route path=StaticSegment("login") view=LoginPage/>
                    <Route path=StaticSegment("registro") view=RegisterPage/>
                    <Route path=StaticSegment("candidato") view=CandidateDashboardPage/>
                    <Route path=StaticSegment("reclutador") view=RecruiterDashboardPage/>
                </Routes>
            </main>
            <ToastHost/>
        </Router>
    }
}
