//! Role dashboards. Access is limited to signed-in users of the matching role.

use accounts::Role;
use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::state::auth::AuthState;
use crate::util::auth::install_dashboard_guard;

#[component]
fn RoleDashboard(role: Role) -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    install_dashboard_guard(auth, role, use_navigate());

    let name = move || auth.get().user.map(|u| u.first_name).unwrap_or_default();

    view! {
        <div class="dashboard-page">
            <header class="dashboard-page__header">
                <h1>{role.panel_label()}</h1>
                <p>"Bienvenido, " {name}</p>
            </header>
        </div>
    }
}

#[component]
pub fn CandidateDashboardPage() -> impl IntoView {
    view! { <RoleDashboard role=Role::Candidate/> }
}

#[component]
pub fn RecruiterDashboardPage() -> impl IntoView {
    view! { <RoleDashboard role=Role::Recruiter/> }
}
