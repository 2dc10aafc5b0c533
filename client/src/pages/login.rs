//! Login page: username + password, routed by role on success.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use accounts::LoginError;
use accounts::login::validate_login;
use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::state::auth::AuthState;
use crate::state::toast::{MEDIUM_MS, SHORT_MS, ToastState};

pub const LOGIN_SUCCESS: &str = "¡Inicio de sesión exitoso!";

/// How long the failure toast stays up.
pub fn failure_toast_duration(err: &LoginError) -> u32 {
    match err {
        LoginError::Validation(_) => SHORT_MS,
        LoginError::Auth => MEDIUM_MS,
    }
}

/// Show the inline banner (when the failure has one) and the failure toast.
fn report_failure(err: &LoginError, inline: RwSignal<String>, toasts: RwSignal<ToastState>) {
    if let Some(message) = err.inline_message() {
        inline.set(message);
    }
    let toast = err.toast_message();
    let duration = failure_toast_duration(err);
    toasts.update(|t| {
        t.error(toast, duration);
    });
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let toasts = expect_context::<RwSignal<ToastState>>();
    let navigate = use_navigate();

    let username = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let error = RwSignal::new(String::new());
    let loading = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if loading.get() {
            return;
        }
        error.set(String::new());

        let username_value = username.get();
        let password_value = password.get();
        if let Err(err) = validate_login(&username_value, &password_value) {
            report_failure(&LoginError::from(err), error, toasts);
            return;
        }
        loading.set(true);

        #[cfg(feature = "csr")]
        {
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                let api = crate::net::api::BrowserApi::default();
                let store = crate::util::storage::LocalStorageTokenStore;
                match accounts::submit_login(&api, &store, &username_value, &password_value).await {
                    Ok(outcome) => {
                        auth.update(|a| a.sign_in(outcome.user));
                        if let Some(path) = outcome.destination {
                            toasts.update(|t| {
                                t.success(LOGIN_SUCCESS);
                            });
                            navigate(path, NavigateOptions::default());
                        }
                    }
                    Err(err) => report_failure(&err, error, toasts),
                }
                loading.set(false);
            });
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (&navigate, auth);
            loading.set(false);
        }
    };

    let go_register = {
        let navigate = use_navigate();
        move |_| navigate("/registro", NavigateOptions::default())
    };

    view! {
        <div class="login-page">
            <div class="login-card">
                <h2>"Iniciar sesión"</h2>
                <Show when=move || !error.get().is_empty()>
                    <p class="login-card__error">{move || error.get()}</p>
                </Show>
                <form class="login-form" on:submit=on_submit novalidate=true>
                    <input
                        id="username"
                        class="login-input"
                        type="text"
                        placeholder="Usuario"
                        prop:value=move || username.get()
                        on:input=move |ev| username.set(event_target_value(&ev))
                    />
                    <input
                        id="password"
                        class="login-input"
                        type="password"
                        placeholder="Contraseña"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <button id="login-button" class="login-button" type="submit" disabled=move || loading.get()>
                        {move || if loading.get() { "Ingresando..." } else { "Ingresar" }}
                    </button>
                    <button type="button" class="login-card__switch" on:click=go_register>
                        "¿No tienes cuenta? Regístrate"
                    </button>
                </form>
            </div>
        </div>
    }
}
