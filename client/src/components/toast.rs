//! Bottom-right notification host.

use leptos::prelude::*;

use crate::state::toast::{ToastLevel, ToastState};

fn level_class(level: ToastLevel) -> &'static str {
    match level {
        ToastLevel::Success => "toast toast--success",
        ToastLevel::Error => "toast toast--error",
    }
}

/// Renders the visible toast and schedules its auto-dismissal.
///
/// Mounted once at the app root, outside the route outlet.
#[component]
pub fn ToastHost() -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastState>>();

    Effect::new(move || {
        let Some(toast) = toasts.with(|s| s.current.clone()) else {
            return;
        };
        #[cfg(feature = "csr")]
        leptos::task::spawn_local(async move {
            gloo_timers::future::TimeoutFuture::new(toast.duration_ms).await;
            toasts.update(|s| {
                s.dismiss(toast.id);
            });
        });
        #[cfg(not(feature = "csr"))]
        let _ = toast;
    });

    move || {
        toasts.get().current.map(|toast| {
            let id = toast.id;
            view! {
                <div
                    class=level_class(toast.level)
                    role="status"
                    on:click=move |_| {
                        toasts.update(|s| {
                            s.dismiss(id);
                        });
                    }
                >
                    {toast.message}
                </div>
            }
        })
    }
}
