//! Registration page with role-dependent profile sections.

#[cfg(test)]
#[path = "register_test.rs"]
mod register_test;

use accounts::{RegistrationError, RegistrationForm, Role};
use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::state::toast::{LONG_MS, MEDIUM_MS, ToastState};

pub const REGISTER_SUCCESS: &str = "Registro exitoso";
/// Pause between the success toast and the redirect to `/login`.
pub const REDIRECT_DELAY_MS: u32 = 2000;

/// Editable text inputs of the registration form.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FormField {
    Username,
    Email,
    Password,
    ConfirmPassword,
    FirstName,
    LastName,
    Phone,
    City,
    Experience,
    Education,
    Skills,
    Company,
    Title,
    Website,
}

impl FormField {
    /// DOM id, kept stable for browser automation.
    pub fn id(self) -> &'static str {
        match self {
            Self::Username => "username",
            Self::Email => "email",
            Self::Password => "password",
            Self::ConfirmPassword => "confirmPassword",
            Self::FirstName => "first_name",
            Self::LastName => "last_name",
            Self::Phone => "telefono",
            Self::City => "ciudad",
            Self::Experience => "experiencia",
            Self::Education => "formacion",
            Self::Skills => "habilidades",
            Self::Company => "empresa",
            Self::Title => "cargo",
            Self::Website => "sitio_web",
        }
    }

    pub fn placeholder(self) -> &'static str {
        match self {
            Self::Username => "Usuario",
            Self::Email => "Correo electrónico",
            Self::Password => "Contraseña",
            Self::ConfirmPassword => "Confirmar contraseña",
            Self::FirstName => "Nombre",
            Self::LastName => "Apellido",
            Self::Phone => "Teléfono",
            Self::City => "Ciudad",
            Self::Experience => "Experiencia laboral",
            Self::Education => "Formación académica",
            Self::Skills => "Habilidades",
            Self::Company => "Empresa",
            Self::Title => "Cargo",
            Self::Website => "Sitio web (opcional)",
        }
    }

    pub fn set(self, form: &mut RegistrationForm, value: String) {
        let slot = match self {
            Self::Username => &mut form.username,
            Self::Email => &mut form.email,
            Self::Password => &mut form.password,
            Self::ConfirmPassword => &mut form.confirm_password,
            Self::FirstName => &mut form.first_name,
            Self::LastName => &mut form.last_name,
            Self::Phone => &mut form.phone,
            Self::City => &mut form.city,
            Self::Experience => &mut form.experience,
            Self::Education => &mut form.education,
            Self::Skills => &mut form.skills,
            Self::Company => &mut form.company,
            Self::Title => &mut form.title,
            Self::Website => &mut form.website,
        };
        *slot = value;
    }

    pub fn value(self, form: &RegistrationForm) -> &str {
        match self {
            Self::Username => &form.username,
            Self::Email => &form.email,
            Self::Password => &form.password,
            Self::ConfirmPassword => &form.confirm_password,
            Self::FirstName => &form.first_name,
            Self::LastName => &form.last_name,
            Self::Phone => &form.phone,
            Self::City => &form.city,
            Self::Experience => &form.experience,
            Self::Education => &form.education,
            Self::Skills => &form.skills,
            Self::Company => &form.company,
            Self::Title => &form.title,
            Self::Website => &form.website,
        }
    }
}

/// Role for a `<select>` value; unknown values keep the current role.
pub fn role_from_select(raw: &str, current: Role) -> Role {
    Role::from_wire(raw).unwrap_or(current)
}

/// How long the failure toast stays up.
pub fn failure_toast_duration(err: &RegistrationError) -> u32 {
    match err {
        RegistrationError::Validation(_) => MEDIUM_MS,
        RegistrationError::Rejected(_) | RegistrationError::Network => LONG_MS,
    }
}

fn report_failure(err: &RegistrationError, toasts: RwSignal<ToastState>) {
    let message = err.to_string();
    let duration = failure_toast_duration(err);
    toasts.update(|t| {
        t.error(message, duration);
    });
}

#[component]
fn FieldInput(
    form: RwSignal<RegistrationForm>,
    field: FormField,
    #[prop(default = "text")] input_type: &'static str,
) -> impl IntoView {
    view! {
        <input
            id=field.id()
            name=field.id()
            class="register-input"
            type=input_type
            placeholder=field.placeholder()
            prop:value=move || form.with(|f| field.value(f).to_owned())
            on:input=move |ev| form.update(|f| field.set(f, event_target_value(&ev)))
        />
    }
}

#[component]
fn FieldTextarea(form: RwSignal<RegistrationForm>, field: FormField) -> impl IntoView {
    view! {
        <textarea
            id=field.id()
            name=field.id()
            class="register-textarea"
            placeholder=field.placeholder()
            prop:value=move || form.with(|f| field.value(f).to_owned())
            on:input=move |ev| form.update(|f| field.set(f, event_target_value(&ev)))
        ></textarea>
    }
}

#[component]
pub fn RegisterPage() -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastState>>();
    let navigate = use_navigate();

    let form = RwSignal::new(RegistrationForm::default());
    let loading = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if loading.get() {
            return;
        }
        let snapshot = form.get();
        if let Err(err) = snapshot.validate() {
            report_failure(&RegistrationError::Validation(err), toasts);
            return;
        }
        loading.set(true);

        #[cfg(feature = "csr")]
        {
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                let api = crate::net::api::BrowserApi::default();
                let result = accounts::submit_registration(&api, &snapshot).await;
                loading.set(false);
                match result {
                    Ok(()) => {
                        toasts.update(|t| {
                            t.success(REGISTER_SUCCESS);
                        });
                        gloo_timers::future::TimeoutFuture::new(REDIRECT_DELAY_MS).await;
                        navigate("/login", NavigateOptions::default());
                    }
                    Err(err) => report_failure(&err, toasts),
                }
            });
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (&navigate, snapshot);
            loading.set(false);
        }
    };

    let go_login = {
        let navigate = use_navigate();
        move |_| navigate("/login", NavigateOptions::default())
    };

    let is_role = move |role: Role| form.with(|f| f.role == role);

    view! {
        <div class="register-page">
            <div class="register-card">
                <h2>"Registro de Usuario"</h2>
                <form class="register-form" on:submit=on_submit novalidate=true>
                    <label class="register-label" for="rol">"Rol"</label>
                    <select
                        id="rol"
                        name="rol"
                        class="register-select"
                        prop:value=move || form.with(|f| f.role.as_wire())
                        on:change=move |ev| {
                            let raw = event_target_value(&ev);
                            form.update(|f| f.role = role_from_select(&raw, f.role));
                        }
                    >
                        <option value="candidato">"Candidato"</option>
                        <option value="reclutador">"Reclutador"</option>
                    </select>

                    <div class="register-grid">
                        <FieldInput form=form field=FormField::Username/>
                        <FieldInput form=form field=FormField::Email input_type="email"/>
                        <FieldInput form=form field=FormField::Password input_type="password"/>
                        <FieldInput form=form field=FormField::ConfirmPassword input_type="password"/>
                        <FieldInput form=form field=FormField::FirstName/>
                        <FieldInput form=form field=FormField::LastName/>
                        <FieldInput form=form field=FormField::Phone input_type="tel"/>
                    </div>

                    <Show when=move || is_role(Role::Candidate)>
                        <div class="register-section">
                            <h3>"Perfil del Candidato"</h3>
                            <FieldInput form=form field=FormField::City/>
                            <FieldTextarea form=form field=FormField::Experience/>
                            <FieldTextarea form=form field=FormField::Education/>
                            <FieldTextarea form=form field=FormField::Skills/>
                        </div>
                    </Show>

                    <Show when=move || is_role(Role::Recruiter)>
                        <div class="register-section">
                            <h3>"Perfil del Reclutador"</h3>
                            <FieldInput form=form field=FormField::Company/>
                            <FieldInput form=form field=FormField::Title/>
                            <FieldInput form=form field=FormField::Website input_type="url"/>
                        </div>
                    </Show>

                    <button class="register-button" type="submit" disabled=move || loading.get()>
                        {move || if loading.get() { "Registrando..." } else { "Registrarse" }}
                    </button>
                    <button id="login-button" type="button" class="register-card__switch" on:click=go_login>
                        "¿Ya tienes cuenta? Inicia sesión"
                    </button>
                </form>
            </div>
        </div>
    }
}
