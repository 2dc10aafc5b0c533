//! Error taxonomy for login and registration submissions.
//!
//! DESIGN
//! ======
//! Every error is terminal for the current submission only. The `Display`
//! output of the user-facing enums is the exact text shown to the user, so
//! frontends never re-map messages themselves.

use crate::normalize::ResponseBody;

/// Local, pre-network validation failure. Blocks submission.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// Login with neither username nor password.
    #[error("Por favor ingresa tu usuario y contraseña.")]
    BothMissing,
    /// Login without a username.
    #[error("Por favor ingresa tu usuario.")]
    UsernameMissing,
    /// Login without a password.
    #[error("Por favor ingresa tu contraseña.")]
    PasswordMissing,
    /// Registration without a username.
    #[error("El nombre de usuario es obligatorio")]
    UsernameRequired,
    /// Registration email empty or not shaped like `a@b.c`.
    #[error("Por favor, ingrese un correo electrónico válido")]
    InvalidEmail,
    /// Registration password under the minimum length.
    #[error("La contraseña debe tener al menos 8 caracteres")]
    PasswordTooShort,
    /// Registration password and confirmation differ.
    #[error("Las contraseñas no coinciden")]
    PasswordMismatch,
    /// A role-specific required field is blank.
    #[error("Por favor, complete todos los campos obligatorios")]
    MissingRequiredFields,
}

impl ValidationError {
    /// Short text for the transient notification.
    ///
    /// Login failures use a terser toast than the inline message; registration
    /// failures show the same text in both places.
    #[must_use]
    pub fn toast_message(self) -> String {
        match self {
            Self::BothMissing => "Campos requeridos: usuario y contraseña".to_owned(),
            Self::UsernameMissing => "Campo requerido: usuario".to_owned(),
            Self::PasswordMissing => "Campo requerido: contraseña".to_owned(),
            other => other.to_string(),
        }
    }
}

/// Transport-level failure reported by a [`crate::PortalApi`] implementation.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum ApiError {
    /// The request was sent but no response arrived (network failure, CORS, DNS...).
    #[error("no response from server: {0}")]
    NoResponse(String),
    /// The server answered with a non-success status.
    #[error("server responded with status {status}")]
    Status { status: u16, body: ResponseBody },
    /// A success response whose body could not be decoded.
    #[error("unexpected response body: {0}")]
    Decode(String),
}

/// Failure of a login submission.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum LoginError {
    #[error("{0}")]
    Validation(#[from] ValidationError),
    /// Any server or network failure. Deliberately indistinct.
    #[error("Credenciales inválidas. Por favor, verifica tus datos.")]
    Auth,
}

impl LoginError {
    /// Message for the transient notification.
    #[must_use]
    pub fn toast_message(&self) -> String {
        match self {
            Self::Validation(err) => err.toast_message(),
            Self::Auth => self.to_string(),
        }
    }

    /// Message for the inline error banner, if the failure has one.
    #[must_use]
    pub fn inline_message(&self) -> Option<String> {
        match self {
            Self::Validation(err) => Some(err.to_string()),
            Self::Auth => None,
        }
    }
}

/// Failure of a registration submission.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum RegistrationError {
    #[error("{0}")]
    Validation(#[from] ValidationError),
    /// The server rejected the payload; holds the normalized message.
    #[error("{0}")]
    Rejected(String),
    /// No response was received.
    #[error("No se recibió respuesta del servidor. Verifica tu conexión.")]
    Network,
}

/// Failure to persist or clear the session tokens.
#[derive(Debug, thiserror::Error)]
#[error("token storage failed: {0}")]
pub struct StoreError(pub String);
