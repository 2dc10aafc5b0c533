//! Registration form, ordered validation gates, and the submission payload.
//!
//! DESIGN
//! ======
//! [`RegistrationForm`] mirrors the raw inputs (every field a string, all
//! role-specific fields present). Validation turns it into a
//! [`ValidRegistration`] tagged by role, so a recruiter payload can never carry
//! candidate fields and vice versa.

#[cfg(test)]
#[path = "register_test.rs"]
mod register_test;

use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;

use crate::errors::ValidationError;
use crate::role::Role;

/// Minimum password length, counted in characters.
pub const MIN_PASSWORD_LEN: usize = 8;

/// Raw registration inputs as typed by the user.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RegistrationForm {
    pub username: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
    pub role: Role,
    pub first_name: String,
    pub last_name: String,
    pub phone: String,
    pub city: String,
    pub experience: String,
    pub education: String,
    pub skills: String,
    pub company: String,
    pub title: String,
    pub website: String,
}

/// Fields common to both roles.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AccountFields {
    pub username: String,
    pub email: String,
    pub password: String,
    pub first_name: String,
    pub last_name: String,
}

/// `perfil_candidato` object.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct CandidateProfile {
    #[serde(rename = "telefono")]
    pub phone: String,
    #[serde(rename = "ciudad")]
    pub city: String,
    #[serde(rename = "experiencia")]
    pub experience: String,
    #[serde(rename = "formacion")]
    pub education: String,
    #[serde(rename = "habilidades")]
    pub skills: String,
}

/// `perfil_reclutador` object. `website` may be empty.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct RecruiterProfile {
    #[serde(rename = "telefono")]
    pub phone: String,
    #[serde(rename = "empresa")]
    pub company: String,
    #[serde(rename = "cargo")]
    pub title: String,
    #[serde(rename = "sitio_web")]
    pub website: String,
}

/// A registration that passed every gate.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ValidRegistration {
    Candidate { account: AccountFields, profile: CandidateProfile },
    Recruiter { account: AccountFields, profile: RecruiterProfile },
}

impl ValidRegistration {
    #[must_use]
    pub fn role(&self) -> Role {
        match self {
            Self::Candidate { .. } => Role::Candidate,
            Self::Recruiter { .. } => Role::Recruiter,
        }
    }

    /// Build the `POST /registro/` body.
    #[must_use]
    pub fn into_payload(self) -> RegistrationPayload {
        let rol = self.role();
        let (account, profile) = match self {
            Self::Candidate { account, profile } => (account, RoleProfile::Candidate(profile)),
            Self::Recruiter { account, profile } => (account, RoleProfile::Recruiter(profile)),
        };
        RegistrationPayload {
            username: account.username,
            email: account.email,
            password: account.password,
            first_name: account.first_name,
            last_name: account.last_name,
            rol,
            profile,
        }
    }
}

/// Nested role profile; serializes as `perfil_candidato` or `perfil_reclutador`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub enum RoleProfile {
    #[serde(rename = "perfil_candidato")]
    Candidate(CandidateProfile),
    #[serde(rename = "perfil_reclutador")]
    Recruiter(RecruiterProfile),
}

/// Wire body for `POST /registro/`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct RegistrationPayload {
    pub username: String,
    pub email: String,
    pub password: String,
    pub first_name: String,
    pub last_name: String,
    pub rol: Role,
    #[serde(flatten)]
    pub profile: RoleProfile,
}

impl RegistrationForm {
    /// Run the validation gates in order, stopping at the first failure.
    ///
    /// Presence checks trim whitespace; submitted values are kept as typed.
    ///
    /// # Errors
    ///
    /// Returns the [`ValidationError`] of the first failing gate.
    pub fn validate(&self) -> Result<ValidRegistration, ValidationError> {
        if is_blank(&self.username) {
            return Err(ValidationError::UsernameRequired);
        }
        if is_blank(&self.email) || !looks_like_email(&self.email) {
            return Err(ValidationError::InvalidEmail);
        }
        if self.password.chars().count() < MIN_PASSWORD_LEN {
            return Err(ValidationError::PasswordTooShort);
        }
        if self.password != self.confirm_password {
            return Err(ValidationError::PasswordMismatch);
        }

        let account = AccountFields {
            username: self.username.clone(),
            email: self.email.clone(),
            password: self.password.clone(),
            first_name: self.first_name.clone(),
            last_name: self.last_name.clone(),
        };

        match self.role {
            Role::Candidate => {
                let required = [
                    &self.first_name,
                    &self.last_name,
                    &self.phone,
                    &self.city,
                    &self.experience,
                    &self.education,
                    &self.skills,
                ];
                if required.iter().any(|value| is_blank(value)) {
                    return Err(ValidationError::MissingRequiredFields);
                }
                Ok(ValidRegistration::Candidate {
                    account,
                    profile: CandidateProfile {
                        phone: self.phone.clone(),
                        city: self.city.clone(),
                        experience: self.experience.clone(),
                        education: self.education.clone(),
                        skills: self.skills.clone(),
                    },
                })
            }
            Role::Recruiter => {
                let required = [&self.first_name, &self.last_name, &self.phone, &self.company, &self.title];
                if required.iter().any(|value| is_blank(value)) {
                    return Err(ValidationError::MissingRequiredFields);
                }
                Ok(ValidRegistration::Recruiter {
                    account,
                    profile: RecruiterProfile {
                        phone: self.phone.clone(),
                        company: self.company.clone(),
                        title: self.title.clone(),
                        website: self.website.clone(),
                    },
                })
            }
        }
    }
}

fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

/// Unanchored search, so surrounding text is tolerated.
static EMAIL_PATTERN: LazyLock<Option<Regex>> = LazyLock::new(|| Regex::new(r"\S+@\S+\.\S+").ok());

/// True when some whitespace-free run contains `a@b.c` with every part non-empty.
#[must_use]
pub fn looks_like_email(value: &str) -> bool {
    EMAIL_PATTERN.as_ref().is_some_and(|re| re.is_match(value))
}
