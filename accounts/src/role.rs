//! Portal roles and the dashboard each one lands on.

#[cfg(test)]
#[path = "role_test.rs"]
mod role_test;

use serde::{Deserialize, Serialize};

/// Route of the candidate dashboard.
pub const CANDIDATE_PATH: &str = "/candidato";
/// Route of the recruiter dashboard.
pub const RECRUITER_PATH: &str = "/reclutador";

/// Account role as exchanged with the backend (`rol` field).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Role {
    /// Job seeker with an extended profile (city, experience, education, skills).
    #[default]
    #[serde(rename = "candidato")]
    Candidate,
    /// Job poster with an extended profile (company, title, website).
    #[serde(rename = "reclutador")]
    Recruiter,
}

impl Role {
    /// Wire value used in payloads and profile responses.
    #[must_use]
    pub fn as_wire(self) -> &'static str {
        match self {
            Self::Candidate => "candidato",
            Self::Recruiter => "reclutador",
        }
    }

    /// Parse a wire value. Unknown roles yield `None`.
    #[must_use]
    pub fn from_wire(raw: &str) -> Option<Self> {
        match raw {
            "candidato" => Some(Self::Candidate),
            "reclutador" => Some(Self::Recruiter),
            _ => None,
        }
    }

    /// Dashboard route for this role.
    #[must_use]
    pub fn dashboard_path(self) -> &'static str {
        match self {
            Self::Candidate => CANDIDATE_PATH,
            Self::Recruiter => RECRUITER_PATH,
        }
    }

    /// Human-readable label shown in the navbar.
    #[must_use]
    pub fn panel_label(self) -> &'static str {
        match self {
            Self::Candidate => "Panel Candidato",
            Self::Recruiter => "Panel Reclutador",
        }
    }
}

/// Dashboard route for a raw `rol` value, or `None` for unrecognized roles.
#[must_use]
pub fn destination_for(raw_role: &str) -> Option<&'static str> {
    Role::from_wire(raw_role).map(Role::dashboard_path)
}
