use super::*;

#[test]
fn wire_values_match_backend_spelling() {
    assert_eq!(Role::Candidate.as_wire(), "candidato");
    assert_eq!(Role::Recruiter.as_wire(), "reclutador");
}

#[test]
fn serde_uses_wire_values() {
    assert_eq!(serde_json::to_value(Role::Recruiter).expect("serialize"), serde_json::json!("reclutador"));
    let role: Role = serde_json::from_str("\"candidato\"").expect("deserialize");
    assert_eq!(role, Role::Candidate);
}

#[test]
fn destination_routes_known_roles() {
    assert_eq!(destination_for("candidato"), Some("/candidato"));
    assert_eq!(destination_for("reclutador"), Some("/reclutador"));
}

#[test]
fn destination_is_none_for_unknown_role() {
    assert_eq!(destination_for("admin"), None);
    assert_eq!(destination_for(""), None);
    assert_eq!(destination_for("Candidato"), None);
}

#[test]
fn default_role_is_candidate() {
    assert_eq!(Role::default(), Role::Candidate);
}
