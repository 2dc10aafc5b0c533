use super::*;
use accounts::ValidationError;

const ALL_FIELDS: [FormField; 14] = [
    FormField::Username,
    FormField::Email,
    FormField::Password,
    FormField::ConfirmPassword,
    FormField::FirstName,
    FormField::LastName,
    FormField::Phone,
    FormField::City,
    FormField::Experience,
    FormField::Education,
    FormField::Skills,
    FormField::Company,
    FormField::Title,
    FormField::Website,
];

#[test]
fn set_then_value_targets_same_field() {
    for field in ALL_FIELDS {
        let mut form = RegistrationForm::default();
        field.set(&mut form, field.id().to_owned());
        assert_eq!(field.value(&form), field.id());
        let others_empty = ALL_FIELDS.iter().filter(|f| **f != field).all(|f| f.value(&form).is_empty());
        assert!(others_empty, "{field:?} leaked into another field");
    }
}

#[test]
fn dom_ids_are_unique() {
    let mut ids: Vec<_> = ALL_FIELDS.iter().map(|f| f.id()).collect();
    ids.sort_unstable();
    ids.dedup();
    assert_eq!(ids.len(), ALL_FIELDS.len());
}

#[test]
fn role_select_parses_wire_values() {
    assert_eq!(role_from_select("reclutador", Role::Candidate), Role::Recruiter);
    assert_eq!(role_from_select("candidato", Role::Recruiter), Role::Candidate);
}

#[test]
fn role_select_ignores_unknown_values() {
    assert_eq!(role_from_select("", Role::Recruiter), Role::Recruiter);
}

#[test]
fn validation_toast_is_shorter_than_server_toast() {
    let validation = RegistrationError::Validation(ValidationError::PasswordMismatch);
    assert_eq!(failure_toast_duration(&validation), MEDIUM_MS);
    assert_eq!(failure_toast_duration(&RegistrationError::Network), LONG_MS);
    assert_eq!(failure_toast_duration(&RegistrationError::Rejected("x".to_owned())), LONG_MS);
}

#[test]
fn new_form_defaults_to_candidate() {
    assert_eq!(RegistrationForm::default().role, Role::Candidate);
}
