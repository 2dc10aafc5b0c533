use super::*;

#[test]
fn endpoint_joins_without_double_slash() {
    assert_eq!(endpoint("http://h/api/", LOGIN_PATH), "http://h/api/login/");
    assert_eq!(endpoint("http://h/api", PROFILE_PATH), "http://h/api/perfil-usuario/");
}

#[test]
fn endpoint_accepts_relative_base() {
    assert_eq!(endpoint("/api", REGISTER_PATH), "/api/registro/");
}
