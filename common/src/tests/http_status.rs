use crate::HttpStatusCode;

#[test]
fn given_2xx_codes_when_is_success_then_true() {
    assert!(HttpStatusCode(200).is_success());
    assert!(HttpStatusCode(204).is_success());
    assert!(!HttpStatusCode(301).is_success());
    assert!(!HttpStatusCode(401).is_success());
    assert!(!HttpStatusCode(199).is_success());
    assert!(HttpStatusCode(299).is_success());
}

#[test]
fn given_status_code_when_displayed_then_prints_number() {
    assert_eq!(HttpStatusCode::from(429).to_string(), "429");
}
