use super::*;
use crate::model::{ConsoleConfig, UserProfile};
use crate::session::{Session, SessionToken};

#[test]
fn error_body_exposes_message_and_validation_errors() {
    let body = ApiBody::Json(serde_json::json!({
        "message": "Validation failed",
        "validationErrors": {"name": "Store name is required"}
    }));
    assert_eq!(body.message(), Some("Validation failed"));
    let fields = body.validation_errors().unwrap();
    assert_eq!(fields["name"], "Store name is required");
}

#[test]
fn text_bodies_have_no_message() {
    let body = ApiBody::Text("Internal Server Error".to_string());
    assert_eq!(body.message(), None);
    assert_eq!(body.validation_errors(), None);
}

#[test]
fn into_json_tolerates_untyped_text() {
    let body = ApiBody::Text(r#"{"id":1,"name":"A","role":"ADMIN"}"#.to_string());
    let user: UserProfile = body.into_json("profile").unwrap();
    assert_eq!(user.name, "A");

    let err = ApiBody::Text("nope".to_string())
        .into_json::<UserProfile>("profile")
        .unwrap_err();
    assert!(matches!(err, ApiError::Decode { ref context, .. } if context == "profile"));
}

#[test]
fn empty_body_decodes_into_unit_and_option() {
    ApiBody::Empty.into_json::<()>("delete").unwrap();
    let none: Option<UserProfile> = ApiBody::Empty.into_json("maybe").unwrap();
    assert!(none.is_none());
}

#[test]
fn urls_join_base_without_double_slash() {
    let cfg = ConsoleConfig {
        base_url: "http://market.test/".to_string(),
        ..ConsoleConfig::default()
    };
    let client = ApiClient::new(&cfg, Session::in_memory()).unwrap();
    assert_eq!(client.url("/api/stores"), "http://market.test/api/stores");
}

#[test]
fn bearer_header_follows_token_store() {
    let session = Session::in_memory();
    let client = ApiClient::new(&ConsoleConfig::default(), session.clone()).unwrap();
    let headers = client.default_headers();
    assert_eq!(headers[CONTENT_TYPE], "application/json");
    assert!(headers.get(AUTHORIZATION).is_none());

    session.tokens().set(&SessionToken::new("abc.def.ghi")).unwrap();
    let headers = client.default_headers();
    assert_eq!(headers[AUTHORIZATION], "Bearer abc.def.ghi");

    session
        .tokens()
        .set(&SessionToken::new("bad\ntoken"))
        .unwrap();
    assert!(client.default_headers().get(AUTHORIZATION).is_none());
}
