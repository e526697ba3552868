use base64::Engine as _;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use time::OffsetDateTime;

use super::*;

fn live_token() -> SessionToken {
    let exp = OffsetDateTime::now_utc().unix_timestamp() + 3600;
    let payload = URL_SAFE_NO_PAD.encode(format!(r#"{{"exp":{}}}"#, exp));
    SessionToken::new(format!("h.{}.s", payload))
}

fn expired_token() -> SessionToken {
    let payload = URL_SAFE_NO_PAD.encode(br#"{"exp":1000}"#);
    SessionToken::new(format!("h.{}.s", payload))
}

fn seller() -> UserProfile {
    UserProfile {
        id: 7,
        name: "Sam".to_string(),
        email: "sam@example.com".to_string(),
        role: Role::Seller,
    }
}

#[test]
fn unparseable_profile_reads_as_absent() {
    let storage = Arc::new(MemoryStorage::new());
    storage.set_item(USER_KEY, "{\"id\":").unwrap();
    let session = Session::new(storage.clone());
    assert!(session.users().get().is_none());
    assert!(!session.users().is_admin());

    storage
        .set_item(USER_KEY, r#"{"id":1,"name":"A","role":"JANITOR"}"#)
        .unwrap();
    assert!(session.users().get().is_none());
}

#[test]
fn profile_roundtrips_through_storage() {
    let session = Session::in_memory();
    session.users().set(&seller()).unwrap();
    assert_eq!(session.users().get(), Some(seller()));
    assert!(session.users().is_seller());
    assert!(!session.users().is_admin());
    assert!(!session.users().is_customer());
}

#[test]
fn role_checks_require_a_valid_token() {
    let session = Session::in_memory();
    session.users().set(&seller()).unwrap();

    assert!(session.users().has_role(Role::Seller));
    assert!(!session.has_role(Role::Seller));
    assert!(session.current_user().is_none());

    session.tokens().set(&expired_token()).unwrap();
    assert!(!session.has_role(Role::Seller));

    session.tokens().set(&live_token()).unwrap();
    assert!(session.is_authenticated());
    assert!(session.has_role(Role::Seller));
    assert!(session.has_any_role(&[Role::Admin, Role::Seller]));
    assert!(!session.has_any_role(&[Role::Admin]));
}

#[test]
fn clear_removes_both_slots() {
    let storage = Arc::new(MemoryStorage::new());
    let session = Session::new(storage.clone());
    session.tokens().set(&live_token()).unwrap();
    session.users().set(&seller()).unwrap();

    session.clear().unwrap();
    assert_eq!(storage.get_item(TOKEN_KEY).unwrap(), None);
    assert_eq!(storage.get_item(USER_KEY).unwrap(), None);

    session.clear().unwrap();
}

#[test]
fn cached_role_predicates() {
    let session = Session::in_memory();
    assert!(!session.users().is_seller());
    assert!(!session.users().is_customer());

    session.users().set(&seller()).unwrap();
    assert!(session.users().is_seller());
    assert!(!session.users().is_customer());
    assert!(!session.users().is_admin());

    let customer = UserProfile {
        role: Role::Customer,
        ..seller()
    };
    session.users().set(&customer).unwrap();
    assert!(session.users().is_customer());
    assert!(!session.users().is_seller());
}

#[test]
fn role_parse_error_lists_every_role() {
    assert_eq!(" seller ".parse::<Role>(), Ok(Role::Seller));
    let err = "janitor".parse::<Role>().unwrap_err();
    assert!(err.contains("JANITOR"));
    assert!(err.ends_with("(expected one of ADMIN, SELLER, CUSTOMER)"));
}
