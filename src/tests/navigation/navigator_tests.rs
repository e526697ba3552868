use base64::Engine as _;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;

use super::*;
use crate::model::UserProfile;
use crate::session::SessionToken;

fn logged_in(role: Role) -> Session {
    let session = Session::in_memory();
    let exp = time::OffsetDateTime::now_utc().unix_timestamp() + 600;
    let payload = URL_SAFE_NO_PAD.encode(format!(r#"{{"exp":{}}}"#, exp));
    session
        .tokens()
        .set(&SessionToken::new(format!("h.{}.s", payload)))
        .unwrap();
    session
        .users()
        .set(&UserProfile {
            id: 1,
            name: "A".to_string(),
            email: "a@example.com".to_string(),
            role,
        })
        .unwrap();
    session
}

#[test]
fn login_paths_carry_query_indicators() {
    assert_eq!(View::login().path(), "/login");
    let expired = View::Login {
        session_expired: true,
        redirect: None,
    };
    assert_eq!(expired.path(), "/login?session=expired");
    let redirect = View::Login {
        session_expired: false,
        redirect: Some("/stores".to_string()),
    };
    assert_eq!(redirect.path(), "/login?redirect=%2Fstores");
}

#[test]
fn invalidation_redirects_once() {
    let nav = Navigator::new(View::Products);
    nav.session_invalidated();
    nav.session_invalidated();
    assert_eq!(
        nav.history(),
        vec![View::Login {
            session_expired: true,
            redirect: None
        }]
    );
}

#[test]
fn invalidation_on_auth_views_is_ignored() {
    let nav = Navigator::new(View::Register);
    nav.session_invalidated();
    assert!(nav.history().is_empty());
    assert_eq!(nav.current(), View::Register);
}

#[test]
fn logout_always_lands_on_login() {
    let nav = Navigator::new(View::login());
    nav.logged_out();
    assert_eq!(nav.history(), vec![View::login()]);
}

#[test]
fn require_auth_redirects_with_current_path() {
    let nav = Navigator::new(View::Stores);
    assert!(!require_auth(&Session::in_memory(), &nav));
    assert_eq!(nav.current().path(), "/login?redirect=%2Fstores");
}

#[test]
fn role_mismatch_goes_to_dashboard() {
    let session = logged_in(Role::Customer);
    let nav = Navigator::new(View::Dashboard);
    assert!(!enter(&session, &nav, View::Users));
    assert_eq!(nav.current(), View::Dashboard);

    assert!(!enter(&session, &nav, View::Stores));
    assert!(enter(&session, &nav, View::Products));
    assert_eq!(nav.current(), View::Products);
}

#[test]
fn allowed_roles_pass_guards() {
    let nav = Navigator::default();
    assert!(enter(&logged_in(Role::Admin), &nav, View::Users));
    assert!(enter(&logged_in(Role::Seller), &nav, View::Stores));
    assert!(!enter(&logged_in(Role::Seller), &nav, View::Users));
}

#[test]
fn missing_profile_fails_role_guard() {
    let session = logged_in(Role::Admin);
    session.users().remove().unwrap();
    let nav = Navigator::default();
    assert!(!require_role(&session, &nav, &[Role::Admin]));
    assert_eq!(nav.current(), View::Dashboard);
}
