use super::*;
use crate::model::ConsoleConfig;
use crate::session::SessionStorage;

#[test]
fn open_requires_existing_dir() {
    let tmp = tempfile::tempdir().unwrap();
    let missing = tmp.path().join("nope");
    let err = LocalStore::open(&missing).err().unwrap();
    assert!(err.to_string().contains("No state directory"));

    let store = LocalStore::open_or_init(&missing).unwrap();
    assert!(store.root().is_dir());
}

#[test]
fn config_defaults_until_written() {
    let tmp = tempfile::tempdir().unwrap();
    let store = LocalStore::open_or_init(tmp.path()).unwrap();
    assert_eq!(store.read_config().unwrap(), ConsoleConfig::default());

    let cfg = ConsoleConfig {
        base_url: "https://market.example".to_string(),
        timeout_secs: 5,
        ..ConsoleConfig::default()
    };
    store.write_config(&cfg).unwrap();
    assert_eq!(store.read_config().unwrap(), cfg);
}

#[test]
fn session_slots_survive_reopen() {
    let tmp = tempfile::tempdir().unwrap();
    {
        let store = LocalStore::open_or_init(tmp.path()).unwrap();
        store.set_item("jwt_token", "a.b.c").unwrap();
        store.set_item("user_data", "{}").unwrap();
    }

    let store = LocalStore::open(tmp.path()).unwrap();
    assert_eq!(store.get_item("jwt_token").unwrap().as_deref(), Some("a.b.c"));

    store.remove_item("jwt_token").unwrap();
    store.remove_item("jwt_token").unwrap();
    assert_eq!(store.get_item("jwt_token").unwrap(), None);
    assert_eq!(store.get_item("user_data").unwrap().as_deref(), Some("{}"));
}

#[test]
fn corrupt_session_file_is_replaced_on_write() {
    let tmp = tempfile::tempdir().unwrap();
    let store = LocalStore::open_or_init(tmp.path()).unwrap();
    let path = tmp.path().join("session.json");
    std::fs::write(&path, b"{not json").unwrap();
    assert!(store.get_item("jwt_token").is_err());

    store.set_item("jwt_token", "a.b.c").unwrap();
    assert_eq!(store.get_item("jwt_token").unwrap().as_deref(), Some("a.b.c"));
}

#[test]
fn corrupt_session_file_is_cleared_on_remove() {
    let tmp = tempfile::tempdir().unwrap();
    let store = LocalStore::open_or_init(tmp.path()).unwrap();
    std::fs::write(tmp.path().join("session.json"), b"{not json").unwrap();

    store.remove_item("jwt_token").unwrap();
    assert_eq!(store.get_item("jwt_token").unwrap(), None);
    assert_eq!(store.read_session_state().unwrap().slots.len(), 0);
}

#[test]
fn session_over_corrupt_file_reads_as_logged_out_and_recovers() {
    use crate::session::{Session, SessionToken};
    use std::sync::Arc;

    let tmp = tempfile::tempdir().unwrap();
    let store = Arc::new(LocalStore::open_or_init(tmp.path()).unwrap());
    std::fs::write(tmp.path().join("session.json"), b"{not json").unwrap();
    let session = Session::new(store.clone());

    assert!(session.tokens().get().is_none());
    assert!(session.current_user().is_none());
    session.clear().unwrap();

    session.tokens().set(&SessionToken::new("a.b.c")).unwrap();
    assert_eq!(session.tokens().get(), Some(SessionToken::new("a.b.c")));
}
