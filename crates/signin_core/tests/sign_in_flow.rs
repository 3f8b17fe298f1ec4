use signin_core::db::{open_db_in_memory, DbError};
use signin_core::messages::{INVALID_FORMAT_ALERT, INVALID_PHONE_NUMBER, SIGN_IN_SUCCESS_ALERT};
use signin_core::{
    HomeController, KeyValueStore, MemoryKeyValueStore, Router, Screen, SessionStore,
    SignInController, SignInError, SignInState, SqliteKeyValueStore, StackRouter, StoreError,
    StoreResult, ValidationState, PHONE_NUMBER_KEY,
};

#[derive(Default)]
struct RecordingRouter {
    visited: Vec<Screen>,
}

impl Router for RecordingRouter {
    fn navigate(&mut self, screen: Screen) {
        self.visited.push(screen);
    }
}

/// Memory store that fails selected operations.
#[derive(Default)]
struct FlakyStore {
    inner: MemoryKeyValueStore,
    fail_set: bool,
    fail_get: bool,
    fail_remove: bool,
}

fn injected_failure() -> StoreError {
    StoreError::Db(DbError::Sqlite(rusqlite::Error::InvalidQuery))
}

impl KeyValueStore for FlakyStore {
    fn set(&self, key: &str, value: &str) -> StoreResult<()> {
        if self.fail_set {
            return Err(injected_failure());
        }
        self.inner.set(key, value)
    }

    fn get(&self, key: &str) -> StoreResult<Option<String>> {
        if self.fail_get {
            return Err(injected_failure());
        }
        self.inner.get(key)
    }

    fn remove(&self, key: &str) -> StoreResult<()> {
        if self.fail_remove {
            return Err(injected_failure());
        }
        self.inner.remove(key)
    }
}

#[test]
fn typing_valid_number_groups_it_and_enables_submit() {
    let session = SessionStore::new(MemoryKeyValueStore::new());
    let mut sign_in = SignInController::new(&session);

    sign_in.on_text_changed("0912345678");

    let view = sign_in.view();
    assert_eq!(view.display_text, "0912 345 678");
    assert_eq!(view.error_message, None);
    assert!(view.submit_enabled);
    assert_eq!(view.state, SignInState::Typing(ValidationState::Valid));
}

#[test]
fn typing_short_number_shows_error_and_disables_submit() {
    let session = SessionStore::new(MemoryKeyValueStore::new());
    let mut sign_in = SignInController::new(&session);

    sign_in.on_text_changed("09123");

    let view = sign_in.view();
    assert_eq!(view.display_text, "09123");
    assert_eq!(view.error_message, Some(INVALID_PHONE_NUMBER));
    assert_eq!(view.error_message, Some("Số điện thoại không hợp lệ."));
    assert!(!view.submit_enabled);
    assert_eq!(view.state, SignInState::Typing(ValidationState::Invalid));
}

#[test]
fn submitting_valid_number_saves_it_and_routes_home() {
    let session = SessionStore::new(MemoryKeyValueStore::new());
    let mut router = RecordingRouter::default();
    let mut sign_in = SignInController::new(&session);

    sign_in.on_text_changed("0912 345 678");
    let alert = sign_in.on_submit(&mut router).unwrap();

    assert_eq!(alert, SIGN_IN_SUCCESS_ALERT);
    assert_eq!(sign_in.state(), SignInState::Done);
    assert_eq!(router.visited, vec![Screen::Home]);
    assert_eq!(
        session.store().get(PHONE_NUMBER_KEY).unwrap().as_deref(),
        Some("0912345678")
    );
}

#[test]
fn home_mount_after_sign_in_shows_stored_number() {
    let conn = open_db_in_memory().unwrap();
    let session = SessionStore::new(SqliteKeyValueStore::new(&conn));
    let mut router = StackRouter::new();

    let mut sign_in = SignInController::new(&session);
    sign_in.on_text_changed("0912345678");
    sign_in.on_submit(&mut router).unwrap();
    assert_eq!(router.current(), Screen::Home);

    let mut home = HomeController::new(&session);
    home.on_mount().unwrap();
    assert_eq!(home.phone_number(), "0912345678");
    assert_eq!(home.view().phone_number, "0912345678");
}

#[test]
fn sign_out_clears_session_and_routes_to_sign_in() {
    let session = SessionStore::new(MemoryKeyValueStore::new());
    let mut router = StackRouter::new();

    let mut sign_in = SignInController::new(&session);
    sign_in.on_text_changed("0912345678");
    sign_in.on_submit(&mut router).unwrap();

    let mut home = HomeController::new(&session);
    home.on_mount().unwrap();
    home.on_sign_out(&mut router).unwrap();

    assert_eq!(session.load().unwrap(), None);
    assert_eq!(router.stack(), &[Screen::SignIn]);
}

#[test]
fn sign_out_routes_to_sign_in_even_when_clear_fails() {
    let store = FlakyStore {
        fail_remove: true,
        ..FlakyStore::default()
    };
    store.inner.set(PHONE_NUMBER_KEY, "0912345678").unwrap();
    let session = SessionStore::new(store);
    let mut router = RecordingRouter::default();

    let mut home = HomeController::new(&session);
    home.on_mount().unwrap();
    let result = home.on_sign_out(&mut router);

    assert!(result.is_err());
    assert_eq!(router.visited, vec![Screen::SignIn]);
}

#[test]
fn home_mount_without_session_is_blank_without_error() {
    let session = SessionStore::new(MemoryKeyValueStore::new());
    let mut home = HomeController::new(&session);

    home.on_mount().unwrap();

    assert_eq!(home.phone_number(), "");
    assert_eq!(home.display_line(), "Số điện thoại đã đăng nhập: ");
}

#[test]
fn home_mount_load_failure_keeps_display_blank() {
    let store = FlakyStore {
        fail_get: true,
        ..FlakyStore::default()
    };
    let session = SessionStore::new(store);
    let mut home = HomeController::new(&session);

    assert!(home.on_mount().is_err());
    assert_eq!(home.phone_number(), "");
}

#[test]
fn invalid_submit_is_rejected_without_side_effects() {
    let session = SessionStore::new(MemoryKeyValueStore::new());
    let mut router = RecordingRouter::default();
    let mut sign_in = SignInController::new(&session);

    sign_in.on_text_changed("09123");
    let err = sign_in.on_submit(&mut router).unwrap_err();

    assert!(matches!(err, SignInError::InvalidFormat));
    assert_eq!(err.alert(), Some(INVALID_FORMAT_ALERT));
    assert_eq!(
        sign_in.state(),
        SignInState::Typing(ValidationState::Invalid)
    );
    assert!(router.visited.is_empty());
    assert!(session.store().is_empty());
}

#[test]
fn empty_submit_is_rejected_and_stays_empty() {
    let session = SessionStore::new(MemoryKeyValueStore::new());
    let mut router = RecordingRouter::default();
    let mut sign_in = SignInController::new(&session);

    let err = sign_in.on_submit(&mut router).unwrap_err();

    assert!(matches!(err, SignInError::InvalidFormat));
    assert_eq!(sign_in.state(), SignInState::Empty);
    assert!(router.visited.is_empty());
}

#[test]
fn save_failure_stays_on_sign_in_without_alert() {
    let store = FlakyStore {
        fail_set: true,
        ..FlakyStore::default()
    };
    let session = SessionStore::new(store);
    let mut router = RecordingRouter::default();
    let mut sign_in = SignInController::new(&session);

    sign_in.on_text_changed("0912345678");
    let err = sign_in.on_submit(&mut router).unwrap_err();

    assert!(matches!(err, SignInError::Persistence(_)));
    assert_eq!(err.alert(), None);
    assert_eq!(sign_in.state(), SignInState::Typing(ValidationState::Valid));
    assert!(sign_in.can_submit());
    assert!(router.visited.is_empty());
}

#[test]
fn returning_to_sign_in_allows_signing_in_again() {
    let session = SessionStore::new(MemoryKeyValueStore::new());
    let mut router = StackRouter::new();
    let mut sign_in = SignInController::new(&session);

    sign_in.on_text_changed("0912345678");
    sign_in.on_submit(&mut router).unwrap();
    HomeController::new(&session)
        .on_sign_out(&mut router)
        .unwrap();

    sign_in.on_text_changed("0987 654 321");
    sign_in.on_submit(&mut router).unwrap();

    assert_eq!(router.current(), Screen::Home);
    assert_eq!(session.load().unwrap().as_deref(), Some("0987654321"));
}

#[test]
fn route_names_serialize_as_navigator_names() {
    assert_eq!(serde_json::to_string(&Screen::SignIn).unwrap(), "\"SignIn\"");
    assert_eq!(serde_json::to_string(&Screen::Home).unwrap(), "\"Home\"");
    let parsed: Screen = serde_json::from_str("\"Home\"").unwrap();
    assert_eq!(parsed, Screen::Home);
}
