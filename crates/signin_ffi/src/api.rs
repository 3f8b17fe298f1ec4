//! FFI use-case API for the mobile sign-in screens.
//!
//! # Responsibility
//! - Expose screen events (typing, submit, mount, sign-out) to Dart via FRB.
//! - Flatten core errors into response envelopes the UI can render.
//!
//! # Invariants
//! - Exported functions must not panic across the FFI boundary.
//! - Route names are the stable strings `SignIn` and `Home`.
//! - The UI re-reads storage on home mount; no state is passed between screens.

use log::warn;
use signin_core::db::open_db;
use signin_core::{
    core_version as core_version_inner, init_logging as init_logging_inner, ping as ping_inner,
    Alert, HomeController, KeyValueStore, MemoryKeyValueStore, Router, Screen, SessionStore,
    SignInController, SqliteKeyValueStore,
};
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

const SESSION_DB_FILE_NAME: &str = "signin_session.sqlite3";
const SESSION_DB_PATH_ENV: &str = "SIGNIN_DB_PATH";
static SESSION_DB_PATH: OnceLock<PathBuf> = OnceLock::new();

/// Minimal health-check API for FRB smoke integration.
#[flutter_rust_bridge::frb(sync)]
pub fn ping() -> String {
    ping_inner().to_owned()
}

/// Expose core crate version through FFI.
#[flutter_rust_bridge::frb(sync)]
pub fn core_version() -> String {
    core_version_inner().to_owned()
}

/// Initializes Rust core logging once per process.
///
/// Input semantics:
/// - `level`: one of `trace|debug|info|warn|error` (case-insensitive).
/// - `log_dir`: absolute directory path where rolling logs are written.
///
/// # FFI contract
/// - Safe to call repeatedly with the same `level + log_dir`.
/// - Never panics; returns empty string on success and error message on failure.
#[flutter_rust_bridge::frb(sync)]
pub fn init_logging(level: String, log_dir: String) -> String {
    match init_logging_inner(level.as_str(), log_dir.as_str()) {
        Ok(()) => String::new(),
        Err(err) => err.to_string(),
    }
}

/// Route the navigator should open first.
#[flutter_rust_bridge::frb(sync)]
pub fn initial_route() -> String {
    Screen::initial().route_name().to_string()
}

/// Sign-in form state after one text change.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignInFormView {
    /// Grouped value to write back into the text field.
    pub display_text: String,
    /// Inline error under the field, if any.
    pub error_message: Option<String>,
    /// Whether the continue button is enabled.
    pub submit_enabled: bool,
}

/// Outcome of pressing continue on the sign-in screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignInSubmitResponse {
    /// Whether the session was stored.
    pub ok: bool,
    /// Route to open next, set only on success.
    pub next_route: Option<String>,
    /// Blocking alert to show, if any.
    pub alert_title: Option<String>,
    pub alert_message: Option<String>,
    /// Diagnostic message, not meant for display.
    pub message: String,
}

/// Home screen content loaded on mount.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HomeScreenView {
    pub title: String,
    /// Stored phone number verbatim; empty without a session.
    pub phone_number: String,
    pub display_line: String,
    /// Empty on success, diagnostic text when loading failed.
    pub message: String,
}

/// Outcome of pressing sign-out on the home screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HomeSignOutResponse {
    /// Whether the stored session was removed.
    pub ok: bool,
    /// Always `SignIn`.
    pub next_route: String,
    pub message: String,
}

/// Captures the last navigation requested by a controller.
#[derive(Default)]
struct NextRoute(Option<Screen>);

impl Router for NextRoute {
    fn navigate(&mut self, screen: Screen) {
        self.0 = Some(screen);
    }
}

/// Re-derives form state from the full text-field content.
///
/// # FFI contract
/// - Sync call, pure; never touches storage.
#[flutter_rust_bridge::frb(sync)]
pub fn sign_in_input_changed(text: String) -> SignInFormView {
    // Typing never reaches storage, so a throwaway store is enough.
    let session = SessionStore::new(MemoryKeyValueStore::new());
    let mut controller = SignInController::new(&session);
    controller.on_text_changed(text.as_str());
    let view = controller.view();
    SignInFormView {
        display_text: view.display_text,
        error_message: view.error_message.map(str::to_string),
        submit_enabled: view.submit_enabled,
    }
}

/// Validates the field content, stores the session and returns the next route.
///
/// # FFI contract
/// - Sync call, DB-backed execution.
/// - Never panics.
/// - Storage failures produce `ok=false` without an alert.
#[flutter_rust_bridge::frb(sync)]
pub fn sign_in_submit(text: String) -> SignInSubmitResponse {
    sign_in_submit_at(&resolve_session_db_path(), text.as_str())
}

fn sign_in_submit_at(db_path: &Path, text: &str) -> SignInSubmitResponse {
    let conn = match open_db(db_path) {
        Ok(conn) => conn,
        Err(err) => {
            warn!("event=sign_in_submit module=ffi status=error error_code=db_open_failed");
            return submit_failure(None, format!("sign_in_submit failed: {err}"));
        }
    };
    let session = SessionStore::new(SqliteKeyValueStore::new(&conn));
    let mut controller = SignInController::new(&session);
    let mut router = NextRoute::default();

    controller.on_text_changed(text);
    match controller.on_submit(&mut router) {
        Ok(alert) => SignInSubmitResponse {
            ok: true,
            next_route: router.0.map(|screen| screen.route_name().to_string()),
            alert_title: Some(alert.title.to_string()),
            alert_message: Some(alert.message.to_string()),
            message: "Signed in.".to_string(),
        },
        Err(err) => submit_failure(err.alert(), format!("sign_in_submit failed: {err}")),
    }
}

/// Loads the stored session for the home screen.
///
/// # FFI contract
/// - Sync call, DB-backed execution.
/// - Never panics; failures yield a blank view with a diagnostic message.
#[flutter_rust_bridge::frb(sync)]
pub fn home_load() -> HomeScreenView {
    home_load_at(&resolve_session_db_path())
}

fn home_load_at(db_path: &Path) -> HomeScreenView {
    let conn = match open_db(db_path) {
        Ok(conn) => conn,
        Err(err) => {
            warn!("event=home_load module=ffi status=error error_code=db_open_failed");
            let session = SessionStore::new(MemoryKeyValueStore::new());
            return home_view(
                &HomeController::new(&session),
                format!("home_load failed: {err}"),
            );
        }
    };
    let session = SessionStore::new(SqliteKeyValueStore::new(&conn));
    let mut controller = HomeController::new(&session);
    let message = match controller.on_mount() {
        Ok(()) => String::new(),
        Err(err) => format!("home_load failed: {err}"),
    };
    home_view(&controller, message)
}

/// Clears the session and returns `SignIn` as next route in every case.
///
/// # FFI contract
/// - Sync call, DB-backed execution.
/// - Never panics.
#[flutter_rust_bridge::frb(sync)]
pub fn home_sign_out() -> HomeSignOutResponse {
    home_sign_out_at(&resolve_session_db_path())
}

fn home_sign_out_at(db_path: &Path) -> HomeSignOutResponse {
    let sign_in_route = Screen::SignIn.route_name().to_string();
    let conn = match open_db(db_path) {
        Ok(conn) => conn,
        Err(err) => {
            warn!("event=home_sign_out module=ffi status=error error_code=db_open_failed");
            return HomeSignOutResponse {
                ok: false,
                next_route: sign_in_route,
                message: format!("home_sign_out failed: {err}"),
            };
        }
    };
    let session = SessionStore::new(SqliteKeyValueStore::new(&conn));
    let mut controller = HomeController::new(&session);
    let mut router = NextRoute::default();
    let result = controller.on_sign_out(&mut router);
    HomeSignOutResponse {
        ok: result.is_ok(),
        next_route: router
            .0
            .map_or(sign_in_route, |screen| screen.route_name().to_string()),
        message: match result {
            Ok(()) => "Signed out.".to_string(),
            Err(err) => format!("home_sign_out failed: {err}"),
        },
    }
}

fn submit_failure(alert: Option<Alert>, message: String) -> SignInSubmitResponse {
    SignInSubmitResponse {
        ok: false,
        next_route: None,
        alert_title: alert.map(|alert| alert.title.to_string()),
        alert_message: alert.map(|alert| alert.message.to_string()),
        message,
    }
}

fn home_view<S: KeyValueStore>(
    controller: &HomeController<'_, S>,
    message: String,
) -> HomeScreenView {
    let view = controller.view();
    HomeScreenView {
        title: view.title.to_string(),
        phone_number: view.phone_number,
        display_line: view.display_line,
        message,
    }
}

fn resolve_session_db_path() -> PathBuf {
    SESSION_DB_PATH
        .get_or_init(|| {
            if let Ok(raw) = std::env::var(SESSION_DB_PATH_ENV) {
                let trimmed = raw.trim();
                if !trimmed.is_empty() {
                    return PathBuf::from(trimmed);
                }
            }
            std::env::temp_dir().join(SESSION_DB_FILE_NAME)
        })
        .clone()
}
