//! Core domain logic for the phone-number sign-in flow.
//! This crate is the single source of truth for validation and session rules.

pub mod controller;
pub mod db;
pub mod logging;
pub mod messages;
pub mod nav;
pub mod phone;
pub mod session;
pub mod store;

pub use controller::home::{HomeController, HomeView};
pub use controller::sign_in::{
    SignInController, SignInError, SignInState, SignInView, MAX_INPUT_CHARS, MAX_INPUT_DIGITS,
};
pub use logging::{default_log_level, init_logging, logging_status, LoggingError};
pub use messages::Alert;
pub use nav::{Router, Screen, StackRouter};
pub use phone::number::{
    clean, format, is_valid, validation_state, CleanPhoneNumber, DisplayPhoneNumber,
    ValidationState,
};
pub use session::session_store::{SessionError, SessionResult, SessionStore, PHONE_NUMBER_KEY};
pub use store::kv_store::{
    KeyValueStore, MemoryKeyValueStore, SqliteKeyValueStore, StoreError, StoreResult,
};

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
