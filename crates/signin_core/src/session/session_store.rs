//! Session lifecycle over an injected key/value store.
//!
//! # Responsibility
//! - Save, load and clear the signed-in phone number.
//! - Report storage failures to the caller unchanged, without retries.
//!
//! # Invariants
//! - Only clean (digit-only) numbers are written.
//! - Logged events carry digit counts, never the number itself.

use crate::phone::number::CleanPhoneNumber;
use crate::store::kv_store::{KeyValueStore, StoreError};
use log::{debug, error, info};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Storage key holding the signed-in phone number.
pub const PHONE_NUMBER_KEY: &str = "phoneNumber";

pub type SessionResult<T> = Result<T, SessionError>;

/// Persistence failure raised by session operations.
#[derive(Debug)]
pub enum SessionError {
    Store(StoreError),
}

impl Display for SessionError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Store(err) => write!(f, "session persistence failed: {err}"),
        }
    }
}

impl Error for SessionError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Store(err) => Some(err),
        }
    }
}

impl From<StoreError> for SessionError {
    fn from(value: StoreError) -> Self {
        Self::Store(value)
    }
}

/// Session facade over a key/value store implementation.
pub struct SessionStore<S: KeyValueStore> {
    store: S,
}

impl<S: KeyValueStore> SessionStore<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Writes `phone_number` under the session key, replacing any previous value.
    pub fn save(&self, phone_number: &CleanPhoneNumber) -> SessionResult<()> {
        match self.store.set(PHONE_NUMBER_KEY, phone_number.as_str()) {
            Ok(()) => {
                info!(
                    "event=session_save module=session status=ok digits={}",
                    phone_number.len()
                );
                Ok(())
            }
            Err(err) => {
                error!("event=session_save module=session status=error error={err}");
                Err(err.into())
            }
        }
    }

    /// Returns the stored phone number, or `None` when never saved.
    pub fn load(&self) -> SessionResult<Option<String>> {
        match self.store.get(PHONE_NUMBER_KEY) {
            Ok(value) => {
                debug!(
                    "event=session_load module=session status=ok present={}",
                    value.is_some()
                );
                Ok(value)
            }
            Err(err) => {
                error!("event=session_load module=session status=error error={err}");
                Err(err.into())
            }
        }
    }

    /// Removes the session key entirely.
    pub fn clear(&self) -> SessionResult<()> {
        match self.store.remove(PHONE_NUMBER_KEY) {
            Ok(()) => {
                info!("event=session_clear module=session status=ok");
                Ok(())
            }
            Err(err) => {
                error!("event=session_clear module=session status=error error={err}");
                Err(err.into())
            }
        }
    }

    /// Borrows the underlying store.
    pub fn store(&self) -> &S {
        &self.store
    }
}
