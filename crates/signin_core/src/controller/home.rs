//! Home screen controller.
//!
//! # Responsibility
//! - Re-read the stored phone number when the screen mounts.
//! - Clear the session on sign-out and route back to `SignIn`.
//!
//! # Invariants
//! - A missing session leaves the display blank; there is no redirect.
//! - Sign-out navigation never depends on the clear succeeding.

use crate::messages::{home_phone_line, HOME_TITLE};
use crate::nav::{Router, Screen};
use crate::session::session_store::{SessionResult, SessionStore};
use crate::store::kv_store::KeyValueStore;
use log::{error, info};

/// Render snapshot of the home screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HomeView {
    pub title: &'static str,
    /// Stored number verbatim, empty when no session exists.
    pub phone_number: String,
    pub display_line: String,
}

/// Controller for the home screen.
pub struct HomeController<'s, S: KeyValueStore> {
    session: &'s SessionStore<S>,
    phone_number: String,
}

impl<'s, S: KeyValueStore> HomeController<'s, S> {
    pub fn new(session: &'s SessionStore<S>) -> Self {
        Self {
            session,
            phone_number: String::new(),
        }
    }

    /// Loads the stored number into display state.
    ///
    /// Every mount re-reads storage; an absent session blanks the display.
    ///
    /// # Errors
    /// - Returns the load failure after logging it; display stays blank.
    pub fn on_mount(&mut self) -> SessionResult<()> {
        match self.session.load() {
            Ok(Some(value)) => {
                self.phone_number = value;
                Ok(())
            }
            Ok(None) => {
                self.phone_number.clear();
                info!("event=home_mount module=home status=ok session=absent");
                Ok(())
            }
            Err(err) => {
                self.phone_number.clear();
                error!(
                    "event=home_mount module=home status=error error_code=session_load_failed error={err}"
                );
                Err(err)
            }
        }
    }

    /// Clears the session, then routes to `SignIn` whatever the outcome.
    ///
    /// Returns the clear result so callers may surface failures.
    pub fn on_sign_out(&mut self, router: &mut impl Router) -> SessionResult<()> {
        let cleared = self.session.clear();
        if let Err(err) = &cleared {
            error!(
                "event=home_sign_out module=home status=error error_code=session_clear_failed error={err}"
            );
        }
        self.phone_number.clear();
        router.navigate(Screen::SignIn);
        cleared
    }

    pub fn phone_number(&self) -> &str {
        self.phone_number.as_str()
    }

    pub fn title(&self) -> &'static str {
        HOME_TITLE
    }

    pub fn display_line(&self) -> String {
        home_phone_line(&self.phone_number)
    }

    pub fn view(&self) -> HomeView {
        HomeView {
            title: self.title(),
            phone_number: self.phone_number.clone(),
            display_line: self.display_line(),
        }
    }
}
