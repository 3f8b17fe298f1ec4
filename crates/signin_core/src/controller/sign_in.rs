//! Sign-in form state machine.
//!
//! # Responsibility
//! - Turn keystrokes into clean/display numbers and a validation state.
//! - Gate submission on validity, persist the session, then route `Home`.
//!
//! # Invariants
//! - Empty input shows no error but never enables submission.
//! - A failed save never navigates and leaves the form in `Typing(Valid)`.
//! - Rejected submits leave state untouched and never touch the router.

use crate::messages::{Alert, INVALID_FORMAT_ALERT, INVALID_PHONE_NUMBER, SIGN_IN_SUCCESS_ALERT};
use crate::nav::{Router, Screen};
use crate::phone::number::{
    clean, format, validation_state, CleanPhoneNumber, DisplayPhoneNumber, ValidationState,
};
use crate::session::session_store::{SessionError, SessionStore};
use crate::store::kv_store::KeyValueStore;
use log::{debug, error, info};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Max characters the phone text field accepts, grouping spaces included.
pub const MAX_INPUT_CHARS: usize = 13;

/// Max digits kept, so the grouped display stays within `MAX_INPUT_CHARS`.
pub const MAX_INPUT_DIGITS: usize = 11;

/// Sign-in form lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SignInState {
    Empty,
    Typing(ValidationState),
    Submitting,
    Done,
}

/// Sign-in failures reported to the UI layer.
#[derive(Debug)]
pub enum SignInError {
    /// Input is not a 10-digit number. Submission was blocked.
    InvalidFormat,
    /// The session could not be stored. No navigation happened.
    Persistence(SessionError),
}

impl SignInError {
    /// Alert the UI should block on, if any.
    ///
    /// Persistence failures have no user-facing alert.
    pub fn alert(&self) -> Option<Alert> {
        match self {
            Self::InvalidFormat => Some(INVALID_FORMAT_ALERT),
            Self::Persistence(_) => None,
        }
    }
}

impl Display for SignInError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidFormat => f.write_str("phone number must be exactly 10 digits"),
            Self::Persistence(err) => write!(f, "{err}"),
        }
    }
}

impl Error for SignInError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::InvalidFormat => None,
            Self::Persistence(err) => Some(err),
        }
    }
}

impl From<SessionError> for SignInError {
    fn from(value: SessionError) -> Self {
        Self::Persistence(value)
    }
}

/// Render snapshot of the sign-in form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignInView {
    /// Grouped value shown in the text field.
    pub display_text: String,
    /// Inline field error, if any.
    pub error_message: Option<&'static str>,
    /// Whether the continue button is enabled.
    pub submit_enabled: bool,
    pub state: SignInState,
}

/// Controller for the sign-in screen.
pub struct SignInController<'s, S: KeyValueStore> {
    session: &'s SessionStore<S>,
    state: SignInState,
    number: CleanPhoneNumber,
    display: DisplayPhoneNumber,
}

impl<'s, S: KeyValueStore> SignInController<'s, S> {
    pub fn new(session: &'s SessionStore<S>) -> Self {
        Self {
            session,
            state: SignInState::Empty,
            number: CleanPhoneNumber::default(),
            display: DisplayPhoneNumber::default(),
        }
    }

    pub fn state(&self) -> SignInState {
        self.state
    }

    pub fn phone_number(&self) -> &CleanPhoneNumber {
        &self.number
    }

    pub fn display(&self) -> &DisplayPhoneNumber {
        &self.display
    }

    /// Current validation, `None` while the field is empty.
    pub fn validation(&self) -> Option<ValidationState> {
        if self.number.is_empty() {
            None
        } else {
            Some(validation_state(&self.number))
        }
    }

    /// Inline error text shown under the field.
    pub fn error_message(&self) -> Option<&'static str> {
        match self.validation() {
            Some(ValidationState::Invalid) => Some(INVALID_PHONE_NUMBER),
            _ => None,
        }
    }

    pub fn can_submit(&self) -> bool {
        self.state != SignInState::Submitting
            && self.validation() == Some(ValidationState::Valid)
    }

    /// Handles a text-field change with the field's full raw content.
    pub fn on_text_changed(&mut self, raw: &str) {
        let bounded: String = raw.chars().take(MAX_INPUT_CHARS).collect();
        self.number = clean(&bounded).truncated(MAX_INPUT_DIGITS);
        self.display = format(&self.number);
        self.state = match self.validation() {
            None => SignInState::Empty,
            Some(validation) => SignInState::Typing(validation),
        };
        debug!(
            "event=sign_in_input module=sign_in status=ok digits={} state={:?}",
            self.number.len(),
            self.state
        );
    }

    /// Stores the session and routes to `Home`.
    ///
    /// Returns the success alert once navigation has been requested.
    ///
    /// # Errors
    /// - `InvalidFormat` when submission is not allowed; nothing changes.
    /// - `Persistence` when the save fails; the form stays `Typing(Valid)`.
    pub fn on_submit(&mut self, router: &mut impl Router) -> Result<Alert, SignInError> {
        if !self.can_submit() {
            info!(
                "event=sign_in_submit module=sign_in status=rejected digits={}",
                self.number.len()
            );
            return Err(SignInError::InvalidFormat);
        }

        self.state = SignInState::Submitting;
        match self.session.save(&self.number) {
            Ok(()) => {
                self.state = SignInState::Done;
                router.navigate(Screen::Home);
                info!("event=sign_in_submit module=sign_in status=ok");
                Ok(SIGN_IN_SUCCESS_ALERT)
            }
            Err(err) => {
                self.state = SignInState::Typing(ValidationState::Valid);
                error!(
                    "event=sign_in_submit module=sign_in status=error error_code=session_save_failed error={err}"
                );
                Err(err.into())
            }
        }
    }

    pub fn view(&self) -> SignInView {
        SignInView {
            display_text: self.display.as_str().to_string(),
            error_message: self.error_message(),
            submit_enabled: self.can_submit(),
            state: self.state,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{SignInController, SignInState, MAX_INPUT_CHARS, MAX_INPUT_DIGITS};
    use crate::phone::number::ValidationState;
    use crate::session::session_store::SessionStore;
    use crate::store::kv_store::MemoryKeyValueStore;

    #[test]
    fn starts_empty_without_error() {
        let session = SessionStore::new(MemoryKeyValueStore::new());
        let controller = SignInController::new(&session);
        assert_eq!(controller.state(), SignInState::Empty);
        assert_eq!(controller.error_message(), None);
        assert!(!controller.can_submit());
    }

    #[test]
    fn clearing_the_field_returns_to_empty() {
        let session = SessionStore::new(MemoryKeyValueStore::new());
        let mut controller = SignInController::new(&session);
        controller.on_text_changed("091");
        assert_eq!(
            controller.state(),
            SignInState::Typing(ValidationState::Invalid)
        );

        controller.on_text_changed("");
        assert_eq!(controller.state(), SignInState::Empty);
        assert_eq!(controller.view().error_message, None);
    }

    #[test]
    fn input_beyond_field_length_is_cut() {
        let session = SessionStore::new(MemoryKeyValueStore::new());
        let mut controller = SignInController::new(&session);
        controller.on_text_changed("0912 345 678999");
        assert_eq!(controller.phone_number().as_str(), "09123456789");
        assert!(controller.display().char_len() <= MAX_INPUT_CHARS);
        assert!(!controller.can_submit());
    }

    #[test]
    fn pasted_digit_run_is_capped_to_field_width() {
        let session = SessionStore::new(MemoryKeyValueStore::new());
        let mut controller = SignInController::new(&session);
        controller.on_text_changed("0912345678999");
        assert_eq!(controller.phone_number().len(), MAX_INPUT_DIGITS);
        assert_eq!(controller.display().as_str(), "0912 345 6789");
        assert_eq!(controller.display().char_len(), MAX_INPUT_CHARS);

        let shown = controller.display().as_str().to_string();
        controller.on_text_changed(&shown);
        assert_eq!(controller.phone_number().as_str(), "09123456789");
        assert_eq!(controller.display().as_str(), shown);
    }

    #[test]
    fn grouped_input_revalidates_to_same_number() {
        let session = SessionStore::new(MemoryKeyValueStore::new());
        let mut controller = SignInController::new(&session);
        controller.on_text_changed("0912345678");
        let shown = controller.display().as_str().to_string();
        controller.on_text_changed(&shown);
        assert_eq!(controller.phone_number().as_str(), "0912345678");
        assert!(controller.can_submit());
    }
}
