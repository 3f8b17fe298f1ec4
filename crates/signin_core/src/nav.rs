//! Screen routing contract between the two screens.
//!
//! # Responsibility
//! - Name the routable screens with their stable route strings.
//! - Define the `navigate` capability controllers depend on.
//! - Provide a stack navigator whose initial route is `SignIn`.
//!
//! # Invariants
//! - No parameters travel with a navigation; screens re-read storage.
//! - Navigating to a screen already on the stack pops back to it.

use log::debug;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

/// Routable screens. Serialized with their route names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Screen {
    SignIn,
    Home,
}

impl Screen {
    /// Stable route name used by the UI navigator.
    pub fn route_name(self) -> &'static str {
        match self {
            Self::SignIn => "SignIn",
            Self::Home => "Home",
        }
    }

    /// Route shown when the app starts.
    pub fn initial() -> Self {
        Self::SignIn
    }
}

impl Display for Screen {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.route_name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownScreen(pub String);

impl Display for UnknownScreen {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "unknown screen: `{}`", self.0)
    }
}

impl Error for UnknownScreen {}

impl FromStr for Screen {
    type Err = UnknownScreen;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim() {
            "SignIn" => Ok(Self::SignIn),
            "Home" => Ok(Self::Home),
            other => Err(UnknownScreen(other.to_string())),
        }
    }
}

/// Navigation capability required by screen controllers.
pub trait Router {
    fn navigate(&mut self, screen: Screen);
}

impl<R: Router + ?Sized> Router for &mut R {
    fn navigate(&mut self, screen: Screen) {
        (**self).navigate(screen)
    }
}

/// Stack navigator starting at [`Screen::initial`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StackRouter {
    stack: Vec<Screen>,
}

impl StackRouter {
    pub fn new() -> Self {
        Self {
            stack: vec![Screen::initial()],
        }
    }

    /// Screen on top of the stack.
    pub fn current(&self) -> Screen {
        self.stack.last().copied().unwrap_or_else(Screen::initial)
    }

    /// Screens from bottom to top.
    pub fn stack(&self) -> &[Screen] {
        &self.stack
    }
}

impl Default for StackRouter {
    fn default() -> Self {
        Self::new()
    }
}

impl Router for StackRouter {
    fn navigate(&mut self, screen: Screen) {
        match self.stack.iter().position(|entry| *entry == screen) {
            Some(index) => self.stack.truncate(index + 1),
            None => self.stack.push(screen),
        }
        debug!(
            "event=navigate module=nav status=ok screen={} depth={}",
            screen,
            self.stack.len()
        );
    }
}
