//! Screen controllers.
//!
//! # Responsibility
//! - Own each screen's interaction state, separate from rendering.
//! - Orchestrate validator, session and router calls per UI event.
//!
//! # Invariants
//! - Controllers borrow a shared `SessionStore`; no global session state.
//! - Routers are passed per event, so navigation is always explicit.

pub mod home;
pub mod sign_in;
