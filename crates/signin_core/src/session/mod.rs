//! Persisted sign-in session.
//!
//! A session is the single phone number stored under `phoneNumber`. It is
//! created on sign-in, read when the home screen mounts and deleted on
//! sign-out. There is no token, timestamp or expiry.

pub mod session_store;
