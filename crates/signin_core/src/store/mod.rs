//! Persistent key/value storage behind the session layer.
//!
//! # Responsibility
//! - Define the `set/get/remove` contract the session layer depends on.
//! - Isolate SQLite query details from session/controller orchestration.
//!
//! # Invariants
//! - Keys are non-empty strings; values are arbitrary UTF-8 strings.
//! - `set` overwrites, `remove` of an absent key succeeds.

pub mod kv_store;
