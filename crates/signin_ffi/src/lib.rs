//! Flutter bridge for the sign-in core.
//!
//! Bindings are generated by `flutter_rust_bridge_codegen` from [`api`].

pub mod api;
