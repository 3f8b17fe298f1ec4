//! Phone-number input handling for the sign-in form.
//!
//! # Responsibility
//! - Clean raw keystroke input into digit-only phone numbers.
//! - Classify clean numbers as valid/invalid.
//! - Project clean numbers into the grouped display shape.
//!
//! # Invariants
//! - `CleanPhoneNumber` never contains a non-digit character.
//! - Every function in this module is pure.

pub mod number;
