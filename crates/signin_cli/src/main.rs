//! CLI smoke entry point.
//!
//! # Responsibility
//! - Verify `signin_core` linkage without the mobile runtime.
//! - Show how raw phone input is cleaned, validated and grouped.
//!
//! Usage: `signin_cli [PHONE_INPUT...]`

use signin_core::{clean, format, validation_state};

fn main() {
    println!("signin_core ping={}", signin_core::ping());
    println!("signin_core version={}", signin_core::core_version());

    for raw in std::env::args().skip(1) {
        let number = clean(&raw);
        println!(
            "input={raw:?} clean={} state={:?} display={:?}",
            number,
            validation_state(&number),
            format(&number).as_str()
        );
    }
}
