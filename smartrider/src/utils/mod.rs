// smartrider-rs/smartrider/src/utils/mod.rs

//! Utilities: small, reusable helpers used across the crate.
//!
//! Currently limited to the uppercase hex rendering the serial number
//! contract requires.

pub mod hex;

// Re-export the helpers at the `utils` module level so callers can use
// `crate::utils::bytes_to_hex_upper(...)` if they prefer.
pub use hex::*;
