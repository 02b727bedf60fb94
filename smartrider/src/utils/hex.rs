// smartrider-rs/smartrider/src/utils/hex.rs

//! Hexadecimal rendering for the card serial contract.
//!
//! SmartRider serials are printed on the card as uppercase hex pairs, so
//! the one helper here renders exactly that form; the presentation layer
//! owns the "SR0" display rule on top of it.

/// Convert a byte slice to an uppercase hex string without separators.
///
/// Example: `&[0xde, 0xad]` -> `"DEAD"`
pub fn bytes_to_hex_upper(bytes: &[u8]) -> String {
    let mut s = String::with_capacity(bytes.len() * 2);
    for b in bytes {
        use std::fmt::Write;
        // write! never fails writing to a String
        let _ = write!(&mut s, "{:02X}", b);
    }
    s
}
