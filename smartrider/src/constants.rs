// smartrider-rs/smartrider/src/constants.rs
//! SmartRider key material and card-layout constants used across the crate

use crate::card::geometry::offset_to_block;
use crate::types::Key;

/// Key A of sector 0 on a provisioned SmartRider card.
pub const STANDARD_KEY_1: Key = Key::from_bytes([0x20, 0x31, 0xD1, 0xE5, 0x7A, 0x3B]);

/// Key A of sector 6 on a provisioned SmartRider card.
pub const STANDARD_KEY_2: Key = Key::from_bytes([0x4C, 0xA6, 0x02, 0x9F, 0x94, 0x73]);

/// Key B of sector 6 on a provisioned SmartRider card.
pub const STANDARD_KEY_3: Key = Key::from_bytes([0x19, 0x19, 0x53, 0x98, 0xE3, 0x2F]);

/// Bytes per MIFARE Classic block.
pub const BLOCK_SIZE: usize = 16;

/// Blocks per sector (1K geometry).
pub const BLOCKS_PER_SECTOR: usize = 4;

/// Sector whose key A is checked against [`STANDARD_KEY_1`].
pub const VERIFY_SECTOR_KEY_1: usize = 0;

/// Sector whose key A is checked against [`STANDARD_KEY_2`] and key B
/// against [`STANDARD_KEY_3`].
pub const VERIFY_SECTOR_KEY_2: usize = 6;

// Field offsets are absolute positions in the card's linear byte address
// space (block * 16 + byte). All multi-byte fields are little-endian.

/// Stored balance in cents, 2 bytes.
pub const BALANCE_OFFSET: usize = 0xe0 + 7;

/// Start of the configuration area in sector 1.
pub const CONFIG_OFFSET: usize = 0x40;

/// Issue date as days since the card epoch, 2 bytes.
pub const ISSUED_DAYS_OFFSET: usize = CONFIG_OFFSET + 16;

/// Expiry date as days since the card epoch, 2 bytes.
pub const EXPIRY_DAYS_OFFSET: usize = CONFIG_OFFSET + 18;

/// Auto-load trigger threshold in cents, 2 bytes.
pub const AUTO_LOAD_THRESHOLD_OFFSET: usize = CONFIG_OFFSET + 20;

/// Auto-load top-up amount in cents, 2 bytes.
pub const AUTO_LOAD_VALUE_OFFSET: usize = CONFIG_OFFSET + 22;

/// Concession token code, 1 byte.
pub const TOKEN_OFFSET: usize = 0x50 + 8;

/// Card serial number: block 1, bytes 6..11.
pub const SERIAL_OFFSET: usize = BLOCK_SIZE + 6;

/// Serial number length in bytes.
pub const SERIAL_LEN: usize = 5;

/// Card purchase cost in cents, 2 bytes.
pub const PURCHASE_COST_OFFSET: usize = 0x06 + 8;

/// Base offsets of the two most recent trip records, most recent first.
pub const TRIP_OFFSETS: [usize; 2] = [0x340, 0x320];

/// Length of one trip record in bytes.
pub const TRIP_RECORD_LEN: usize = 15;

/// Blocks that must be read before decoding may proceed: the balance
/// block, the two configuration/token blocks, the serial block, the
/// purchase-cost block, and the two trip blocks.
pub const REQUIRED_BLOCKS: [usize; 7] = [
    offset_to_block(BALANCE_OFFSET),
    offset_to_block(CONFIG_OFFSET),
    offset_to_block(TOKEN_OFFSET),
    1,
    offset_to_block(PURCHASE_COST_OFFSET),
    offset_to_block(TRIP_OFFSETS[0]),
    offset_to_block(TRIP_OFFSETS[1]),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn required_blocks_cover_known_layout() {
        assert_eq!(REQUIRED_BLOCKS, [14, 4, 5, 1, 0, 52, 50]);
    }

    #[test]
    fn key_constants_are_distinct() {
        assert_ne!(STANDARD_KEY_1, STANDARD_KEY_2);
        assert_ne!(STANDARD_KEY_2, STANDARD_KEY_3);
        assert_ne!(STANDARD_KEY_1, STANDARD_KEY_3);
    }

    #[test]
    fn config_fields_land_in_sector_one() {
        assert_eq!(offset_to_block(ISSUED_DAYS_OFFSET), 5);
        assert_eq!(offset_to_block(TOKEN_OFFSET), 5);
        assert_eq!(offset_to_block(BALANCE_OFFSET), 14);
    }
}
