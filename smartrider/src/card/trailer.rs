// smartrider-rs/smartrider/src/card/trailer.rs

use crate::types::{Block, Key};

/// View over a sector trailer block.
///
/// A trailer holds key A (bytes 0..6), the access bits (bytes 6..10) and
/// key B (bytes 10..16). Only the key B slice is consulted: key A reads
/// back as zeroes on a real card, so key A verification compares against
/// the sector's first block instead. Trailer bytes never carry fare data.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SectorTrailer(Block);

impl SectorTrailer {
    /// Interpret a block as a sector trailer.
    pub const fn from_block(block: Block) -> Self {
        Self(block)
    }

    /// Key B stored in the trailer.
    pub fn key_b(&self) -> Key {
        let b = self.0.as_bytes();
        Key::from_bytes([b[10], b[11], b[12], b[13], b[14], b[15]])
    }
}
