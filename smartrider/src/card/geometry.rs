// smartrider-rs/smartrider/src/card/geometry.rs

//! Offset/block/sector arithmetic for the 1K card layout.
//!
//! All helpers are pure `const fn`s over the linear byte address space so
//! the extraction table in `constants` can be expressed declaratively.

use crate::constants::{BLOCK_SIZE, BLOCKS_PER_SECTOR};

/// Block index containing the given absolute byte offset.
pub const fn offset_to_block(offset: usize) -> usize {
    offset / BLOCK_SIZE
}

/// Position of the given absolute byte offset within its block.
pub const fn offset_in_block(offset: usize) -> usize {
    offset % BLOCK_SIZE
}

/// First block index of a sector (1K geometry: 4 blocks per sector).
pub const fn first_block_of_sector(sector: usize) -> usize {
    sector * BLOCKS_PER_SECTOR
}

/// Trailer block index of a sector.
pub const fn sector_trailer_block(sector: usize) -> usize {
    first_block_of_sector(sector) + BLOCKS_PER_SECTOR - 1
}

/// Sector containing the given block index.
pub const fn sector_of_block(block: usize) -> usize {
    block / BLOCKS_PER_SECTOR
}
