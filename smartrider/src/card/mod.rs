// smartrider-rs/smartrider/src/card/mod.rs

//! Card memory model: the raw block image and its derived views.

use crate::constants::BLOCK_SIZE;
use crate::types::{Block, CardType};
use crate::{Error, Result};

pub mod geometry;
pub mod keyset;
pub mod trailer;

pub use keyset::KeySet;
pub use trailer::SectorTrailer;

/// Dense image of a card's memory built during one reading session.
///
/// Blocks are stored in one flat buffer so decoders can address fields by
/// absolute byte offset. Every block carries a read flag; bytes of a
/// block whose flag is unset were never fetched and must not be trusted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawCardImage {
    card_type: CardType,
    bytes: Vec<u8>,
    read_flags: Vec<bool>,
}

impl RawCardImage {
    /// Empty (all-unread) image for the given subtype.
    pub fn new(card_type: CardType) -> Self {
        let blocks = card_type.block_count();
        Self {
            card_type,
            bytes: vec![0u8; blocks * BLOCK_SIZE],
            read_flags: vec![false; blocks],
        }
    }

    /// Physical subtype this image was built for.
    pub fn card_type(&self) -> CardType {
        self.card_type
    }

    /// Number of blocks in the dense index space.
    pub fn block_count(&self) -> usize {
        self.read_flags.len()
    }

    /// Store a successfully read block and mark it read.
    pub fn set_block(&mut self, index: usize, block: Block) -> Result<()> {
        if index >= self.block_count() {
            return Err(Error::BlockOutOfRange {
                block: index,
                total: self.block_count(),
            });
        }
        let start = index * BLOCK_SIZE;
        self.bytes[start..start + BLOCK_SIZE].copy_from_slice(block.as_bytes());
        self.read_flags[index] = true;
        Ok(())
    }

    /// Fetch a block by index, regardless of its read flag.
    pub fn block(&self, index: usize) -> Result<Block> {
        if index >= self.block_count() {
            return Err(Error::BlockOutOfRange {
                block: index,
                total: self.block_count(),
            });
        }
        let start = index * BLOCK_SIZE;
        Block::try_from(&self.bytes[start..start + BLOCK_SIZE])
    }

    /// Whether a block was successfully read. Out-of-range indexes are
    /// reported unread.
    pub fn is_block_read(&self, index: usize) -> bool {
        self.read_flags.get(index).copied().unwrap_or(false)
    }

    /// Number of blocks marked read.
    pub fn read_block_count(&self) -> usize {
        self.read_flags.iter().filter(|&&f| f).count()
    }

    /// The linear byte address space backing the image.
    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }
}
