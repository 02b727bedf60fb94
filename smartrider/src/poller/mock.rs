// smartrider-rs/smartrider/src/poller/mock.rs

use crate::card::geometry::sector_of_block;
use crate::constants::BLOCK_SIZE;
use crate::poller::traits::ClassicPoller;
use crate::types::{Block, CardType, Key, KeyType};
use crate::{Error, Result};

/// Mock poller for unit tests. It simulates a provisioned card and
/// records authentication/read calls for assertions.
#[derive(Debug, Clone)]
pub struct MockPoller {
    /// Subtype reported by `detect_type`.
    pub card_type: CardType,
    /// Full card memory, `block_count * 16` bytes.
    pub memory: Vec<u8>,
    /// Key A accepted per sector; `None` rejects every attempt.
    pub keys_a: Vec<Option<Key>>,
    /// Key B accepted per sector; `None` rejects every attempt.
    pub keys_b: Vec<Option<Key>>,
    /// Whether the card is in the field.
    pub present: bool,
    /// Testing hook: the card leaves the field after this many successful
    /// block reads.
    pub remove_after_reads: Option<usize>,
    /// Recorded authenticate calls: (block, key type).
    pub auth_calls: Vec<(usize, KeyType)>,
    /// Recorded read_block calls (block index).
    pub read_calls: Vec<usize>,
    reads_done: usize,
}

impl MockPoller {
    /// Blank present card of the given subtype with no accepted keys.
    pub fn new(card_type: CardType) -> Self {
        let sectors = card_type.sector_count();
        Self {
            card_type,
            memory: vec![0u8; card_type.block_count() * BLOCK_SIZE],
            keys_a: vec![None; sectors],
            keys_b: vec![None; sectors],
            present: true,
            remove_after_reads: None,
            auth_calls: Vec::new(),
            read_calls: Vec::new(),
            reads_done: 0,
        }
    }

    /// Accept `key` in one sector's slot.
    pub fn set_sector_key(&mut self, sector: usize, key_type: KeyType, key: Key) {
        let slots = match key_type {
            KeyType::A => &mut self.keys_a,
            KeyType::B => &mut self.keys_b,
        };
        if let Some(slot) = slots.get_mut(sector) {
            *slot = Some(key);
        }
    }

    /// Accept the same key A in every sector.
    pub fn fill_key_a(&mut self, key: Key) {
        for slot in self.keys_a.iter_mut() {
            *slot = Some(key);
        }
    }

    /// Write bytes into the simulated memory at an absolute offset.
    ///
    /// Panics if the write runs past the end of memory; the mock is a
    /// test tool and misuse should fail loudly.
    pub fn write_bytes(&mut self, offset: usize, bytes: &[u8]) {
        self.memory[offset..offset + bytes.len()].copy_from_slice(bytes);
    }

    /// Card leaves the field after `n` successful block reads (for
    /// mid-read removal tests).
    pub fn remove_after(&mut self, n: usize) {
        self.remove_after_reads = Some(n);
    }
}

impl ClassicPoller for MockPoller {
    fn detect_type(&mut self) -> Result<CardType> {
        if !self.present {
            return Err(Error::NotPresent);
        }
        Ok(self.card_type)
    }

    fn authenticate(&mut self, block: usize, key: &Key, key_type: KeyType) -> Result<()> {
        self.auth_calls.push((block, key_type));
        if !self.present {
            return Err(Error::NotPresent);
        }
        let sector = sector_of_block(block);
        let accepted = match key_type {
            KeyType::A => self.keys_a.get(sector),
            KeyType::B => self.keys_b.get(sector),
        };
        match accepted {
            Some(Some(k)) if k == key => Ok(()),
            _ => Err(Error::AuthFailed { sector, key_type }),
        }
    }

    fn read_block(&mut self, block: usize, key: &Key, key_type: KeyType) -> Result<Block> {
        self.read_calls.push(block);
        if let Some(limit) = self.remove_after_reads {
            if self.reads_done >= limit {
                self.present = false;
            }
        }
        if !self.present {
            return Err(Error::NotPresent);
        }
        self.authenticate(block, key, key_type)?;

        let start = block * BLOCK_SIZE;
        let end = start + BLOCK_SIZE;
        if end > self.memory.len() {
            return Err(Error::Protocol(format!("block {} beyond card memory", block)));
        }
        let data = Block::try_from(&self.memory[start..end])?;
        self.reads_done += 1;
        Ok(data)
    }
}
