// smartrider-rs/smartrider/src/poller/traits.rs

use crate::types::{Block, CardType, Key, KeyType};
use crate::Result;

/// ClassicPoller abstracts the MIFARE Classic card session away from the
/// decode pipeline.
///
/// Implementations wrap the host's radio layer. Calls are blocking; any
/// retry or timeout policy belongs to the implementation, not to the
/// pipeline. Expected failures: [`Error::NotPresent`] when the card has
/// left the field, [`Error::AuthFailed`] when a key is rejected,
/// [`Error::Timeout`] / [`Error::Protocol`] for transport trouble.
///
/// [`Error::NotPresent`]: crate::Error::NotPresent
/// [`Error::AuthFailed`]: crate::Error::AuthFailed
/// [`Error::Timeout`]: crate::Error::Timeout
/// [`Error::Protocol`]: crate::Error::Protocol
pub trait ClassicPoller {
    /// Query the card's physical subtype.
    fn detect_type(&mut self) -> Result<CardType>;

    /// Authenticate the sector containing `block` with the given key.
    fn authenticate(&mut self, block: usize, key: &Key, key_type: KeyType) -> Result<()>;

    /// Authenticate and read one block.
    fn read_block(&mut self, block: usize, key: &Key, key_type: KeyType) -> Result<Block>;
}
