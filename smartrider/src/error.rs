// smartrider-rs/smartrider/src/error.rs

use crate::types::{CardType, KeyType};
use thiserror::Error;

/// 共通エラー型
#[derive(Error, Debug)]
pub enum Error {
    /// The card left the field or was never present.
    #[error("card not present")]
    NotPresent,

    /// The poller rejected an authentication attempt.
    #[error("authentication failed: sector {sector} key {key_type}")]
    AuthFailed {
        /// Sector the authentication targeted.
        sector: usize,
        /// Key slot used for the attempt.
        key_type: KeyType,
    },

    /// Authentication succeeded but the key bytes stored on the card do
    /// not match the expected key.
    #[error("key mismatch: sector {sector} key {key_type}")]
    KeyMismatch {
        /// Sector whose stored key differed.
        sector: usize,
        /// Key slot that was compared.
        key_type: KeyType,
    },

    /// A poller operation timed out.
    #[error("operation timed out")]
    Timeout,

    /// Any other failure reported by the poller.
    #[error("poller protocol error: {0}")]
    Protocol(String),

    /// The card's physical subtype is not the supported 1K variant.
    #[error("unsupported card variant: {0}")]
    UnsupportedCardVariant(CardType),

    /// A block the decoder requires was not successfully read.
    #[error("required block {block} was not read")]
    IncompleteRead {
        /// Index of the first missing block.
        block: usize,
    },

    /// A block index outside the card's dense index space was requested.
    #[error("block {block} out of range (card has {total} blocks)")]
    BlockOutOfRange {
        /// Requested block index.
        block: usize,
        /// Total number of blocks on the card.
        total: usize,
    },

    /// A byte slice had the wrong length for the requested conversion.
    #[error("invalid length: expected {expected}, got {actual}")]
    InvalidLength {
        /// Required length in bytes.
        expected: usize,
        /// Length actually supplied.
        actual: usize,
    },

    /// Present-but-impossible field data. Not expected with fixed-width
    /// extraction, but callers must allow for it.
    #[error("malformed card data: {0}")]
    Malformed(String),
}

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, Error>;
