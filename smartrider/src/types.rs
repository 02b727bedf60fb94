// smartrider-rs/smartrider/src/types.rs

use crate::Error;
use derive_more::Display;
use std::convert::TryFrom;

/// MIFARE Classic sector key - Newtype Pattern (6 バイト)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Key([u8; 6]);

impl Key {
    /// Wrap a 6-byte key.
    pub const fn from_bytes(bytes: [u8; 6]) -> Self {
        Self(bytes)
    }

    /// Borrow the raw key bytes.
    pub fn as_bytes(&self) -> &[u8; 6] {
        &self.0
    }
}

impl TryFrom<&[u8]> for Key {
    type Error = Error;

    fn try_from(bytes: &[u8]) -> Result<Self, Self::Error> {
        if bytes.len() != 6 {
            return Err(Error::InvalidLength {
                expected: 6,
                actual: bytes.len(),
            });
        }
        let mut arr = [0u8; 6];
        arr.copy_from_slice(&bytes[..6]);
        Ok(Self(arr))
    }
}

/// Key slot selector for sector authentication.
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyType {
    /// Key A slot.
    #[display(fmt = "A")]
    A,
    /// Key B slot.
    #[display(fmt = "B")]
    B,
}

/// One 16-byte card block - Newtype Pattern
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Block([u8; 16]);

impl Block {
    /// Wrap a 16-byte block.
    pub const fn from_bytes(bytes: [u8; 16]) -> Self {
        Self(bytes)
    }

    /// Borrow the raw block bytes.
    pub fn as_bytes(&self) -> &[u8; 16] {
        &self.0
    }
}

impl TryFrom<&[u8]> for Block {
    type Error = Error;

    fn try_from(bytes: &[u8]) -> Result<Self, Self::Error> {
        if bytes.len() != 16 {
            return Err(Error::InvalidLength {
                expected: 16,
                actual: bytes.len(),
            });
        }
        let mut arr = [0u8; 16];
        arr.copy_from_slice(&bytes[..16]);
        Ok(Self(arr))
    }
}

/// Physical MIFARE Classic subtype reported by the poller.
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CardType {
    /// MIFARE Classic Mini (320 bytes).
    #[display(fmt = "Mini")]
    Mini,
    /// MIFARE Classic 1K. The only subtype SmartRider cards use.
    #[display(fmt = "Classic 1K")]
    Classic1k,
    /// MIFARE Classic 4K.
    #[display(fmt = "Classic 4K")]
    Classic4k,
}

impl CardType {
    /// Total number of 16-byte blocks for this subtype.
    pub const fn block_count(&self) -> usize {
        match self {
            CardType::Mini => 20,
            CardType::Classic1k => 64,
            CardType::Classic4k => 256,
        }
    }

    /// Total number of sectors for this subtype.
    pub const fn sector_count(&self) -> usize {
        match self {
            CardType::Mini => 5,
            CardType::Classic1k => 16,
            CardType::Classic4k => 40,
        }
    }
}

/// SmartRider serial number - Newtype Pattern (5 バイト)
///
/// Rendered as 10 uppercase hex characters; the presentation layer owns
/// the "SR0" display rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SerialNumber([u8; 5]);

impl SerialNumber {
    /// Wrap 5 raw serial bytes.
    pub const fn from_bytes(bytes: [u8; 5]) -> Self {
        Self(bytes)
    }

    /// Borrow the raw serial bytes.
    pub fn as_bytes(&self) -> &[u8; 5] {
        &self.0
    }

    /// Uppercase hex rendering (10 characters).
    pub fn to_hex(&self) -> String {
        crate::utils::bytes_to_hex_upper(self.as_bytes())
    }
}

impl TryFrom<&[u8]> for SerialNumber {
    type Error = Error;

    fn try_from(bytes: &[u8]) -> Result<Self, Self::Error> {
        if bytes.len() != 5 {
            return Err(Error::InvalidLength {
                expected: 5,
                actual: bytes.len(),
            });
        }
        let mut arr = [0u8; 5];
        arr.copy_from_slice(&bytes[..5]);
        Ok(Self(arr))
    }
}
