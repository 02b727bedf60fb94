// smartrider-rs/smartrider/src/prelude.rs

pub use crate::card::{KeySet, RawCardImage, SectorTrailer};
pub use crate::decode::{decode, CardSummary, Concession, TripRecord};
pub use crate::format::{display_serial, dollars, format};
pub use crate::poller::{ClassicPoller, MockPoller};
pub use crate::read::read;
pub use crate::verify::verify;
pub use crate::{Block, CardType, Error, Key, KeyType, Result, SerialNumber};

// Re-export small utilities for convenience
pub use crate::utils::bytes_to_hex_upper;
