// smartrider-rs/smartrider/src/read.rs

//! CardReader stage: bulk-reads the card memory into a [`RawCardImage`].

use crate::card::geometry::first_block_of_sector;
use crate::card::{KeySet, RawCardImage};
use crate::constants::{BLOCKS_PER_SECTOR, STANDARD_KEY_1};
use crate::poller::ClassicPoller;
use crate::types::{CardType, KeyType};
use crate::{Error, Result};

/// Read every block of a SmartRider card using the shared key A.
///
/// The card must report the Classic 1K subtype; anything else fails with
/// [`Error::UnsupportedCardVariant`] before a single block is fetched.
/// A card leaving the field mid-read is a hard failure. Any other
/// per-block error is tolerated: the block stays flagged unread and the
/// scan continues, so callers must consult the read flags before trusting
/// block bytes.
pub fn read<P: ClassicPoller>(poller: &mut P) -> Result<RawCardImage> {
    let card_type = poller.detect_type()?;
    if card_type != CardType::Classic1k {
        return Err(Error::UnsupportedCardVariant(card_type));
    }

    let keys = KeySet::uniform_key_a(card_type, STANDARD_KEY_1);
    let mut image = RawCardImage::new(card_type);

    for sector in 0..keys.sector_count() {
        let Some(key) = keys.key_a(sector) else {
            continue;
        };
        let first = first_block_of_sector(sector);
        for block in first..first + BLOCKS_PER_SECTOR {
            match poller.read_block(block, key, KeyType::A) {
                Ok(data) => image.set_block(block, data)?,
                Err(Error::NotPresent) => return Err(Error::NotPresent),
                Err(e) => {
                    log::debug!("block {} not readable: {}", block, e);
                }
            }
        }
    }

    Ok(image)
}
