// smartrider-rs/smartrider/src/verify.rs

//! KeyVerifier stage: confirms a card carries the SmartRider key set.

use crate::card::geometry::{first_block_of_sector, sector_trailer_block};
use crate::card::SectorTrailer;
use crate::constants::{
    STANDARD_KEY_1, STANDARD_KEY_2, STANDARD_KEY_3, VERIFY_SECTOR_KEY_1, VERIFY_SECTOR_KEY_2,
};
use crate::poller::ClassicPoller;
use crate::types::{Key, KeyType};
use crate::{Error, Result};

/// Check whether the card presents the SmartRider key profile.
///
/// Three authenticate-then-read-back-and-compare checks must all pass:
/// sector 0 key A, sector 6 key A, and sector 6 key B. Merely
/// authenticating is not enough: a card may accept a blank key without
/// carrying the provisioned SmartRider keys, so the stored bytes are read
/// back and compared. Any failure returns `false` immediately.
pub fn verify<P: ClassicPoller>(poller: &mut P) -> bool {
    match verify_inner(poller) {
        Ok(()) => {
            log::info!("SmartRider card verified");
            true
        }
        Err(e) => {
            log::debug!("SmartRider verification failed: {}", e);
            false
        }
    }
}

fn verify_inner<P: ClassicPoller>(poller: &mut P) -> Result<()> {
    check_key_a(poller, VERIFY_SECTOR_KEY_1, &STANDARD_KEY_1)?;
    check_key_a(poller, VERIFY_SECTOR_KEY_2, &STANDARD_KEY_2)?;
    check_key_b(poller, VERIFY_SECTOR_KEY_2, &STANDARD_KEY_3)?;
    Ok(())
}

/// Authenticate a sector with key A and compare the key copy stored at
/// the start of its first block against the expected key.
fn check_key_a<P: ClassicPoller>(poller: &mut P, sector: usize, key: &Key) -> Result<()> {
    let block = first_block_of_sector(sector);
    poller.authenticate(block, key, KeyType::A)?;

    let data = poller.read_block(block, key, KeyType::A)?;
    if &data.as_bytes()[..6] != key.as_bytes() {
        return Err(Error::KeyMismatch {
            sector,
            key_type: KeyType::A,
        });
    }
    Ok(())
}

/// Authenticate a sector with key B and compare the key B slice of its
/// trailer block against the expected key.
fn check_key_b<P: ClassicPoller>(poller: &mut P, sector: usize, key: &Key) -> Result<()> {
    poller.authenticate(first_block_of_sector(sector), key, KeyType::B)?;

    let data = poller.read_block(sector_trailer_block(sector), key, KeyType::B)?;
    let trailer = SectorTrailer::from_block(data);
    if trailer.key_b() != *key {
        return Err(Error::KeyMismatch {
            sector,
            key_type: KeyType::B,
        });
    }
    Ok(())
}
