// smartrider-rs/smartrider/src/decode/mod.rs

//! FieldDecoder stage: fixed-offset field extraction from a card image.

use crate::card::RawCardImage;
use crate::constants::{
    AUTO_LOAD_THRESHOLD_OFFSET, AUTO_LOAD_VALUE_OFFSET, BALANCE_OFFSET, EXPIRY_DAYS_OFFSET,
    ISSUED_DAYS_OFFSET, PURCHASE_COST_OFFSET, REQUIRED_BLOCKS, SERIAL_OFFSET, TOKEN_OFFSET,
    TRIP_OFFSETS,
};
use crate::{Error, Result};

pub mod concession;
pub mod parser;
pub mod summary;
pub mod trip;

pub use concession::Concession;
pub use summary::CardSummary;
pub use trip::TripRecord;

/// Decode a card image into a [`CardSummary`].
///
/// Every block named in [`REQUIRED_BLOCKS`] must be flagged read;
/// otherwise decoding fails with [`Error::IncompleteRead`] naming the
/// first missing block rather than emitting zero-filled values. Past that
/// gate, extraction is a pure function of the image bytes: identical
/// images always decode to identical summaries.
pub fn decode(image: &RawCardImage) -> Result<CardSummary> {
    for &block in REQUIRED_BLOCKS.iter() {
        if !image.is_block_read(block) {
            return Err(Error::IncompleteRead { block });
        }
    }

    let data = image.bytes();
    Ok(CardSummary {
        balance: parser::le_u16_at(data, BALANCE_OFFSET)?,
        token: parser::byte_at(data, TOKEN_OFFSET)?,
        issued_days: parser::le_u16_at(data, ISSUED_DAYS_OFFSET)?,
        expiry_days: parser::le_u16_at(data, EXPIRY_DAYS_OFFSET)?,
        serial: parser::serial_at(data, SERIAL_OFFSET)?,
        purchase_cost: parser::le_u16_at(data, PURCHASE_COST_OFFSET)?,
        auto_load_threshold: parser::le_u16_at(data, AUTO_LOAD_THRESHOLD_OFFSET)?,
        auto_load_value: parser::le_u16_at(data, AUTO_LOAD_VALUE_OFFSET)?,
        last_trips: [
            trip::decode_trip(data, TRIP_OFFSETS[0])?,
            trip::decode_trip(data, TRIP_OFFSETS[1])?,
        ],
    })
}
