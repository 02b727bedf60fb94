// smartrider-rs/smartrider/src/decode/trip.rs

use crate::constants::TRIP_RECORD_LEN;
use crate::decode::parser;
use crate::Result;

/// Tap-on bit in a trip record's status byte.
const STATUS_TAP_ON: u8 = 0x10;

/// One recorded trip leg.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TripRecord {
    /// Running transaction counter.
    pub transaction_number: u16,
    /// Journey counter.
    pub journey_number: u16,
    /// Absolute time of the tap, 32-bit counter.
    pub timestamp: u32,
    /// Whether this leg was a tap-on (true) or tap-off (false).
    pub tap_on: bool,
    /// Four-character ASCII route code.
    pub route: String,
    /// Fare charged for the leg, in cents.
    pub cost: u16,
}

/// Decode one trip record at an absolute base offset.
///
/// Layout relative to `base`: transaction number @+0 (2), journey number
/// @+2 (2), timestamp @+3 (4), status byte @+7, route @+8 (4 ASCII),
/// cost @+13 (2). The timestamp overlaps the journey number's high byte;
/// that overlap is how the card actually encodes these fields.
pub(crate) fn decode_trip(data: &[u8], base: usize) -> Result<TripRecord> {
    parser::ensure_len(data, base + TRIP_RECORD_LEN)?;

    let status = parser::byte_at(data, base + 7)?;
    Ok(TripRecord {
        transaction_number: parser::le_u16_at(data, base)?,
        journey_number: parser::le_u16_at(data, base + 2)?,
        timestamp: parser::le_u32_at(data, base + 3)?,
        tap_on: status & STATUS_TAP_ON == STATUS_TAP_ON,
        route: route_string(parser::slice_at(data, base + 8, 4)?),
        cost: parser::le_u16_at(data, base + 13)?,
    })
}

/// Route bytes as ASCII, with non-printable bytes mapped to '.'.
fn route_string(bytes: &[u8]) -> String {
    bytes
        .iter()
        .map(|&b| {
            if b.is_ascii_graphic() || b == b' ' {
                b as char
            } else {
                '.'
            }
        })
        .collect()
}
