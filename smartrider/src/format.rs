// smartrider-rs/smartrider/src/format.rs

//! Presenter stage: renders a [`CardSummary`] as the fixed text report.
//!
//! Line order and labels are part of the observable contract; downstream
//! consumers read the report visually.

use crate::decode::{CardSummary, TripRecord};
use crate::types::SerialNumber;

/// Render the multi-line card report.
///
/// ```text
/// SmartRider
/// Balance: $1.00
/// Concession: Standard Fare
/// Serial: SR011223344
/// Total Cost: $10.00
/// Auto-Load: $5.00/$20.00
/// Last Trip: Tag on $2.50 B450
/// Prev Trip: Tag off $1.80 R920
/// ```
pub fn format(summary: &CardSummary) -> String {
    format!(
        "SmartRider\n\
         Balance: {}\n\
         Concession: {}\n\
         Serial: {}\n\
         Total Cost: {}\n\
         Auto-Load: {}/{}\n\
         Last Trip: {}\n\
         Prev Trip: {}",
        dollars(summary.balance),
        summary.concession().label(),
        display_serial(&summary.serial),
        dollars(summary.purchase_cost),
        dollars(summary.auto_load_threshold),
        dollars(summary.auto_load_value),
        trip_line(&summary.last_trips[0]),
        trip_line(&summary.last_trips[1]),
    )
}

/// Format cents as `$whole.cents` with two cent digits.
pub fn dollars(cents: u16) -> String {
    format!("${}.{:02}", cents / 100, cents % 100)
}

/// Display form of a serial number.
///
/// SmartRider serials starting with hex "00" are printed on the card as
/// "SR0" followed by the remaining eight digits; other serials are shown
/// as the full ten hex characters.
pub fn display_serial(serial: &SerialNumber) -> String {
    let hex = serial.to_hex();
    if let Some(rest) = hex.strip_prefix("00") {
        format!("SR0{}", rest)
    } else {
        hex
    }
}

/// One trip rendered as `<Tag on|Tag off> $<cost> <route>`.
fn trip_line(trip: &TripRecord) -> String {
    let tag = if trip.tap_on { "Tag on" } else { "Tag off" };
    format!("{} {} {}", tag, dollars(trip.cost), trip.route)
}
