// smartrider-rs/smartrider/src/decode/summary.rs

use crate::decode::concession::Concession;
use crate::decode::trip::TripRecord;
use crate::types::SerialNumber;
use std::fmt;

/// Immutable snapshot of everything the decoder extracts from a card.
///
/// Built once per reading session and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CardSummary {
    /// Stored balance in cents.
    pub balance: u16,
    /// Raw concession token byte.
    pub token: u8,
    /// Issue date, days since the card epoch.
    pub issued_days: u16,
    /// Expiry date, days since the card epoch.
    pub expiry_days: u16,
    /// Card serial number.
    pub serial: SerialNumber,
    /// Card purchase cost in cents.
    pub purchase_cost: u16,
    /// Balance threshold that triggers an auto-load, in cents.
    pub auto_load_threshold: u16,
    /// Auto-load top-up amount in cents.
    pub auto_load_value: u16,
    /// The two most recent trips, most recent first.
    pub last_trips: [TripRecord; 2],
}

impl CardSummary {
    /// Concession category for the token byte.
    pub fn concession(&self) -> Concession {
        Concession::from_code(self.token)
    }
}

impl fmt::Display for CardSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&crate::format::format(self))
    }
}
