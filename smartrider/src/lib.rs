// smartrider-rs/smartrider/src/lib.rs

//! smartrider
//!
//! Offline decoder for SmartRider MIFARE Classic fare cards.
//!
//! The crate exposes the four pipeline stages in the order the host
//! invokes them: [`verify`](crate::verify::verify) confirms the card
//! carries the SmartRider key set, [`read`](crate::read::read) bulk-reads
//! the card memory into a [`RawCardImage`](crate::card::RawCardImage),
//! [`decode`](crate::decode::decode) interprets the fixed-offset fields
//! into a [`CardSummary`](crate::decode::CardSummary), and
//! [`format`](crate::format::format) renders the text report.
//!
//! The card/radio layer itself is out of scope; it is abstracted behind
//! the [`ClassicPoller`](crate::poller::ClassicPoller) trait so the
//! pipeline can be driven by any block-level MIFARE Classic
//! implementation (or by [`MockPoller`](crate::poller::MockPoller) in
//! tests).
#![warn(missing_docs)]

pub mod card;
pub mod constants;
pub mod decode;
pub mod error;
pub mod format;
pub mod poller;
pub mod prelude;
pub mod read;
pub mod test_support;
pub mod types;
pub mod utils;
pub mod verify;

// Re-export common types at crate root so `crate::Error`, `crate::Result`,
// and the newtypes in `types` are available for consumers and for
// convenient `prelude` re-exports.
pub use crate::error::*;
pub use crate::types::*;

pub use prelude::*;
