// smartrider-rs/smartrider/src/test_support.rs

//! Test support helpers intended for use by unit and integration tests.
//!
//! These helpers centralize the canned SmartRider card content so tests
//! across the crate and tests/ directory exercise the same fixture.
#![allow(dead_code)]

use crate::card::RawCardImage;
use crate::constants::{STANDARD_KEY_1, STANDARD_KEY_2, STANDARD_KEY_3};
use crate::decode::{CardSummary, TripRecord};
use crate::poller::MockPoller;
use crate::types::{Block, CardType, KeyType, SerialNumber};

/// Full 1K memory of a provisioned sample card.
///
/// The canned values line up with [`sample_summary`]: $1.00 balance,
/// Standard Fare token, serial `0011223344`, $10.00 purchase cost,
/// $5.00/$20.00 auto-load pair, and two trips (tap-on B450 for $2.50,
/// tap-off R920 for $1.80).
#[doc(hidden)]
pub fn sample_card_memory() -> Vec<u8> {
    let mut mem = vec![0u8; 1024];

    // key copies the verification stage reads back
    mem[0..6].copy_from_slice(STANDARD_KEY_1.as_bytes());
    mem[24 * 16..24 * 16 + 6].copy_from_slice(STANDARD_KEY_2.as_bytes());
    mem[27 * 16 + 6..27 * 16 + 10].copy_from_slice(&[0xFF, 0x07, 0x80, 0x69]);
    mem[27 * 16 + 10..27 * 16 + 16].copy_from_slice(STANDARD_KEY_3.as_bytes());

    // serial: block 1, bytes 6..11
    mem[0x16..0x1b].copy_from_slice(&[0x00, 0x11, 0x22, 0x33, 0x44]);

    // purchase cost: $10.00
    mem[0x0e..0x10].copy_from_slice(&1000u16.to_le_bytes());

    // configuration area in sector 1
    mem[0x50..0x52].copy_from_slice(&7300u16.to_le_bytes()); // issued
    mem[0x52..0x54].copy_from_slice(&9125u16.to_le_bytes()); // expiry
    mem[0x54..0x56].copy_from_slice(&500u16.to_le_bytes()); // auto-load threshold
    mem[0x56..0x58].copy_from_slice(&2000u16.to_le_bytes()); // auto-load value
    mem[0x58] = 0x01; // Standard Fare token

    // balance: $1.00
    mem[0xe7..0xe9].copy_from_slice(&100u16.to_le_bytes());

    // most recent trip at 0x340: tap on, route B450, $2.50
    mem[0x340..0x342].copy_from_slice(&0x1234u16.to_le_bytes());
    mem[0x342..0x344].copy_from_slice(&0x0042u16.to_le_bytes());
    mem[0x343..0x347].copy_from_slice(&0x66B2_A100u32.to_le_bytes());
    mem[0x347] = 0x10;
    mem[0x348..0x34c].copy_from_slice(b"B450");
    mem[0x34d..0x34f].copy_from_slice(&250u16.to_le_bytes());

    // previous trip at 0x320: tap off, route R920, $1.80
    mem[0x320..0x322].copy_from_slice(&0x1233u16.to_le_bytes());
    mem[0x322..0x324].copy_from_slice(&0x0041u16.to_le_bytes());
    mem[0x323..0x327].copy_from_slice(&0x66B2_9A00u32.to_le_bytes());
    mem[0x327] = 0x00;
    mem[0x328..0x32c].copy_from_slice(b"R920");
    mem[0x32d..0x32f].copy_from_slice(&180u16.to_le_bytes());

    mem
}

/// Mock poller simulating a provisioned SmartRider card: shared key A
/// everywhere except sector 6, which carries its own key pair exactly as
/// a real card does.
#[doc(hidden)]
pub fn provisioned_poller() -> MockPoller {
    let mut poller = MockPoller::new(CardType::Classic1k);
    poller.memory = sample_card_memory();
    poller.fill_key_a(STANDARD_KEY_1);
    poller.set_sector_key(6, KeyType::A, STANDARD_KEY_2);
    poller.set_sector_key(6, KeyType::B, STANDARD_KEY_3);
    poller
}

/// Fully read image of the sample card (every block flagged read).
#[doc(hidden)]
pub fn sample_image() -> RawCardImage {
    let memory = sample_card_memory();
    let mut image = RawCardImage::new(CardType::Classic1k);
    for index in 0..64 {
        let mut bytes = [0u8; 16];
        bytes.copy_from_slice(&memory[index * 16..(index + 1) * 16]);
        // index is always in range here
        image
            .set_block(index, Block::from_bytes(bytes))
            .expect("block index in range");
    }
    image
}

/// The summary [`sample_image`] decodes to.
#[doc(hidden)]
pub fn sample_summary() -> CardSummary {
    CardSummary {
        balance: 100,
        token: 0x01,
        issued_days: 7300,
        expiry_days: 9125,
        serial: SerialNumber::from_bytes([0x00, 0x11, 0x22, 0x33, 0x44]),
        purchase_cost: 1000,
        auto_load_threshold: 500,
        auto_load_value: 2000,
        last_trips: [
            TripRecord {
                transaction_number: 0x1234,
                journey_number: 0x0042,
                timestamp: 0x66B2_A100,
                tap_on: true,
                route: "B450".to_string(),
                cost: 250,
            },
            TripRecord {
                transaction_number: 0x1233,
                journey_number: 0x0041,
                timestamp: 0x66B2_9A00,
                tap_on: false,
                route: "R920".to_string(),
                cost: 180,
            },
        ],
    }
}
