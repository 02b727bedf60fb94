// fixtures.rs — provides the shared SmartRider card fixture

#![allow(dead_code)]

use smartrider::poller::MockPoller;
use smartrider::test_support;
use smartrider::types::Key;

/// Opt-in logging for integration tests (RUST_LOG=debug cargo test).
pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

pub fn provisioned_poller() -> MockPoller {
    test_support::provisioned_poller()
}

pub fn sample_memory() -> Vec<u8> {
    test_support::sample_card_memory()
}

/// The three provisioned keys as readable hex dumps.
pub fn standard_keys() -> Vec<Key> {
    ["2031d1e57a3b", "4ca6029f9473", "19195398e32f"]
        .iter()
        .map(|s| {
            let bytes = hex::decode(s).expect("valid key hex");
            Key::try_from(bytes.as_slice()).expect("6-byte key")
        })
        .collect()
}

pub fn serial_bytes() -> [u8; 5] {
    let bytes = hex::decode("0011223344").expect("valid serial hex");
    let mut arr = [0u8; 5];
    arr.copy_from_slice(&bytes);
    arr
}

/// The report the sample card must render to, line for line.
pub const EXPECTED_REPORT: &str = "SmartRider\n\
Balance: $1.00\n\
Concession: Standard Fare\n\
Serial: SR011223344\n\
Total Cost: $10.00\n\
Auto-Load: $5.00/$20.00\n\
Last Trip: Tag on $2.50 B450\n\
Prev Trip: Tag off $1.80 R920";
