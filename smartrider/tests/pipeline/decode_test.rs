#[path = "../common/mod.rs"]
mod common;

use smartrider::decode::decode;
use smartrider::read::read;
use smartrider::test_support;
use smartrider::verify::verify;
use smartrider::Error;

#[test]
fn full_pipeline_produces_expected_summary() -> anyhow::Result<()> {
    common::fixtures::init_logging();
    let mut poller = common::fixtures::provisioned_poller();

    assert!(verify(&mut poller));
    let image = read(&mut poller)?;
    let summary = decode(&image)?;

    assert_eq!(summary, test_support::sample_summary());
    Ok(())
}

#[test]
fn decode_is_deterministic_across_calls() -> anyhow::Result<()> {
    let mut poller = common::fixtures::provisioned_poller();
    let image = read(&mut poller)?;

    let first = decode(&image)?;
    let second = decode(&image)?;
    let third = decode(&image.clone())?;
    assert_eq!(first, second);
    assert_eq!(first, third);
    Ok(())
}

#[test]
fn decoded_fields_match_the_raw_layout() -> anyhow::Result<()> {
    let memory = common::fixtures::sample_memory();
    let image = test_support::sample_image();
    let summary = decode(&image)?;

    // balance bytes [0x64, 0x00] at 0xe7 -> 100 cents
    assert_eq!(memory[0xe7], 0x64);
    assert_eq!(memory[0xe8], 0x00);
    assert_eq!(summary.balance, 100);

    assert_eq!(summary.serial.as_bytes(), &common::fixtures::serial_bytes());
    assert_eq!(summary.serial.to_hex(), "0011223344");
    Ok(())
}

#[test]
fn unread_trip_blocks_fail_with_incomplete_read() {
    let mut poller = common::fixtures::provisioned_poller();
    poller.keys_a[12] = None;
    poller.keys_a[13] = None;

    let image = read(&mut poller).unwrap();
    match decode(&image) {
        Err(Error::IncompleteRead { block }) => {
            assert!([50usize, 52].contains(&block), "block {}", block)
        }
        other => panic!("expected IncompleteRead, got: {:?}", other),
    }
}

#[test]
fn unread_balance_block_fails_with_incomplete_read() {
    let mut poller = common::fixtures::provisioned_poller();
    poller.keys_a[3] = None;

    let image = read(&mut poller).unwrap();
    match decode(&image) {
        Err(Error::IncompleteRead { block }) => assert_eq!(block, 14),
        other => panic!("expected IncompleteRead, got: {:?}", other),
    }
}
