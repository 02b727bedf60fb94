#[path = "../common/mod.rs"]
mod common;

use smartrider::decode::decode;
use smartrider::format::format;
use smartrider::read::read;
use smartrider::test_support;
use smartrider::types::SerialNumber;
use smartrider::verify::verify;

#[test]
fn full_pipeline_renders_the_expected_report() -> anyhow::Result<()> {
    common::fixtures::init_logging();
    let mut poller = common::fixtures::provisioned_poller();

    assert!(verify(&mut poller));
    let image = read(&mut poller)?;
    let summary = decode(&image)?;

    assert_eq!(format(&summary), common::fixtures::EXPECTED_REPORT);
    Ok(())
}

#[test]
fn display_delegates_to_format() {
    let summary = test_support::sample_summary();
    assert_eq!(summary.to_string(), format(&summary));
}

#[test]
fn serial_without_leading_zero_pair_renders_in_full() {
    let mut summary = test_support::sample_summary();
    summary.serial = SerialNumber::from_bytes([0xAB, 0x11, 0x22, 0x33, 0x44]);

    let report = format(&summary);
    assert!(report.contains("Serial: AB11223344"));
    assert!(!report.contains("SR0"));
}

#[test]
fn unknown_token_renders_unknown_label() {
    let mut summary = test_support::sample_summary();
    summary.token = 0x5A;

    let report = format(&summary);
    assert!(report.contains("Concession: Unknown"));
}

#[test]
fn trip_lines_follow_tap_state() {
    let mut summary = test_support::sample_summary();
    summary.last_trips[0].tap_on = false;
    summary.last_trips[1].tap_on = true;

    let report = format(&summary);
    assert!(report.contains("Last Trip: Tag off $2.50 B450"));
    assert!(report.contains("Prev Trip: Tag on $1.80 R920"));
}
