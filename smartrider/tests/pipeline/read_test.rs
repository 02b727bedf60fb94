#[path = "../common/mod.rs"]
mod common;

use smartrider::poller::MockPoller;
use smartrider::read::read;
use smartrider::types::CardType;
use smartrider::Error;

#[test]
fn read_builds_flagged_image() {
    let mut poller = common::fixtures::provisioned_poller();
    let image = read(&mut poller).unwrap();

    assert_eq!(image.card_type(), CardType::Classic1k);
    assert_eq!(image.block_count(), 64);

    // every decoder-required block came back readable
    for block in [14, 4, 5, 1, 0, 52, 50] {
        assert!(image.is_block_read(block), "block {}", block);
    }
    // sector 6 rejects the shared key A and stays unread
    for block in 24..28 {
        assert!(!image.is_block_read(block), "block {}", block);
    }
}

#[test]
fn unsupported_subtype_fails_without_fetching_blocks() {
    for subtype in [CardType::Mini, CardType::Classic4k] {
        let mut poller = MockPoller::new(subtype);
        match read(&mut poller) {
            Err(Error::UnsupportedCardVariant(t)) => assert_eq!(t, subtype),
            other => panic!("expected UnsupportedCardVariant, got: {:?}", other),
        }
        assert!(poller.read_calls.is_empty());
        assert!(poller.auth_calls.is_empty());
    }
}

#[test]
fn card_removal_mid_read_returns_no_image() {
    let mut poller = common::fixtures::provisioned_poller();
    poller.remove_after(7);

    match read(&mut poller) {
        Err(Error::NotPresent) => {}
        other => panic!("expected NotPresent, got: {:?}", other),
    }
}

#[test]
fn unlockable_sectors_are_tolerated() {
    let mut poller = common::fixtures::provisioned_poller();
    poller.keys_a[3] = None; // balance sector rejects the key

    let image = read(&mut poller).unwrap();
    for block in 12..16 {
        assert!(!image.is_block_read(block));
    }
    // the rest of the card still came through
    assert!(image.is_block_read(0));
    assert!(image.is_block_read(52));
}
