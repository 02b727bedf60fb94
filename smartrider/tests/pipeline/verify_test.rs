#[path = "../common/mod.rs"]
mod common;

use smartrider::constants::{STANDARD_KEY_1, STANDARD_KEY_2, STANDARD_KEY_3};
use smartrider::types::{Key, KeyType};
use smartrider::verify::verify;

#[test]
fn provisioned_card_verifies() {
    common::fixtures::init_logging();
    let mut poller = common::fixtures::provisioned_poller();
    assert!(verify(&mut poller));
}

#[test]
fn fixture_keys_match_the_constants() {
    let keys = common::fixtures::standard_keys();
    assert_eq!(keys, vec![STANDARD_KEY_1, STANDARD_KEY_2, STANDARD_KEY_3]);
}

#[test]
fn any_single_byte_key_mutation_fails_verification() {
    // (sector, slot, genuine key, memory offset of the stored copy)
    let slots = [
        (0usize, KeyType::A, STANDARD_KEY_1, 0usize),
        (6, KeyType::A, STANDARD_KEY_2, 24 * 16),
        (6, KeyType::B, STANDARD_KEY_3, 27 * 16 + 10),
    ];

    for (sector, key_type, genuine, mem_offset) in slots {
        for byte in 0..6 {
            let mut mutated = *genuine.as_bytes();
            mutated[byte] ^= 0x01;

            // card provisioned with the mutated key in this one slot
            let mut poller = common::fixtures::provisioned_poller();
            poller.set_sector_key(sector, key_type, Key::from_bytes(mutated));
            poller.write_bytes(mem_offset, &mutated);

            assert!(
                !verify(&mut poller),
                "sector {} key {} byte {} mutation must fail",
                sector,
                key_type,
                byte
            );
        }
    }
}

#[test]
fn readback_mismatch_fails_even_when_auth_succeeds() {
    // The card accepts the genuine keys for authentication but stores
    // different bytes where the key copies live.
    let mut poller = common::fixtures::provisioned_poller();
    poller.write_bytes(0, &[0xDE, 0xAD, 0xBE, 0xEF, 0x00, 0x00]);
    assert!(!verify(&mut poller));

    let mut poller = common::fixtures::provisioned_poller();
    poller.write_bytes(24 * 16, &[0x00; 6]);
    assert!(!verify(&mut poller));

    let mut poller = common::fixtures::provisioned_poller();
    poller.write_bytes(27 * 16 + 10, &[0x00; 6]);
    assert!(!verify(&mut poller));
}

#[test]
fn absent_card_fails_verification() {
    let mut poller = common::fixtures::provisioned_poller();
    poller.present = false;
    assert!(!verify(&mut poller));
}
