// smartrider-rs/smartrider/src/card/keyset.rs

use crate::types::{CardType, Key};

/// Per-sector key A table used to drive a bulk read.
///
/// A sector with no entry is skipped by the reader. SmartRider grants
/// read access to every sector via one shared key A, so in practice the
/// table is built with [`KeySet::uniform_key_a`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeySet {
    key_a: Vec<Option<Key>>,
}

impl KeySet {
    /// Key table with the same key A in every sector's slot.
    pub fn uniform_key_a(card_type: CardType, key: Key) -> Self {
        Self {
            key_a: vec![Some(key); card_type.sector_count()],
        }
    }

    /// Key A entry for a sector, if present.
    pub fn key_a(&self, sector: usize) -> Option<&Key> {
        self.key_a.get(sector).and_then(|k| k.as_ref())
    }

    /// Number of sectors this table covers.
    pub fn sector_count(&self) -> usize {
        self.key_a.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::STANDARD_KEY_1;

    #[test]
    fn uniform_key_a_fills_every_sector() {
        let keys = KeySet::uniform_key_a(CardType::Classic1k, STANDARD_KEY_1);
        assert_eq!(keys.sector_count(), 16);
        for sector in 0..16 {
            assert_eq!(keys.key_a(sector), Some(&STANDARD_KEY_1));
        }
    }

    #[test]
    fn out_of_range_sector_has_no_key() {
        let keys = KeySet::uniform_key_a(CardType::Classic1k, STANDARD_KEY_1);
        assert_eq!(keys.key_a(16), None);
        assert_eq!(keys.key_a(99), None);
    }
}
