//! Helpers shared by the hashers and the table.
use std::hash::{Hash, Hasher};

/// Folds a 64-bit digest into 32 bits, keeping the entropy of both halves.
#[inline]
pub const fn fold_64(digest: u64) -> u32 {
    (digest ^ (digest >> 32)) as u32
}

/// Feeds `value` into a streaming hasher and folds the digest.
///
/// The streaming hasher must already be keyed, this only drives [`Hash`] through it.
#[inline]
pub fn digest<S: Hasher, T: Hash + ?Sized>(mut state: S, value: &T) -> u32 {
    value.hash(&mut state);
    fold_64(state.finish())
}

/// Reduce a full-width hash to a slot index of a table with `num_slots` slots.
#[inline]
pub const fn reduce(hash: u32, num_slots: usize) -> usize {
    debug_assert!(num_slots > 0, r#""num_slots" must be greater than 0"#);

    hash as usize % num_slots
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::hash::DefaultHasher;

    #[test]
    fn test_fold_64_mixes_both_halves() {
        assert_eq!(fold_64(0), 0);
        assert_eq!(fold_64(0xDEAD_BEEF_0000_0000), 0xDEAD_BEEF);
        assert_eq!(fold_64(0x0000_0000_DEAD_BEEF), 0xDEAD_BEEF);
        assert_eq!(fold_64(0xFFFF_FFFF_FFFF_FFFF), 0);
    }

    #[test]
    fn test_digest_depends_on_key() {
        let mut keyed = DefaultHasher::new();
        keyed.write_u64(1);
        let plain = digest(DefaultHasher::new(), "apple");
        assert_ne!(plain, digest(keyed, "apple"));
        assert_eq!(plain, digest(DefaultHasher::new(), "apple"));
    }

    #[test]
    fn test_reduce_stays_in_range() {
        for num_slots in 1..64 {
            for hash in [0, 1, 17, u32::MAX / 3, u32::MAX] {
                assert!(reduce(hash, num_slots) < num_slots);
            }
        }
    }
}
