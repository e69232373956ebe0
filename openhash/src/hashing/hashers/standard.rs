//! Implements [`Hasher`] for every type implementing [`std::hash::Hash`].
//!
//! Internally it feeds the value through SipHash ([`DefaultHasher`]) keyed by the seed.
use crate::hashing::common::digest;
use openhash_core::Hasher;
use std::fmt::{Debug, Formatter};
use std::hash::{DefaultHasher, Hash, Hasher as _};
use std::marker::PhantomData;

/// Hasher for any [`Hash`] type, the default hasher of
/// [`OpenHashSet`](crate::open_addressing::OpenHashSet).
///
/// Accepts user-defined element types, anything deriving [`Hash`] works.
pub struct StdHasher<T> {
    seed: u64,
    value_type: PhantomData<fn(&T)>,
}

impl<T> Default for StdHasher<T> {
    fn default() -> Self {
        Self {
            seed: 0,
            value_type: PhantomData,
        }
    }
}

impl<T> Clone for StdHasher<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for StdHasher<T> {}

impl<T> Debug for StdHasher<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StdHasher").field("seed", &self.seed).finish()
    }
}

impl<T: Eq + Hash> Hasher<T> for StdHasher<T> {
    type State = u64;

    fn from_seed(seed: u64) -> Self {
        Self::from_state(seed)
    }
    fn from_state(seed: u64) -> Self {
        Self {
            seed,
            value_type: PhantomData,
        }
    }
    fn state(&self) -> &Self::State {
        &self.seed
    }
    fn hash(&self, value: &T) -> u32 {
        let mut hasher = DefaultHasher::new();
        hasher.write_u64(self.seed);
        digest(hasher, value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use openhash_testing::{generate_hasher_tests, slot_uniformity};
    use rand::SeedableRng;
    use rand_chacha::ChaCha20Rng;

    #[derive(Debug, PartialEq, Eq, Hash)]
    struct Person {
        name: &'static str,
        age: u32,
    }

    generate_hasher_tests!(StdHasher, u64, |rng| rng.random::<u64>());
    generate_hasher_tests!(StdHasher, String, |rng| rng.random::<u64>().to_string());

    #[test]
    fn test_std_hasher_accepts_user_types() {
        let hasher = StdHasher::<Person>::from_seed(3);
        let alice = Person {
            name: "Alice",
            age: 30,
        };
        let alice_again = Person {
            name: "Alice",
            age: 30,
        };
        assert_eq!(hasher.hash(&alice), hasher.hash(&alice_again));
    }

    #[test]
    #[cfg_attr(not(feature = "_slow-tests"), ignore)]
    fn test_string_slot_uniformity() {
        let mut rng = ChaCha20Rng::from_os_rng();
        slot_uniformity::<_, String, StdHasher<String>>(&mut rng, 61, 50, 30, 0.01);
    }

    #[test]
    #[cfg_attr(not(feature = "_slow-tests"), ignore)]
    fn test_u64_slot_uniformity() {
        let mut rng = ChaCha20Rng::from_os_rng();
        slot_uniformity::<_, u64, StdHasher<u64>>(&mut rng, 97, 50, 30, 0.01);
    }
}
