//! Implements [`Hasher`] on top of the streaming XXH3 algorithm, enabled by the `xxh3` feature.
//!
//! Accepts the same element types as [`StdHasher`](super::StdHasher) but keys XXH3 with the
//! seed instead of SipHash, which is considerably faster for long strings.
use crate::hashing::common::digest;
use openhash_core::Hasher;
use std::fmt::{Debug, Formatter};
use std::hash::Hash;
use std::marker::PhantomData;
use xxhash_rust::xxh3::Xxh3;

/// Hasher based on the XXH3 algorithm for any [`Hash`] type.
pub struct XXH3Hasher<T> {
    seed: u64,
    value_type: PhantomData<fn(&T)>,
}

impl<T> Default for XXH3Hasher<T> {
    fn default() -> Self {
        Self {
            seed: 0,
            value_type: PhantomData,
        }
    }
}

impl<T> Clone for XXH3Hasher<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for XXH3Hasher<T> {}

impl<T> Debug for XXH3Hasher<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("XXH3Hasher").field("seed", &self.seed).finish()
    }
}

impl<T: Eq + Hash> Hasher<T> for XXH3Hasher<T> {
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
        digest(Xxh3::with_seed(self.seed), value)
    }
}
