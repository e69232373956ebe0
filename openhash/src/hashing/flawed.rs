//! Implements an intentionally flawed hasher - mainly to serve as a negative example and to
//! force collisions in tests of the probing logic.
use openhash_core::Hasher;
use std::fmt::{Debug, Formatter};
use std::marker::PhantomData;

/// Hashes every value of `T` to the same constant.
///
/// Every value collides, so a table using it degenerates into a single probe chain that starts
/// at the slot derived from the constant.
pub struct ConstantHasher<T> {
    state: u64,
    value_type: PhantomData<fn(&T)>,
}

impl<T> Default for ConstantHasher<T> {
    fn default() -> Self {
        Self {
            state: 0,
            value_type: PhantomData,
        }
    }
}

impl<T> Clone for ConstantHasher<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for ConstantHasher<T> {}

impl<T> Debug for ConstantHasher<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ConstantHasher")
            .field("state", &self.state)
            .finish()
    }
}

impl<T: Eq> Hasher<T> for ConstantHasher<T> {
    type State = u64;

    fn from_seed(seed: u64) -> Self {
        Self::from_state(seed)
    }
    fn from_state(state: u64) -> Self {
        Self {
            state,
            value_type: PhantomData,
        }
    }
    fn state(&self) -> &Self::State {
        &self.state
    }
    fn hash(&self, _value: &T) -> u32 {
        self.state as u32
    }
}
