//! Implements constructors for [`OpenHashSet`].
use crate::open_addressing::{Cell, OpenHashSet, Options, Probing};
use openhash_core::{Hasher, OpenHashError};

impl<T: Eq, H: Hasher<T>> OpenHashSet<T, H> {
    /// Creates an empty set with `capacity` slots, seed `0` and linear probing.
    ///
    /// # Errors
    ///
    /// - [`OpenHashError::ZeroCapacity`] if `capacity` is `0`.
    pub fn new(capacity: usize) -> Result<Self, OpenHashError> {
        Self::with_options(capacity, Options::default())
    }

    /// Creates an empty set with `capacity` slots whose hasher is created from `seed`.
    pub fn with_seed(capacity: usize, seed: u64) -> Result<Self, OpenHashError> {
        Self::with_options(
            capacity,
            Options {
                seed,
                ..Options::default()
            },
        )
    }

    /// Creates an empty set with `capacity` slots configured by `options`.
    pub fn with_options(capacity: usize, options: Options) -> Result<Self, OpenHashError> {
        Self::with_hasher(capacity, H::from_seed(options.seed), options.probing)
    }

    /// Creates an empty set with `capacity` slots using an existing `hasher`.
    ///
    /// # Parameters
    ///
    /// - `capacity`: The maximum number of elements, fixed for the lifetime of the set.
    /// - `hasher`: The hasher for the elements.
    /// - `probing`: The collision resolution scheme.
    pub fn with_hasher(
        capacity: usize,
        hasher: H,
        probing: Probing,
    ) -> Result<Self, OpenHashError> {
        if capacity == 0 {
            return Err(OpenHashError::ZeroCapacity);
        }

        let slots: Box<[Cell<T>]> = (0..capacity).map(|_| Cell::Empty).collect();

        Ok(Self {
            hasher,
            probing,
            slots,
            len: 0,
            tombstones: 0,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hashing::hashers::StdHasher;
    use openhash_core::HashSet;

    #[test]
    fn test_zero_capacity_is_rejected() {
        let result = OpenHashSet::<u32, StdHasher<u32>>::new(0);
        assert_eq!(result.unwrap_err(), OpenHashError::ZeroCapacity);

        let result = OpenHashSet::<String>::with_options(
            0,
            Options {
                seed: 1,
                probing: Probing::Double,
            },
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_new_set_is_empty() {
        let set = OpenHashSet::<&str>::new(10).unwrap();
        assert_eq!(set.len(), 0);
        assert!(set.is_empty());
        assert_eq!(set.capacity(), 10);
        assert_eq!(set.tombstones(), 0);
        assert_eq!(set.probing(), Probing::Linear);
        assert!(set.slots().iter().all(|cell| *cell == Cell::Empty));
    }

    #[test]
    fn test_seed_reaches_hasher() {
        let set = OpenHashSet::<u64, StdHasher<u64>>::with_seed(4, 77).unwrap();
        assert_eq!(*set.hasher().state(), 77);
    }

    #[test]
    fn test_with_hasher_keeps_probing() {
        let hasher = StdHasher::<u64>::from_seed(3);
        let set: OpenHashSet<u64, _> = OpenHashSet::with_hasher(8, hasher, Probing::Double).unwrap();
        assert_eq!(set.probing(), Probing::Double);
        assert_eq!(set.capacity(), 8);
    }
}
