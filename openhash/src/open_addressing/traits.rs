//! Implements comparison, hashing and formatting for [`OpenHashSet`].
use crate::open_addressing::OpenHashSet;
use openhash_core::{HashSet, Hasher};
use std::fmt::{Display, Formatter};
use std::hash::{DefaultHasher, Hash, Hasher as _};

/// Sets are equal when they hold equal elements.
///
/// Capacity, hasher, probing and the physical layout of the slots do not matter.
impl<T, H1, H2> PartialEq<OpenHashSet<T, H2>> for OpenHashSet<T, H1>
where
    T: Eq,
    H1: Hasher<T>,
    H2: Hasher<T>,
{
    fn eq(&self, other: &OpenHashSet<T, H2>) -> bool {
        // Elements are unique on both sides, so equal sizes plus inclusion mean equality.
        self.len == other.len && other.iter().all(|value| self.contains(value))
    }
}

impl<T: Eq, H: Hasher<T>> Eq for OpenHashSet<T, H> {}

/// Combines the digests of the elements with a wrapping sum, which makes the result independent
/// of the slot order.
impl<T, H> Hash for OpenHashSet<T, H>
where
    T: Eq + Hash,
    H: Hasher<T>,
{
    fn hash<S: std::hash::Hasher>(&self, state: &mut S) {
        let digest = self.iter().fold(0_u64, |digest, value| {
            let mut hasher = DefaultHasher::new();
            value.hash(&mut hasher);
            digest.wrapping_add(hasher.finish())
        });
        state.write_usize(self.len);
        state.write_u64(digest);
    }
}

/// Formats as `OpenHashSet(size=2, capacity=10, elements=[apple, grape])`.
impl<T, H> Display for OpenHashSet<T, H>
where
    T: Eq + Display,
    H: Hasher<T>,
{
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "OpenHashSet(size={}, capacity={}, elements=[",
            self.len,
            self.capacity()
        )?;
        for (i, value) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}", value)?;
        }
        f.write_str("])")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hashing::flawed::ConstantHasher;
    use crate::hashing::hashers::StdHasher;
    use crate::open_addressing::{Options, Probing};

    fn digest<V: Hash>(value: &V) -> u64 {
        let mut hasher = DefaultHasher::new();
        value.hash(&mut hasher);
        hasher.finish()
    }

    fn basket(capacity: usize, fruits: &[&'static str]) -> OpenHashSet<&'static str> {
        let mut set = OpenHashSet::new(capacity).unwrap();
        for &fruit in fruits {
            set.add(fruit);
        }
        set
    }

    #[test]
    fn test_equality_ignores_order_and_capacity() {
        let mut first = basket(10, &["apple", "banana", "orange", "grape"]);
        first.remove(&"banana");
        first.add("peach");
        let mut second = basket(7, &["peach", "grape", "orange", "apple"]);

        assert_eq!(first, second);
        assert_eq!(second, first);

        second.add("melon");
        assert_ne!(first, second);
        assert_ne!(second, first);
    }

    #[test]
    fn test_equality_with_same_size_but_different_elements() {
        let first = basket(5, &["apple", "orange"]);
        let second = basket(5, &["apple", "melon"]);
        assert_ne!(first, second);
    }

    #[test]
    fn test_equality_across_hashers_and_probing() {
        let mut double: OpenHashSet<u64, StdHasher<u64>> = OpenHashSet::with_options(
            13,
            Options {
                seed: 8,
                probing: Probing::Double,
            },
        )
        .unwrap();
        let mut constant: OpenHashSet<u64, ConstantHasher<u64>> = OpenHashSet::new(6).unwrap();
        let mut sip: OpenHashSet<u64, StdHasher<u64>> = OpenHashSet::with_seed(6, 1).unwrap();
        for value in [10, 20, 30, 40] {
            double.add(value);
            constant.add(50 - value);
            sip.add(value);
        }
        assert!(double == constant);
        assert!(constant == sip);
        assert!(sip == double);
    }

    #[test]
    fn test_empty_sets_are_equal() {
        let first: OpenHashSet<String> = OpenHashSet::new(1).unwrap();
        let second: OpenHashSet<String> = OpenHashSet::new(100).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_equal_sets_hash_equally() {
        let first = basket(10, &["apple", "orange", "grape", "peach"]);
        let second = basket(4, &["grape", "peach", "apple", "orange"]);
        assert_eq!(first, second);
        assert_eq!(digest(&first), digest(&second));

        let third = basket(10, &["apple", "orange", "grape"]);
        assert_ne!(digest(&first), digest(&third));
    }

    #[test]
    fn test_display() {
        let empty: OpenHashSet<&str> = OpenHashSet::new(10).unwrap();
        assert_eq!(
            empty.to_string(),
            "OpenHashSet(size=0, capacity=10, elements=[])"
        );

        let mut set: OpenHashSet<&str, ConstantHasher<&str>> = OpenHashSet::new(3).unwrap();
        set.add("apple");
        set.add("grape");
        assert_eq!(
            set.to_string(),
            "OpenHashSet(size=2, capacity=3, elements=[apple, grape])"
        );
    }

    #[test]
    fn test_debug_lists_slots() {
        let mut set: OpenHashSet<u8, ConstantHasher<u8>> = OpenHashSet::new(2).unwrap();
        set.add(7);
        let debug = format!("{:?}", set);
        assert!(debug.contains("Occupied(7)"), "{}", debug);
        assert!(debug.contains("Empty"), "{}", debug);
    }
}
