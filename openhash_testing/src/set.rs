//! Utilities for testing set implementations.
use crate::generate::{generate_absent, Generate};
use openhash_core::{HashSet, Hasher};
use rand::Rng;
use std::fmt::Debug;
use std::hash::Hash;

/// Generates unique values suitable for filling a set.
pub fn generate_set_data<R: Rng, T: Eq + Hash + Generate<R>>(
    rng: &mut R,
    size: usize,
    params: &T::GenerateParams,
) -> Box<[T]> {
    T::generate_many(rng, params, size)
}

/// Tests construction of a set.
pub fn test_build<T: Eq, H: Hasher<T>, S: HashSet<T, H>, C: Fn(usize) -> S>(
    cons: C,
    capacity: usize,
) -> S {
    let set = cons(capacity);
    assert_eq!(set.capacity(), capacity);
    assert!(set.is_empty());
    set
}

/// Tests insertion and lookup: every fresh value is accepted exactly once.
///
/// `set` must be empty and able to hold all of `data`.
pub fn test_add_contains<R, T, H, S>(rng: &mut R, mut set: S, data: &[T])
where
    R: Rng,
    T: Eq + Hash + Clone + Debug + Generate<R>,
    H: Hasher<T>,
    S: HashSet<T, H>,
{
    for (i, value) in data.iter().enumerate() {
        assert!(set.add(value.clone()), "Value: {:?}", value);
        assert!(set.contains(value), "Value: {:?}", value);
        assert_eq!(set.len(), i + 1);
    }
    for value in data {
        assert!(!set.add(value.clone()), "Duplicate accepted: {:?}", value);
        assert!(set.contains(value), "Value: {:?}", value);
    }
    assert_eq!(set.len(), data.len());

    for value in generate_absent(rng, data, data.len().div_ceil(3)) {
        assert!(!set.contains(&value), "Value: {:?}", value);
    }
}

/// Tests that a set accepts exactly `capacity` values and rejects the rest unchanged.
///
/// `data` must be longer than the capacity of `set`.
pub fn test_capacity_bound<T, H, S>(mut set: S, data: &[T])
where
    T: Eq + Clone + Debug,
    H: Hasher<T>,
    S: HashSet<T, H>,
{
    let capacity = set.capacity();
    assert!(data.len() > capacity, "Not enough data to overflow the set");

    let (fitting, overflowing) = data.split_at(capacity);
    for value in fitting {
        assert!(set.add(value.clone()), "Value: {:?}", value);
    }
    assert_eq!(set.len(), capacity);
    assert_eq!(set.load_factor(), 1.0);

    for value in overflowing {
        assert!(!set.add(value.clone()), "Overflow accepted: {:?}", value);
        assert!(!set.contains(value), "Value: {:?}", value);
        assert_eq!(set.len(), capacity);
    }
    for value in fitting {
        assert!(set.contains(value), "Value: {:?}", value);
    }
}

/// Tests removal: removed values disappear, the remaining ones stay reachable and freed slots
/// are reusable.
///
/// `set` must have at least one slot more than `data` has values, so that an empty slot survives
/// the removals.
pub fn test_remove<R, T, H, S>(rng: &mut R, mut set: S, data: &[T])
where
    R: Rng,
    T: Eq + Hash + Clone + Debug + Generate<R>,
    H: Hasher<T>,
    S: HashSet<T, H>,
{
    for value in data {
        assert!(set.add(value.clone()), "Value: {:?}", value);
    }

    let (removed, kept): (Vec<_>, Vec<_>) = data.iter().enumerate().partition(|(i, _)| i % 2 == 0);
    for (_, value) in &removed {
        assert!(set.remove(value), "Value: {:?}", value);
        assert!(!set.remove(value), "Removed twice: {:?}", value);
    }
    assert_eq!(set.len(), kept.len());

    for (_, value) in &removed {
        assert!(!set.contains(value), "Value: {:?}", value);
    }
    for (_, value) in &kept {
        assert!(set.contains(value), "Value: {:?}", value);
    }

    let len = set.len();
    for value in generate_absent(rng, data, 3) {
        assert!(!set.remove(&value), "Value: {:?}", value);
    }
    assert_eq!(set.len(), len);

    for (_, value) in &removed {
        assert!(set.add((*value).clone()), "Value: {:?}", value);
    }
    assert_eq!(set.len(), data.len());
    for value in data {
        assert!(set.contains(value), "Value: {:?}", value);
    }
}

/// Tests that clearing forgets every value and leaves a fully usable set.
pub fn test_clear<T, H, S>(mut set: S, data: &[T])
where
    T: Eq + Clone + Debug,
    H: Hasher<T>,
    S: HashSet<T, H>,
{
    for value in data {
        set.add(value.clone());
    }
    if let Some(value) = data.first() {
        set.remove(value);
    }

    set.clear();
    assert_eq!(set.len(), 0);
    assert!(set.is_empty());
    for value in data {
        assert!(!set.contains(value), "Value: {:?}", value);
    }
    for value in data {
        assert!(set.add(value.clone()), "Value: {:?}", value);
    }
    assert_eq!(set.len(), data.len());
}

/// Tests that equality depends on the contents only.
///
/// Two sets of different capacities filled in opposite orders must be equal, adding an extra
/// value to one of them must break the equality.
pub fn test_content_equality<T, H, S, C>(cons: C, data: &[T], extra: T)
where
    T: Eq + Clone + Debug,
    H: Hasher<T>,
    S: HashSet<T, H> + PartialEq + Debug,
    C: Fn(usize) -> S,
{
    let mut forward = cons(data.len() + 1);
    let mut backward = cons(data.len() * 2 + 1);
    for value in data {
        forward.add(value.clone());
    }
    for value in data.iter().rev() {
        backward.add(value.clone());
    }
    assert_eq!(forward, backward);

    assert!(backward.add(extra.clone()), "Value: {:?}", extra);
    assert_ne!(forward, backward);

    assert!(forward.add(extra));
    assert_eq!(forward, backward);
}

/// Generates tests for a set type for integer values.
#[macro_export]
macro_rules! generate_set_int_tests {
    ($Set:ident, $factory:expr, $Hasher:ident, $type:ident) => {
        compose_idents::compose_idents!(test_fn = [test_add_contains_, $type], {
            #[test]
            fn test_fn() {
                use $crate::*;

                let mut rng = rand::rng();
                let size = $crate::set_size_for_bits(<$type>::BITS);
                let data: Box<[$type]> =
                    generate_set_data(&mut rng, size, &NumParams::<$type>::default());
                let set = test_build::<$type, $Hasher<$type>, $Set<$type, $Hasher<$type>>, _>(
                    $factory,
                    size + size / 3,
                );
                test_add_contains(&mut rng, set, &data);
            }
        });

        compose_idents::compose_idents!(test_fn = [test_add_contains_full_, $type], {
            #[test]
            fn test_fn() {
                use $crate::*;

                let mut rng = rand::rng();
                let size = $crate::set_size_for_bits(<$type>::BITS);
                let data: Box<[$type]> =
                    generate_set_data(&mut rng, size, &NumParams::<$type>::default());
                let set = test_build::<$type, $Hasher<$type>, $Set<$type, $Hasher<$type>>, _>(
                    $factory, size,
                );
                test_add_contains(&mut rng, set, &data);
            }
        });

        compose_idents::compose_idents!(test_fn = [test_capacity_bound_, $type], {
            #[test]
            fn test_fn() {
                use $crate::*;

                let mut rng = rand::rng();
                let size = $crate::set_size_for_bits(<$type>::BITS);
                let data: Box<[$type]> =
                    generate_set_data(&mut rng, size, &NumParams::<$type>::default());
                let set = test_build::<$type, $Hasher<$type>, $Set<$type, $Hasher<$type>>, _>(
                    $factory,
                    size / 2,
                );
                test_capacity_bound(set, &data);
            }
        });

        compose_idents::compose_idents!(test_fn = [test_remove_, $type], {
            #[test]
            fn test_fn() {
                use $crate::*;

                let mut rng = rand::rng();
                let size = $crate::set_size_for_bits(<$type>::BITS);
                let data: Box<[$type]> =
                    generate_set_data(&mut rng, size, &NumParams::<$type>::default());
                let set = test_build::<$type, $Hasher<$type>, $Set<$type, $Hasher<$type>>, _>(
                    $factory,
                    size + 1,
                );
                test_remove(&mut rng, set, &data);
            }
        });

        compose_idents::compose_idents!(test_fn = [test_clear_, $type], {
            #[test]
            fn test_fn() {
                use $crate::*;

                let mut rng = rand::rng();
                let size = $crate::set_size_for_bits(<$type>::BITS);
                let data: Box<[$type]> =
                    generate_set_data(&mut rng, size, &NumParams::<$type>::default());
                let set = test_build::<$type, $Hasher<$type>, $Set<$type, $Hasher<$type>>, _>(
                    $factory, size,
                );
                test_clear(set, &data);
            }
        });

        compose_idents::compose_idents!(test_fn = [test_content_equality_, $type], {
            #[test]
            fn test_fn() {
                use $crate::*;

                let mut rng = rand::rng();
                let size = $crate::set_size_for_bits(<$type>::BITS) / 4;
                let data: Box<[$type]> =
                    generate_set_data(&mut rng, size + 1, &NumParams::<$type>::default());
                let (extra, data) = data.split_last().unwrap();
                test_content_equality::<$type, $Hasher<$type>, $Set<$type, $Hasher<$type>>, _>(
                    $factory,
                    data,
                    *extra,
                );
            }
        });
    };
}

/// Generates tests for a set type for string values.
#[macro_export]
macro_rules! generate_set_str_tests {
    ($Set:ident, $factory:expr, $Hasher:ident) => {
        #[test]
        fn test_add_contains_str() {
            use $crate::*;

            let mut rng = rand::rng();
            let data: Box<[String]> =
                generate_set_data(&mut rng, 999, &StringParams::default());
            let set = test_build::<String, $Hasher<String>, $Set<String, $Hasher<String>>, _>(
                $factory, 1333,
            );
            test_add_contains(&mut rng, set, &data);
        }

        #[test]
        fn test_capacity_bound_str() {
            use $crate::*;

            let mut rng = rand::rng();
            let data: Box<[String]> = generate_set_data(&mut rng, 99, &StringParams::default());
            let set = test_build::<String, $Hasher<String>, $Set<String, $Hasher<String>>, _>(
                $factory, 64,
            );
            test_capacity_bound(set, &data);
        }

        #[test]
        fn test_remove_str() {
            use $crate::*;

            let mut rng = rand::rng();
            let data: Box<[String]> = generate_set_data(&mut rng, 999, &StringParams::default());
            let set = test_build::<String, $Hasher<String>, $Set<String, $Hasher<String>>, _>(
                $factory, 1000,
            );
            test_remove(&mut rng, set, &data);
        }

        #[test]
        fn test_clear_str() {
            use $crate::*;

            let mut rng = rand::rng();
            let data: Box<[String]> = generate_set_data(&mut rng, 99, &StringParams::default());
            let set = test_build::<String, $Hasher<String>, $Set<String, $Hasher<String>>, _>(
                $factory, 99,
            );
            test_clear(set, &data);
        }

        #[test]
        fn test_content_equality_str() {
            use $crate::*;

            let mut rng = rand::rng();
            let data: Box<[String]> = generate_set_data(&mut rng, 99, &StringParams::default());
            let (extra, data) = data.split_last().unwrap();
            test_content_equality::<String, $Hasher<String>, $Set<String, $Hasher<String>>, _>(
                $factory,
                data,
                extra.clone(),
            );
        }

        #[test]
        fn test_empty_string_value() {
            use $crate::*;

            let mut rng = rand::rng();
            let data: Box<[String]> = generate_set_data(&mut rng, 99, &StringParams::default());
            let mut set = test_build::<String, $Hasher<String>, $Set<String, $Hasher<String>>, _>(
                $factory, 100,
            );
            for value in data.iter() {
                set.add(value.clone());
            }
            assert!(!set.contains(&String::new()));
            assert!(set.add(String::new()));
            assert!(set.contains(&String::new()));
            assert!(!set.add(String::new()));
        }
    };
}

/// Generates the complete test-suite for a set type.
///
/// # Parameters
///
/// - `$Set`: The set type constructor, generic over the value and the hasher.
/// - `$factory`: A function creating an empty set with the given capacity.
/// - `$Hasher`: The hasher type constructor, generic over the value.
#[macro_export]
macro_rules! generate_set_tests {
    ($Set:ident, $factory:expr, $Hasher:ident) => {
        $crate::generate_set_int_tests!($Set, $factory, $Hasher, u8);
        $crate::generate_set_int_tests!($Set, $factory, $Hasher, i8);
        $crate::generate_set_int_tests!($Set, $factory, $Hasher, u16);
        $crate::generate_set_int_tests!($Set, $factory, $Hasher, i16);
        $crate::generate_set_int_tests!($Set, $factory, $Hasher, u32);
        $crate::generate_set_int_tests!($Set, $factory, $Hasher, i32);
        $crate::generate_set_int_tests!($Set, $factory, $Hasher, u64);
        $crate::generate_set_int_tests!($Set, $factory, $Hasher, i64);
        $crate::generate_set_int_tests!($Set, $factory, $Hasher, u128);
        $crate::generate_set_int_tests!($Set, $factory, $Hasher, i128);
        $crate::generate_set_str_tests!($Set, $factory, $Hasher);
    };
}

/// Number of values used by the integer suites: half of the domain for small types.
pub fn set_size_for_bits(bits: u32) -> usize {
    if bits >= u16::BITS {
        999
    } else {
        (1_usize << bits) / 2
    }
}
