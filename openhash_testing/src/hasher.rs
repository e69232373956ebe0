//! Utilities for testing [`Hasher`] implementations.
use openhash_core::Hasher;
use rand::Rng;
use std::fmt::Debug;

/// Verifies that a hasher rebuilt from the state of another one hashes identically, and that
/// hashing the same value twice gives the same result.
///
/// # Parameters
///
/// - `rng`: A random number generator used to create seeds and values.
/// - `gen_value`: Value generator function.
/// - `num_trials`: Number of different (seed, value) pairs to test.
pub fn test_state_reproduction<R, T, H, G>(rng: &mut R, gen_value: G, num_trials: usize)
where
    R: Rng,
    T: Eq + Debug,
    H: Hasher<T>,
    G: Fn(&mut R) -> T,
{
    for _ in 0..num_trials {
        let seed = rng.next_u64();
        let original = H::from_seed(seed);
        let rebuilt = H::from_state(original.state().clone());
        let reseeded = H::from_seed(seed);

        let value = gen_value(rng);
        let hash = original.hash(&value);

        assert_eq!(
            hash,
            original.hash(&value),
            "Hashing is not deterministic for seed {}, value {:?}",
            seed,
            value
        );
        assert_eq!(
            hash,
            rebuilt.hash(&value),
            "Rebuilt hasher differs for seed {}, value {:?}",
            seed,
            value
        );
        assert_eq!(
            hash,
            reseeded.hash(&value),
            "Reseeded hasher differs for seed {}, value {:?}",
            seed,
            value
        );
    }
}

/// Verifies that the seed actually changes the hash function.
///
/// Two hashers created from different seeds must disagree on at least one of `num_values`
/// generated values.
pub fn test_seed_sensitivity<R, T, H, G>(rng: &mut R, gen_value: G, num_values: usize)
where
    R: Rng,
    T: Eq + Debug,
    H: Hasher<T>,
    G: Fn(&mut R) -> T,
{
    let seed = rng.next_u64();
    let first = H::from_seed(seed);
    let second = H::from_seed(seed.wrapping_add(1));

    let values: Vec<T> = (0..num_values).map(|_| gen_value(rng)).collect();
    assert!(
        values.iter().any(|v| first.hash(v) != second.hash(v)),
        "Seeds {} and {} produce identical hashes for {:?}",
        seed,
        seed.wrapping_add(1),
        values
    );
}

/// Generates standard test cases for hashers.
///
/// This macro generates test functions that verify:
/// - Hashing is deterministic and reproducible from the hasher state
/// - The seed influences the hash values
///
/// # Parameters
///
/// - `hasher_type`: The hasher type constructor (e.g., `StdHasher`)
/// - `value_type`: The value type to test (e.g., `u32`)
/// - `generate_value`: A closure that generates a value for testing
///
/// # Example
///
/// ```ignore
/// generate_hasher_tests!(StdHasher, u32, |rng| rng.random::<u32>());
/// ```
#[macro_export]
macro_rules! generate_hasher_tests {
    ($hasher_type:ident, $value_type:ident, $generate_value:expr$(,)?) => {
        compose_idents::compose_idents!(
            test_fn = [test_hasher_state_reproduction_, $value_type],
            {
                #[test]
                fn test_fn() {
                    #[allow(unused_imports)]
                    use rand::Rng as _;
                    use rand::SeedableRng;
                    use rand_chacha::ChaCha20Rng;

                    $crate::test_state_reproduction::<
                        ChaCha20Rng,
                        $value_type,
                        $hasher_type<$value_type>,
                        _,
                    >(&mut ChaCha20Rng::from_os_rng(), $generate_value, 64);
                }
            }
        );

        compose_idents::compose_idents!(
            test_fn = [test_hasher_seed_sensitivity_, $value_type],
            {
                #[test]
                fn test_fn() {
                    #[allow(unused_imports)]
                    use rand::Rng as _;
                    use rand::SeedableRng;
                    use rand_chacha::ChaCha20Rng;

                    $crate::test_seed_sensitivity::<
                        ChaCha20Rng,
                        $value_type,
                        $hasher_type<$value_type>,
                        _,
                    >(&mut ChaCha20Rng::seed_from_u64(0), $generate_value, 32);
                }
            }
        );
    };
}
