//! Data generation utilities useful for testing.
use rand::distr::Alphanumeric;
use rand::Rng;
use std::collections::HashSet;
use std::hash::Hash;

/// Provides capabilities to generate random values of the implementer-type.
pub trait Generate<R: Rng>: Sized {
    /// Parameters for data-generation specific for the type.
    type GenerateParams: Default;

    /// Generates a single random value of the type.
    fn generate(rng: &mut R, params: &Self::GenerateParams) -> Self;

    /// Generates a slice of **unique** random values of the type.
    ///
    /// The caller must not ask for more values than the parameters can produce.
    fn generate_many(rng: &mut R, params: &Self::GenerateParams, size: usize) -> Box<[Self]>
    where
        Self: Hash + Eq,
    {
        let mut seen = HashSet::new();
        while seen.len() < size {
            seen.insert(Self::generate(rng, params));
        }
        seen.into_iter().collect()
    }
}

/// Parameters for [`Generate`] implementations that generate numeric values.
pub struct NumParams<T> {
    min: T,
    max: T,
}

impl<T> NumParams<T> {
    /// Creates a new instance of [`NumParams`] with the specified minimum and maximum values.
    pub fn new(min: T, max: T) -> Self {
        Self { min, max }
    }
}

macro_rules! impl_generate_num {
    ($($type:ty),*) => {
        $(
            impl Default for NumParams<$type> {
                fn default() -> Self {
                    Self { min: <$type>::MIN, max: <$type>::MAX }
                }
            }

            impl<R: Rng> Generate<R> for $type {
                type GenerateParams = NumParams<$type>;

                fn generate(rng: &mut R, params: &Self::GenerateParams) -> Self {
                    rng.random_range(params.min..=params.max)
                }
            }
        )*
    };
}

impl_generate_num!(u8, i8, u16, i16, u32, i32, u64, i64, u128, i128, usize);

/// Parameters for [`Generate`] implementations that generate strings.
pub struct StringParams {
    min_length: usize,
    max_length: usize,
}

impl StringParams {
    pub fn new(min_length: usize, max_length: usize) -> Self {
        Self {
            min_length,
            max_length,
        }
    }
}

impl Default for StringParams {
    fn default() -> Self {
        Self {
            min_length: 1,
            max_length: 64,
        }
    }
}

impl<R: Rng> Generate<R> for String {
    type GenerateParams = StringParams;

    fn generate(rng: &mut R, params: &Self::GenerateParams) -> Self {
        let length = rng.random_range(params.min_length..=params.max_length);
        rng.sample_iter(&Alphanumeric)
            .take(length)
            .map(char::from)
            .collect()
    }
}

/// Generates values that are absent from `present`.
pub fn generate_absent<R, T>(rng: &mut R, present: &[T], count: usize) -> Vec<T>
where
    R: Rng,
    T: Generate<R> + Hash + Eq,
{
    let present: HashSet<&T> = present.iter().collect();
    let mut absent = Vec::with_capacity(count);
    while absent.len() < count {
        let value = T::generate(rng, &T::GenerateParams::default());
        if !present.contains(&value) && !absent.contains(&value) {
            absent.push(value);
        }
    }
    absent
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha20Rng;

    #[test]
    fn test_generate_many_is_unique() {
        let mut rng = ChaCha20Rng::seed_from_u64(1);
        let values = u8::generate_many(&mut rng, &NumParams::new(0, 9), 10);
        let unique: HashSet<u8> = values.iter().copied().collect();
        assert_eq!(unique.len(), 10);
        assert!(unique.iter().all(|&v| v <= 9));
    }

    #[test]
    fn test_generate_pointer_sized_values() {
        let mut rng = ChaCha20Rng::seed_from_u64(4);
        let values = usize::generate_many(&mut rng, &NumParams::new(10, 40), 31);
        assert!(values.iter().all(|v| (10..=40).contains(v)));
    }

    #[test]
    fn test_string_lengths_respect_params() {
        let mut rng = ChaCha20Rng::seed_from_u64(2);
        let params = StringParams::new(3, 5);
        for _ in 0..100 {
            let value = String::generate(&mut rng, &params);
            assert!((3..=5).contains(&value.len()), "{:?}", value);
        }
    }

    #[test]
    fn test_generate_absent_avoids_present_values() {
        let mut rng = ChaCha20Rng::seed_from_u64(3);
        let present: Vec<u8> = (0..200).collect();
        let absent = generate_absent(&mut rng, &present, 20);
        assert_eq!(absent.len(), 20);
        assert!(absent.iter().all(|&v| v >= 200));
    }
}
