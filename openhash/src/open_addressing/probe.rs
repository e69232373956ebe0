//! Probe sequences of the table.
use crate::hashing::common::reduce;

/// Collision resolution scheme.
///
/// Both schemes visit every slot exactly once within `capacity` attempts, so a lookup that
/// exhausts its sequence has inspected the whole table.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Probing {
    /// Advance one slot per attempt: `index(i) = (h1 + i) mod capacity`.
    #[default]
    Linear,
    /// Advance by the secondary hash: `index(i) = (h1 + i * h2') mod capacity`.
    ///
    /// `h2'` is the secondary hash lowered to the closest value coprime with the capacity, which
    /// makes the sequence a permutation of the slots for any capacity.
    Double,
}

/// Primary hash: the slot where the probe sequence starts.
#[inline]
pub(crate) fn primary(hash: u32, capacity: usize) -> usize {
    reduce(hash, capacity)
}

/// Secondary hash: `1 + hash mod (capacity - 1)`, or `1` for a single-slot table.
#[inline]
pub(crate) fn secondary(hash: u32, capacity: usize) -> usize {
    if capacity > 1 {
        1 + reduce(hash, capacity - 1)
    } else {
        1
    }
}

#[inline]
fn gcd(mut a: usize, mut b: usize) -> usize {
    while b != 0 {
        (a, b) = (b, a % b);
    }
    a
}

/// Lowers `step` until it is coprime with `capacity`. Terminates at `1` at the latest.
#[inline]
fn coprime_step(mut step: usize, capacity: usize) -> usize {
    while step > 1 && gcd(step, capacity) != 1 {
        step -= 1;
    }
    step
}

/// Iterator over the slot indices probed for a single hash.
#[derive(Debug, Clone)]
pub(crate) struct ProbeSequence {
    index: usize,
    step: usize,
    capacity: usize,
    remaining: usize,
}

impl ProbeSequence {
    pub(crate) fn new(hash: u32, capacity: usize, probing: Probing) -> Self {
        debug_assert!(capacity > 0, r#""capacity" must be greater than 0"#);

        let step = match probing {
            Probing::Linear => 1,
            Probing::Double => coprime_step(secondary(hash, capacity), capacity),
        };
        Self {
            index: primary(hash, capacity),
            step: step % capacity,
            capacity,
            remaining: capacity,
        }
    }
}

impl Iterator for ProbeSequence {
    type Item = usize;

    #[inline]
    fn next(&mut self) -> Option<usize> {
        if self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;

        let index = self.index;
        // Both terms are below `capacity`, so the sum cannot overflow.
        self.index += self.step;
        if self.index >= self.capacity {
            self.index -= self.capacity;
        }
        Some(index)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for ProbeSequence {}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::prelude::*;
    use rand_chacha::ChaCha20Rng;

    fn assert_permutation(hash: u32, capacity: usize, probing: Probing) {
        let mut seen = vec![false; capacity];
        for index in ProbeSequence::new(hash, capacity, probing) {
            assert!(
                !seen[index],
                "Slot {} visited twice, hash: {}, capacity: {}, probing: {:?}",
                index, hash, capacity, probing
            );
            seen[index] = true;
        }
        assert!(seen.iter().all(|&s| s), "Not every slot visited");
    }

    #[test]
    fn test_probe_sequences_are_permutations() {
        let mut rng = ChaCha20Rng::seed_from_u64(0);
        for capacity in 1..=97 {
            for _ in 0..16 {
                let hash = rng.random();
                assert_permutation(hash, capacity, Probing::Linear);
                assert_permutation(hash, capacity, Probing::Double);
            }
        }
    }

    #[test]
    fn test_linear_probing_wraps_around() {
        let indices: Vec<usize> = ProbeSequence::new(8, 5, Probing::Linear).collect();
        assert_eq!(indices, vec![3, 4, 0, 1, 2]);
    }

    #[test]
    fn test_double_probing_steps_by_secondary_hash() {
        // h1 = 9 mod 7 = 2, h2 = 1 + 9 mod 6 = 4, which is coprime with 7.
        let indices: Vec<usize> = ProbeSequence::new(9, 7, Probing::Double).collect();
        assert_eq!(indices, vec![2, 6, 3, 0, 4, 1, 5]);
    }

    #[test]
    fn test_double_probing_falls_back_to_coprime_step() {
        // h2 = 1 + 3 mod 9 = 4 shares a factor with 10, so the step is lowered to 3.
        let indices: Vec<usize> = ProbeSequence::new(3, 10, Probing::Double).collect();
        assert_eq!(indices, vec![3, 6, 9, 2, 5, 8, 1, 4, 7, 0]);
    }

    #[test]
    fn test_single_slot_table() {
        assert_eq!(primary(u32::MAX, 1), 0);
        assert_eq!(secondary(u32::MAX, 1), 1);
        let indices: Vec<usize> = ProbeSequence::new(123, 1, Probing::Double).collect();
        assert_eq!(indices, vec![0]);
    }

    #[test]
    fn test_secondary_hash_is_never_zero() {
        for capacity in 2..64 {
            for hash in [0, 1, capacity as u32 - 1, u32::MAX] {
                let step = secondary(hash, capacity);
                assert!((1..capacity).contains(&step));
            }
        }
    }
}
