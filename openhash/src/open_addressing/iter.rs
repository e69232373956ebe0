//! Iterators over the elements of [`OpenHashSet`].
//!
//! Elements are yielded in physical slot order, which depends on the hasher and on the history
//! of insertions and removals rather than on insertion order.
use crate::open_addressing::{Cell, OpenHashSet};
use openhash_core::Hasher;
use std::iter::FusedIterator;

/// Borrowing iterator over the elements of [`OpenHashSet`].
#[derive(Debug, Clone)]
pub struct Iter<'a, T> {
    slots: std::slice::Iter<'a, Cell<T>>,
    remaining: usize,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let value = self.slots.by_ref().find_map(Cell::value)?;
        self.remaining -= 1;
        Some(value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<T> FusedIterator for Iter<'_, T> {}

/// Owning iterator over the elements of [`OpenHashSet`].
#[derive(Debug)]
pub struct IntoIter<T> {
    slots: std::vec::IntoIter<Cell<T>>,
    remaining: usize,
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        let value = self.slots.by_ref().find_map(|cell| match cell {
            Cell::Occupied(value) => Some(value),
            Cell::Empty | Cell::Tombstone => None,
        })?;
        self.remaining -= 1;
        Some(value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}

impl<T> FusedIterator for IntoIter<T> {}

impl<T: Eq, H: Hasher<T>> OpenHashSet<T, H> {
    /// Returns an iterator over the elements in physical slot order.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            slots: self.slots.iter(),
            remaining: self.len,
        }
    }
}

impl<'a, T: Eq, H: Hasher<T>> IntoIterator for &'a OpenHashSet<T, H> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T: Eq, H: Hasher<T>> IntoIterator for OpenHashSet<T, H> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter {
            remaining: self.len,
            slots: self.slots.into_vec().into_iter(),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::hashing::hashers::StdHasher;
    use crate::open_addressing::OpenHashSet;
    use openhash_core::HashSet;
    use std::collections::HashSet as StdHashSet;

    fn filled() -> OpenHashSet<u32, StdHasher<u32>> {
        let mut set = OpenHashSet::with_seed(16, 5).unwrap();
        for value in [3, 1, 4, 15, 9, 2, 6] {
            set.add(value);
        }
        set.remove(&15);
        set
    }

    #[test]
    fn test_iter_yields_each_element_once() {
        let set = filled();
        let iter = set.iter();
        assert_eq!(iter.len(), 6);

        let seen: Vec<u32> = iter.copied().collect();
        assert_eq!(seen.len(), 6);
        let unique: StdHashSet<u32> = seen.into_iter().collect();
        assert_eq!(unique, StdHashSet::from([3, 1, 4, 9, 2, 6]));
    }

    #[test]
    fn test_iter_of_empty_set() {
        let set = OpenHashSet::<u32, StdHasher<u32>>::new(3).unwrap();
        assert_eq!(set.iter().next(), None);
    }

    #[test]
    fn test_into_iter_moves_elements() {
        let set = filled();
        let borrowed: Vec<u32> = (&set).into_iter().copied().collect();
        let owned: Vec<u32> = set.into_iter().collect();
        assert_eq!(borrowed, owned);
    }
}
