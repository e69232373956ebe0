//! Implements [`HashSet`] for [`OpenHashSet`].
use crate::open_addressing::probe::ProbeSequence;
use crate::open_addressing::{Cell, OpenHashSet};
use log::{debug, trace};
use openhash_core::{HashSet, Hasher};

/// Outcome of scanning a probe sequence on behalf of an insertion.
enum Slot {
    /// An equal value is stored at the index.
    Found(usize),
    /// The value is absent and may be stored at the index.
    Vacant(usize),
    /// Every probed slot is occupied by a different value.
    Exhausted,
}

impl<T: Eq, H: Hasher<T>> OpenHashSet<T, H> {
    #[inline]
    fn probe(&self, value: &T) -> ProbeSequence {
        ProbeSequence::new(self.hasher.hash(value), self.slots.len(), self.probing)
    }

    /// Returns the index of the slot holding a value equal to `value`.
    fn find(&self, value: &T) -> Option<usize> {
        for idx in self.probe(value) {
            match &self.slots[idx] {
                Cell::Empty => return None,
                Cell::Occupied(stored) if stored == value => return Some(idx),
                Cell::Occupied(_) | Cell::Tombstone => {}
            }
        }
        None
    }

    /// Scans the probe sequence of `value` for a place to store it.
    ///
    /// Prefers the first tombstone met before the terminating empty slot. A scan that runs out of
    /// attempts without meeting an empty slot gives up, even if it passed tombstones.
    fn find_slot(&self, value: &T) -> Slot {
        let mut first_tombstone = None;
        for idx in self.probe(value) {
            match &self.slots[idx] {
                Cell::Empty => return Slot::Vacant(first_tombstone.unwrap_or(idx)),
                Cell::Tombstone => {
                    first_tombstone.get_or_insert(idx);
                }
                Cell::Occupied(stored) if stored == value => return Slot::Found(idx),
                Cell::Occupied(_) => {}
            }
        }
        Slot::Exhausted
    }

    /// Returns the stored value equal to `value`.
    pub fn get(&self, value: &T) -> Option<&T> {
        self.find(value).and_then(|idx| self.slots[idx].value())
    }

    /// Removes the value equal to `value` and returns it.
    ///
    /// The slot becomes a tombstone so that probe sequences passing through it stay intact.
    pub fn take(&mut self, value: &T) -> Option<T> {
        let idx = self.find(value)?;
        match std::mem::replace(&mut self.slots[idx], Cell::Tombstone) {
            Cell::Occupied(stored) => {
                self.len -= 1;
                self.tombstones += 1;
                Some(stored)
            }
            // `find` only reports occupied slots.
            other => {
                self.slots[idx] = other;
                None
            }
        }
    }

    /// Returns a snapshot of the elements in physical slot order.
    pub fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.iter().cloned().collect()
    }
}

impl<T: Eq, H: Hasher<T>> HashSet<T, H> for OpenHashSet<T, H> {
    fn add(&mut self, value: T) -> bool {
        if self.len == self.slots.len() {
            trace!("Rejected insertion, all {} slots are taken", self.slots.len());
            return false;
        }

        let idx = match self.find_slot(&value) {
            Slot::Vacant(idx) => idx,
            Slot::Found(idx) => {
                trace!("Rejected insertion, an equal value is stored at {}", idx);
                return false;
            }
            Slot::Exhausted => {
                trace!(
                    "Rejected insertion, no empty slot among {} probed, {} tombstones",
                    self.slots.len(),
                    self.tombstones
                );
                return false;
            }
        };

        if let Cell::Tombstone = self.slots[idx] {
            self.tombstones -= 1;
        }
        self.slots[idx] = Cell::Occupied(value);
        self.len += 1;
        true
    }

    fn contains(&self, value: &T) -> bool {
        self.find(value).is_some()
    }

    fn remove(&mut self, value: &T) -> bool {
        self.take(value).is_some()
    }

    fn clear(&mut self) {
        debug!(
            "Clearing {} values and {} tombstones",
            self.len, self.tombstones
        );
        self.slots.iter_mut().for_each(|cell| *cell = Cell::Empty);
        self.len = 0;
        self.tombstones = 0;
    }

    fn len(&self) -> usize {
        self.len
    }

    fn is_empty(&self) -> bool {
        self.len == 0
    }

    fn capacity(&self) -> usize {
        self.slots.len()
    }

    fn load_factor(&self) -> f64 {
        self.len as f64 / self.slots.len() as f64
    }
}
