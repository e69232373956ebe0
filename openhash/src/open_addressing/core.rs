//! Declares core types for [`OpenHashSet`].
use crate::hashing::hashers::StdHasher;
use crate::open_addressing::Probing;
use openhash_core::Hasher;
use std::fmt::{Debug, Formatter};

/// State of a single slot of the table.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Cell<T> {
    /// Never used since construction or the last [`clear`](openhash_core::HashSet::clear).
    #[default]
    Empty,
    /// Used to hold a value that has been removed since.
    ///
    /// Lookups continue past tombstones, insertions may reuse them.
    Tombstone,
    /// Holds a value.
    Occupied(T),
}

impl<T> Cell<T> {
    /// Returns the value if the cell holds one.
    #[inline]
    pub fn value(&self) -> Option<&T> {
        match self {
            Cell::Occupied(value) => Some(value),
            _ => None,
        }
    }
}

/// Runtime options of [`OpenHashSet`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Options {
    /// Seed passed to [`Hasher::from_seed`].
    pub seed: u64,
    /// Collision resolution scheme.
    pub probing: Probing,
}

/// Hash set with a fixed number of slots based on open addressing.
///
/// # Guarantees
///
/// - Never allocates after construction.
/// - Values equal under [`Eq`] are stored at most once.
/// - At most `capacity` slots are inspected per operation.
///
/// # Examples
///
/// ```rust
/// use openhash::{HashSet, OpenHashSet};
///
/// let mut fruits: OpenHashSet<&str> = OpenHashSet::new(10)?;
///
/// assert!(fruits.add("apple"));
/// assert!(fruits.add("banana"));
/// assert!(!fruits.add("apple"));
/// assert_eq!(fruits.len(), 2);
///
/// assert!(fruits.remove(&"banana"));
/// assert!(!fruits.contains(&"banana"));
/// assert!(fruits.contains(&"apple"));
/// # Ok::<(), openhash::OpenHashError>(())
/// ```
#[derive(Clone)]
pub struct OpenHashSet<T: Eq, H: Hasher<T> = StdHasher<T>> {
    pub(crate) hasher: H,
    pub(crate) probing: Probing,
    pub(crate) slots: Box<[Cell<T>]>,
    /// Number of occupied slots.
    pub(crate) len: usize,
    pub(crate) tombstones: usize,
}

impl<T, H> Debug for OpenHashSet<T, H>
where
    T: Eq + Debug,
    H: Hasher<T> + Debug,
{
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OpenHashSet")
            .field("hasher", &self.hasher)
            .field("probing", &self.probing)
            .field("len", &self.len)
            .field("tombstones", &self.tombstones)
            .field("slots", &self.slots)
            .finish()
    }
}

impl<T: Eq, H: Hasher<T>> OpenHashSet<T, H> {
    /// Number of slots currently marked as tombstones.
    #[inline]
    pub fn tombstones(&self) -> usize {
        self.tombstones
    }

    #[inline]
    pub fn probing(&self) -> Probing {
        self.probing
    }

    #[inline]
    pub fn hasher(&self) -> &H {
        &self.hasher
    }

    /// The raw slots in physical order.
    #[inline]
    pub fn slots(&self) -> &[Cell<T>] {
        &self.slots
    }
}
