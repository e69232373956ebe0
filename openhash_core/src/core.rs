/// Hasher for the specific data-type.
///
/// Differs from [`std::hash::Hasher`] in the way that it is specific for a certain type and is not
/// supposed to be universal.
///
/// This allows the implementations to be leaner in terms of memory footprint
/// (in case if they need to store any state) and to tailor the hash function to each target type
/// instead of streaming bytes through the pair [`std::hash::Hash`] and [`std::hash::Hasher`].
pub trait Hasher<T>
where
    Self: Default,
    T: Eq,
{
    /// State of the hasher instance.
    ///
    /// Usually contains seed-values of the hash function. But it's up to the implementation
    /// to decide what to store in it.
    type State: Clone + Default;

    /// Create a new hasher from the given `seed`.
    fn from_seed(seed: u64) -> Self;

    /// Create a new hasher from the given `state`.
    fn from_state(state: Self::State) -> Self;

    /// Get the state of the hasher.
    fn state(&self) -> &Self::State;

    /// Hash the given `value`.
    ///
    /// # Notes
    ///
    /// - The output spans the whole `u32` range, reducing it to a slot index is up to the table.
    /// - Equal values must produce equal hashes for the same state.
    fn hash(&self, value: &T) -> u32;
}

/// A hash set with a fixed number of slots.
///
/// Every operation that may fail does so by returning `false`, the set is never left in a
/// partially modified state.
pub trait HashSet<T: Eq, H: Hasher<T>> {
    /// Add `value` to the set.
    ///
    /// Returns `false` if an equal value is already present or if the set is full.
    fn add(&mut self, value: T) -> bool;

    /// Check whether a value equal to `value` is present.
    fn contains(&self, value: &T) -> bool;

    /// Remove the value equal to `value`.
    ///
    /// Returns `false` if there was no such value.
    fn remove(&mut self, value: &T) -> bool;

    /// Remove all the values.
    fn clear(&mut self);

    /// Get the number of elements in the set.
    fn len(&self) -> usize;

    /// Check if the set is empty.
    fn is_empty(&self) -> bool;

    /// Get the maximum number of elements the set can hold.
    fn capacity(&self) -> usize;

    /// Get the load factor of the set.
    fn load_factor(&self) -> f64;
}
