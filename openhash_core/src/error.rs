//! Error definitions.
use thiserror::Error;

/// Project-wise error type.
///
/// Only construction can fail. Running out of capacity, inserting a duplicate or removing an
/// absent element are ordinary outcomes reported through return values.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum OpenHashError {
    /// A table needs at least one slot, otherwise there is nowhere to probe and the secondary
    /// hash has no modulus.
    #[error("Capacity must be greater than zero.")]
    ZeroCapacity,
}
