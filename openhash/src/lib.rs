//! Fixed-capacity hash sets based on open addressing.
//!
//! The table never grows: it is created with a number of slots and rejects insertions once every
//! slot is taken. Deleted slots are marked with tombstones so that probe sequences of other
//! values passing through them stay intact.
pub mod hashing;
pub mod open_addressing;
pub use open_addressing::*;
pub use openhash_core::{error, HashSet, Hasher, OpenHashError};
