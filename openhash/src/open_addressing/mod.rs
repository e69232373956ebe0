//! Fixed-capacity hash set with open addressing and tombstone deletion.
mod core;
pub use self::core::*;
mod ctors;
mod hash_set;
mod iter;
pub use iter::*;
mod probe;
pub use probe::Probing;
mod traits;
