//! [`openhash_core::Hasher`] implementations.
//!
//! # Notes
//!
//! - Every hasher accepts any [`Hash`](std::hash::Hash) element and keys its streaming state
//!   with the seed, so two sets with different seeds lay out the same elements differently.
//! - Hashers produce full-width 32-bit hashes, the table reduces them to slot indices.
pub mod standard;
pub use standard::*;
#[cfg(feature = "xxh3")]
pub mod xxh3;
#[cfg(feature = "xxh3")]
pub use xxh3::*;
