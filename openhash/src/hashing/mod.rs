//! [`Hasher`](openhash_core::Hasher) implementations for the elements of the table.
pub mod common;
pub mod flawed;
pub mod hashers;
