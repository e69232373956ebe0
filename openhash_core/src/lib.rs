//! Core trait and type declarations shared by the `openhash` crates.
mod core;
pub use self::core::*;
pub mod error;
pub use error::OpenHashError;
