//! Testing utilities shared by the `openhash` crates.
#![allow(dead_code)]

pub mod stat;
pub use stat::*;

pub mod generate;
pub use generate::*;

pub mod set;
pub use set::*;

pub mod hasher;
pub use hasher::*;

pub use openhash_core::{HashSet, Hasher};
