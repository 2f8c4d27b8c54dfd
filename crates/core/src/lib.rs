//! `stockroom-core` — domain foundation building blocks.
//!
//! This crate contains **pure domain** primitives (no IO, no logging setup).

pub mod error;
pub mod name;

pub use error::{DomainError, DomainResult};
pub use name::ItemName;
