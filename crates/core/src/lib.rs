//! `gildedrose-core` — domain foundation building blocks.
//!
//! This crate contains **pure domain** primitives (no infrastructure concerns).

pub mod error;
pub mod quality;
pub mod sell_in;
pub mod value_object;

pub use error::{DomainError, DomainResult};
pub use quality::Quality;
pub use sell_in::SellIn;
pub use value_object::ValueObject;
