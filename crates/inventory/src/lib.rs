//! Inventory aging domain module.
//!
//! This crate contains the full rule set for daily item aging, implemented
//! purely as deterministic domain logic (no IO, no HTTP, no storage).

pub mod category;
pub mod engine;
pub mod item;

pub use category::Category;
pub use engine::AgingEngine;
pub use item::Item;
