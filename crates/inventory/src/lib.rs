//! Inventory domain module.
//!
//! Stock items and the categories they are filed under. Everything here is
//! read-only, deterministic domain data (no IO, no HTTP, no storage); stock
//! movements are owned by inventory management elsewhere.

pub mod category;
pub mod item;

pub use category::{Category, CategoryCode};
pub use item::{StockItem, StockItemId};
