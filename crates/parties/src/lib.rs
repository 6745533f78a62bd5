//! Parties domain module (suppliers).
//!
//! Supplier records as consumed by replenishment: who they are, where to
//! reach them and which categories they can provide. Record validation lives
//! here, implemented purely as deterministic domain logic (no IO, no HTTP,
//! no storage).

pub mod supplier;

pub use supplier::{ContactAddress, Supplier, SupplierId};
