//! `restock-replenishment`
//!
//! **Responsibility:** the pure part of the restock quote-request pipeline.
//!
//! - [`pending`]: group below-threshold items by category (first-seen order).
//! - [`matching`]: intersect each supplier's declared categories with the
//!   pending ones (supplier's own order).
//! - [`compose`]: render the quote-request message for one supplier.
//! - [`notification`]: the summary record of a message that was sent.
//!
//! Nothing here performs IO: reading stock, reading suppliers and delivering
//! messages are the caller's business (see `restock-infra`).

pub mod compose;
pub mod matching;
pub mod notification;
pub mod pending;

pub use compose::{compose, format_item_line, QuoteRequest, QUOTE_REQUEST_SUBJECT};
pub use matching::{match_supplier, match_suppliers, MatchedSection, SupplierMatch};
pub use notification::{CategorySection, SupplierNotification};
pub use pending::{PendingGroup, PendingGroups};
