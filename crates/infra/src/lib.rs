//! Infrastructure layer: stores, delivery providers, dispatch, orchestration, config.

pub mod config;
pub mod delivery;
pub mod dispatch;
pub mod reorder;
pub mod store;
