//! HTTP API: trigger surface for reorder notification runs.

pub mod app;
