//! Flutter-facing bindings for Quotebook core.

pub mod api;
