//! Core domain logic for Quotebook.
//! This crate is the single source of truth for quote collection invariants.

pub mod app;
pub mod config;
pub mod db;
pub mod logging;
pub mod model;
pub mod service;
pub mod store;
pub mod view;

pub use app::{QuoteApp, UiEvent};
pub use config::{ConfigOverrides, QuotebookConfig};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::quote::{default_quotes, CategoryFilter, Quote, QuoteValidationError};
pub use service::quote_service::{
    AddQuoteOutcome, ImportOutcome, PickOutcome, QuoteService, ServiceError, ServiceResult,
};
pub use service::transfer::ImportError;
pub use store::kv::{KeyValueStore, MemoryKeyValueStore, SqliteKeyValueStore};
pub use store::quote_store::{LastShown, QuoteStore};
pub use store::{StoreError, StoreResult};
pub use view::memory::MemoryView;
pub use view::{CategoryOption, Notice, NoticeKind, QuoteView};

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::{core_version, ping};

    #[test]
    fn ping_returns_pong() {
        assert_eq!(ping(), "pong");
    }

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
