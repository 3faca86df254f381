//! Quote-specific view over durable and session key-value stores.
//!
//! # Responsibility
//! - Load/save the quote collection and the last selected category.
//! - Load/save the last shown position together with its filter.
//!
//! # Invariants
//! - A missing, empty or unreadable `quotes` entry loads as the built-in
//!   defaults; it never fails startup.
//! - A last-shown index is only meaningful for the filter it was saved with.

use super::kv::KeyValueStore;
use super::StoreResult;
use crate::model::quote::{default_quotes, CategoryFilter, Quote};
use log::{debug, warn};

pub const QUOTES_KEY: &str = "quotes";
pub const LAST_CATEGORY_KEY: &str = "lastCategory";
pub const LAST_QUOTE_INDEX_KEY: &str = "lastQuoteIndex";
pub const LAST_QUOTE_FILTER_KEY: &str = "lastQuoteFilter";

/// Position of the most recently shown quote inside a filtered view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LastShown {
    pub index: usize,
    pub filter: CategoryFilter,
}

/// Durable + session storage for one quote collection.
pub struct QuoteStore<D: KeyValueStore, S: KeyValueStore> {
    durable: D,
    session: S,
}

impl<D: KeyValueStore, S: KeyValueStore> QuoteStore<D, S> {
    pub fn new(durable: D, session: S) -> Self {
        Self { durable, session }
    }

    pub fn durable(&self) -> &D {
        &self.durable
    }

    pub fn session(&self) -> &S {
        &self.session
    }

    /// Loads the stored collection, falling back to the built-in defaults.
    ///
    /// # Errors
    /// - Returns storage transport errors. Malformed stored JSON is not an
    ///   error; it is logged and replaced by defaults.
    pub fn load_quotes(&self) -> StoreResult<Vec<Quote>> {
        let Some(raw) = self.durable.get(QUOTES_KEY)? else {
            debug!("event=quotes_load module=store status=ok source=defaults reason=missing");
            return Ok(default_quotes());
        };

        match serde_json::from_str::<Vec<Quote>>(&raw) {
            Ok(quotes) if quotes.is_empty() => {
                debug!("event=quotes_load module=store status=ok source=defaults reason=empty");
                Ok(default_quotes())
            }
            Ok(quotes) => {
                debug!(
                    "event=quotes_load module=store status=ok source=durable count={}",
                    quotes.len()
                );
                Ok(quotes)
            }
            Err(err) => {
                warn!(
                    "event=quotes_load module=store status=fallback source=defaults error_code=stored_quotes_malformed error={}",
                    err
                );
                Ok(default_quotes())
            }
        }
    }

    /// Overwrites the stored collection with `quotes`.
    pub fn save_quotes(&mut self, quotes: &[Quote]) -> StoreResult<()> {
        let serialized = serde_json::to_string(quotes)?;
        self.durable.set(QUOTES_KEY, &serialized)
    }

    pub fn load_last_category(&self) -> StoreResult<Option<CategoryFilter>> {
        Ok(self
            .durable
            .get(LAST_CATEGORY_KEY)?
            .filter(|value| !value.is_empty())
            .map(|value| CategoryFilter::from_value(&value)))
    }

    pub fn save_last_category(&mut self, filter: &CategoryFilter) -> StoreResult<()> {
        self.durable.set(LAST_CATEGORY_KEY, filter.as_value())
    }

    /// Reads the last shown position. A non-numeric index reads as absent.
    pub fn load_last_shown(&self) -> StoreResult<Option<LastShown>> {
        let Some(raw_index) = self.session.get(LAST_QUOTE_INDEX_KEY)? else {
            return Ok(None);
        };
        let Ok(index) = raw_index.trim().parse::<usize>() else {
            return Ok(None);
        };
        let filter = self
            .session
            .get(LAST_QUOTE_FILTER_KEY)?
            .map(|value| CategoryFilter::from_value(&value))
            .unwrap_or_default();
        Ok(Some(LastShown { index, filter }))
    }

    pub fn save_last_shown(&mut self, last: &LastShown) -> StoreResult<()> {
        self.session
            .set(LAST_QUOTE_INDEX_KEY, &last.index.to_string())?;
        self.session
            .set(LAST_QUOTE_FILTER_KEY, last.filter.as_value())
    }
}

#[cfg(test)]
mod tests {
    use super::{LastShown, QuoteStore, LAST_QUOTE_INDEX_KEY, QUOTES_KEY};
    use crate::model::quote::{default_quotes, CategoryFilter, Quote};
    use crate::store::kv::{KeyValueStore, MemoryKeyValueStore};

    fn store_with_quotes(raw: &str) -> QuoteStore<MemoryKeyValueStore, MemoryKeyValueStore> {
        let mut durable = MemoryKeyValueStore::new();
        durable.set(QUOTES_KEY, raw).unwrap();
        QuoteStore::new(durable, MemoryKeyValueStore::new())
    }

    #[test]
    fn missing_or_empty_quotes_load_defaults() {
        let store = QuoteStore::new(MemoryKeyValueStore::new(), MemoryKeyValueStore::new());
        assert_eq!(store.load_quotes().unwrap(), default_quotes());
        assert_eq!(store_with_quotes("[]").load_quotes().unwrap(), default_quotes());
    }

    #[test]
    fn malformed_quotes_fall_back_to_defaults() {
        assert_eq!(
            store_with_quotes("{not json").load_quotes().unwrap(),
            default_quotes()
        );
        assert_eq!(
            store_with_quotes(r#"{"text":"x"}"#).load_quotes().unwrap(),
            default_quotes()
        );
    }

    #[test]
    fn saved_quotes_load_back_in_order() {
        let mut store = QuoteStore::new(MemoryKeyValueStore::new(), MemoryKeyValueStore::new());
        let quotes = vec![Quote::new("b", "two"), Quote::new("a", "one")];
        store.save_quotes(&quotes).unwrap();
        assert_eq!(store.load_quotes().unwrap(), quotes);
    }

    #[test]
    fn last_shown_keeps_filter_and_ignores_garbage_index() {
        let mut store = QuoteStore::new(MemoryKeyValueStore::new(), MemoryKeyValueStore::new());
        assert_eq!(store.load_last_shown().unwrap(), None);

        let last = LastShown {
            index: 1,
            filter: CategoryFilter::from_value("Life"),
        };
        store.save_last_shown(&last).unwrap();
        assert_eq!(store.load_last_shown().unwrap(), Some(last));

        let mut session = MemoryKeyValueStore::new();
        session.set(LAST_QUOTE_INDEX_KEY, "abc").unwrap();
        let store = QuoteStore::new(MemoryKeyValueStore::new(), session);
        assert_eq!(store.load_last_shown().unwrap(), None);
    }

    #[test]
    fn last_category_roundtrips_all() {
        let mut store = QuoteStore::new(MemoryKeyValueStore::new(), MemoryKeyValueStore::new());
        assert_eq!(store.load_last_category().unwrap(), None);
        store.save_last_category(&CategoryFilter::All).unwrap();
        assert_eq!(
            store.durable().peek("lastCategory"),
            Some("all")
        );
        assert_eq!(store.load_last_category().unwrap(), Some(CategoryFilter::All));
    }
}
