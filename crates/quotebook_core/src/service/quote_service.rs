//! Quote collection use-case service.
//!
//! # Responsibility
//! - Own the in-memory collection and the active category filter.
//! - Implement pick/filter/add/import/export against an injected view.
//!
//! # Invariants
//! - The collection only grows by append.
//! - Every mutation is followed by exactly one `persist()` before the
//!   operation returns.
//! - User-level failures (validation, import rejection, empty filter) are
//!   surfaced through the view, never as `Err`.

use crate::model::quote::{CategoryFilter, Quote, QuoteValidationError};
use crate::service::category_index::{category_options, resolve_selection, unique_categories};
use crate::service::picker::{filtered_view, pick_index, NO_QUOTES_MESSAGE};
use crate::service::transfer::{
    export_quotes_json, parse_import, ImportError, EXPORT_FILE_NAME, EXPORT_MIME_TYPE,
};
use crate::store::kv::KeyValueStore;
use crate::store::quote_store::{LastShown, QuoteStore};
use crate::store::StoreError;
use crate::view::{ExportFile, Notice, QuoteView};
use log::{info, warn};
use rand::Rng;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub const ADD_VALIDATION_MESSAGE: &str = "Please enter both quote text and category.";
pub const RESERVED_CATEGORY_MESSAGE: &str = "\"all\" cannot be used as a quote category.";
pub const IMPORT_SUCCESS_MESSAGE: &str = "Quotes imported successfully!";

pub type ServiceResult<T> = Result<T, ServiceError>;

/// Service error for quote use-cases.
#[derive(Debug)]
pub enum ServiceError {
    /// Persistence-layer failure.
    Store(StoreError),
    /// Export payload could not be produced.
    Export(serde_json::Error),
}

impl Display for ServiceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Store(err) => write!(f, "{err}"),
            Self::Export(err) => write!(f, "failed to export quotes: {err}"),
        }
    }
}

impl Error for ServiceError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Store(err) => Some(err),
            Self::Export(err) => Some(err),
        }
    }
}

impl From<StoreError> for ServiceError {
    fn from(value: StoreError) -> Self {
        Self::Store(value)
    }
}

/// Result of one random pick.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PickOutcome {
    /// `index` is the position inside the filtered view.
    Shown { index: usize, quote: Quote },
    /// Filtered view was empty; the empty-state message was rendered.
    Empty,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AddQuoteOutcome {
    Added(Quote),
    Rejected(QuoteValidationError),
}

#[derive(Debug)]
pub enum ImportOutcome {
    Imported { count: usize },
    Rejected(ImportError),
}

/// Collection owner wired to durable/session storage and a random source.
pub struct QuoteService<D: KeyValueStore, S: KeyValueStore, R: Rng> {
    store: QuoteStore<D, S>,
    quotes: Vec<Quote>,
    selected: CategoryFilter,
    rng: R,
}

impl<D: KeyValueStore, S: KeyValueStore, R: Rng> QuoteService<D, S, R> {
    /// Loads the collection and the last selected category from `store`.
    ///
    /// The restored selection is not validated here; `populate_categories`
    /// does that against the loaded collection.
    pub fn load(store: QuoteStore<D, S>, rng: R) -> ServiceResult<Self> {
        let quotes = store.load_quotes()?;
        let selected = store.load_last_category()?.unwrap_or_default();
        info!(
            "event=service_load module=service status=ok count={} restored_filter={}",
            quotes.len(),
            !matches!(selected, CategoryFilter::All)
        );
        Ok(Self {
            store,
            quotes,
            selected,
            rng,
        })
    }

    pub fn quotes(&self) -> &[Quote] {
        &self.quotes
    }

    pub fn selected(&self) -> &CategoryFilter {
        &self.selected
    }

    pub fn store(&self) -> &QuoteStore<D, S> {
        &self.store
    }

    /// Writes the full collection through to durable storage.
    pub fn persist(&mut self) -> ServiceResult<()> {
        self.store.save_quotes(&self.quotes)?;
        info!(
            "event=quotes_persist module=service status=ok count={}",
            self.quotes.len()
        );
        Ok(())
    }

    /// Renders `quote` into the view.
    pub fn display_quote<V: QuoteView + ?Sized>(&self, view: &mut V, quote: &Quote) {
        view.render_quote(quote);
    }

    /// Picks a random quote under the active filter and renders it.
    ///
    /// Empty filtered views render the empty-state message and leave session
    /// state untouched.
    pub fn show_random_quote<V: QuoteView + ?Sized>(
        &mut self,
        view: &mut V,
    ) -> ServiceResult<PickOutcome> {
        let candidates = filtered_view(&self.quotes, &self.selected);
        let Some(index) = pick_index(&mut self.rng, candidates.len()) else {
            view.render_message(NO_QUOTES_MESSAGE);
            return Ok(PickOutcome::Empty);
        };

        let quote = candidates[index].clone();
        self.display_quote(view, &quote);
        self.store.save_last_shown(&LastShown {
            index,
            filter: self.selected.clone(),
        })?;
        Ok(PickOutcome::Shown { index, quote })
    }

    /// Re-displays the quote shown earlier in this session when it was picked
    /// under the active filter and is still in range; otherwise picks anew.
    pub fn load_last_quote<V: QuoteView + ?Sized>(
        &mut self,
        view: &mut V,
    ) -> ServiceResult<PickOutcome> {
        if let Some(last) = self.store.load_last_shown()? {
            if last.filter == self.selected {
                let candidates = filtered_view(&self.quotes, &self.selected);
                if let Some(quote) = candidates.get(last.index) {
                    let quote = (*quote).clone();
                    self.display_quote(view, &quote);
                    return Ok(PickOutcome::Shown {
                        index: last.index,
                        quote,
                    });
                }
            }
        }
        self.show_random_quote(view)
    }

    /// Rebuilds the category selector and persists the resulting selection.
    pub fn populate_categories<V: QuoteView + ?Sized>(
        &mut self,
        view: &mut V,
    ) -> ServiceResult<()> {
        let categories = unique_categories(&self.quotes);
        self.selected = resolve_selection(&categories, &self.selected);
        view.render_category_options(&category_options(&categories), &self.selected);
        self.store.save_last_category(&self.selected)?;
        Ok(())
    }

    /// Applies a new filter selection and shows a quote under it.
    pub fn filter_quotes<V: QuoteView + ?Sized>(
        &mut self,
        view: &mut V,
        value: &str,
    ) -> ServiceResult<PickOutcome> {
        self.selected = CategoryFilter::from_value(value);
        let categories = unique_categories(&self.quotes);
        view.render_category_options(&category_options(&categories), &self.selected);
        let outcome = self.show_random_quote(view)?;
        self.store.save_last_category(&self.selected)?;
        Ok(outcome)
    }

    /// Adds the quote typed into the view's form.
    pub fn add_quote<V: QuoteView + ?Sized>(
        &mut self,
        view: &mut V,
    ) -> ServiceResult<AddQuoteOutcome> {
        let input = view.read_add_form();
        let quote = match Quote::from_input(&input.text, &input.category) {
            Ok(quote) => quote,
            Err(err) => {
                warn!(
                    "event=quote_add module=service status=rejected error_code=validation error={}",
                    err
                );
                let message = match err {
                    QuoteValidationError::ReservedCategory => RESERVED_CATEGORY_MESSAGE,
                    QuoteValidationError::EmptyText | QuoteValidationError::EmptyCategory => {
                        ADD_VALIDATION_MESSAGE
                    }
                };
                view.alert(Notice::error(message));
                return Ok(AddQuoteOutcome::Rejected(err));
            }
        };

        self.quotes.push(quote.clone());
        self.persist()?;
        self.populate_categories(view)?;
        view.clear_add_form();
        self.display_quote(view, &quote);
        info!(
            "event=quote_add module=service status=ok count={}",
            self.quotes.len()
        );
        Ok(AddQuoteOutcome::Added(quote))
    }

    /// Hands the pretty-printed collection to the view as `quotes.json`.
    pub fn export_quotes_as_json<V: QuoteView + ?Sized>(&self, view: &mut V) -> ServiceResult<()> {
        let contents = export_quotes_json(&self.quotes).map_err(ServiceError::Export)?;
        view.offer_download(&ExportFile {
            file_name: EXPORT_FILE_NAME,
            mime_type: EXPORT_MIME_TYPE,
            contents: contents.as_str(),
        });
        info!(
            "event=quotes_export module=service status=ok count={} bytes={}",
            self.quotes.len(),
            contents.len()
        );
        Ok(())
    }

    /// Appends the quotes contained in an uploaded file.
    pub fn import_from_json<V: QuoteView + ?Sized>(
        &mut self,
        view: &mut V,
        contents: &str,
    ) -> ServiceResult<ImportOutcome> {
        let imported = match parse_import(contents) {
            Ok(imported) => imported,
            Err(err) => {
                warn!(
                    "event=quotes_import module=service status=rejected error_code={} error={}",
                    err.code(),
                    err
                );
                view.alert(Notice::error(err.user_message()));
                return Ok(ImportOutcome::Rejected(err));
            }
        };

        let count = imported.len();
        self.quotes.extend(imported);
        self.persist()?;
        self.populate_categories(view)?;
        view.alert(Notice::info(IMPORT_SUCCESS_MESSAGE));
        info!(
            "event=quotes_import module=service status=ok imported={} count={}",
            count,
            self.quotes.len()
        );
        Ok(ImportOutcome::Imported { count })
    }
}
