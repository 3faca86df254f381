//! Application wiring: startup sequence and UI event dispatch.
//!
//! # Responsibility
//! - Run the startup sequence in a fixed order.
//! - Route discrete UI events to service operations.
//!
//! # Invariants
//! - Startup restores `lastCategory` before the category index is rebuilt,
//!   so a still-valid saved selection survives restarts.
//! - All mutation goes through `&mut self`; events are applied one at a time.

use crate::model::quote::CategoryFilter;
use crate::service::quote_service::{QuoteService, ServiceResult};
use crate::store::kv::KeyValueStore;
use crate::store::quote_store::QuoteStore;
use crate::view::QuoteView;
use log::{debug, info};
use rand::Rng;

/// User-triggered events.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiEvent {
    /// "Show new quote" trigger.
    NewQuote,
    /// Category selector changed to the given value.
    FilterChanged(String),
    /// Add-quote submit control.
    AddQuote,
    /// Export trigger.
    Export,
    /// File chosen for import; `None` when the selection was cancelled.
    ImportFile(Option<String>),
}

impl UiEvent {
    fn name(&self) -> &'static str {
        match self {
            Self::NewQuote => "new_quote",
            Self::FilterChanged(_) => "filter_changed",
            Self::AddQuote => "add_quote",
            Self::Export => "export",
            Self::ImportFile(_) => "import_file",
        }
    }
}

/// One running quote widget: service state plus the view it renders into.
pub struct QuoteApp<D: KeyValueStore, S: KeyValueStore, V: QuoteView, R: Rng> {
    service: QuoteService<D, S, R>,
    view: V,
}

impl<D: KeyValueStore, S: KeyValueStore, V: QuoteView, R: Rng> QuoteApp<D, S, V, R> {
    /// Loads state and renders the initial screen.
    ///
    /// Order: load quotes and saved filter, mount the add form, rebuild the
    /// category selector, then restore or pick the displayed quote.
    pub fn start(durable: D, session: S, mut view: V, rng: R) -> ServiceResult<Self> {
        let mut service = QuoteService::load(QuoteStore::new(durable, session), rng)?;
        view.mount_add_form();
        service.populate_categories(&mut view)?;
        service.load_last_quote(&mut view)?;
        info!(
            "event=app_ready module=app status=ok count={} filter_all={}",
            service.quotes().len(),
            matches!(service.selected(), CategoryFilter::All)
        );
        Ok(Self { service, view })
    }

    /// Applies one UI event.
    pub fn dispatch(&mut self, event: UiEvent) -> ServiceResult<()> {
        debug!("event=ui_event module=app name={}", event.name());
        match event {
            UiEvent::NewQuote => {
                self.service.show_random_quote(&mut self.view)?;
            }
            UiEvent::FilterChanged(value) => {
                self.service.filter_quotes(&mut self.view, &value)?;
            }
            UiEvent::AddQuote => {
                self.service.add_quote(&mut self.view)?;
            }
            UiEvent::Export => {
                self.service.export_quotes_as_json(&mut self.view)?;
            }
            UiEvent::ImportFile(Some(contents)) => {
                self.service.import_from_json(&mut self.view, &contents)?;
            }
            UiEvent::ImportFile(None) => {}
        }
        Ok(())
    }

    pub fn service(&self) -> &QuoteService<D, S, R> {
        &self.service
    }

    pub fn service_mut(&mut self) -> &mut QuoteService<D, S, R> {
        &mut self.service
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    pub fn view_mut(&mut self) -> &mut V {
        &mut self.view
    }
}
