//! FFI use-case API for Flutter-facing calls.
//!
//! # Responsibility
//! - Expose the quote widget's events as sync functions to Dart via FRB.
//! - Return a full screen snapshot after every call so Dart stays stateless.
//!
//! # Invariants
//! - Exported functions must not panic across FFI boundary.
//! - One `QuoteApp` per process; calls are serialized through a mutex.

use log::error;
use quotebook_core::db::open_db;
use quotebook_core::{
    core_version as core_version_inner, init_logging as init_logging_inner, ping as ping_inner,
    ConfigOverrides, MemoryKeyValueStore, MemoryView, NoticeKind, QuoteApp, QuotebookConfig,
    SqliteKeyValueStore, UiEvent,
};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::path::PathBuf;
use std::sync::{Mutex, OnceLock};

type FfiQuoteApp = QuoteApp<SqliteKeyValueStore, MemoryKeyValueStore, MemoryView, StdRng>;

static QUOTE_DB_PATH: OnceLock<PathBuf> = OnceLock::new();
static QUOTE_APP: Mutex<Option<FfiQuoteApp>> = Mutex::new(None);

/// Minimal health-check API for FRB smoke integration.
///
/// # FFI contract
/// - Sync call, non-blocking.
/// - Never throws; always returns a UTF-8 string.
#[flutter_rust_bridge::frb(sync)]
pub fn ping() -> String {
    ping_inner().to_owned()
}

/// Expose core crate version through FFI.
#[flutter_rust_bridge::frb(sync)]
pub fn core_version() -> String {
    core_version_inner().to_owned()
}

/// Initializes Rust core logging once per process.
///
/// Input semantics:
/// - `level`: one of `trace|debug|info|warn|error` (case-insensitive).
/// - `log_dir`: absolute directory path where rolling logs are written.
///
/// # FFI contract
/// - Safe to call repeatedly with the same `level + log_dir` (idempotent).
/// - Never panics; returns empty string on success and error message on failure.
#[flutter_rust_bridge::frb(sync)]
pub fn init_logging(level: String, log_dir: String) -> String {
    match init_logging_inner(level.as_str(), log_dir.as_str()) {
        Ok(()) => String::new(),
        Err(err) => err,
    }
}

/// One selector entry as shown by Dart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuoteOption {
    pub value: String,
    pub label: String,
}

/// Alert raised by the last call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuoteNotice {
    /// `info` or `error`.
    pub kind: String,
    pub message: String,
}

/// Screen state after one call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuotesSnapshot {
    /// Whether the call completed without a storage failure.
    pub ok: bool,
    /// Display region lines: `["\"text\"", "Category: c"]` or one message.
    pub display: Vec<String>,
    pub options: Vec<QuoteOption>,
    /// Active filter value (`all` or a category).
    pub selected: String,
    /// Alerts raised during this call, in order.
    pub notices: Vec<QuoteNotice>,
    /// `quotes.json` payload, set only by `quotes_export`.
    pub export_json: Option<String>,
    /// Collection size after the call.
    pub quote_count: u32,
    /// Diagnostic message for failed calls; empty on success.
    pub message: String,
}

impl QuotesSnapshot {
    fn failure(message: impl Into<String>) -> Self {
        Self {
            ok: false,
            display: Vec::new(),
            options: Vec::new(),
            selected: String::new(),
            notices: Vec::new(),
            export_json: None,
            quote_count: 0,
            message: message.into(),
        }
    }
}

/// Starts the widget (load, mount form, categories, restore last quote).
///
/// # FFI contract
/// - Idempotent: a second call returns the current screen without reloading.
/// - Never panics.
#[flutter_rust_bridge::frb(sync)]
pub fn quotes_start() -> QuotesSnapshot {
    with_app("quotes_start", |_| Ok(()))
}

/// Shows a new random quote under the active filter.
#[flutter_rust_bridge::frb(sync)]
pub fn quotes_next() -> QuotesSnapshot {
    with_app("quotes_next", |app| app.dispatch(UiEvent::NewQuote))
}

/// Changes the category filter (`all` or an exact category name).
#[flutter_rust_bridge::frb(sync)]
pub fn quotes_filter(category: String) -> QuotesSnapshot {
    with_app("quotes_filter", |app| {
        app.dispatch(UiEvent::FilterChanged(category))
    })
}

/// Submits the add-quote form with the given raw field values.
///
/// Validation failures are reported as an `error` notice with `ok = true`.
#[flutter_rust_bridge::frb(sync)]
pub fn quotes_add(text: String, category: String) -> QuotesSnapshot {
    with_app("quotes_add", |app| {
        app.view_mut().fill_add_form(text, category);
        app.dispatch(UiEvent::AddQuote)
    })
}

/// Produces the `quotes.json` payload in `export_json`.
#[flutter_rust_bridge::frb(sync)]
pub fn quotes_export() -> QuotesSnapshot {
    with_app("quotes_export", |app| app.dispatch(UiEvent::Export))
}

/// Imports the text of a user-selected file.
#[flutter_rust_bridge::frb(sync)]
pub fn quotes_import(contents: String) -> QuotesSnapshot {
    with_app("quotes_import", |app| {
        app.dispatch(UiEvent::ImportFile(Some(contents)))
    })
}

fn resolve_quote_db_path() -> PathBuf {
    QUOTE_DB_PATH
        .get_or_init(|| QuotebookConfig::resolve(ConfigOverrides::default()).db_path)
        .clone()
}

fn start_app() -> Result<FfiQuoteApp, String> {
    let db_path = resolve_quote_db_path();
    let conn = open_db(&db_path).map_err(|err| format!("quote DB open failed: {err}"))?;
    QuoteApp::start(
        SqliteKeyValueStore::new(conn),
        MemoryKeyValueStore::new(),
        MemoryView::new(),
        StdRng::from_entropy(),
    )
    .map_err(|err| format!("quote app start failed: {err}"))
}

fn with_app(
    operation: &str,
    f: impl FnOnce(&mut FfiQuoteApp) -> quotebook_core::ServiceResult<()>,
) -> QuotesSnapshot {
    // Poisoned: an earlier event panicked; the collection itself stays usable.
    let mut guard = QUOTE_APP
        .lock()
        .unwrap_or_else(|poisoned| poisoned.into_inner());

    if guard.is_none() {
        match start_app() {
            Ok(app) => *guard = Some(app),
            Err(err) => {
                error!("event=ffi_call module=ffi op={operation} status=error error={err}");
                return QuotesSnapshot::failure(format!("{operation} failed: {err}"));
            }
        }
    }
    let Some(app) = guard.as_mut() else {
        return QuotesSnapshot::failure(format!("{operation} failed: app not started"));
    };

    let outcome = f(app);
    let mut snapshot = snapshot_of(app);
    if let Err(err) = outcome {
        error!("event=ffi_call module=ffi op={operation} status=error error={err}");
        snapshot.ok = false;
        snapshot.message = format!("{operation} failed: {err}");
    }
    snapshot
}

fn snapshot_of(app: &mut FfiQuoteApp) -> QuotesSnapshot {
    let selected = app.service().selected().as_value().to_string();
    let quote_count = u32::try_from(app.service().quotes().len()).unwrap_or(u32::MAX);
    let view = app.view_mut();
    let notices = view
        .take_notices()
        .into_iter()
        .map(|notice| QuoteNotice {
            kind: notice_kind_label(notice.kind).to_string(),
            message: notice.message,
        })
        .collect();
    let export_json = view
        .take_downloads()
        .pop()
        .map(|download| download.contents);

    QuotesSnapshot {
        ok: true,
        display: view.display().to_vec(),
        options: view
            .options()
            .iter()
            .map(|option| QuoteOption {
                value: option.value.clone(),
                label: option.label.clone(),
            })
            .collect(),
        selected,
        notices,
        export_json,
        quote_count,
        message: String::new(),
    }
}

fn notice_kind_label(kind: NoticeKind) -> &'static str {
    match kind {
        NoticeKind::Info => "info",
        NoticeKind::Error => "error",
    }
}
