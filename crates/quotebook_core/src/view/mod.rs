//! Presentation boundary.
//!
//! # Responsibility
//! - Define the `QuoteView` contract every front end implements.
//! - Keep pick/filter/add/import/export logic free of UI toolkit types.
//!
//! # Invariants
//! - `render_quote` and `render_message` fully replace the display region.
//! - Alerts are fire-and-forget; the view never feeds a decision back.

pub mod memory;

use crate::model::quote::{CategoryFilter, Quote};

/// One entry of the category selector.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryOption {
    /// Filter value (`"all"` or a category name).
    pub value: String,
    /// Human-readable label.
    pub label: String,
}

/// Severity of a user-facing alert.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Info,
    Error,
}

/// User-facing alert.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub message: String,
}

impl Notice {
    pub fn info(message: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Info,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Error,
            message: message.into(),
        }
    }
}

/// Raw add-quote form values, untrimmed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AddFormInput {
    pub text: String,
    pub category: String,
}

/// Download payload handed to the view for the duration of one call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExportFile<'a> {
    pub file_name: &'a str,
    pub mime_type: &'a str,
    pub contents: &'a str,
}

/// Front-end contract for rendering and form access.
pub trait QuoteView {
    /// Replaces the display region with one quote.
    fn render_quote(&mut self, quote: &Quote);
    /// Replaces the display region with a plain message.
    fn render_message(&mut self, message: &str);
    /// Rebuilds the category selector.
    fn render_category_options(&mut self, options: &[CategoryOption], selected: &CategoryFilter);
    /// Creates the add-quote controls (text input, category input, submit).
    fn mount_add_form(&mut self);
    fn read_add_form(&self) -> AddFormInput;
    fn clear_add_form(&mut self);
    fn alert(&mut self, notice: Notice);
    /// Offers `file` for download. The payload is only valid during the call.
    fn offer_download(&mut self, file: &ExportFile<'_>);
}
