//! Headless `QuoteView` that records rendered state.
//!
//! Used by the FFI layer to build snapshots and by tests as the fake view.

use super::{AddFormInput, CategoryOption, ExportFile, Notice, QuoteView};
use crate::model::quote::{CategoryFilter, Quote};

/// A download captured by [`MemoryView`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CapturedDownload {
    pub file_name: String,
    pub mime_type: String,
    pub contents: String,
}

#[derive(Debug, Clone, Default)]
pub struct MemoryView {
    display: Vec<String>,
    options: Vec<CategoryOption>,
    selected: String,
    form_mounted: bool,
    form: AddFormInput,
    notices: Vec<Notice>,
    downloads: Vec<CapturedDownload>,
}

impl MemoryView {
    pub fn new() -> Self {
        Self::default()
    }

    /// Lines currently in the display region.
    pub fn display(&self) -> &[String] {
        &self.display
    }

    pub fn options(&self) -> &[CategoryOption] {
        &self.options
    }

    pub fn option_values(&self) -> Vec<String> {
        self.options
            .iter()
            .map(|option| option.value.clone())
            .collect()
    }

    /// Selected filter value as last rendered.
    pub fn selected(&self) -> &str {
        &self.selected
    }

    pub fn form_mounted(&self) -> bool {
        self.form_mounted
    }

    pub fn form(&self) -> &AddFormInput {
        &self.form
    }

    /// Simulates typing into the add-quote inputs.
    pub fn fill_add_form(&mut self, text: impl Into<String>, category: impl Into<String>) {
        self.form = AddFormInput {
            text: text.into(),
            category: category.into(),
        };
    }

    pub fn notices(&self) -> &[Notice] {
        &self.notices
    }

    pub fn last_notice(&self) -> Option<&Notice> {
        self.notices.last()
    }

    pub fn take_notices(&mut self) -> Vec<Notice> {
        std::mem::take(&mut self.notices)
    }

    pub fn take_downloads(&mut self) -> Vec<CapturedDownload> {
        std::mem::take(&mut self.downloads)
    }
}

impl QuoteView for MemoryView {
    fn render_quote(&mut self, quote: &Quote) {
        self.display = vec![quote.display_text(), quote.display_category()];
    }

    fn render_message(&mut self, message: &str) {
        self.display = vec![message.to_string()];
    }

    fn render_category_options(&mut self, options: &[CategoryOption], selected: &CategoryFilter) {
        self.options = options.to_vec();
        self.selected = selected.as_value().to_string();
    }

    fn mount_add_form(&mut self) {
        self.form_mounted = true;
    }

    fn read_add_form(&self) -> AddFormInput {
        self.form.clone()
    }

    fn clear_add_form(&mut self) {
        self.form = AddFormInput::default();
    }

    fn alert(&mut self, notice: Notice) {
        self.notices.push(notice);
    }

    fn offer_download(&mut self, file: &ExportFile<'_>) {
        self.downloads.push(CapturedDownload {
            file_name: file.file_name.to_string(),
            mime_type: file.mime_type.to_string(),
            contents: file.contents.to_string(),
        });
    }
}
