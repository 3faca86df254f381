//! `QuoteView` for a one-shot terminal session.
//!
//! Alerts go to stderr as soon as they are raised; the display region and
//! the selector are printed once by the caller after the event ran.

use quotebook_core::view::{AddFormInput, CategoryOption, ExportFile, Notice, NoticeKind, QuoteView};
use quotebook_core::{CategoryFilter, Quote};

#[derive(Debug, Default)]
pub struct TerminalView {
    display: Vec<String>,
    options: Vec<CategoryOption>,
    selected: String,
    form: AddFormInput,
    error_count: usize,
    download: Option<(String, String)>,
}

impl TerminalView {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-fills the add-quote form from command arguments.
    pub fn with_form(text: String, category: String) -> Self {
        Self {
            form: AddFormInput { text, category },
            ..Self::default()
        }
    }

    pub fn print_display(&self) {
        for line in &self.display {
            println!("{line}");
        }
    }

    pub fn print_options(&self) {
        for option in &self.options {
            let marker = if option.value == self.selected { '*' } else { ' ' };
            println!("{marker} {}", option.label);
        }
    }

    pub fn error_count(&self) -> usize {
        self.error_count
    }

    /// Takes the `(file_name, contents)` offered by the last export.
    pub fn take_download(&mut self) -> Option<(String, String)> {
        self.download.take()
    }
}

impl QuoteView for TerminalView {
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

    fn mount_add_form(&mut self) {}

    fn read_add_form(&self) -> AddFormInput {
        self.form.clone()
    }

    fn clear_add_form(&mut self) {
        self.form = AddFormInput::default();
    }

    fn alert(&mut self, notice: Notice) {
        match notice.kind {
            NoticeKind::Info => eprintln!("{}", notice.message),
            NoticeKind::Error => {
                self.error_count += 1;
                eprintln!("error: {}", notice.message);
            }
        }
    }

    fn offer_download(&mut self, file: &ExportFile<'_>) {
        self.download = Some((file.file_name.to_string(), file.contents.to_string()));
    }
}
