//! Quote record and category filter model.
//!
//! # Responsibility
//! - Define the `{ text, category }` record shared by storage, import/export
//!   and rendering.
//! - Define the typed category filter and its `"all"` wire spelling.
//!
//! # Invariants
//! - `text` and `category` are non-empty after trim for every record that
//!   passed `Quote::validate()`.
//! - Category matching is exact and case-sensitive.
//! - No record carries the category `"all"`; that spelling belongs to
//!   `CategoryFilter::All`.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Storage/wire spelling of [`CategoryFilter::All`].
pub const ALL_CATEGORIES: &str = "all";

/// One quote in the collection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Quote {
    pub text: String,
    pub category: String,
}

/// Validation failures for quote records.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QuoteValidationError {
    EmptyText,
    EmptyCategory,
    /// Category equals the `"all"` filter spelling.
    ReservedCategory,
}

impl Display for QuoteValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyText => write!(f, "quote text cannot be empty"),
            Self::EmptyCategory => write!(f, "quote category cannot be empty"),
            Self::ReservedCategory => {
                write!(f, "quote category `{ALL_CATEGORIES}` is reserved")
            }
        }
    }
}

impl Error for QuoteValidationError {}

impl Quote {
    /// Creates a record from raw values without trimming or validation.
    pub fn new(text: impl Into<String>, category: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            category: category.into(),
        }
    }

    /// Builds a record from user input: both fields are trimmed, then
    /// validated.
    pub fn from_input(text: &str, category: &str) -> Result<Self, QuoteValidationError> {
        let quote = Self::new(text.trim(), category.trim());
        quote.validate()?;
        Ok(quote)
    }

    /// Checks both fields are non-empty after trim and the category is not
    /// the reserved `"all"`.
    pub fn validate(&self) -> Result<(), QuoteValidationError> {
        if self.text.trim().is_empty() {
            return Err(QuoteValidationError::EmptyText);
        }
        let category = self.category.trim();
        if category.is_empty() {
            return Err(QuoteValidationError::EmptyCategory);
        }
        if category == ALL_CATEGORIES {
            return Err(QuoteValidationError::ReservedCategory);
        }
        Ok(())
    }

    /// Quote text wrapped in double quotation marks, as displayed.
    pub fn display_text(&self) -> String {
        format!("\"{}\"", self.text)
    }

    /// Category label, as displayed under the quote text.
    pub fn display_category(&self) -> String {
        format!("Category: {}", self.category)
    }
}

/// Built-in collection used when durable storage holds no quotes.
pub fn default_quotes() -> Vec<Quote> {
    vec![
        Quote::new(
            "The journey of a thousand miles begins with one step.",
            "Motivation",
        ),
        Quote::new(
            "Life is what happens when you're busy making other plans.",
            "Life",
        ),
        Quote::new(
            "You miss 100% of the shots you don\u{2019}t take.",
            "Inspiration",
        ),
    ]
}

/// Active category filter.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    /// No restriction.
    #[default]
    All,
    /// Exact match on `Quote::category`.
    Category(String),
}

impl CategoryFilter {
    /// Parses the storage spelling. `"all"` maps to `All`, anything else is
    /// taken verbatim as a category name.
    pub fn from_value(value: &str) -> Self {
        if value == ALL_CATEGORIES {
            Self::All
        } else {
            Self::Category(value.to_string())
        }
    }

    /// Returns the storage spelling.
    pub fn as_value(&self) -> &str {
        match self {
            Self::All => ALL_CATEGORIES,
            Self::Category(name) => name.as_str(),
        }
    }

    /// Returns whether `quote` passes this filter.
    pub fn matches(&self, quote: &Quote) -> bool {
        match self {
            Self::All => true,
            Self::Category(name) => quote.category == *name,
        }
    }
}

impl Display for CategoryFilter {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_value())
    }
}

#[cfg(test)]
mod tests {
    use super::{default_quotes, CategoryFilter, Quote, QuoteValidationError};

    #[test]
    fn from_input_trims_both_fields() {
        let quote = Quote::from_input("  Stay hungry  ", "\tLife\n").unwrap();
        assert_eq!(quote.text, "Stay hungry");
        assert_eq!(quote.category, "Life");
    }

    #[test]
    fn from_input_rejects_blank_fields() {
        assert_eq!(
            Quote::from_input("   ", "Life").unwrap_err(),
            QuoteValidationError::EmptyText
        );
        assert_eq!(
            Quote::from_input("text", "").unwrap_err(),
            QuoteValidationError::EmptyCategory
        );
    }

    #[test]
    fn category_all_is_reserved_but_other_casings_are_not() {
        assert_eq!(
            Quote::from_input("Test", " all ").unwrap_err(),
            QuoteValidationError::ReservedCategory
        );
        assert!(Quote::from_input("Test", "All").is_ok());
    }

    #[test]
    fn display_helpers_wrap_text_and_label_category() {
        let quote = Quote::new("Test", "QA");
        assert_eq!(quote.display_text(), "\"Test\"");
        assert_eq!(quote.display_category(), "Category: QA");
    }

    #[test]
    fn filter_value_roundtrips_all_and_categories() {
        assert_eq!(CategoryFilter::from_value("all"), CategoryFilter::All);
        assert_eq!(
            CategoryFilter::from_value("All"),
            CategoryFilter::Category("All".to_string())
        );
        assert_eq!(CategoryFilter::All.as_value(), "all");
    }

    #[test]
    fn filter_matches_exactly() {
        let quote = Quote::new("x", "Life");
        assert!(CategoryFilter::All.matches(&quote));
        assert!(CategoryFilter::from_value("Life").matches(&quote));
        assert!(!CategoryFilter::from_value("life").matches(&quote));
    }

    #[test]
    fn defaults_are_valid_and_distinctly_categorized() {
        let defaults = default_quotes();
        assert_eq!(defaults.len(), 3);
        assert!(defaults.iter().all(|quote| quote.validate().is_ok()));
    }

    #[test]
    fn serializes_with_text_and_category_keys() {
        let json = serde_json::to_value(Quote::new("a", "b")).unwrap();
        assert_eq!(json, serde_json::json!({ "text": "a", "category": "b" }));
    }
}
