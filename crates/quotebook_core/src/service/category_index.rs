//! Derived category index and selector options.
//!
//! # Invariants
//! - Categories are unique and kept in first-occurrence order.
//! - Options always start with the `"all"` entry, followed by one entry per
//!   category.

use crate::model::quote::{CategoryFilter, Quote, ALL_CATEGORIES};
use crate::view::CategoryOption;
use std::collections::HashSet;

const ALL_CATEGORIES_LABEL: &str = "All Categories";

/// Returns the distinct categories of `quotes` in first-occurrence order.
pub fn unique_categories(quotes: &[Quote]) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut categories = Vec::new();
    for quote in quotes {
        if seen.insert(quote.category.as_str()) {
            categories.push(quote.category.clone());
        }
    }
    categories
}

/// Builds selector options for `categories`.
pub fn category_options(categories: &[String]) -> Vec<CategoryOption> {
    let mut options = Vec::with_capacity(categories.len() + 1);
    options.push(CategoryOption {
        value: ALL_CATEGORIES.to_string(),
        label: ALL_CATEGORIES_LABEL.to_string(),
    });
    options.extend(categories.iter().map(|category| CategoryOption {
        value: category.clone(),
        label: category.clone(),
    }));
    options
}

/// Keeps `current` when it is `All` or still listed, otherwise resets to
/// `All`.
pub fn resolve_selection(categories: &[String], current: &CategoryFilter) -> CategoryFilter {
    match current {
        CategoryFilter::All => CategoryFilter::All,
        CategoryFilter::Category(name) if categories.iter().any(|known| known == name) => {
            current.clone()
        }
        CategoryFilter::Category(_) => CategoryFilter::All,
    }
}
