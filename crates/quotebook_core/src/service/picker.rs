//! Filtered uniform-random quote selection.
//!
//! # Invariants
//! - Every element of the filtered view is equally likely on every draw.
//! - Repeats are allowed; no draw history is kept.

use crate::model::quote::{CategoryFilter, Quote};
use rand::Rng;

/// Message rendered when the filtered view is empty.
pub const NO_QUOTES_MESSAGE: &str = "No quotes available for this category.";

/// Returns the quotes passing `filter`, in collection order.
pub fn filtered_view<'a>(quotes: &'a [Quote], filter: &CategoryFilter) -> Vec<&'a Quote> {
    quotes.iter().filter(|quote| filter.matches(quote)).collect()
}

/// Draws an index in `[0, len)`, or `None` for an empty view.
pub fn pick_index<R: Rng + ?Sized>(rng: &mut R, len: usize) -> Option<usize> {
    if len == 0 {
        return None;
    }
    Some(rng.gen_range(0..len))
}
