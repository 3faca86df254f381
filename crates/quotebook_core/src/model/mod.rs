//! Domain model for the quote collection.
//!
//! # Responsibility
//! - Define canonical data structures used by core business logic.
//! - Keep the persisted/exported JSON shape in one place.
//!
//! # Invariants
//! - A quote has no identity field; identity is its position in the
//!   collection for the current session.
//! - Duplicates are legal and retained.

pub mod quote;
