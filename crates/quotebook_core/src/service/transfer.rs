//! JSON export/import of the quote collection.
//!
//! # Responsibility
//! - Serialize the collection as the pretty-printed `quotes.json` payload.
//! - Parse and validate uploaded content before anything is appended.
//!
//! # Invariants
//! - Import is all-or-nothing: a single non-conforming element rejects the
//!   whole file.
//! - Imported records are appended verbatim (no trimming).

use crate::model::quote::Quote;
use serde_json::Value;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub const EXPORT_FILE_NAME: &str = "quotes.json";
pub const EXPORT_MIME_TYPE: &str = "application/json";

/// Rejection reasons for an import payload.
#[derive(Debug)]
pub enum ImportError {
    /// Content is not valid JSON.
    Parse(serde_json::Error),
    /// Top-level JSON value is not an array.
    NotAnArray,
    /// Element at 1-based `position` is not a valid `{text, category}` record.
    InvalidRecord { position: usize, reason: String },
}

impl ImportError {
    /// Alert text shown to the user.
    pub fn user_message(&self) -> String {
        match self {
            Self::Parse(_) => "Error reading JSON file.".to_string(),
            Self::NotAnArray => "Invalid JSON format.".to_string(),
            Self::InvalidRecord { position, .. } => {
                format!("Invalid quote at position {position}.")
            }
        }
    }

    /// Stable code for log events.
    pub fn code(&self) -> &'static str {
        match self {
            Self::Parse(_) => "import_parse_failed",
            Self::NotAnArray => "import_not_array",
            Self::InvalidRecord { .. } => "import_invalid_record",
        }
    }
}

impl Display for ImportError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Parse(err) => write!(f, "import content is not valid JSON: {err}"),
            Self::NotAnArray => write!(f, "import content must be a JSON array"),
            Self::InvalidRecord { position, reason } => {
                write!(f, "invalid quote at position {position}: {reason}")
            }
        }
    }
}

impl Error for ImportError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Parse(err) => Some(err),
            _ => None,
        }
    }
}

/// Serializes `quotes` as a pretty-printed JSON array (2-space indent).
pub fn export_quotes_json(quotes: &[Quote]) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(quotes)
}

/// Parses uploaded content into quote records.
pub fn parse_import(contents: &str) -> Result<Vec<Quote>, ImportError> {
    let value: Value = serde_json::from_str(contents).map_err(ImportError::Parse)?;
    let Value::Array(items) = value else {
        return Err(ImportError::NotAnArray);
    };

    let mut quotes = Vec::with_capacity(items.len());
    for (offset, item) in items.into_iter().enumerate() {
        let position = offset + 1;
        let quote: Quote =
            serde_json::from_value(item).map_err(|err| ImportError::InvalidRecord {
                position,
                reason: err.to_string(),
            })?;
        quote
            .validate()
            .map_err(|err| ImportError::InvalidRecord {
                position,
                reason: err.to_string(),
            })?;
        quotes.push(quote);
    }
    Ok(quotes)
}
