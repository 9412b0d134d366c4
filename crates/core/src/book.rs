//! Book validation rules.
//!
//! Title and author are the only required fields. Everything else is stored
//! exactly as submitted.

use crate::error::CoreError;
use crate::types::BookId;

/// Entity name used in not-found errors and log fields.
pub const ENTITY: &str = "Book";

/// Validate a required text field.
///
/// Rules:
/// - The field must be present.
/// - The value must contain at least one non-whitespace character.
pub fn validate_required_text(field: &str, value: Option<&str>) -> Result<(), CoreError> {
    match value {
        None => Err(CoreError::Validation(format!("{field} is required"))),
        Some(v) if v.trim().is_empty() => {
            Err(CoreError::Validation(format!("{field} must not be blank")))
        }
        Some(_) => Ok(()),
    }
}

/// Parse a path identifier into a [`BookId`].
///
/// Returns `None` for anything that is not a hyphenated or simple UUID.
/// Callers treat a malformed id the same as an unknown one, since no stored
/// book can ever carry it.
pub fn parse_book_id(raw: &str) -> Option<BookId> {
    BookId::parse_str(raw).ok()
}
