//! Book entity model and DTOs.

use bookshelf_core::book::validate_required_text;
use bookshelf_core::error::CoreError;
use bookshelf_core::types::BookId;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `books` table.
///
/// Unset optional fields are left out of the JSON representation entirely.
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Book {
    pub id: BookId,
    pub title: String,
    pub author: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub published_year: Option<i32>,
}

impl Book {
    /// Assemble a book from a store-assigned id and validated fields.
    pub fn from_new(id: BookId, input: NewBook) -> Self {
        Self {
            id,
            title: input.title,
            author: input.author,
            description: input.description,
            published_year: input.published_year,
        }
    }
}

/// Request body for both create and update.
///
/// Every field is optional at the wire level so a missing `title` or
/// `author` surfaces as a validation error rather than a decode failure.
/// Unknown fields are ignored.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookPayload {
    pub title: Option<String>,
    pub author: Option<String>,
    pub description: Option<String>,
    pub published_year: Option<i32>,
}

/// Validated field set written by create and by full-replace update.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewBook {
    pub title: String,
    pub author: String,
    pub description: Option<String>,
    pub published_year: Option<i32>,
}

impl TryFrom<BookPayload> for NewBook {
    type Error = CoreError;

    fn try_from(payload: BookPayload) -> Result<Self, Self::Error> {
        validate_required_text("title", payload.title.as_deref())?;
        validate_required_text("author", payload.author.as_deref())?;

        let (Some(title), Some(author)) = (payload.title, payload.author) else {
            return Err(CoreError::Internal(
                "validated book payload lost a required field".to_string(),
            ));
        };

        Ok(Self {
            title,
            author,
            description: payload.description,
            published_year: payload.published_year,
        })
    }
}
