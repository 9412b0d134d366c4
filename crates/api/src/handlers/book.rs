//! Handlers for the `/books` resource.
//!
//! Each handler validates its input, makes exactly one store call and maps
//! the outcome: a value is success, an empty result is 404, an error is 500
//! carrying the operation's message.

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use bookshelf_core::book::{parse_book_id, ENTITY};
use bookshelf_core::error::CoreError;
use bookshelf_core::types::BookId;
use bookshelf_db::models::book::{Book, BookPayload, NewBook};

use crate::error::{AppError, AppResult};
use crate::response::MessageResponse;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn not_found(raw_id: &str) -> AppError {
    AppError::Core(CoreError::NotFound {
        entity: ENTITY,
        id: raw_id.to_string(),
    })
}

/// Malformed ids can never match a stored book, so they are reported as
/// not found rather than as a bad request.
fn resolve_id(raw_id: &str) -> AppResult<BookId> {
    parse_book_id(raw_id).ok_or_else(|| not_found(raw_id))
}

/// Unwrap the JSON body and apply the required-field rules.
fn validate_payload(payload: Result<Json<BookPayload>, JsonRejection>) -> AppResult<NewBook> {
    let Json(payload) = payload.map_err(|rejection| AppError::BadRequest(rejection.body_text()))?;
    Ok(NewBook::try_from(payload)?)
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// GET /books
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Book>>> {
    let books = state
        .store
        .list()
        .await
        .map_err(AppError::store("Failed to get books"))?;
    Ok(Json(books))
}

/// GET /books/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<Book>> {
    let book_id = resolve_id(&id)?;
    let book = state
        .store
        .find_by_id(book_id)
        .await
        .map_err(AppError::store("Failed to get book"))?
        .ok_or_else(|| not_found(&id))?;
    Ok(Json(book))
}

/// POST /books
pub async fn create(
    State(state): State<AppState>,
    payload: Result<Json<BookPayload>, JsonRejection>,
) -> AppResult<(StatusCode, Json<Book>)> {
    let input = validate_payload(payload)?;
    let book = state
        .store
        .create(&input)
        .await
        .map_err(AppError::store("Failed to create book"))?;

    tracing::info!(book_id = %book.id, title = %book.title, "Book created");
    Ok((StatusCode::CREATED, Json(book)))
}

/// PUT /books/{id}
///
/// Full replace: optional fields missing from the body are cleared.
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: Result<Json<BookPayload>, JsonRejection>,
) -> AppResult<Json<Book>> {
    let book_id = resolve_id(&id)?;
    let input = validate_payload(payload)?;
    let book = state
        .store
        .replace(book_id, &input)
        .await
        .map_err(AppError::store("Failed to update book"))?
        .ok_or_else(|| not_found(&id))?;

    tracing::info!(book_id = %book.id, "Book updated");
    Ok(Json(book))
}

/// DELETE /books/{id}
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<MessageResponse>> {
    let book_id = resolve_id(&id)?;
    let deleted = state
        .store
        .delete(book_id)
        .await
        .map_err(AppError::store("Failed to delete book"))?;

    if !deleted {
        return Err(not_found(&id));
    }

    tracing::info!(book_id = %book_id, "Book deleted");
    Ok(Json(MessageResponse {
        message: "Book deleted successfully",
    }))
}
