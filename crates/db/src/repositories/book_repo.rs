//! Repository for the `books` table.

use bookshelf_core::types::BookId;
use sqlx::PgPool;

use crate::models::book::{Book, NewBook};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, title, author, description, published_year";

/// Provides CRUD operations for books.
pub struct BookRepo;

impl BookRepo {
    /// Insert a new book under a freshly generated id, returning the created row.
    pub async fn create(pool: &PgPool, input: &NewBook) -> Result<Book, sqlx::Error> {
        let query = format!(
            "INSERT INTO books (id, title, author, description, published_year)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Book>(&query)
            .bind(BookId::now_v7())
            .bind(&input.title)
            .bind(&input.author)
            .bind(&input.description)
            .bind(input.published_year)
            .fetch_one(pool)
            .await
    }

    /// Find a book by id.
    pub async fn find_by_id(pool: &PgPool, id: BookId) -> Result<Option<Book>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM books WHERE id = $1");
        sqlx::query_as::<_, Book>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all books in insertion order.
    pub async fn list(pool: &PgPool) -> Result<Vec<Book>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM books ORDER BY id");
        sqlx::query_as::<_, Book>(&query).fetch_all(pool).await
    }

    /// Overwrite every mutable column of a book. `None` fields become NULL.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn replace(
        pool: &PgPool,
        id: BookId,
        input: &NewBook,
    ) -> Result<Option<Book>, sqlx::Error> {
        let query = format!(
            "UPDATE books SET
                title = $2,
                author = $3,
                description = $4,
                published_year = $5
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Book>(&query)
            .bind(id)
            .bind(&input.title)
            .bind(&input.author)
            .bind(&input.description)
            .bind(input.published_year)
            .fetch_optional(pool)
            .await
    }

    /// Delete a book by id. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: BookId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM books WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
