//! The book store seam.
//!
//! Handlers hold an `Arc<dyn BookStore>` so the backend is chosen once at
//! startup and injected through application state.

use std::sync::Arc;

use async_trait::async_trait;
use bookshelf_core::types::BookId;

use crate::error::StoreError;
use crate::models::book::{Book, NewBook};

pub mod memory;
pub mod postgres;

pub use memory::MemoryBookStore;
pub use postgres::PgBookStore;

/// Shared handle to whichever store the process was started with.
pub type SharedBookStore = Arc<dyn BookStore>;

/// A single collection of books.
///
/// Every method is one atomic operation against the backend. Absence is
/// reported through `Option`/`bool`, never through [`StoreError`].
#[async_trait]
pub trait BookStore: Send + Sync {
    /// All books, oldest first.
    async fn list(&self) -> Result<Vec<Book>, StoreError>;

    async fn find_by_id(&self, id: BookId) -> Result<Option<Book>, StoreError>;

    /// Persist a new book. The store assigns the id.
    async fn create(&self, input: &NewBook) -> Result<Book, StoreError>;

    /// Replace all mutable fields of an existing book.
    async fn replace(&self, id: BookId, input: &NewBook) -> Result<Option<Book>, StoreError>;

    /// Returns `true` if a book was removed.
    async fn delete(&self, id: BookId) -> Result<bool, StoreError>;

    async fn health_check(&self) -> Result<(), StoreError>;

    /// Release backend resources. Calls made afterwards fail.
    async fn close(&self);

    /// Short backend name for logs and the health endpoint.
    fn backend(&self) -> &'static str;
}
