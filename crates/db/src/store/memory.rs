use std::sync::atomic::{AtomicBool, Ordering};

use async_trait::async_trait;
use bookshelf_core::types::BookId;
use indexmap::IndexMap;
use tokio::sync::RwLock;

use crate::error::StoreError;
use crate::models::book::{Book, NewBook};

use super::BookStore;

/// In-process [`BookStore`]. Contents are lost on restart.
///
/// Iteration order is insertion order, including after deletes.
#[derive(Default)]
pub struct MemoryBookStore {
    books: RwLock<IndexMap<BookId, Book>>,
    closed: AtomicBool,
}

impl MemoryBookStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn ensure_open(&self) -> Result<(), StoreError> {
        if self.closed.load(Ordering::Acquire) {
            return Err(StoreError::Closed);
        }
        Ok(())
    }
}

#[async_trait]
impl BookStore for MemoryBookStore {
    async fn list(&self) -> Result<Vec<Book>, StoreError> {
        self.ensure_open()?;
        let books = self.books.read().await;
        Ok(books.values().cloned().collect())
    }

    async fn find_by_id(&self, id: BookId) -> Result<Option<Book>, StoreError> {
        self.ensure_open()?;
        let books = self.books.read().await;
        Ok(books.get(&id).cloned())
    }

    async fn create(&self, input: &NewBook) -> Result<Book, StoreError> {
        self.ensure_open()?;
        let book = Book::from_new(BookId::now_v7(), input.clone());
        self.books.write().await.insert(book.id, book.clone());
        Ok(book)
    }

    async fn replace(&self, id: BookId, input: &NewBook) -> Result<Option<Book>, StoreError> {
        self.ensure_open()?;
        let mut books = self.books.write().await;
        let Some(slot) = books.get_mut(&id) else {
            return Ok(None);
        };
        *slot = Book::from_new(id, input.clone());
        Ok(Some(slot.clone()))
    }

    async fn delete(&self, id: BookId) -> Result<bool, StoreError> {
        self.ensure_open()?;
        Ok(self.books.write().await.shift_remove(&id).is_some())
    }

    async fn health_check(&self) -> Result<(), StoreError> {
        self.ensure_open()
    }

    async fn close(&self) {
        self.closed.store(true, Ordering::Release);
        tracing::info!("In-memory book store closed");
    }

    fn backend(&self) -> &'static str {
        "memory"
    }
}
