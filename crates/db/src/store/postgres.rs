use async_trait::async_trait;
use bookshelf_core::types::BookId;

use crate::error::StoreError;
use crate::models::book::{Book, NewBook};
use crate::repositories::BookRepo;
use crate::DbPool;

use super::BookStore;

/// [`BookStore`] backed by the PostgreSQL `books` table.
#[derive(Clone)]
pub struct PgBookStore {
    pool: DbPool,
}

impl PgBookStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &DbPool {
        &self.pool
    }
}

#[async_trait]
impl BookStore for PgBookStore {
    async fn list(&self) -> Result<Vec<Book>, StoreError> {
        Ok(BookRepo::list(&self.pool).await?)
    }

    async fn find_by_id(&self, id: BookId) -> Result<Option<Book>, StoreError> {
        Ok(BookRepo::find_by_id(&self.pool, id).await?)
    }

    async fn create(&self, input: &NewBook) -> Result<Book, StoreError> {
        Ok(BookRepo::create(&self.pool, input).await?)
    }

    async fn replace(&self, id: BookId, input: &NewBook) -> Result<Option<Book>, StoreError> {
        Ok(BookRepo::replace(&self.pool, id, input).await?)
    }

    async fn delete(&self, id: BookId) -> Result<bool, StoreError> {
        Ok(BookRepo::delete(&self.pool, id).await?)
    }

    async fn health_check(&self) -> Result<(), StoreError> {
        Ok(crate::health_check(&self.pool).await?)
    }

    async fn close(&self) {
        self.pool.close().await;
        tracing::info!("Database connection pool closed");
    }

    fn backend(&self) -> &'static str {
        "postgres"
    }
}
