/// Failure reported by a [`crate::store::BookStore`].
///
/// "No such book" is not an error: lookups return `Option` and deletes
/// return `bool`.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),

    #[error("Store is closed")]
    Closed,
}
