use std::sync::Arc;

use bookshelf_db::store::SharedBookStore;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// Cheaply cloneable: both fields are behind `Arc`.
#[derive(Clone)]
pub struct AppState {
    /// The book store opened at startup.
    pub store: SharedBookStore,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
}
