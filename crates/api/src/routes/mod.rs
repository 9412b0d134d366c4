use axum::Router;

use crate::state::AppState;

pub mod book;
pub mod health;

/// All resource routes. Health is mounted separately by the router builder.
pub fn api_routes() -> Router<AppState> {
    Router::new().nest("/books", book::router())
}
