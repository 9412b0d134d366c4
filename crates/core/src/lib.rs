//! Domain types and pure validation rules for the bookshelf service.
//!
//! Nothing in this crate performs I/O; the store and HTTP layers build on it.

pub mod book;
pub mod error;
pub mod types;
