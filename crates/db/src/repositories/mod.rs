pub mod book_repo;

pub use book_repo::BookRepo;
