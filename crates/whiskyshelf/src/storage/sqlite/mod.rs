//! SQLite storage backend implementation.
//!
//! Relational backend using `rusqlite` for the actual statements and
//! `tokio-rusqlite` for async access. The whiskies table is created on
//! startup if it does not exist; every statement is parameterized.

mod error;
mod repository;
mod schema;

pub use repository::SqliteRepository;
