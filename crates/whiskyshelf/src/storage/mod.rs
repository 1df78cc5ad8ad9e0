//! Storage backend implementations.
//!
//! Concrete implementations of `whiskyshelf_core::storage::WhiskyRepository`,
//! selected at compile time via feature flags:
//!
//! - `inmemory` (default): process-local map, nothing persisted
//! - `sqlite`: relational backend using `rusqlite` and `tokio-rusqlite`
//! - `dynamodb`: document backend using `aws-sdk-dynamodb`
//!
//! The features are mutually exclusive - only one storage backend can be
//! enabled at a time.
//!
//! # Examples
//!
//! Build with the default in-memory backend:
//! ```bash
//! cargo build -p whiskyshelf
//! ```
//!
//! Build with SQLite:
//! ```bash
//! cargo build -p whiskyshelf --no-default-features --features sqlite
//! ```

#[cfg(feature = "inmemory")]
pub mod inmemory;

#[cfg(feature = "sqlite")]
pub mod sqlite;

#[cfg(feature = "dynamodb")]
pub mod dynamodb;

#[cfg(feature = "inmemory")]
pub use inmemory::InMemoryRepository;

#[cfg(feature = "sqlite")]
pub use sqlite::SqliteRepository;

#[cfg(feature = "dynamodb")]
pub use dynamodb::DynamoDbRepository;
