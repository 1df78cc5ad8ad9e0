//! In-memory storage backend.
//!
//! Keeps the collection in a map guarded by a single lock. Ids come from
//! a monotonically increasing counter and are never reused, even after a
//! delete. Nothing survives a restart.

mod repository;

pub use repository::InMemoryRepository;
