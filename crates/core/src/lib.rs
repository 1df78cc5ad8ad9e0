//! Core domain types and storage contract for the whiskyshelf service.
//!
//! This crate holds everything the storage backends and the HTTP layer
//! share: the [`whisky::Whisky`] record, the [`storage::WhiskyRepository`]
//! contract, the repository error taxonomy, and the pure error-to-status
//! mapping.

pub mod storage;
pub mod whisky;
