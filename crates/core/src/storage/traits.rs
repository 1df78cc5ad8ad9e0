use async_trait::async_trait;

use crate::whisky::{Whisky, WhiskyId};

use super::Result;

/// Storage contract shared by every whisky backend.
///
/// All five operations touch at most one record; there are no
/// transactional multi-record operations.
#[async_trait]
pub trait WhiskyRepository: Send + Sync {
    /// Returns every stored whisky, in backend-defined order.
    async fn list_all(&self) -> Result<Vec<Whisky>>;

    /// Persists a new whisky and returns it with its assigned id.
    async fn create(&self, whisky: Whisky) -> Result<Whisky>;

    /// Looks up a whisky by id. `Ok(None)` when no such record exists.
    async fn get_by_id(&self, id: &WhiskyId) -> Result<Option<Whisky>>;

    /// Replaces `name` and `origin` on an existing whisky, keeping its id.
    ///
    /// Returns the record assembled from the submitted fields without
    /// re-reading the store. Fails with `NotFound` when the id is absent.
    async fn update_by_id(&self, id: &WhiskyId, whisky: Whisky) -> Result<Whisky>;

    /// Removes a whisky if present. Deleting an absent id is not an error.
    async fn delete_by_id(&self, id: &WhiskyId) -> Result<()>;
}
