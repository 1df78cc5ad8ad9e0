//! In-memory repository implementation.

use std::collections::BTreeMap;
use std::sync::{
    atomic::{AtomicI64, Ordering},
    Arc,
};

use async_trait::async_trait;
use tokio::sync::RwLock;

use whiskyshelf_core::storage::{RepositoryError, Result, WhiskyRepository};
use whiskyshelf_core::whisky::{Whisky, WhiskyId};

/// In-memory storage backend.
///
/// All mutations and full-collection reads go through one `RwLock`, so
/// concurrent requests never observe a torn read or lose an update. The
/// id counter is shared across every record created during the process
/// lifetime; ids are unique and never reused. The map itself never leaves
/// this type.
#[derive(Debug, Clone, Default)]
pub struct InMemoryRepository {
    whiskies: Arc<RwLock<BTreeMap<i64, Whisky>>>,
    next_id: Arc<AtomicI64>,
}

impl InMemoryRepository {
    /// Creates a new empty in-memory repository.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl WhiskyRepository for InMemoryRepository {
    async fn list_all(&self) -> Result<Vec<Whisky>> {
        let whiskies = self.whiskies.read().await;
        Ok(whiskies.values().cloned().collect())
    }

    async fn create(&self, whisky: Whisky) -> Result<Whisky> {
        let id = self.next_id.fetch_add(1, Ordering::SeqCst) + 1;
        let stored = Whisky {
            id: Some(WhiskyId::from(id)),
            ..whisky
        };

        let mut whiskies = self.whiskies.write().await;
        whiskies.insert(id, stored.clone());

        Ok(stored)
    }

    async fn get_by_id(&self, id: &WhiskyId) -> Result<Option<Whisky>> {
        // An id that does not parse can never name a record here.
        let Some(key) = id.as_i64() else {
            return Ok(None);
        };

        let whiskies = self.whiskies.read().await;
        Ok(whiskies.get(&key).cloned())
    }

    async fn update_by_id(&self, id: &WhiskyId, whisky: Whisky) -> Result<Whisky> {
        let key = id.as_i64().ok_or_else(|| RepositoryError::NotFound {
            id: id.to_string(),
        })?;

        let mut whiskies = self.whiskies.write().await;
        match whiskies.get_mut(&key) {
            Some(stored) => {
                stored.name = whisky.name;
                stored.origin = whisky.origin;
                Ok(stored.clone())
            }
            None => Err(RepositoryError::NotFound { id: id.to_string() }),
        }
    }

    async fn delete_by_id(&self, id: &WhiskyId) -> Result<()> {
        let Some(key) = id.as_i64() else {
            return Ok(());
        };

        let mut whiskies = self.whiskies.write().await;
        whiskies.remove(&key);

        Ok(())
    }
}
