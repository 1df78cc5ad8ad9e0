//! Application state with repository-based storage.
//!
//! The state is cloned into every request handler and owns the storage
//! adapter as a trait object. The concrete backend is selected at compile
//! time via feature flags.

use std::sync::Arc;

use whiskyshelf_core::storage::WhiskyRepository;

// Storage features: exactly one must be enabled, they are mutually exclusive
#[cfg(all(feature = "sqlite", feature = "dynamodb"))]
compile_error!("Cannot enable both 'sqlite' and 'dynamodb' storage features");

#[cfg(all(feature = "sqlite", feature = "inmemory"))]
compile_error!("Cannot enable both 'sqlite' and 'inmemory' storage features");

#[cfg(all(feature = "dynamodb", feature = "inmemory"))]
compile_error!("Cannot enable both 'dynamodb' and 'inmemory' storage features");

#[cfg(not(any(feature = "inmemory", feature = "sqlite", feature = "dynamodb")))]
compile_error!("Must enable exactly one storage feature: 'inmemory', 'sqlite', or 'dynamodb'");

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    /// Storage adapter for the active backend.
    pub whisky_repo: Arc<dyn WhiskyRepository>,
    /// Directory served under /assets.
    pub assets_dir: String,
}

#[cfg(test)]
impl AppState {
    /// Creates an AppState around an already-built repository.
    pub fn with_repository(whisky_repo: Arc<dyn WhiskyRepository>) -> Self {
        Self {
            whisky_repo,
            assets_dir: "assets".to_string(),
        }
    }
}

// ============================================================================
// Factory functions for the storage backends
// ============================================================================

#[cfg(feature = "inmemory")]
mod inmemory {
    use super::*;
    use crate::config::Config;
    use crate::storage::InMemoryRepository;

    impl AppState {
        /// Creates AppState with the in-memory backend.
        ///
        /// Nothing survives a restart; useful for demos and tests.
        pub async fn new(config: &Config) -> Result<Self, anyhow::Error> {
            let repo = Arc::new(InMemoryRepository::new());

            Ok(Self {
                whisky_repo: repo,
                assets_dir: config.assets_dir.clone(),
            })
        }
    }
}

#[cfg(feature = "sqlite")]
mod sqlite {
    use super::*;
    use crate::config::Config;
    use crate::storage::SqliteRepository;

    impl AppState {
        /// Creates AppState with the SQLite backend.
        ///
        /// Opens (or creates) the database file and the whiskies table.
        pub async fn new(config: &Config) -> Result<Self, anyhow::Error> {
            let repo = Arc::new(SqliteRepository::new(&config.sqlite_path).await?);

            Ok(Self {
                whisky_repo: repo,
                assets_dir: config.assets_dir.clone(),
            })
        }
    }
}

#[cfg(feature = "dynamodb")]
mod dynamodb {
    use super::*;
    use crate::config::Config;
    use crate::storage::DynamoDbRepository;

    impl AppState {
        /// Creates AppState with the DynamoDB backend.
        ///
        /// Uses the AWS SDK default credential chain; the table itself is
        /// provisioned by deployment tooling.
        pub async fn new(config: &Config) -> Result<Self, anyhow::Error> {
            let repo = Arc::new(DynamoDbRepository::from_env(&config.dynamodb_table).await?);

            Ok(Self {
                whisky_repo: repo,
                assets_dir: config.assets_dir.clone(),
            })
        }
    }
}
