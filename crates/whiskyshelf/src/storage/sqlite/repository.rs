//! SQLite repository implementation.

use async_trait::async_trait;
use tokio_rusqlite::Connection;

use whiskyshelf_core::storage::{RepositoryError, Result, WhiskyRepository};
use whiskyshelf_core::whisky::{Whisky, WhiskyId};

use super::error::map_tokio_rusqlite_error;
use super::schema;

/// Helper to wrap rusqlite errors for tokio_rusqlite closures.
fn wrap_err(e: rusqlite::Error) -> tokio_rusqlite::Error {
    tokio_rusqlite::Error::Rusqlite(e)
}

/// Converts a whiskies row into a Whisky.
fn row_to_whisky(row: &rusqlite::Row<'_>) -> rusqlite::Result<Whisky> {
    let id: i64 = row.get(0)?;
    Ok(Whisky {
        id: Some(WhiskyId::from(id)),
        name: row.get(1)?,
        origin: row.get(2)?,
    })
}

/// SQLite-based repository implementation.
///
/// Row ids come from the table's AUTOINCREMENT column; the connection is
/// handed back by `tokio_rusqlite` on every exit path, including errors.
pub struct SqliteRepository {
    conn: Connection,
}

impl SqliteRepository {
    /// Creates a new repository with a file-based database.
    ///
    /// The database file will be created if it doesn't exist, and the
    /// whiskies table along with it.
    pub async fn new(path: &str) -> Result<Self> {
        let conn = Connection::open(path)
            .await
            .map_err(|e| RepositoryError::ConnectionFailed(e.to_string()))?;

        Self::init_schema(&conn).await?;

        Ok(Self { conn })
    }

    /// Creates a new repository with an in-memory database.
    ///
    /// Useful for testing - data is lost when the connection is dropped.
    pub async fn new_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()
            .await
            .map_err(|e| RepositoryError::ConnectionFailed(e.to_string()))?;

        Self::init_schema(&conn).await?;

        Ok(Self { conn })
    }

    /// Initialize the database schema.
    async fn init_schema(conn: &Connection) -> Result<()> {
        conn.call(|conn| {
            conn.execute(schema::CREATE_TABLE, []).map_err(wrap_err)?;
            Ok(())
        })
        .await
        .map_err(|e| RepositoryError::QueryFailed(e.to_string()))
    }
}

#[async_trait]
impl WhiskyRepository for SqliteRepository {
    async fn list_all(&self) -> Result<Vec<Whisky>> {
        self.conn
            .call(|conn| {
                let mut stmt = conn
                    .prepare(schema::SELECT_ALL_WHISKIES)
                    .map_err(wrap_err)?;
                let rows = stmt.query_map([], row_to_whisky).map_err(wrap_err)?;

                let mut whiskies = Vec::new();
                for row_result in rows {
                    whiskies.push(row_result.map_err(wrap_err)?);
                }
                Ok(whiskies)
            })
            .await
            .map_err(|e| RepositoryError::QueryFailed(e.to_string()))
    }

    async fn create(&self, whisky: Whisky) -> Result<Whisky> {
        let name = whisky.name.clone();
        let origin = whisky.origin.clone();

        let id = self
            .conn
            .call(move |conn| {
                conn.execute(schema::INSERT_WHISKY, rusqlite::params![name, origin])
                    .map_err(wrap_err)?;
                Ok(conn.last_insert_rowid())
            })
            .await
            .map_err(|e| RepositoryError::QueryFailed(e.to_string()))?;

        Ok(Whisky {
            id: Some(WhiskyId::from(id)),
            ..whisky
        })
    }

    async fn get_by_id(&self, id: &WhiskyId) -> Result<Option<Whisky>> {
        // A non-numeric id can never match an integer row id.
        let Some(key) = id.as_i64() else {
            return Ok(None);
        };

        self.conn
            .call(move |conn| {
                let mut stmt = conn.prepare(schema::SELECT_WHISKY_BY_ID).map_err(wrap_err)?;
                match stmt.query_row([key], row_to_whisky) {
                    Ok(whisky) => Ok(Some(whisky)),
                    Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
                    Err(e) => Err(wrap_err(e)),
                }
            })
            .await
            .map_err(|e| map_tokio_rusqlite_error(e, id.to_string()))
    }

    async fn update_by_id(&self, id: &WhiskyId, whisky: Whisky) -> Result<Whisky> {
        let Some(key) = id.as_i64() else {
            return Err(RepositoryError::NotFound { id: id.to_string() });
        };
        let name = whisky.name.clone();
        let origin = whisky.origin.clone();

        self.conn
            .call(move |conn| {
                let rows = conn
                    .execute(schema::UPDATE_WHISKY, rusqlite::params![key, name, origin])
                    .map_err(wrap_err)?;
                if rows == 0 {
                    Err(wrap_err(rusqlite::Error::QueryReturnedNoRows))
                } else {
                    Ok(())
                }
            })
            .await
            .map_err(|e| map_tokio_rusqlite_error(e, id.to_string()))?;

        // The row was written from these fields; no re-read needed.
        Ok(Whisky {
            id: Some(id.clone()),
            ..whisky
        })
    }

    async fn delete_by_id(&self, id: &WhiskyId) -> Result<()> {
        // A non-numeric id names nothing; deleting it is a no-op success.
        let Some(key) = id.as_i64() else {
            return Ok(());
        };

        self.conn
            .call(move |conn| {
                conn.execute(schema::DELETE_WHISKY, [key]).map_err(wrap_err)?;
                Ok(())
            })
            .await
            .map_err(|e| map_tokio_rusqlite_error(e, id.to_string()))?;

        Ok(())
    }
}
