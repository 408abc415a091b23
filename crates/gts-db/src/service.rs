//! Service layer hosting every repository method.
//!
//! `RegistryService` wraps `GtsDb`. All repo methods are implemented as
//! `impl RegistryService` blocks in [`crate::repos`].

use crate::GtsDb;
use crate::error::DatabaseError;

/// Entry point for all registry reads and writes.
///
/// Single-statement operations acquire the connection, run, and release.
/// Thesis aggregate writes follow this protocol instead:
/// 1. Acquire the connection and begin a transaction
/// 2. Execute every statement of the aggregate on the transaction
/// 3. Commit, or roll back and return the first error unchanged
pub struct RegistryService {
    db: GtsDb,
}

impl RegistryService {
    /// Create a new service over a local database.
    ///
    /// # Arguments
    ///
    /// * `db_path`: path to the libSQL database file, or `":memory:"` for tests.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the database cannot be opened.
    pub async fn new_local(db_path: &str) -> Result<Self, DatabaseError> {
        let db = GtsDb::open_local(db_path).await?;
        Ok(Self { db })
    }

    /// Create from an existing `GtsDb`.
    #[must_use]
    pub const fn from_db(db: GtsDb) -> Self {
        Self { db }
    }

    /// Access the underlying database handle.
    #[must_use]
    pub const fn db(&self) -> &GtsDb {
        &self.db
    }
}

/// Commit `tx` if `result` is `Ok`, otherwise roll back and hand back the
/// original error.
///
/// A failed rollback is only logged; the caller still gets the original error.
pub(crate) async fn finish<T>(
    tx: libsql::Transaction,
    result: Result<T, DatabaseError>,
) -> Result<T, DatabaseError> {
    match result {
        Ok(value) => {
            tx.commit().await?;
            Ok(value)
        }
        Err(e) => {
            if let Err(rollback) = tx.rollback().await {
                tracing::warn!(error = %rollback, "rollback failed");
            }
            Err(e)
        }
    }
}
