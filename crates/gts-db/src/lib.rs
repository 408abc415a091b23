//! # gts-db
//!
//! libSQL storage for the thesis registry.
//!
//! Holds every relational record: universities, institutes, people, subject
//! topics, keywords, theses, and the three thesis association tables.
//! Repository methods live on [`service::RegistryService`], one module per
//! entity under [`repos`].
//!
//! Uses the `libsql` crate (C `SQLite` fork) in local mode with foreign keys
//! enforced on the connection.

pub mod error;
pub mod helpers;
mod migrations;
pub mod repos;
pub mod service;
pub mod updates;

#[cfg(test)]
mod test_support;

use error::DatabaseError;
use libsql::Builder;
use tokio::sync::{Mutex, MutexGuard};

/// Central database handle.
///
/// Wraps a libSQL database and its single connection. The connection sits
/// behind an async mutex: each service call holds the guard for its whole
/// unit of work, so a transaction never interleaves with another request.
pub struct GtsDb {
    #[allow(dead_code)]
    db: libsql::Database,
    conn: Mutex<libsql::Connection>,
}

impl GtsDb {
    /// Open a local database at the given path. `:memory:` is accepted.
    ///
    /// Runs migrations automatically on open.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the database cannot be opened or
    /// migrations fail.
    pub async fn open_local(path: &str) -> Result<Self, DatabaseError> {
        let db = Builder::new_local(path).build().await?;
        let conn = db.connect()?;

        // Enable foreign keys (must be per-connection in SQLite)
        conn.execute("PRAGMA foreign_keys = ON", ())
            .await
            .map_err(|e| DatabaseError::Migration(format!("PRAGMA foreign_keys: {e}")))?;

        let gts_db = Self {
            db,
            conn: Mutex::new(conn),
        };
        gts_db.run_migrations().await?;
        tracing::debug!(path, "database opened");
        Ok(gts_db)
    }

    /// Acquire the connection for one unit of work.
    ///
    /// The guard is released on drop, including on early return with an error.
    pub async fn acquire(&self) -> MutexGuard<'_, libsql::Connection> {
        self.conn.lock().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn test_db() -> GtsDb {
        GtsDb::open_local(":memory:").await.unwrap()
    }

    #[tokio::test]
    async fn open_local_creates_schema() {
        let db = test_db().await;
        let conn = db.acquire().await;

        let tables = [
            "university",
            "institute",
            "person",
            "subject_topic",
            "keyword",
            "thesis",
            "supervisor_assignment",
            "thesis_subject_topic",
            "thesis_keyword",
        ];
        for table in &tables {
            let mut rows = conn
                .query(
                    "SELECT name FROM sqlite_master WHERE type='table' AND name=?1",
                    [*table],
                )
                .await
                .unwrap();
            let row = rows.next().await.unwrap();
            assert!(row.is_some(), "table '{table}' should exist");
        }
    }

    #[tokio::test]
    async fn foreign_keys_are_enforced() {
        let db = test_db().await;
        let conn = db.acquire().await;
        let result = conn
            .execute(
                "INSERT INTO institute (name, university_id) VALUES ('Orphan', 999)",
                (),
            )
            .await;
        let err = result.unwrap_err();
        assert!(error::is_foreign_key_violation(&err), "got: {err}");
    }

    #[tokio::test]
    async fn thesis_type_check_constraint() {
        let db = test_db().await;
        let conn = db.acquire().await;
        conn.execute_batch(
            "INSERT INTO university (name, country, city) VALUES ('U', 'C', 'X');
             INSERT INTO institute (name, university_id) VALUES ('I', 1);
             INSERT INTO person (first_name, last_name, email) VALUES ('A', 'B', 'a@b.c');",
        )
        .await
        .unwrap();

        let result = conn
            .execute(
                "INSERT INTO thesis (title, abstract, author_id, year, type, university_id, \
                 institute_id, num_pages, language, submission_date) \
                 VALUES ('T', 'A', 1, 2020, 'Bachelor', 1, 1, 10, 'English', '2020-01-01')",
                (),
            )
            .await;
        assert!(result.is_err(), "unknown thesis type should be rejected");
    }

    #[tokio::test]
    async fn idempotent_migrations() {
        let db = test_db().await;
        // Run migrations again; should not fail
        db.run_migrations().await.unwrap();
    }

    #[tokio::test]
    async fn file_backed_database_persists() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("gts.db");
        let path = path.to_str().unwrap();

        {
            let db = GtsDb::open_local(path).await.unwrap();
            db.acquire()
                .await
                .execute(
                    "INSERT INTO subject_topic (topic_name) VALUES ('Physics')",
                    (),
                )
                .await
                .unwrap();
        }

        let db = GtsDb::open_local(path).await.unwrap();
        let conn = db.acquire().await;
        let mut rows = conn
            .query("SELECT topic_name FROM subject_topic", ())
            .await
            .unwrap();
        let row = rows.next().await.unwrap().unwrap();
        assert_eq!(row.get::<String>(0).unwrap(), "Physics");
    }
}
