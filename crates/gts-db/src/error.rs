//! Database error types for gts-db.

use gts_core::enums::EntityKind;
use thiserror::Error;

/// Errors from database operations.
#[derive(Debug, Error)]
pub enum DatabaseError {
    /// A SQL query failed or returned data that could not be parsed.
    #[error("Query failed: {0}")]
    Query(String),

    /// Schema migration failed.
    #[error("Migration failed: {0}")]
    Migration(String),

    /// Expected a result row but none was returned.
    #[error("No result returned")]
    NoResult,

    /// A delete was blocked because other rows still point at the target.
    ///
    /// `referenced_by` names the first dependent table found holding a
    /// reference, or `None` if the probe found nothing.
    #[error("{entity} is still referenced by {}", .referenced_by.map_or("other records", |k| k.as_str()))]
    StillReferenced {
        entity: EntityKind,
        referenced_by: Option<EntityKind>,
    },

    /// An insert or update pointed at a row that does not exist.
    #[error("{entity} references a row that does not exist")]
    MissingReference { entity: EntityKind },

    /// An insert or update collided with a unique column.
    #[error("{entity} with the same unique value already exists")]
    Duplicate { entity: EntityKind },

    /// Underlying libSQL error.
    #[error("libSQL error: {0}")]
    LibSql(#[from] libsql::Error),

    /// Catch-all for unexpected errors.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Detect `SQLite`'s foreign key failure.
///
/// libSQL surfaces constraint failures as `SqliteFailure` with the engine's
/// message text; the extended code is not exposed uniformly across
/// backends, so match on the message.
pub fn is_foreign_key_violation(e: &libsql::Error) -> bool {
    e.to_string().contains("FOREIGN KEY constraint failed")
}

/// Detect a UNIQUE or PRIMARY KEY collision.
pub fn is_unique_violation(e: &libsql::Error) -> bool {
    e.to_string().contains("UNIQUE constraint failed")
}

/// Classify a failed INSERT or UPDATE against `entity`'s table.
pub(crate) fn write_error(e: libsql::Error, entity: EntityKind) -> DatabaseError {
    if is_foreign_key_violation(&e) {
        DatabaseError::MissingReference { entity }
    } else if is_unique_violation(&e) {
        DatabaseError::Duplicate { entity }
    } else {
        DatabaseError::LibSql(e)
    }
}
