//! Keyword interning.
//!
//! Keywords are never created directly. A thesis write names them by text,
//! and each text is interned to a single `keyword` row the first time any
//! thesis uses it.

use gts_core::enums::EntityKind;
use libsql::Connection;

use crate::error::{DatabaseError, write_error};

/// Return the id of the keyword with exactly this text, inserting it if absent.
///
/// Must run on the caller's transaction so the lookup and insert cannot
/// interleave with another thesis introducing the same word.
///
/// # Errors
///
/// Returns `DatabaseError` if either statement fails.
pub async fn intern_keyword(conn: &Connection, word: &str) -> Result<i64, DatabaseError> {
    {
        let mut rows = conn
            .query("SELECT keyword_id FROM keyword WHERE word = ?1", [word])
            .await?;
        if let Some(row) = rows.next().await? {
            return Ok(row.get(0)?);
        }
    }

    conn.execute("INSERT INTO keyword (word) VALUES (?1)", [word])
        .await
        .map_err(|e| write_error(e, EntityKind::Keyword))?;
    Ok(conn.last_insert_rowid())
}

/// Intern each word and link it to `thesis_id`. Repeated words link once.
pub(crate) async fn link_keywords(
    conn: &Connection,
    thesis_id: i64,
    words: &[String],
) -> Result<(), DatabaseError> {
    for word in words {
        let keyword_id = intern_keyword(conn, word).await?;
        conn.execute(
            "INSERT OR IGNORE INTO thesis_keyword (thesis_id, keyword_id) VALUES (?1, ?2)",
            libsql::params![thesis_id, keyword_id],
        )
        .await
        .map_err(|e| write_error(e, EntityKind::ThesisKeyword))?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{count_rows, test_service};

    #[tokio::test]
    async fn intern_is_idempotent() {
        let svc = test_service().await;
        let (first, second, other) = {
            let conn = svc.db().acquire().await;
            (
                intern_keyword(&conn, "machine learning").await.unwrap(),
                intern_keyword(&conn, "machine learning").await.unwrap(),
                intern_keyword(&conn, "Machine Learning").await.unwrap(),
            )
        };

        assert_eq!(first, second);
        // Exact text match: different case is a different keyword.
        assert_ne!(first, other);
        assert_eq!(count_rows(&svc, "keyword").await, 2);
    }
}
