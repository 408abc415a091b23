//! Subject topic repository.

use gts_core::entities::SubjectTopic;
use gts_core::enums::EntityKind;
use gts_core::inputs::{NewSubjectTopic, SubjectTopicUpdate};
use libsql::Connection;

use crate::error::{DatabaseError, is_foreign_key_violation, write_error};
use crate::helpers::Assignments;
use crate::repos::references::referenced_by;
use crate::service::RegistryService;

pub(crate) const SELECT_COLS: &str = "topic_id, topic_name";

pub(crate) fn row_to_subject_topic(row: &libsql::Row) -> Result<SubjectTopic, DatabaseError> {
    Ok(SubjectTopic {
        topic_id: row.get(0)?,
        topic_name: row.get(1)?,
    })
}

async fn fetch_subject_topic(
    conn: &Connection,
    id: i64,
) -> Result<Option<SubjectTopic>, DatabaseError> {
    let mut rows = conn
        .query(
            &format!("SELECT {SELECT_COLS} FROM subject_topic WHERE topic_id = ?1"),
            [id],
        )
        .await?;
    match rows.next().await? {
        Some(row) => Ok(Some(row_to_subject_topic(&row)?)),
        None => Ok(None),
    }
}

impl RegistryService {
    pub async fn list_subject_topics(&self) -> Result<Vec<SubjectTopic>, DatabaseError> {
        let conn = self.db().acquire().await;
        let mut rows = conn
            .query(
                &format!("SELECT {SELECT_COLS} FROM subject_topic ORDER BY topic_name"),
                (),
            )
            .await?;

        let mut topics = Vec::new();
        while let Some(row) = rows.next().await? {
            topics.push(row_to_subject_topic(&row)?);
        }
        Ok(topics)
    }

    pub async fn get_subject_topic(&self, id: i64) -> Result<Option<SubjectTopic>, DatabaseError> {
        let conn = self.db().acquire().await;
        fetch_subject_topic(&conn, id).await
    }

    pub async fn create_subject_topic(
        &self,
        input: &NewSubjectTopic,
    ) -> Result<SubjectTopic, DatabaseError> {
        let conn = self.db().acquire().await;
        conn.execute(
            "INSERT INTO subject_topic (topic_name) VALUES (?1)",
            [input.topic_name.as_str()],
        )
        .await
        .map_err(|e| write_error(e, EntityKind::SubjectTopic))?;

        let id = conn.last_insert_rowid();
        tracing::debug!(topic_id = id, "subject topic created");
        fetch_subject_topic(&conn, id)
            .await?
            .ok_or(DatabaseError::NoResult)
    }

    pub async fn update_subject_topic(
        &self,
        id: i64,
        update: &SubjectTopicUpdate,
    ) -> Result<Option<SubjectTopic>, DatabaseError> {
        let mut assignments = Assignments::new();
        assignments.set("topic_name", update.topic_name.clone());

        let conn = self.db().acquire().await;
        if assignments.is_empty() {
            return fetch_subject_topic(&conn, id).await;
        }

        let (sql, params) = assignments.into_statement("subject_topic", "topic_id", id);
        conn.execute(&sql, libsql::params_from_iter(params))
            .await
            .map_err(|e| write_error(e, EntityKind::SubjectTopic))?;
        fetch_subject_topic(&conn, id).await
    }

    pub async fn delete_subject_topic(&self, id: i64) -> Result<bool, DatabaseError> {
        let conn = self.db().acquire().await;
        match conn
            .execute("DELETE FROM subject_topic WHERE topic_id = ?1", [id])
            .await
        {
            Ok(n) => Ok(n > 0),
            Err(e) if is_foreign_key_violation(&e) => Err(DatabaseError::StillReferenced {
                entity: EntityKind::SubjectTopic,
                referenced_by: referenced_by(&conn, EntityKind::SubjectTopic, id).await?,
            }),
            Err(e) => Err(e.into()),
        }
    }
}
