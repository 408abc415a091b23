//! Institute repository.

use gts_core::entities::Institute;
use gts_core::enums::EntityKind;
use gts_core::inputs::{InstituteUpdate, NewInstitute};
use libsql::Connection;

use crate::error::{DatabaseError, is_foreign_key_violation, write_error};
use crate::helpers::Assignments;
use crate::repos::references::referenced_by;
use crate::service::RegistryService;

const SELECT_COLS: &str = "institute_id, name, university_id";

fn row_to_institute(row: &libsql::Row) -> Result<Institute, DatabaseError> {
    Ok(Institute {
        institute_id: row.get(0)?,
        name: row.get(1)?,
        university_id: row.get(2)?,
    })
}

async fn fetch_institute(conn: &Connection, id: i64) -> Result<Option<Institute>, DatabaseError> {
    let mut rows = conn
        .query(
            &format!("SELECT {SELECT_COLS} FROM institute WHERE institute_id = ?1"),
            [id],
        )
        .await?;
    match rows.next().await? {
        Some(row) => Ok(Some(row_to_institute(&row)?)),
        None => Ok(None),
    }
}

async fn collect(mut rows: libsql::Rows) -> Result<Vec<Institute>, DatabaseError> {
    let mut institutes = Vec::new();
    while let Some(row) = rows.next().await? {
        institutes.push(row_to_institute(&row)?);
    }
    Ok(institutes)
}

impl RegistryService {
    pub async fn list_institutes(&self) -> Result<Vec<Institute>, DatabaseError> {
        let conn = self.db().acquire().await;
        let rows = conn
            .query(
                &format!("SELECT {SELECT_COLS} FROM institute ORDER BY name, institute_id"),
                (),
            )
            .await?;
        collect(rows).await
    }

    /// Institutes belonging to one university, same order as [`Self::list_institutes`].
    pub async fn list_institutes_for_university(
        &self,
        university_id: i64,
    ) -> Result<Vec<Institute>, DatabaseError> {
        let conn = self.db().acquire().await;
        let rows = conn
            .query(
                &format!(
                    "SELECT {SELECT_COLS} FROM institute WHERE university_id = ?1 \
                     ORDER BY name, institute_id"
                ),
                [university_id],
            )
            .await?;
        collect(rows).await
    }

    pub async fn get_institute(&self, id: i64) -> Result<Option<Institute>, DatabaseError> {
        let conn = self.db().acquire().await;
        fetch_institute(&conn, id).await
    }

    pub async fn create_institute(&self, input: &NewInstitute) -> Result<Institute, DatabaseError> {
        let conn = self.db().acquire().await;
        conn.execute(
            "INSERT INTO institute (name, university_id) VALUES (?1, ?2)",
            libsql::params![input.name.as_str(), input.university_id],
        )
        .await
        .map_err(|e| write_error(e, EntityKind::Institute))?;

        let id = conn.last_insert_rowid();
        tracing::debug!(institute_id = id, university_id = input.university_id, "institute created");
        fetch_institute(&conn, id).await?.ok_or(DatabaseError::NoResult)
    }

    pub async fn update_institute(
        &self,
        id: i64,
        update: &InstituteUpdate,
    ) -> Result<Option<Institute>, DatabaseError> {
        let mut assignments = Assignments::new();
        assignments.set("name", update.name.clone());
        assignments.set("university_id", update.university_id);

        let conn = self.db().acquire().await;
        if assignments.is_empty() {
            return fetch_institute(&conn, id).await;
        }

        let (sql, params) = assignments.into_statement("institute", "institute_id", id);
        conn.execute(&sql, libsql::params_from_iter(params))
            .await
            .map_err(|e| write_error(e, EntityKind::Institute))?;
        fetch_institute(&conn, id).await
    }

    pub async fn delete_institute(&self, id: i64) -> Result<bool, DatabaseError> {
        let conn = self.db().acquire().await;
        match conn
            .execute("DELETE FROM institute WHERE institute_id = ?1", [id])
            .await
        {
            Ok(n) => Ok(n > 0),
            Err(e) if is_foreign_key_violation(&e) => Err(DatabaseError::StillReferenced {
                entity: EntityKind::Institute,
                referenced_by: referenced_by(&conn, EntityKind::Institute, id).await?,
            }),
            Err(e) => Err(e.into()),
        }
    }
}
