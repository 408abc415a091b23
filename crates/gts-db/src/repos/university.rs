//! University repository.

use gts_core::entities::University;
use gts_core::enums::EntityKind;
use gts_core::inputs::{NewUniversity, UniversityUpdate};
use libsql::Connection;

use crate::error::{DatabaseError, is_foreign_key_violation, write_error};
use crate::helpers::Assignments;
use crate::repos::references::referenced_by;
use crate::service::RegistryService;

const SELECT_COLS: &str = "university_id, name, country, city";

fn row_to_university(row: &libsql::Row) -> Result<University, DatabaseError> {
    Ok(University {
        university_id: row.get(0)?,
        name: row.get(1)?,
        country: row.get(2)?,
        city: row.get(3)?,
    })
}

async fn fetch_university(conn: &Connection, id: i64) -> Result<Option<University>, DatabaseError> {
    let mut rows = conn
        .query(
            &format!("SELECT {SELECT_COLS} FROM university WHERE university_id = ?1"),
            [id],
        )
        .await?;
    match rows.next().await? {
        Some(row) => Ok(Some(row_to_university(&row)?)),
        None => Ok(None),
    }
}

impl RegistryService {
    pub async fn list_universities(&self) -> Result<Vec<University>, DatabaseError> {
        let conn = self.db().acquire().await;
        let mut rows = conn
            .query(
                &format!("SELECT {SELECT_COLS} FROM university ORDER BY name, university_id"),
                (),
            )
            .await?;

        let mut universities = Vec::new();
        while let Some(row) = rows.next().await? {
            universities.push(row_to_university(&row)?);
        }
        Ok(universities)
    }

    pub async fn get_university(&self, id: i64) -> Result<Option<University>, DatabaseError> {
        let conn = self.db().acquire().await;
        fetch_university(&conn, id).await
    }

    pub async fn create_university(
        &self,
        input: &NewUniversity,
    ) -> Result<University, DatabaseError> {
        let conn = self.db().acquire().await;
        conn.execute(
            "INSERT INTO university (name, country, city) VALUES (?1, ?2, ?3)",
            libsql::params![input.name.as_str(), input.country.as_str(), input.city.as_str()],
        )
        .await
        .map_err(|e| write_error(e, EntityKind::University))?;

        let id = conn.last_insert_rowid();
        tracing::debug!(university_id = id, "university created");
        fetch_university(&conn, id).await?.ok_or(DatabaseError::NoResult)
    }

    /// Apply `update` to university `id`. Returns `None` if the row does not exist.
    pub async fn update_university(
        &self,
        id: i64,
        update: &UniversityUpdate,
    ) -> Result<Option<University>, DatabaseError> {
        let mut assignments = Assignments::new();
        assignments.set("name", update.name.clone());
        assignments.set("country", update.country.clone());
        assignments.set("city", update.city.clone());

        let conn = self.db().acquire().await;
        if assignments.is_empty() {
            return fetch_university(&conn, id).await;
        }

        let (sql, params) = assignments.into_statement("university", "university_id", id);
        conn.execute(&sql, libsql::params_from_iter(params))
            .await
            .map_err(|e| write_error(e, EntityKind::University))?;
        fetch_university(&conn, id).await
    }

    /// Delete university `id`. Returns `false` if no row was deleted.
    pub async fn delete_university(&self, id: i64) -> Result<bool, DatabaseError> {
        let conn = self.db().acquire().await;
        match conn
            .execute("DELETE FROM university WHERE university_id = ?1", [id])
            .await
        {
            Ok(n) => Ok(n > 0),
            Err(e) if is_foreign_key_violation(&e) => Err(DatabaseError::StillReferenced {
                entity: EntityKind::University,
                referenced_by: referenced_by(&conn, EntityKind::University, id).await?,
            }),
            Err(e) => Err(e.into()),
        }
    }
}
