//! Person repository.

use gts_core::entities::Person;
use gts_core::enums::EntityKind;
use gts_core::inputs::{NewPerson, PersonUpdate};
use libsql::Connection;

use crate::error::{DatabaseError, is_foreign_key_violation, write_error};
use crate::helpers::{Assignments, get_opt_string};
use crate::repos::references::referenced_by;
use crate::service::RegistryService;

const SELECT_COLS: &str = "person_id, first_name, last_name, email, affiliation";

fn row_to_person(row: &libsql::Row) -> Result<Person, DatabaseError> {
    Ok(Person {
        person_id: row.get(0)?,
        first_name: row.get(1)?,
        last_name: row.get(2)?,
        email: row.get(3)?,
        affiliation: get_opt_string(row, 4)?,
    })
}

async fn fetch_person(conn: &Connection, id: i64) -> Result<Option<Person>, DatabaseError> {
    let mut rows = conn
        .query(
            &format!("SELECT {SELECT_COLS} FROM person WHERE person_id = ?1"),
            [id],
        )
        .await?;
    match rows.next().await? {
        Some(row) => Ok(Some(row_to_person(&row)?)),
        None => Ok(None),
    }
}

/// Blank affiliations are stored as NULL.
fn normalize_affiliation(affiliation: Option<&str>) -> Option<String> {
    affiliation
        .map(str::trim)
        .filter(|a| !a.is_empty())
        .map(String::from)
}

impl RegistryService {
    /// All people, ordered by last name then first name.
    pub async fn list_people(&self) -> Result<Vec<Person>, DatabaseError> {
        let conn = self.db().acquire().await;
        let mut rows = conn
            .query(
                &format!(
                    "SELECT {SELECT_COLS} FROM person ORDER BY last_name, first_name, person_id"
                ),
                (),
            )
            .await?;

        let mut people = Vec::new();
        while let Some(row) = rows.next().await? {
            people.push(row_to_person(&row)?);
        }
        Ok(people)
    }

    pub async fn get_person(&self, id: i64) -> Result<Option<Person>, DatabaseError> {
        let conn = self.db().acquire().await;
        fetch_person(&conn, id).await
    }

    pub async fn create_person(&self, input: &NewPerson) -> Result<Person, DatabaseError> {
        let conn = self.db().acquire().await;
        conn.execute(
            "INSERT INTO person (first_name, last_name, email, affiliation) VALUES (?1, ?2, ?3, ?4)",
            libsql::params![
                input.first_name.as_str(),
                input.last_name.as_str(),
                input.email.as_str(),
                normalize_affiliation(input.affiliation.as_deref())
            ],
        )
        .await
        .map_err(|e| write_error(e, EntityKind::Person))?;

        let id = conn.last_insert_rowid();
        tracing::debug!(person_id = id, "person created");
        fetch_person(&conn, id).await?.ok_or(DatabaseError::NoResult)
    }

    pub async fn update_person(
        &self,
        id: i64,
        update: &PersonUpdate,
    ) -> Result<Option<Person>, DatabaseError> {
        let mut assignments = Assignments::new();
        assignments.set("first_name", update.first_name.clone());
        assignments.set("last_name", update.last_name.clone());
        assignments.set("email", update.email.clone());
        assignments.set_nullable(
            "affiliation",
            update
                .affiliation
                .as_ref()
                .map(|a| normalize_affiliation(a.as_deref())),
        );

        let conn = self.db().acquire().await;
        if assignments.is_empty() {
            return fetch_person(&conn, id).await;
        }

        let (sql, params) = assignments.into_statement("person", "person_id", id);
        conn.execute(&sql, libsql::params_from_iter(params))
            .await
            .map_err(|e| write_error(e, EntityKind::Person))?;
        fetch_person(&conn, id).await
    }

    pub async fn delete_person(&self, id: i64) -> Result<bool, DatabaseError> {
        let conn = self.db().acquire().await;
        match conn
            .execute("DELETE FROM person WHERE person_id = ?1", [id])
            .await
        {
            Ok(n) => Ok(n > 0),
            Err(e) if is_foreign_key_violation(&e) => Err(DatabaseError::StillReferenced {
                entity: EntityKind::Person,
                referenced_by: referenced_by(&conn, EntityKind::Person, id).await?,
            }),
            Err(e) => Err(e.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{new_thesis, seed_fixture, seed_person, test_service};
    use crate::updates::person::PersonUpdateBuilder;
    use pretty_assertions::assert_eq;

    #[tokio::test]
    async fn create_then_get_roundtrip() {
        let svc = test_service().await;
        let input = NewPerson {
            first_name: "Cahit".into(),
            last_name: "Arf".into(),
            email: "cahit.arf@example.org".into(),
            affiliation: Some("Istanbul University".into()),
        };
        let created = svc.create_person(&input).await.unwrap();
        let fetched = svc.get_person(created.person_id).await.unwrap().unwrap();

        assert_eq!(fetched.first_name, input.first_name);
        assert_eq!(fetched.last_name, input.last_name);
        assert_eq!(fetched.email, input.email);
        assert_eq!(fetched.affiliation, input.affiliation);
    }

    #[tokio::test]
    async fn blank_affiliation_is_stored_as_null() {
        let svc = test_service().await;
        let created = svc
            .create_person(&NewPerson {
                first_name: "Feza".into(),
                last_name: "Gürsey".into(),
                email: "feza@example.org".into(),
                affiliation: Some(String::new()),
            })
            .await
            .unwrap();
        assert_eq!(created.affiliation, None);
    }

    #[tokio::test]
    async fn list_is_ordered_by_last_then_first_name() {
        let svc = test_service().await;
        seed_person(&svc, "Zeynep", "Aydın").await;
        seed_person(&svc, "Ali", "Yılmaz").await;
        seed_person(&svc, "Ayşe", "Aydın").await;

        let names: Vec<(String, String)> = svc
            .list_people()
            .await
            .unwrap()
            .into_iter()
            .map(|p| (p.last_name, p.first_name))
            .collect();
        assert_eq!(
            names,
            vec![
                ("Aydın".to_string(), "Ayşe".to_string()),
                ("Aydın".to_string(), "Zeynep".to_string()),
                ("Yılmaz".to_string(), "Ali".to_string()),
            ]
        );
    }

    #[tokio::test]
    async fn explicit_null_clears_affiliation() {
        let svc = test_service().await;
        let person = seed_person(&svc, "Oktay", "Sinanoğlu").await;
        svc.update_person(
            person.person_id,
            &PersonUpdateBuilder::new()
                .affiliation(Some("Yale".into()))
                .build(),
        )
        .await
        .unwrap();

        // An update without the field leaves it alone.
        let kept = svc
            .update_person(
                person.person_id,
                &PersonUpdateBuilder::new().first_name("Oktay").build(),
            )
            .await
            .unwrap()
            .unwrap();
        assert_eq!(kept.affiliation.as_deref(), Some("Yale"));

        let cleared = svc
            .update_person(
                person.person_id,
                &PersonUpdateBuilder::new().affiliation(None).build(),
            )
            .await
            .unwrap()
            .unwrap();
        assert_eq!(cleared.affiliation, None);
        assert_eq!(cleared.last_name, "Sinanoğlu");
    }

    #[tokio::test]
    async fn duplicate_email_is_rejected() {
        let svc = test_service().await;
        let first = seed_person(&svc, "Aziz", "Sancar").await;
        let err = svc
            .create_person(&NewPerson {
                first_name: "Other".into(),
                last_name: "Person".into(),
                email: first.email.clone(),
                affiliation: None,
            })
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            DatabaseError::Duplicate {
                entity: EntityKind::Person
            }
        ));
    }

    #[tokio::test]
    async fn delete_author_is_still_referenced() {
        let svc = test_service().await;
        let fx = seed_fixture(&svc).await;
        svc.create_thesis(&new_thesis(&fx, "Analytical engines", 2019))
            .await
            .unwrap();

        let err = svc.delete_person(fx.author_id).await.unwrap_err();
        assert!(matches!(
            err,
            DatabaseError::StillReferenced {
                entity: EntityKind::Person,
                referenced_by: Some(EntityKind::Thesis),
            }
        ));

        let err = svc.delete_person(fx.supervisor_id).await.unwrap_err();
        assert!(matches!(
            err,
            DatabaseError::StillReferenced {
                entity: EntityKind::Person,
                referenced_by: Some(EntityKind::SupervisorAssignment),
            }
        ));

        assert!(svc.delete_person(fx.co_supervisor_id).await.unwrap());
    }
}
