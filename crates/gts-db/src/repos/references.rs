//! Dependent-row probes used to explain a blocked delete.
//!
//! When `SQLite` rejects a DELETE with a foreign key failure it does not say
//! which child table fired. These probes check the known dependents of each
//! parent table in a fixed order and report the first that still holds a
//! reference.

use gts_core::enums::EntityKind;
use libsql::Connection;

use crate::error::DatabaseError;

/// Dependents of each parent, in probe order, as `(kind, EXISTS query)`.
fn dependents(entity: EntityKind) -> &'static [(EntityKind, &'static str)] {
    match entity {
        EntityKind::University => &[
            (
                EntityKind::Institute,
                "SELECT EXISTS(SELECT 1 FROM institute WHERE university_id = ?1)",
            ),
            (
                EntityKind::Thesis,
                "SELECT EXISTS(SELECT 1 FROM thesis WHERE university_id = ?1)",
            ),
        ],
        EntityKind::Institute => &[(
            EntityKind::Thesis,
            "SELECT EXISTS(SELECT 1 FROM thesis WHERE institute_id = ?1)",
        )],
        EntityKind::Person => &[
            (
                EntityKind::Thesis,
                "SELECT EXISTS(SELECT 1 FROM thesis WHERE author_id = ?1)",
            ),
            (
                EntityKind::SupervisorAssignment,
                "SELECT EXISTS(SELECT 1 FROM supervisor_assignment WHERE person_id = ?1)",
            ),
        ],
        EntityKind::SubjectTopic => &[(
            EntityKind::ThesisSubjectTopic,
            "SELECT EXISTS(SELECT 1 FROM thesis_subject_topic WHERE topic_id = ?1)",
        )],
        EntityKind::Keyword => &[(
            EntityKind::ThesisKeyword,
            "SELECT EXISTS(SELECT 1 FROM thesis_keyword WHERE keyword_id = ?1)",
        )],
        EntityKind::Thesis => &[
            (
                EntityKind::SupervisorAssignment,
                "SELECT EXISTS(SELECT 1 FROM supervisor_assignment WHERE thesis_id = ?1)",
            ),
            (
                EntityKind::ThesisSubjectTopic,
                "SELECT EXISTS(SELECT 1 FROM thesis_subject_topic WHERE thesis_id = ?1)",
            ),
            (
                EntityKind::ThesisKeyword,
                "SELECT EXISTS(SELECT 1 FROM thesis_keyword WHERE thesis_id = ?1)",
            ),
        ],
        EntityKind::SupervisorAssignment
        | EntityKind::ThesisSubjectTopic
        | EntityKind::ThesisKeyword => &[],
    }
}

/// First dependent kind still referencing `entity` row `id`, if any.
pub(crate) async fn referenced_by(
    conn: &Connection,
    entity: EntityKind,
    id: i64,
) -> Result<Option<EntityKind>, DatabaseError> {
    for (kind, sql) in dependents(entity) {
        let mut rows = conn.query(sql, [id]).await?;
        let exists = match rows.next().await? {
            Some(row) => row.get::<i64>(0)? != 0,
            None => false,
        };
        if exists {
            return Ok(Some(*kind));
        }
    }
    Ok(None)
}
