//! Thesis repository: the thesis row plus its three association sets.
//!
//! A thesis aggregate spans `thesis`, `supervisor_assignment`,
//! `thesis_subject_topic`, `thesis_keyword`, and lazily `keyword`. Every
//! write to it runs in one transaction on the service connection; any
//! failing statement rolls the whole call back.
//!
//! Reads return the bare row. Associations are three separate queries,
//! composed into a [`ThesisDetail`] at the read boundary.

use gts_core::entities::{SubjectTopic, SupervisorAssignment, Thesis, ThesisDetail};
use gts_core::enums::{EntityKind, SupervisorRole};
use gts_core::inputs::{NewThesis, ThesisUpdate};
use libsql::Connection;

use crate::error::{DatabaseError, write_error};
use crate::helpers::{Assignments, get_i32, parse_date, parse_enum};
use crate::repos::keyword::link_keywords;
use crate::repos::subject_topic::row_to_subject_topic;
use crate::service::{RegistryService, finish};

pub(crate) const SELECT_COLS: &str = "thesis_id, title, abstract, author_id, year, type, \
     university_id, institute_id, num_pages, language, submission_date";

pub(crate) fn row_to_thesis(row: &libsql::Row) -> Result<Thesis, DatabaseError> {
    Ok(Thesis {
        thesis_id: row.get(0)?,
        title: row.get(1)?,
        abstract_text: row.get(2)?,
        author_id: row.get(3)?,
        year: get_i32(row, 4)?,
        thesis_type: parse_enum(&row.get::<String>(5)?)?,
        university_id: row.get(6)?,
        institute_id: row.get(7)?,
        num_pages: get_i32(row, 8)?,
        language: row.get(9)?,
        submission_date: parse_date(&row.get::<String>(10)?)?,
    })
}

pub(crate) async fn collect_theses(mut rows: libsql::Rows) -> Result<Vec<Thesis>, DatabaseError> {
    let mut theses = Vec::new();
    while let Some(row) = rows.next().await? {
        theses.push(row_to_thesis(&row)?);
    }
    Ok(theses)
}

async fn fetch_thesis(conn: &Connection, id: i64) -> Result<Option<Thesis>, DatabaseError> {
    let mut rows = conn
        .query(
            &format!("SELECT {SELECT_COLS} FROM thesis WHERE thesis_id = ?1"),
            [id],
        )
        .await?;
    match rows.next().await? {
        Some(row) => Ok(Some(row_to_thesis(&row)?)),
        None => Ok(None),
    }
}

async fn fetch_supervisors(
    conn: &Connection,
    thesis_id: i64,
) -> Result<Vec<SupervisorAssignment>, DatabaseError> {
    // 'Supervisor' sorts after 'Co-Supervisor', so DESC lists supervisors first.
    let mut rows = conn
        .query(
            "SELECT thesis_id, person_id, role FROM supervisor_assignment \
             WHERE thesis_id = ?1 ORDER BY role DESC, person_id",
            [thesis_id],
        )
        .await?;
    let mut assignments = Vec::new();
    while let Some(row) = rows.next().await? {
        assignments.push(SupervisorAssignment {
            thesis_id: row.get(0)?,
            person_id: row.get(1)?,
            role: parse_enum(&row.get::<String>(2)?)?,
        });
    }
    Ok(assignments)
}

async fn fetch_subject_topics(
    conn: &Connection,
    thesis_id: i64,
) -> Result<Vec<SubjectTopic>, DatabaseError> {
    let mut rows = conn
        .query(
            "SELECT st.topic_id, st.topic_name FROM subject_topic st \
             INNER JOIN thesis_subject_topic tst ON st.topic_id = tst.topic_id \
             WHERE tst.thesis_id = ?1 ORDER BY st.topic_name",
            [thesis_id],
        )
        .await?;
    let mut topics = Vec::new();
    while let Some(row) = rows.next().await? {
        topics.push(row_to_subject_topic(&row)?);
    }
    Ok(topics)
}

async fn fetch_keywords(conn: &Connection, thesis_id: i64) -> Result<Vec<String>, DatabaseError> {
    let mut rows = conn
        .query(
            "SELECT k.word FROM keyword k \
             INNER JOIN thesis_keyword tk ON k.keyword_id = tk.keyword_id \
             WHERE tk.thesis_id = ?1 ORDER BY k.word",
            [thesis_id],
        )
        .await?;
    let mut words = Vec::new();
    while let Some(row) = rows.next().await? {
        words.push(row.get::<String>(0)?);
    }
    Ok(words)
}

async fn insert_supervisors(
    conn: &Connection,
    thesis_id: i64,
    person_ids: &[i64],
    role: SupervisorRole,
) -> Result<(), DatabaseError> {
    for person_id in person_ids {
        conn.execute(
            "INSERT INTO supervisor_assignment (thesis_id, person_id, role) VALUES (?1, ?2, ?3)",
            libsql::params![thesis_id, *person_id, role.as_str()],
        )
        .await
        .map_err(|e| write_error(e, EntityKind::SupervisorAssignment))?;
    }
    Ok(())
}

async fn insert_subject_topics(
    conn: &Connection,
    thesis_id: i64,
    topic_ids: &[i64],
) -> Result<(), DatabaseError> {
    for topic_id in topic_ids {
        conn.execute(
            "INSERT INTO thesis_subject_topic (thesis_id, topic_id) VALUES (?1, ?2)",
            libsql::params![thesis_id, *topic_id],
        )
        .await
        .map_err(|e| write_error(e, EntityKind::ThesisSubjectTopic))?;
    }
    Ok(())
}

/// All statements of a thesis create. Runs inside the caller's transaction.
async fn insert_aggregate(conn: &Connection, input: &NewThesis) -> Result<i64, DatabaseError> {
    conn.execute(
        "INSERT INTO thesis (title, abstract, author_id, year, type, university_id, \
         institute_id, num_pages, language, submission_date) \
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10)",
        libsql::params![
            input.title.as_str(),
            input.abstract_text.as_str(),
            input.author_id,
            i64::from(input.year),
            input.thesis_type.as_str(),
            input.university_id,
            input.institute_id,
            i64::from(input.num_pages),
            input.language.as_str(),
            input.submission_date.as_str()
        ],
    )
    .await
    .map_err(|e| write_error(e, EntityKind::Thesis))?;
    let thesis_id = conn.last_insert_rowid();

    insert_supervisors(
        conn,
        thesis_id,
        &input.supervisor_ids,
        SupervisorRole::Supervisor,
    )
    .await?;
    if let Some(co) = input.co_supervisor_id {
        insert_supervisors(conn, thesis_id, &[co], SupervisorRole::CoSupervisor).await?;
    }
    insert_subject_topics(conn, thesis_id, &input.subject_topic_ids).await?;
    link_keywords(conn, thesis_id, &input.keywords).await?;

    Ok(thesis_id)
}

/// All statements of a thesis update. Runs inside the caller's transaction.
async fn apply_update(
    conn: &Connection,
    thesis_id: i64,
    update: &ThesisUpdate,
) -> Result<(), DatabaseError> {
    let mut assignments = Assignments::new();
    assignments.set("title", update.title.clone());
    assignments.set("abstract", update.abstract_text.clone());
    assignments.set("author_id", update.author_id);
    assignments.set("year", update.year.map(i64::from));
    assignments.set("type", update.thesis_type.map(|t| t.as_str()));
    assignments.set("university_id", update.university_id);
    assignments.set("institute_id", update.institute_id);
    assignments.set("num_pages", update.num_pages.map(i64::from));
    assignments.set("language", update.language.clone());
    assignments.set("submission_date", update.submission_date.clone());

    if !assignments.is_empty() {
        let (sql, params) = assignments.into_statement("thesis", "thesis_id", thesis_id);
        conn.execute(&sql, libsql::params_from_iter(params))
            .await
            .map_err(|e| write_error(e, EntityKind::Thesis))?;
    }

    if let Some(ids) = &update.supervisor_ids {
        conn.execute(
            "DELETE FROM supervisor_assignment WHERE thesis_id = ?1 AND role = ?2",
            libsql::params![thesis_id, SupervisorRole::Supervisor.as_str()],
        )
        .await?;
        insert_supervisors(conn, thesis_id, ids, SupervisorRole::Supervisor).await?;
    }

    if let Some(co) = &update.co_supervisor_id {
        conn.execute(
            "DELETE FROM supervisor_assignment WHERE thesis_id = ?1 AND role = ?2",
            libsql::params![thesis_id, SupervisorRole::CoSupervisor.as_str()],
        )
        .await?;
        if let Some(person_id) = co {
            insert_supervisors(conn, thesis_id, &[*person_id], SupervisorRole::CoSupervisor)
                .await?;
        }
    }

    if let Some(topic_ids) = &update.subject_topic_ids {
        conn.execute(
            "DELETE FROM thesis_subject_topic WHERE thesis_id = ?1",
            [thesis_id],
        )
        .await?;
        insert_subject_topics(conn, thesis_id, topic_ids).await?;
    }

    if let Some(words) = &update.keywords {
        conn.execute("DELETE FROM thesis_keyword WHERE thesis_id = ?1", [thesis_id])
            .await?;
        link_keywords(conn, thesis_id, words).await?;
    }

    Ok(())
}

/// All statements of a thesis delete, children first. Returns thesis rows removed.
async fn delete_aggregate(conn: &Connection, thesis_id: i64) -> Result<u64, DatabaseError> {
    conn.execute(
        "DELETE FROM supervisor_assignment WHERE thesis_id = ?1",
        [thesis_id],
    )
    .await?;
    conn.execute(
        "DELETE FROM thesis_subject_topic WHERE thesis_id = ?1",
        [thesis_id],
    )
    .await?;
    conn.execute("DELETE FROM thesis_keyword WHERE thesis_id = ?1", [thesis_id])
        .await?;
    Ok(conn
        .execute("DELETE FROM thesis WHERE thesis_id = ?1", [thesis_id])
        .await?)
}

impl RegistryService {
    /// All theses, newest year first, then highest id first.
    pub async fn list_theses(&self) -> Result<Vec<Thesis>, DatabaseError> {
        let conn = self.db().acquire().await;
        let rows = conn
            .query(
                &format!("SELECT {SELECT_COLS} FROM thesis ORDER BY year DESC, thesis_id DESC"),
                (),
            )
            .await?;
        collect_theses(rows).await
    }

    /// The bare thesis row, without associations.
    pub async fn get_thesis(&self, id: i64) -> Result<Option<Thesis>, DatabaseError> {
        let conn = self.db().acquire().await;
        fetch_thesis(&conn, id).await
    }

    pub async fn thesis_supervisors(
        &self,
        thesis_id: i64,
    ) -> Result<Vec<SupervisorAssignment>, DatabaseError> {
        let conn = self.db().acquire().await;
        fetch_supervisors(&conn, thesis_id).await
    }

    pub async fn thesis_subject_topics(
        &self,
        thesis_id: i64,
    ) -> Result<Vec<SubjectTopic>, DatabaseError> {
        let conn = self.db().acquire().await;
        fetch_subject_topics(&conn, thesis_id).await
    }

    pub async fn thesis_keywords(&self, thesis_id: i64) -> Result<Vec<String>, DatabaseError> {
        let conn = self.db().acquire().await;
        fetch_keywords(&conn, thesis_id).await
    }

    /// The thesis row with supervisors, subject topics, and keywords attached.
    pub async fn get_thesis_detail(&self, id: i64) -> Result<Option<ThesisDetail>, DatabaseError> {
        let conn = self.db().acquire().await;
        let Some(thesis) = fetch_thesis(&conn, id).await? else {
            return Ok(None);
        };
        Ok(Some(ThesisDetail {
            supervisors: fetch_supervisors(&conn, id).await?,
            subject_topics: fetch_subject_topics(&conn, id).await?,
            keywords: fetch_keywords(&conn, id).await?,
            thesis,
        }))
    }

    /// Create a thesis with all of its associations in one transaction.
    ///
    /// Returns the reloaded bare row.
    pub async fn create_thesis(&self, input: &NewThesis) -> Result<Thesis, DatabaseError> {
        let conn = self.db().acquire().await;
        let tx = conn.transaction().await?;
        let result = insert_aggregate(&tx, input).await;
        let thesis_id = finish(tx, result).await?;

        tracing::info!(
            thesis_id,
            supervisors = input.supervisor_ids.len(),
            topics = input.subject_topic_ids.len(),
            keywords = input.keywords.len(),
            "thesis created"
        );
        fetch_thesis(&conn, thesis_id)
            .await?
            .ok_or(DatabaseError::NoResult)
    }

    /// Apply `update` in one transaction. Returns `None` without writing if
    /// the thesis does not exist.
    pub async fn update_thesis(
        &self,
        id: i64,
        update: &ThesisUpdate,
    ) -> Result<Option<Thesis>, DatabaseError> {
        let conn = self.db().acquire().await;
        if fetch_thesis(&conn, id).await?.is_none() {
            return Ok(None);
        }

        let tx = conn.transaction().await?;
        let result = apply_update(&tx, id, update).await;
        finish(tx, result).await?;

        tracing::debug!(thesis_id = id, "thesis updated");
        fetch_thesis(&conn, id).await
    }

    /// Delete a thesis and its associations in one transaction.
    ///
    /// Keyword rows stay; only their links to this thesis are removed.
    pub async fn delete_thesis(&self, id: i64) -> Result<bool, DatabaseError> {
        let conn = self.db().acquire().await;
        let tx = conn.transaction().await?;
        let result = delete_aggregate(&tx, id).await;
        let removed = finish(tx, result).await?;
        Ok(removed > 0)
    }
}
