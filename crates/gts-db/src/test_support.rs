//! Shared fixtures for gts-db unit tests.

use gts_core::entities::{Institute, Person, SubjectTopic, University};
use gts_core::enums::ThesisType;
use gts_core::inputs::{NewInstitute, NewPerson, NewSubjectTopic, NewThesis, NewUniversity};

use crate::service::RegistryService;

/// Create an in-memory service with a fresh schema.
pub async fn test_service() -> RegistryService {
    RegistryService::new_local(":memory:").await.unwrap()
}

pub async fn seed_university(svc: &RegistryService, name: &str) -> University {
    svc.create_university(&NewUniversity {
        name: name.to_string(),
        country: "Turkey".to_string(),
        city: "Istanbul".to_string(),
    })
    .await
    .unwrap()
}

pub async fn seed_institute(svc: &RegistryService, university_id: i64, name: &str) -> Institute {
    svc.create_institute(&NewInstitute {
        name: name.to_string(),
        university_id,
    })
    .await
    .unwrap()
}

pub async fn seed_person(svc: &RegistryService, first: &str, last: &str) -> Person {
    svc.create_person(&NewPerson {
        first_name: first.to_string(),
        last_name: last.to_string(),
        email: format!("{}.{}@example.org", first.to_lowercase(), last.to_lowercase()),
        affiliation: None,
    })
    .await
    .unwrap()
}

pub async fn seed_topic(svc: &RegistryService, name: &str) -> SubjectTopic {
    svc.create_subject_topic(&NewSubjectTopic {
        topic_name: name.to_string(),
    })
    .await
    .unwrap()
}

/// Ids of the rows a thesis needs to exist.
pub struct Fixture {
    pub university_id: i64,
    pub institute_id: i64,
    pub author_id: i64,
    pub supervisor_id: i64,
    pub co_supervisor_id: i64,
}

pub async fn seed_fixture(svc: &RegistryService) -> Fixture {
    let uni = seed_university(svc, "Boğaziçi University").await;
    let inst = seed_institute(svc, uni.university_id, "Institute for Graduate Studies").await;
    let author = seed_person(svc, "Ada", "Lovelace").await;
    let supervisor = seed_person(svc, "Charles", "Babbage").await;
    let co = seed_person(svc, "Mary", "Somerville").await;
    Fixture {
        university_id: uni.university_id,
        institute_id: inst.institute_id,
        author_id: author.person_id,
        supervisor_id: supervisor.person_id,
        co_supervisor_id: co.person_id,
    }
}

/// A valid thesis payload against `fx` with no topics or keywords.
pub fn new_thesis(fx: &Fixture, title: &str, year: i32) -> NewThesis {
    NewThesis {
        title: title.to_string(),
        abstract_text: format!("Abstract of {title}"),
        author_id: fx.author_id,
        year,
        thesis_type: ThesisType::Master,
        university_id: fx.university_id,
        institute_id: fx.institute_id,
        num_pages: 100,
        language: "English".to_string(),
        submission_date: format!("{year}-06-15"),
        supervisor_ids: vec![fx.supervisor_id],
        co_supervisor_id: None,
        subject_topic_ids: Vec::new(),
        keywords: Vec::new(),
    }
}

/// Count rows of `table` matching `thesis_id`.
pub async fn count_for_thesis(svc: &RegistryService, table: &str, thesis_id: i64) -> u64 {
    let conn = svc.db().acquire().await;
    crate::helpers::query_count(
        &conn,
        &format!("SELECT COUNT(*) FROM {table} WHERE thesis_id = ?1"),
        [thesis_id],
    )
    .await
    .unwrap()
}

pub async fn count_rows(svc: &RegistryService, table: &str) -> u64 {
    let conn = svc.db().acquire().await;
    crate::helpers::query_count(&conn, &format!("SELECT COUNT(*) FROM {table}"), ())
        .await
        .unwrap()
}
