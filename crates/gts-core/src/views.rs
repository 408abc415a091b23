//! UI-facing views of registry records.
//!
//! The API speaks flat snake_case rows with integer ids. UI consumers work
//! with camelCase records, string ids, and nested id lists. These views and
//! their conversions are the whole translation; they hold no state.
//!
//! Two lossy spots are intentional:
//! - `PersonView::roles` is always empty. Roles only exist per thesis.
//! - `ThesisView` built from a bare [`Thesis`] row (list and search results)
//!   has empty `supervisor_ids`, `subject_topic_ids`, and `keywords`; only
//!   [`ThesisDetail`] fills them.

use serde::{Deserialize, Serialize};

use crate::entities::{Institute, Person, SubjectTopic, Thesis, ThesisDetail, University};
use crate::enums::ThesisType;
use crate::errors::CoreError;
use crate::inputs::{
    NewInstitute, NewPerson, NewSubjectTopic, NewThesis, NewUniversity, ThesisUpdate,
};

fn parse_id(field: &str, raw: &str) -> Result<i64, CoreError> {
    raw.trim()
        .parse::<i64>()
        .map_err(|_| CoreError::Validation(format!("{field} must be a numeric id, got '{raw}'")))
}

fn parse_ids(field: &str, raw: &[String]) -> Result<Vec<i64>, CoreError> {
    raw.iter().map(|id| parse_id(field, id)).collect()
}

fn ids_to_strings(ids: impl IntoIterator<Item = i64>) -> Vec<String> {
    ids.into_iter().map(|id| id.to_string()).collect()
}

/// Role a person can hold, as shown in the UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PersonRole {
    Author,
    Supervisor,
    #[serde(rename = "Co-supervisor")]
    CoSupervisor,
}

// ---------------------------------------------------------------------------
// University
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct UniversityView {
    pub id: String,
    pub name: String,
    pub country: String,
    pub city: String,
}

impl From<&University> for UniversityView {
    fn from(row: &University) -> Self {
        Self {
            id: row.university_id.to_string(),
            name: row.name.clone(),
            country: row.country.clone(),
            city: row.city.clone(),
        }
    }
}

impl From<&UniversityView> for NewUniversity {
    fn from(view: &UniversityView) -> Self {
        Self {
            name: view.name.clone(),
            country: view.country.clone(),
            city: view.city.clone(),
        }
    }
}

// ---------------------------------------------------------------------------
// Institute
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct InstituteView {
    pub id: String,
    pub name: String,
    pub university_id: String,
}

impl From<&Institute> for InstituteView {
    fn from(row: &Institute) -> Self {
        Self {
            id: row.institute_id.to_string(),
            name: row.name.clone(),
            university_id: row.university_id.to_string(),
        }
    }
}

impl TryFrom<&InstituteView> for NewInstitute {
    type Error = CoreError;

    fn try_from(view: &InstituteView) -> Result<Self, Self::Error> {
        Ok(Self {
            name: view.name.clone(),
            university_id: parse_id("universityId", &view.university_id)?,
        })
    }
}

// ---------------------------------------------------------------------------
// Person
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct PersonView {
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub roles: Vec<PersonRole>,
    pub affiliation: Option<String>,
}

impl From<&Person> for PersonView {
    fn from(row: &Person) -> Self {
        Self {
            id: row.person_id.to_string(),
            first_name: row.first_name.clone(),
            last_name: row.last_name.clone(),
            email: row.email.clone(),
            roles: Vec::new(),
            affiliation: row.affiliation.clone(),
        }
    }
}

impl From<&PersonView> for NewPerson {
    fn from(view: &PersonView) -> Self {
        Self {
            first_name: view.first_name.clone(),
            last_name: view.last_name.clone(),
            email: view.email.clone(),
            affiliation: view.affiliation.clone().filter(|a| !a.is_empty()),
        }
    }
}

// ---------------------------------------------------------------------------
// SubjectTopic
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SubjectTopicView {
    pub id: String,
    pub topic_name: String,
}

impl From<&SubjectTopic> for SubjectTopicView {
    fn from(row: &SubjectTopic) -> Self {
        Self {
            id: row.topic_id.to_string(),
            topic_name: row.topic_name.clone(),
        }
    }
}

impl From<&SubjectTopicView> for NewSubjectTopic {
    fn from(view: &SubjectTopicView) -> Self {
        Self {
            topic_name: view.topic_name.clone(),
        }
    }
}

// ---------------------------------------------------------------------------
// Thesis
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ThesisView {
    pub id: String,
    /// The numeric thesis id, shown as the registry number.
    pub thesis_no: i64,
    pub title: String,
    #[serde(rename = "abstract")]
    pub abstract_text: String,
    #[serde(rename = "type")]
    pub thesis_type: ThesisType,
    pub university_id: String,
    pub institute_id: String,
    pub author_id: String,
    pub supervisor_ids: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub co_supervisor_id: Option<String>,
    pub year: i32,
    pub language: String,
    pub submission_date: String,
    pub num_pages: i32,
    pub subject_topic_ids: Vec<String>,
    pub keywords: Vec<String>,
}

impl From<&Thesis> for ThesisView {
    fn from(row: &Thesis) -> Self {
        Self {
            id: row.thesis_id.to_string(),
            thesis_no: row.thesis_id,
            title: row.title.clone(),
            abstract_text: row.abstract_text.clone(),
            thesis_type: row.thesis_type,
            university_id: row.university_id.to_string(),
            institute_id: row.institute_id.to_string(),
            author_id: row.author_id.to_string(),
            supervisor_ids: Vec::new(),
            co_supervisor_id: None,
            year: row.year,
            language: row.language.clone(),
            submission_date: row.submission_date.format("%Y-%m-%d").to_string(),
            num_pages: row.num_pages,
            subject_topic_ids: Vec::new(),
            keywords: Vec::new(),
        }
    }
}

impl From<&ThesisDetail> for ThesisView {
    fn from(detail: &ThesisDetail) -> Self {
        Self {
            supervisor_ids: ids_to_strings(detail.supervisor_ids()),
            co_supervisor_id: detail.co_supervisor_id().map(|id| id.to_string()),
            subject_topic_ids: ids_to_strings(detail.subject_topics.iter().map(|t| t.topic_id)),
            keywords: detail.keywords.clone(),
            ..Self::from(&detail.thesis)
        }
    }
}

impl TryFrom<&ThesisView> for NewThesis {
    type Error = CoreError;

    fn try_from(view: &ThesisView) -> Result<Self, Self::Error> {
        Ok(Self {
            title: view.title.clone(),
            abstract_text: view.abstract_text.clone(),
            author_id: parse_id("authorId", &view.author_id)?,
            year: view.year,
            thesis_type: view.thesis_type,
            university_id: parse_id("universityId", &view.university_id)?,
            institute_id: parse_id("instituteId", &view.institute_id)?,
            num_pages: view.num_pages,
            language: view.language.clone(),
            submission_date: view.submission_date.clone(),
            supervisor_ids: parse_ids("supervisorIds", &view.supervisor_ids)?,
            co_supervisor_id: view
                .co_supervisor_id
                .as_deref()
                .filter(|id| !id.is_empty())
                .map(|id| parse_id("coSupervisorId", id))
                .transpose()?,
            subject_topic_ids: parse_ids("subjectTopicIds", &view.subject_topic_ids)?,
            keywords: view.keywords.clone(),
        })
    }
}

impl TryFrom<&ThesisView> for ThesisUpdate {
    type Error = CoreError;

    /// Full replacement: every field of the view is sent, and a missing
    /// co-supervisor clears the stored one.
    fn try_from(view: &ThesisView) -> Result<Self, Self::Error> {
        let new = NewThesis::try_from(view)?;
        Ok(Self {
            title: Some(new.title),
            abstract_text: Some(new.abstract_text),
            author_id: Some(new.author_id),
            year: Some(new.year),
            thesis_type: Some(new.thesis_type),
            university_id: Some(new.university_id),
            institute_id: Some(new.institute_id),
            num_pages: Some(new.num_pages),
            language: Some(new.language),
            submission_date: Some(new.submission_date),
            supervisor_ids: Some(new.supervisor_ids),
            co_supervisor_id: Some(new.co_supervisor_id),
            subject_topic_ids: Some(new.subject_topic_ids),
            keywords: Some(new.keywords),
        })
    }
}
