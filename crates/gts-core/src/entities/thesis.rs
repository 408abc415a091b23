use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::entities::SubjectTopic;
use crate::enums::{SupervisorRole, ThesisType};

/// A submitted thesis. The bare row, without its associations.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Thesis {
    pub thesis_id: i64,
    pub title: String,
    #[serde(rename = "abstract")]
    pub abstract_text: String,
    pub author_id: i64,
    pub year: i32,
    #[serde(rename = "type")]
    pub thesis_type: ThesisType,
    pub university_id: i64,
    pub institute_id: i64,
    pub num_pages: i32,
    pub language: String,
    /// Calendar date, serialized as `YYYY-MM-DD`.
    pub submission_date: NaiveDate,
}

/// One row of `supervisor_assignment`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SupervisorAssignment {
    pub thesis_id: i64,
    pub person_id: i64,
    pub role: SupervisorRole,
}

/// A thesis with its associations attached at the read boundary.
///
/// Served by the single-thesis endpoint; list and search endpoints return
/// bare [`Thesis`] rows.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ThesisDetail {
    #[serde(flatten)]
    pub thesis: Thesis,
    pub supervisors: Vec<SupervisorAssignment>,
    #[serde(rename = "subjectTopics")]
    pub subject_topics: Vec<SubjectTopic>,
    pub keywords: Vec<String>,
}

impl ThesisDetail {
    /// Person ids holding the `Supervisor` role, in stored order.
    #[must_use]
    pub fn supervisor_ids(&self) -> Vec<i64> {
        self.supervisors
            .iter()
            .filter(|s| s.role == SupervisorRole::Supervisor)
            .map(|s| s.person_id)
            .collect()
    }

    /// Person id holding the `Co-Supervisor` role, if any.
    #[must_use]
    pub fn co_supervisor_id(&self) -> Option<i64> {
        self.supervisors
            .iter()
            .find(|s| s.role == SupervisorRole::CoSupervisor)
            .map(|s| s.person_id)
    }
}
