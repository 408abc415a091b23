//! Thesis search filters.
//!
//! `ThesisSearchParams` is the raw query-string shape (`GET /theses/search`),
//! every value still a string. `gts-schema` validates and converts it into a
//! typed `ThesisFilter`, which the store turns into a parameterized query.

use serde::{Deserialize, Serialize};

use crate::enums::ThesisType;

/// Typed search filter. Every `None` field is left out of the query entirely.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThesisFilter {
    /// Title substring, or exact thesis id when the text is the id.
    pub query: Option<String>,
    pub author_id: Option<i64>,
    pub university_id: Option<i64>,
    pub institute_id: Option<i64>,
    pub thesis_type: Option<ThesisType>,
    pub language: Option<String>,
    /// Inclusive lower bound on `year`.
    pub year_from: Option<i32>,
    /// Inclusive upper bound on `year`.
    pub year_to: Option<i32>,
}

impl ThesisFilter {
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.query.is_none()
            && self.author_id.is_none()
            && self.university_id.is_none()
            && self.institute_id.is_none()
            && self.thesis_type.is_none()
            && self.language.is_none()
            && self.year_from.is_none()
            && self.year_to.is_none()
    }
}

/// Raw query-string parameters of the search endpoint.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThesisSearchParams {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub query: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub university_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub institute_id: Option<String>,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub thesis_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub year_from: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub year_to: Option<String>,
}

impl From<&ThesisFilter> for ThesisSearchParams {
    fn from(filter: &ThesisFilter) -> Self {
        Self {
            query: filter.query.clone(),
            author_id: filter.author_id.map(|v| v.to_string()),
            university_id: filter.university_id.map(|v| v.to_string()),
            institute_id: filter.institute_id.map(|v| v.to_string()),
            thesis_type: filter.thesis_type.map(|t| t.as_str().to_string()),
            language: filter.language.clone(),
            year_from: filter.year_from.map(|v| v.to_string()),
            year_to: filter.year_to.map(|v| v.to_string()),
        }
    }
}
