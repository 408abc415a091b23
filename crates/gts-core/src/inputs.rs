//! Create and update payloads accepted by the HTTP API.
//!
//! Field names follow the wire format (snake_case column names). The
//! `schemars` attributes carry the field-level constraints; `gts-schema`
//! turns them into JSON Schemas and validates request bodies against them.
//!
//! Update payloads mirror the create payloads with every field optional.
//! Only `Some` fields are written. Nullable columns use `Option<Option<T>>`
//! so that an explicit `null` (`Some(None)`) clears the value while an absent
//! field (`None`) leaves it untouched.

use schemars::JsonSchema;
use serde::{Deserialize, Deserializer, Serialize};

use crate::enums::ThesisType;

/// Earliest accepted thesis year.
pub const MIN_YEAR: i32 = 1900;

/// Deserialize a present field (including `null`) as `Some(inner)`.
///
/// Combined with `#[serde(default)]`, an absent field stays `None`.
fn present<'de, D, T>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

// ---------------------------------------------------------------------------
// University
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct NewUniversity {
    #[schemars(length(min = 1, max = 200))]
    pub name: String,
    #[schemars(length(min = 1, max = 100))]
    pub country: String,
    #[schemars(length(min = 1, max = 100))]
    pub city: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct UniversityUpdate {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schemars(length(min = 1, max = 200))]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schemars(length(min = 1, max = 100))]
    pub country: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schemars(length(min = 1, max = 100))]
    pub city: Option<String>,
}

// ---------------------------------------------------------------------------
// Institute
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct NewInstitute {
    #[schemars(length(min = 1, max = 200))]
    pub name: String,
    #[schemars(range(min = 1))]
    pub university_id: i64,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct InstituteUpdate {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schemars(length(min = 1, max = 200))]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schemars(range(min = 1))]
    pub university_id: Option<i64>,
}

// ---------------------------------------------------------------------------
// Person
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct NewPerson {
    #[schemars(length(min = 1, max = 100))]
    pub first_name: String,
    #[schemars(length(min = 1, max = 100))]
    pub last_name: String,
    #[schemars(length(max = 200), regex(pattern = r"^[^@\s]+@[^@\s]+\.[^@\s]+$"))]
    pub email: String,
    #[serde(default)]
    #[schemars(length(max = 200))]
    pub affiliation: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct PersonUpdate {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schemars(length(min = 1, max = 100))]
    pub first_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schemars(length(min = 1, max = 100))]
    pub last_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schemars(length(max = 200), regex(pattern = r"^[^@\s]+@[^@\s]+\.[^@\s]+$"))]
    pub email: Option<String>,
    #[serde(
        default,
        deserialize_with = "present",
        skip_serializing_if = "Option::is_none"
    )]
    #[schemars(with = "Option<String>", length(max = 200))]
    pub affiliation: Option<Option<String>>,
}

// ---------------------------------------------------------------------------
// SubjectTopic
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct NewSubjectTopic {
    #[schemars(length(min = 1, max = 200))]
    pub topic_name: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct SubjectTopicUpdate {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schemars(length(min = 1, max = 200))]
    pub topic_name: Option<String>,
}

// ---------------------------------------------------------------------------
// Thesis
// ---------------------------------------------------------------------------

/// Payload for creating a thesis together with all of its associations.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct NewThesis {
    #[schemars(length(min = 1, max = 500))]
    pub title: String,
    #[serde(rename = "abstract")]
    #[schemars(length(min = 1, max = 5000))]
    pub abstract_text: String,
    #[schemars(range(min = 1))]
    pub author_id: i64,
    #[schemars(range(min = 1900))]
    pub year: i32,
    #[serde(rename = "type")]
    pub thesis_type: ThesisType,
    #[schemars(range(min = 1))]
    pub university_id: i64,
    #[schemars(range(min = 1))]
    pub institute_id: i64,
    #[schemars(range(min = 1))]
    pub num_pages: i32,
    #[schemars(length(min = 1, max = 50))]
    pub language: String,
    #[schemars(regex(pattern = r"^\d{4}-\d{2}-\d{2}$"))]
    pub submission_date: String,
    #[schemars(length(min = 1), inner(range(min = 1)))]
    pub supervisor_ids: Vec<i64>,
    #[serde(default)]
    #[schemars(range(min = 1))]
    pub co_supervisor_id: Option<i64>,
    #[serde(default)]
    #[schemars(inner(range(min = 1)))]
    pub subject_topic_ids: Vec<i64>,
    #[serde(default)]
    #[schemars(inner(length(min = 1)))]
    pub keywords: Vec<String>,
}

/// Partial thesis update. Association lists are replaced wholesale when present.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct ThesisUpdate {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schemars(length(min = 1, max = 500))]
    pub title: Option<String>,
    #[serde(rename = "abstract", default, skip_serializing_if = "Option::is_none")]
    #[schemars(length(min = 1, max = 5000))]
    pub abstract_text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schemars(range(min = 1))]
    pub author_id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schemars(range(min = 1900))]
    pub year: Option<i32>,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub thesis_type: Option<ThesisType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schemars(range(min = 1))]
    pub university_id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schemars(range(min = 1))]
    pub institute_id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schemars(range(min = 1))]
    pub num_pages: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schemars(length(min = 1, max = 50))]
    pub language: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schemars(regex(pattern = r"^\d{4}-\d{2}-\d{2}$"))]
    pub submission_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schemars(length(min = 1), inner(range(min = 1)))]
    pub supervisor_ids: Option<Vec<i64>>,
    /// `Some(None)` clears the co-supervisor; `None` leaves it untouched.
    #[serde(
        default,
        deserialize_with = "present",
        skip_serializing_if = "Option::is_none"
    )]
    #[schemars(with = "Option<i64>", range(min = 1))]
    pub co_supervisor_id: Option<Option<i64>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schemars(inner(range(min = 1)))]
    pub subject_topic_ids: Option<Vec<i64>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schemars(inner(length(min = 1)))]
    pub keywords: Option<Vec<String>>,
}

impl ThesisUpdate {
    /// Whether any column of the `thesis` row itself is touched.
    #[must_use]
    pub const fn has_scalar_changes(&self) -> bool {
        self.title.is_some()
            || self.abstract_text.is_some()
            || self.author_id.is_some()
            || self.year.is_some()
            || self.thesis_type.is_some()
            || self.university_id.is_some()
            || self.institute_id.is_some()
            || self.num_pages.is_some()
            || self.language.is_some()
            || self.submission_date.is_some()
    }
}
