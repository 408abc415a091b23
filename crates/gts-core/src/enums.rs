//! Thesis types, supervisor roles, and entity kinds.
//!
//! Unlike most enums in the workspace, `ThesisType` and `SupervisorRole` keep
//! their human-readable spelling on the wire and in storage
//! (`"Specialization in Medicine"`, `"Co-Supervisor"`), because existing
//! records and clients use those exact strings.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::CoreError;

// ---------------------------------------------------------------------------
// ThesisType
// ---------------------------------------------------------------------------

/// Academic degree a thesis was submitted for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
pub enum ThesisType {
    #[serde(rename = "Master")]
    Master,
    #[serde(rename = "Doctorate")]
    Doctorate,
    #[serde(rename = "Specialization in Medicine")]
    SpecializationInMedicine,
    #[serde(rename = "Proficiency in Art")]
    ProficiencyInArt,
}

impl ThesisType {
    pub const ALL: [Self; 4] = [
        Self::Master,
        Self::Doctorate,
        Self::SpecializationInMedicine,
        Self::ProficiencyInArt,
    ];

    /// Return the string representation used in SQL storage and on the wire.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Master => "Master",
            Self::Doctorate => "Doctorate",
            Self::SpecializationInMedicine => "Specialization in Medicine",
            Self::ProficiencyInArt => "Proficiency in Art",
        }
    }
}

impl fmt::Display for ThesisType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ThesisType {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| CoreError::Validation(format!("unknown thesis type '{s}'")))
    }
}

// ---------------------------------------------------------------------------
// SupervisorRole
// ---------------------------------------------------------------------------

/// Role of a person in a `supervisor_assignment` row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
pub enum SupervisorRole {
    #[serde(rename = "Supervisor")]
    Supervisor,
    #[serde(rename = "Co-Supervisor")]
    CoSupervisor,
}

impl SupervisorRole {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Supervisor => "Supervisor",
            Self::CoSupervisor => "Co-Supervisor",
        }
    }
}

impl fmt::Display for SupervisorRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// EntityKind
// ---------------------------------------------------------------------------

/// Every record type in the registry, including association tables.
///
/// Used to describe referential-integrity failures: which record was being
/// written or deleted, and which dependent record blocked it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum EntityKind {
    University,
    Institute,
    Person,
    SubjectTopic,
    Keyword,
    Thesis,
    SupervisorAssignment,
    ThesisSubjectTopic,
    ThesisKeyword,
}

impl EntityKind {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::University => "university",
            Self::Institute => "institute",
            Self::Person => "person",
            Self::SubjectTopic => "subject_topic",
            Self::Keyword => "keyword",
            Self::Thesis => "thesis",
            Self::SupervisorAssignment => "supervisor_assignment",
            Self::ThesisSubjectTopic => "thesis_subject_topic",
            Self::ThesisKeyword => "thesis_keyword",
        }
    }

    /// Human-readable singular label, capitalized (e.g. `"Subject topic"`).
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::University => "University",
            Self::Institute => "Institute",
            Self::Person => "Person",
            Self::SubjectTopic => "Subject topic",
            Self::Keyword => "Keyword",
            Self::Thesis => "Thesis",
            Self::SupervisorAssignment => "Supervisor assignment",
            Self::ThesisSubjectTopic => "Thesis subject topic",
            Self::ThesisKeyword => "Thesis keyword",
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
