use serde::{Deserialize, Serialize};

/// An institute (graduate school) belonging to exactly one university.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Institute {
    pub institute_id: i64,
    pub name: String,
    pub university_id: i64,
}
