use serde::{Deserialize, Serialize};

/// A person who can author or supervise theses.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Person {
    pub person_id: i64,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    /// Free-text affiliation, often a university name.
    pub affiliation: Option<String>,
}
