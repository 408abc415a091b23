use serde::{Deserialize, Serialize};

/// A degree-granting university. Parent of institutes and theses.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct University {
    pub university_id: i64,
    pub name: String,
    pub country: String,
    pub city: String,
}
