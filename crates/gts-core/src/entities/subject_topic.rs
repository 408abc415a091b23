use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SubjectTopic {
    pub topic_id: i64,
    pub topic_name: String,
}
