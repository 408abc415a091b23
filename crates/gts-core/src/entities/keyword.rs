use serde::{Deserialize, Serialize};

/// A keyword, interned by exact text the first time a thesis uses it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Keyword {
    pub keyword_id: i64,
    pub word: String,
}
