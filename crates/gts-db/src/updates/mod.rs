//! Update builders for entity mutations.
//!
//! Each builder produces one of the `gts-core` update structs. Only `Some`
//! fields generate SET clauses in the dynamic UPDATE SQL; nullable columns
//! take an `Option` so callers can write NULL explicitly.

pub mod institute;
pub mod person;
pub mod subject_topic;
pub mod thesis;
pub mod university;
