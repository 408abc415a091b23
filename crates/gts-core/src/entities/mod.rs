//! Entity structs for all registry records.
//!
//! Each entity maps to a table in the libSQL database (see
//! `gts-db/migrations/001_initial.sql`). Field names match the column names,
//! which is also the wire format served by the HTTP API.

mod institute;
mod keyword;
mod person;
mod subject_topic;
mod thesis;
mod university;

pub use institute::Institute;
pub use keyword::Keyword;
pub use person::Person;
pub use subject_topic::SubjectTopic;
pub use thesis::{SupervisorAssignment, Thesis, ThesisDetail};
pub use university::University;
