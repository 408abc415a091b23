//! One module per API resource, each adding methods to `GtsClient`.

mod dashboard;
mod institute;
mod person;
mod subject_topic;
mod thesis;
mod university;
