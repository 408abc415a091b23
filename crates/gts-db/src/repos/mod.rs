//! Repository modules implementing CRUD operations for all registry entities.
//!
//! Each module adds methods to `RegistryService` via `impl RegistryService` blocks.

pub mod dashboard;
pub mod institute;
pub mod keyword;
pub mod person;
pub(crate) mod references;
pub mod search;
pub mod subject_topic;
pub mod thesis;
pub mod university;
