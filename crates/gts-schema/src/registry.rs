//! Central schema registry for request payloads.
//!
//! The `SchemaRegistry` builds JSON Schemas from gts-core payload types at
//! construction time using [`schemars::schema_for!`] and validates incoming
//! JSON bodies via `jsonschema`.

use std::collections::HashMap;

use gts_core::responses::FieldIssue;
use jsonschema::error::ValidationErrorKind;
use schemars::schema_for;

use crate::error::SchemaError;
use crate::payload::Payload;

/// Central store of all request payload schemas.
pub struct SchemaRegistry {
    schemas: HashMap<&'static str, serde_json::Value>,
}

macro_rules! register {
    ($map:expr, $name:expr, $ty:ty) => {
        $map.insert($name, schema_for!($ty).to_value());
    };
}

/// Convert a JSON pointer (`/supervisor_ids/0`) into a dotted path.
fn dotted(pointer: &str) -> String {
    pointer.trim_start_matches('/').replace('/', ".")
}

fn issue_from(error: &jsonschema::ValidationError<'_>) -> FieldIssue {
    let base = dotted(&error.instance_path.to_string());
    let path = match &error.kind {
        ValidationErrorKind::Required { property } => {
            let name = property
                .as_str()
                .map_or_else(|| property.to_string(), str::to_string);
            if base.is_empty() {
                name
            } else {
                format!("{base}.{name}")
            }
        }
        _ => base,
    };
    FieldIssue::new(path, error.to_string())
}

impl SchemaRegistry {
    /// Build a registry with the create and update schema of every resource.
    #[must_use]
    pub fn new() -> Self {
        use gts_core::inputs::{
            InstituteUpdate, NewInstitute, NewPerson, NewSubjectTopic, NewThesis, NewUniversity,
            PersonUpdate, SubjectTopicUpdate, ThesisUpdate, UniversityUpdate,
        };

        let mut schemas = HashMap::new();

        register!(schemas, "new_university", NewUniversity);
        register!(schemas, "university_update", UniversityUpdate);
        register!(schemas, "new_institute", NewInstitute);
        register!(schemas, "institute_update", InstituteUpdate);
        register!(schemas, "new_person", NewPerson);
        register!(schemas, "person_update", PersonUpdate);
        register!(schemas, "new_subject_topic", NewSubjectTopic);
        register!(schemas, "subject_topic_update", SubjectTopicUpdate);
        register!(schemas, "new_thesis", NewThesis);
        register!(schemas, "thesis_update", ThesisUpdate);

        Self { schemas }
    }

    /// Get a schema by name. Returns `None` if not found.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&serde_json::Value> {
        self.schemas.get(name)
    }

    /// Validate a JSON value against a named schema.
    ///
    /// # Errors
    ///
    /// Returns `SchemaError::NotFound` if the schema name is unknown, or
    /// `SchemaError::ValidationFailed` carrying one issue per violation.
    pub fn validate(&self, name: &str, instance: &serde_json::Value) -> Result<(), SchemaError> {
        let schema = self
            .get(name)
            .ok_or_else(|| SchemaError::NotFound(name.to_string()))?;

        let validator = jsonschema::validator_for(schema)
            .map_err(|e| SchemaError::Generation(format!("{e}")))?;

        let issues: Vec<FieldIssue> = validator
            .iter_errors(instance)
            .map(|e| issue_from(&e))
            .collect();

        if issues.is_empty() {
            Ok(())
        } else {
            Err(SchemaError::ValidationFailed { issues })
        }
    }

    /// Validate `body` and deserialize it into a typed payload.
    ///
    /// Runs the schema first, then serde, then the payload's own checks
    /// for rules a static schema cannot express.
    ///
    /// # Errors
    ///
    /// Returns `SchemaError::ValidationFailed` if any stage rejects the body.
    pub fn parse<T: Payload>(&self, body: serde_json::Value) -> Result<T, SchemaError> {
        self.validate(T::SCHEMA, &body)?;

        let payload: T = serde_json::from_value(body).map_err(|e| SchemaError::ValidationFailed {
            issues: vec![FieldIssue::new("", e.to_string())],
        })?;

        let mut issues = Vec::new();
        payload.check(&mut issues);
        if issues.is_empty() {
            Ok(payload)
        } else {
            Err(SchemaError::ValidationFailed { issues })
        }
    }

    /// List all registered schema names.
    #[must_use]
    pub fn list(&self) -> Vec<&'static str> {
        let mut names: Vec<&'static str> = self.schemas.keys().copied().collect();
        names.sort_unstable();
        names
    }

    /// Number of registered schemas.
    #[must_use]
    pub fn schema_count(&self) -> usize {
        self.schemas.len()
    }
}

impl Default for SchemaRegistry {
    fn default() -> Self {
        Self::new()
    }
}
