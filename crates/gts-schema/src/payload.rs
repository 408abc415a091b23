//! Typed request payloads and the checks their JSON Schemas cannot express.

use std::collections::HashSet;

use chrono::{Datelike, Local, NaiveDate};
use gts_core::inputs::{
    InstituteUpdate, NewInstitute, NewPerson, NewSubjectTopic, NewThesis,
    NewUniversity, PersonUpdate, SubjectTopicUpdate, ThesisUpdate, UniversityUpdate,
};
use gts_core::responses::FieldIssue;
use serde::de::DeserializeOwned;

/// A request body type with a registered schema.
pub trait Payload: DeserializeOwned {
    /// Registry name of this payload's schema.
    const SCHEMA: &'static str;

    /// Cross-field and calendar-dependent checks, run after the schema passes.
    fn check(&self, _issues: &mut Vec<FieldIssue>) {}
}

macro_rules! schema_only {
    ($($ty:ty => $name:literal),* $(,)?) => {
        $(impl Payload for $ty {
            const SCHEMA: &'static str = $name;
        })*
    };
}

schema_only! {
    NewUniversity => "new_university",
    UniversityUpdate => "university_update",
    NewInstitute => "new_institute",
    InstituteUpdate => "institute_update",
    NewPerson => "new_person",
    PersonUpdate => "person_update",
    NewSubjectTopic => "new_subject_topic",
    SubjectTopicUpdate => "subject_topic_update",
}

pub(crate) fn current_year() -> i32 {
    Local::now().year()
}

fn check_year(year: i32, issues: &mut Vec<FieldIssue>) {
    let max = current_year();
    if year > max {
        issues.push(FieldIssue::new("year", format!("Year must be at most {max}")));
    }
}

fn check_submission_date(date: &str, issues: &mut Vec<FieldIssue>) {
    if NaiveDate::parse_from_str(date, "%Y-%m-%d").is_err() {
        issues.push(FieldIssue::new(
            "submission_date",
            format!("'{date}' is not a valid calendar date"),
        ));
    }
}

fn check_distinct(field: &str, ids: &[i64], issues: &mut Vec<FieldIssue>) {
    let mut seen = HashSet::with_capacity(ids.len());
    if let Some(dup) = ids.iter().find(|id| !seen.insert(**id)) {
        issues.push(FieldIssue::new(
            field,
            format!("Ids must be distinct (duplicate {dup})"),
        ));
    }
}

impl Payload for NewThesis {
    const SCHEMA: &'static str = "new_thesis";

    fn check(&self, issues: &mut Vec<FieldIssue>) {
        check_year(self.year, issues);
        check_submission_date(&self.submission_date, issues);
        check_distinct("supervisor_ids", &self.supervisor_ids, issues);
        check_distinct("subject_topic_ids", &self.subject_topic_ids, issues);
    }
}

impl Payload for ThesisUpdate {
    const SCHEMA: &'static str = "thesis_update";

    fn check(&self, issues: &mut Vec<FieldIssue>) {
        if let Some(year) = self.year {
            check_year(year, issues);
        }
        if let Some(date) = &self.submission_date {
            check_submission_date(date, issues);
        }
        if let Some(ids) = &self.supervisor_ids {
            check_distinct("supervisor_ids", ids, issues);
        }
        if let Some(ids) = &self.subject_topic_ids {
            check_distinct("subject_topic_ids", ids, issues);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{SchemaError, SchemaRegistry};
    use pretty_assertions::assert_eq;
    use rstest::rstest;
    use serde_json::{Value, json};

    fn thesis_body() -> Value {
        json!({
            "title": "Graph rewriting",
            "abstract": "We study graph rewriting.",
            "author_id": 1,
            "year": 2020,
            "type": "Doctorate",
            "university_id": 1,
            "institute_id": 1,
            "num_pages": 120,
            "language": "English",
            "submission_date": "2020-06-30",
            "supervisor_ids": [2, 3],
            "co_supervisor_id": null,
            "keywords": ["graphs"]
        })
    }

    fn issue_paths(err: &SchemaError) -> Vec<String> {
        err.issues()
            .unwrap_or_default()
            .iter()
            .map(|i| i.path.clone())
            .collect()
    }

    #[test]
    fn accepts_valid_thesis() {
        let thesis: NewThesis = SchemaRegistry::new().parse(thesis_body()).unwrap();
        assert_eq!(thesis.supervisor_ids, vec![2, 3]);
        assert_eq!(thesis.co_supervisor_id, None);
        assert!(thesis.subject_topic_ids.is_empty());
    }

    #[rstest]
    #[case::year_too_early("year", json!(1899))]
    #[case::year_not_integer("year", json!(2020.5))]
    #[case::unknown_type("type", json!("Bachelor"))]
    #[case::zero_pages("num_pages", json!(0))]
    #[case::bad_date_format("submission_date", json!("30/06/2020"))]
    #[case::no_supervisors("supervisor_ids", json!([]))]
    #[case::negative_supervisor("supervisor_ids.0", json!([-1]))]
    #[case::zero_co_supervisor("co_supervisor_id", json!(0))]
    #[case::empty_keyword("keywords.0", json!([""]))]
    #[case::empty_title("title", json!(""))]
    fn rejects_invalid_thesis_field(#[case] field: &str, #[case] value: Value) {
        let mut body = thesis_body();
        let key = field.split('.').next().unwrap_or(field);
        body[key] = value;
        let err = SchemaRegistry::new().parse::<NewThesis>(body).unwrap_err();
        assert!(
            issue_paths(&err).iter().any(|p| p == field),
            "expected issue at {field}, got {:?}",
            issue_paths(&err)
        );
    }

    #[test]
    fn rejects_future_year() {
        let mut body = thesis_body();
        body["year"] = json!(current_year() + 1);
        let err = SchemaRegistry::new().parse::<NewThesis>(body).unwrap_err();
        assert_eq!(issue_paths(&err), vec!["year".to_string()]);
    }

    #[test]
    fn rejects_impossible_calendar_date() {
        let mut body = thesis_body();
        body["submission_date"] = json!("2021-02-30");
        let err = SchemaRegistry::new().parse::<NewThesis>(body).unwrap_err();
        assert_eq!(issue_paths(&err), vec!["submission_date".to_string()]);
    }

    #[test]
    fn rejects_duplicate_ids() {
        let mut body = thesis_body();
        body["supervisor_ids"] = json!([2, 2]);
        body["subject_topic_ids"] = json!([5, 6, 5]);
        let err = SchemaRegistry::new().parse::<NewThesis>(body).unwrap_err();
        assert_eq!(
            issue_paths(&err),
            vec!["supervisor_ids".to_string(), "subject_topic_ids".to_string()]
        );
    }

    #[test]
    fn reports_every_missing_required_field() {
        let err = SchemaRegistry::new()
            .parse::<NewThesis>(json!({}))
            .unwrap_err();
        let mut paths = issue_paths(&err);
        paths.sort();
        assert_eq!(
            paths,
            vec![
                "abstract",
                "author_id",
                "institute_id",
                "language",
                "num_pages",
                "submission_date",
                "supervisor_ids",
                "title",
                "type",
                "university_id",
                "year",
            ]
        );
    }

    #[test]
    fn thesis_update_checks_only_present_fields() {
        let reg = SchemaRegistry::new();
        let update: ThesisUpdate = reg.parse(json!({"language": "German"})).unwrap();
        assert_eq!(update.language.as_deref(), Some("German"));

        let err = reg
            .parse::<ThesisUpdate>(json!({"submission_date": "2020-13-01"}))
            .unwrap_err();
        assert_eq!(issue_paths(&err), vec!["submission_date".to_string()]);

        let err = reg
            .parse::<ThesisUpdate>(json!({"supervisor_ids": []}))
            .unwrap_err();
        assert_eq!(issue_paths(&err), vec!["supervisor_ids".to_string()]);
    }
}
