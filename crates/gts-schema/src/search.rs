//! Query-string validation for thesis search.
//!
//! Query parameters arrive as strings, so they are checked by hand rather
//! than through a JSON Schema. Empty values count as absent.

use gts_core::enums::ThesisType;
use gts_core::filters::{ThesisFilter, ThesisSearchParams};
use gts_core::inputs::MIN_YEAR;
use gts_core::responses::FieldIssue;

use crate::error::SchemaError;
use crate::payload::current_year;

fn present(raw: Option<&String>) -> Option<&str> {
    raw.map(|s| s.trim()).filter(|s| !s.is_empty())
}

fn positive_id(field: &str, raw: Option<&String>, issues: &mut Vec<FieldIssue>) -> Option<i64> {
    let value = present(raw)?;
    match value.parse::<i64>() {
        Ok(id) if id > 0 => Some(id),
        _ => {
            issues.push(FieldIssue::new(
                field,
                format!("'{value}' is not a positive integer"),
            ));
            None
        }
    }
}

fn year(
    field: &str,
    raw: Option<&String>,
    bounds: (i32, i32),
    issues: &mut Vec<FieldIssue>,
) -> Option<i32> {
    let value = present(raw)?;
    match value.parse::<i32>() {
        Ok(y) if (bounds.0..=bounds.1).contains(&y) => Some(y),
        Ok(y) => {
            issues.push(FieldIssue::new(
                field,
                format!("{y} is outside {}..={}", bounds.0, bounds.1),
            ));
            None
        }
        Err(_) => {
            issues.push(FieldIssue::new(
                field,
                format!("'{value}' is not an integer"),
            ));
            None
        }
    }
}

/// Validate raw search parameters and convert them into a typed filter.
///
/// # Errors
///
/// Returns `SchemaError::ValidationFailed` listing every bad parameter.
pub fn parse_search_params(params: &ThesisSearchParams) -> Result<ThesisFilter, SchemaError> {
    let mut issues = Vec::new();

    let thesis_type = present(params.thesis_type.as_ref()).and_then(|raw| {
        raw.parse::<ThesisType>()
            .map_err(|e| issues.push(FieldIssue::new("type", e.to_string())))
            .ok()
    });

    let filter = ThesisFilter {
        query: present(params.query.as_ref()).map(str::to_string),
        author_id: positive_id("author_id", params.author_id.as_ref(), &mut issues),
        university_id: positive_id("university_id", params.university_id.as_ref(), &mut issues),
        institute_id: positive_id("institute_id", params.institute_id.as_ref(), &mut issues),
        thesis_type,
        language: present(params.language.as_ref()).map(str::to_string),
        year_from: year(
            "year_from",
            params.year_from.as_ref(),
            (MIN_YEAR, i32::MAX),
            &mut issues,
        ),
        year_to: year(
            "year_to",
            params.year_to.as_ref(),
            (i32::MIN, current_year()),
            &mut issues,
        ),
    };

    if issues.is_empty() {
        Ok(filter)
    } else {
        Err(SchemaError::ValidationFailed { issues })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn params(pairs: &[(&str, &str)]) -> ThesisSearchParams {
        let map: serde_json::Map<String, serde_json::Value> = pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), serde_json::Value::from(*v)))
            .collect();
        serde_json::from_value(serde_json::Value::Object(map)).unwrap()
    }

    #[test]
    fn empty_params_give_empty_filter() {
        let filter = parse_search_params(&ThesisSearchParams::default()).unwrap();
        assert!(filter.is_empty());
    }

    #[test]
    fn blank_values_are_ignored() {
        let filter = parse_search_params(&params(&[("query", "  "), ("author_id", "")])).unwrap();
        assert!(filter.is_empty());
    }

    #[test]
    fn parses_every_filter() {
        let filter = parse_search_params(&params(&[
            ("query", "graph"),
            ("author_id", "3"),
            ("university_id", "1"),
            ("institute_id", "2"),
            ("type", "Specialization in Medicine"),
            ("language", "Turkish"),
            ("year_from", "2000"),
            ("year_to", "2010"),
        ]))
        .unwrap();
        assert_eq!(
            filter,
            ThesisFilter {
                query: Some("graph".into()),
                author_id: Some(3),
                university_id: Some(1),
                institute_id: Some(2),
                thesis_type: Some(ThesisType::SpecializationInMedicine),
                language: Some("Turkish".into()),
                year_from: Some(2000),
                year_to: Some(2010),
            }
        );
    }

    #[test]
    fn collects_every_bad_parameter() {
        let err = parse_search_params(&params(&[
            ("author_id", "abc"),
            ("type", "Bachelor"),
            ("year_from", "1800"),
            ("year_to", "99999"),
        ]))
        .unwrap_err();
        let paths: Vec<&str> = err
            .issues()
            .unwrap_or_default()
            .iter()
            .map(|i| i.path.as_str())
            .collect();
        assert_eq!(paths, vec!["type", "author_id", "year_from", "year_to"]);
    }

    #[test]
    fn filter_roundtrips_through_params() {
        let filter = ThesisFilter {
            thesis_type: Some(ThesisType::ProficiencyInArt),
            year_to: Some(2015),
            ..ThesisFilter::default()
        };
        let back = parse_search_params(&ThesisSearchParams::from(&filter)).unwrap();
        assert_eq!(back, filter);
    }
}
