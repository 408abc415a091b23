//! Row parsing and statement-building helpers shared by the repos.

use chrono::NaiveDate;

use crate::error::DatabaseError;

/// Parse a TEXT column into a serde-deserializable enum.
///
/// Works with every gts-core enum whose serde names match the stored text.
///
/// # Errors
///
/// Returns `DatabaseError::Query` if the string does not match any enum variant.
pub fn parse_enum<T: serde::de::DeserializeOwned>(s: &str) -> Result<T, DatabaseError> {
    serde_json::from_value(serde_json::Value::String(s.to_string()))
        .map_err(|e| DatabaseError::Query(format!("Failed to parse enum from '{s}': {e}")))
}

/// Parse a `YYYY-MM-DD` TEXT column.
///
/// # Errors
///
/// Returns `DatabaseError::Query` if the stored text is not a calendar date.
pub fn parse_date(s: &str) -> Result<NaiveDate, DatabaseError> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .map_err(|e| DatabaseError::Query(format!("Failed to parse date '{s}': {e}")))
}

/// Read a nullable TEXT column. Returns `None` for both SQL NULL and empty string.
///
/// `row.get::<String>(idx)` on a NULL column returns an error, not `""`.
/// You must use `get::<Option<String>>()` for nullable columns.
///
/// # Errors
///
/// Returns `DatabaseError` if the column read fails.
pub fn get_opt_string(row: &libsql::Row, idx: i32) -> Result<Option<String>, DatabaseError> {
    match row.get::<Option<String>>(idx)? {
        Some(s) if s.is_empty() => Ok(None),
        other => Ok(other),
    }
}

/// Read an INTEGER column that the schema keeps within `i32`.
///
/// # Errors
///
/// Returns `DatabaseError::Query` if the stored value overflows `i32`.
pub fn get_i32(row: &libsql::Row, idx: i32) -> Result<i32, DatabaseError> {
    let raw = row.get::<i64>(idx)?;
    i32::try_from(raw)
        .map_err(|_| DatabaseError::Query(format!("column {idx} value {raw} out of i32 range")))
}

/// Column assignments for a partial `UPDATE`.
///
/// Each pushed column becomes `column = ?n` with its value bound as a
/// parameter. Column names are always static strings from the repo code;
/// only values are caller-supplied.
#[derive(Debug, Default)]
pub struct Assignments {
    sets: Vec<String>,
    params: Vec<libsql::Value>,
}

impl Assignments {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Assign `column` when `value` is `Some`.
    pub fn set<V: Into<libsql::Value>>(&mut self, column: &'static str, value: Option<V>) {
        if let Some(value) = value {
            self.params.push(value.into());
            self.sets.push(format!("{column} = ?{}", self.params.len()));
        }
    }

    /// Assign a nullable column: `Some(None)` writes NULL.
    pub fn set_nullable<V: Into<libsql::Value>>(
        &mut self,
        column: &'static str,
        value: Option<Option<V>>,
    ) {
        if let Some(value) = value {
            self.params
                .push(value.map_or(libsql::Value::Null, Into::into));
            self.sets.push(format!("{column} = ?{}", self.params.len()));
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sets.is_empty()
    }

    /// Finish as `UPDATE table SET ... WHERE key_column = ?n`.
    #[must_use]
    pub fn into_statement(
        mut self,
        table: &str,
        key_column: &str,
        key: i64,
    ) -> (String, Vec<libsql::Value>) {
        self.params.push(key.into());
        let sql = format!(
            "UPDATE {table} SET {} WHERE {key_column} = ?{}",
            self.sets.join(", "),
            self.params.len()
        );
        (sql, self.params)
    }
}

/// Read a single `COUNT(*)` style row.
///
/// # Errors
///
/// Returns `DatabaseError` if the query fails or yields no row.
pub async fn query_count(
    conn: &libsql::Connection,
    sql: &str,
    params: impl libsql::params::IntoParams,
) -> Result<u64, DatabaseError> {
    let mut rows = conn.query(sql, params).await?;
    let row = rows.next().await?.ok_or(DatabaseError::NoResult)?;
    let count = row.get::<i64>(0)?;
    u64::try_from(count).map_err(|_| DatabaseError::Query(format!("negative count {count}")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use gts_core::enums::ThesisType;
    use pretty_assertions::assert_eq;

    #[test]
    fn parse_enum_uses_wire_spelling() {
        let ty: ThesisType = parse_enum("Proficiency in Art").unwrap();
        assert_eq!(ty, ThesisType::ProficiencyInArt);
        assert!(parse_enum::<ThesisType>("Bachelor").is_err());
    }

    #[test]
    fn parse_date_rejects_datetime() {
        assert!(parse_date("2020-02-29").is_ok());
        assert!(parse_date("2020-02-29 10:00:00").is_err());
    }

    #[test]
    fn assignments_number_params_in_order() {
        let mut a = Assignments::new();
        a.set("name", Some("ETH"));
        a.set::<String>("country", None);
        a.set_nullable::<String>("affiliation", Some(None));
        let (sql, params) = a.into_statement("person", "person_id", 7);
        assert_eq!(
            sql,
            "UPDATE person SET name = ?1, affiliation = ?2 WHERE person_id = ?3"
        );
        assert_eq!(params.len(), 3);
        assert_eq!(params[1], libsql::Value::Null);
        assert_eq!(params[2], libsql::Value::Integer(7));
    }

    #[test]
    fn empty_assignments() {
        assert!(Assignments::new().is_empty());
    }
}
