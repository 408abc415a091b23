//! Thesis search.
//!
//! A [`ThesisFilter`] becomes one parameterized SELECT over `thesis`. Each
//! present filter adds one predicate, always in the same order; absent
//! filters add nothing. Rows come back year-descending, then id-descending,
//! the same order as [`RegistryService::list_theses`].

use gts_core::entities::Thesis;
use gts_core::filters::ThesisFilter;

use crate::error::DatabaseError;
use crate::repos::thesis::{SELECT_COLS, collect_theses};
use crate::service::RegistryService;

const ORDER_BY: &str = "ORDER BY year DESC, thesis_id DESC";

/// Accumulates `AND`-joined predicates with positional parameters.
#[derive(Debug, Default)]
struct Predicates {
    clauses: Vec<String>,
    params: Vec<libsql::Value>,
}

impl Predicates {
    /// Bind `value` as the next parameter and return its placeholder.
    fn bind(&mut self, value: impl Into<libsql::Value>) -> String {
        self.params.push(value.into());
        format!("?{}", self.params.len())
    }

    fn equals(&mut self, column: &'static str, value: Option<impl Into<libsql::Value>>) {
        if let Some(value) = value {
            let placeholder = self.bind(value);
            self.clauses.push(format!("{column} = {placeholder}"));
        }
    }
}

/// Build the search statement for `filter`.
///
/// The free-text predicate matches a title substring or the exact thesis
/// id written as text, so `"42"` finds thesis 42 and any title containing
/// "42".
#[must_use]
pub fn build_search(filter: &ThesisFilter) -> (String, Vec<libsql::Value>) {
    let mut p = Predicates::default();

    if let Some(query) = &filter.query {
        let like = p.bind(format!("%{query}%"));
        let exact = p.bind(query.clone());
        p.clauses.push(format!(
            "(title LIKE {like} OR CAST(thesis_id AS TEXT) = {exact})"
        ));
    }
    p.equals("author_id", filter.author_id);
    p.equals("university_id", filter.university_id);
    p.equals("institute_id", filter.institute_id);
    p.equals("type", filter.thesis_type.map(|t| t.as_str()));
    p.equals("language", filter.language.clone());
    if let Some(year_from) = filter.year_from {
        let placeholder = p.bind(i64::from(year_from));
        p.clauses.push(format!("year >= {placeholder}"));
    }
    if let Some(year_to) = filter.year_to {
        let placeholder = p.bind(i64::from(year_to));
        p.clauses.push(format!("year <= {placeholder}"));
    }

    let sql = if p.clauses.is_empty() {
        format!("SELECT {SELECT_COLS} FROM thesis {ORDER_BY}")
    } else {
        format!(
            "SELECT {SELECT_COLS} FROM thesis WHERE {} {ORDER_BY}",
            p.clauses.join(" AND ")
        )
    };
    (sql, p.params)
}

impl RegistryService {
    /// Every thesis matching all present filters. No pagination.
    pub async fn search_theses(&self, filter: &ThesisFilter) -> Result<Vec<Thesis>, DatabaseError> {
        let (sql, params) = build_search(filter);
        tracing::debug!(predicates = params.len(), "thesis search");

        let conn = self.db().acquire().await;
        let rows = conn.query(&sql, libsql::params_from_iter(params)).await?;
        collect_theses(rows).await
    }
}
