//! Thesis calls.
//!
//! List and search return bare rows, so their views have empty id lists
//! and keywords. `get_thesis` reads the detail endpoint and fills them.

use gts_core::entities::{Thesis, ThesisDetail};
use gts_core::filters::{ThesisFilter, ThesisSearchParams};
use gts_core::inputs::{NewThesis, ThesisUpdate};
use gts_core::views::ThesisView;

use crate::error::ClientError;
use crate::http::{data, done, optional_data};
use crate::GtsClient;

fn to_views(rows: &[Thesis]) -> Vec<ThesisView> {
    rows.iter().map(ThesisView::from).collect()
}

/// Query-string pairs for the present filters.
fn search_pairs(filter: &ThesisFilter) -> Vec<(String, String)> {
    let params = ThesisSearchParams::from(filter);
    let Ok(serde_json::Value::Object(map)) = serde_json::to_value(&params) else {
        return Vec::new();
    };
    map.into_iter()
        .filter_map(|(key, value)| match value {
            serde_json::Value::String(s) => Some((key, s)),
            _ => None,
        })
        .collect()
}

impl GtsClient {
    pub async fn list_theses(&self) -> Result<Vec<ThesisView>, ClientError> {
        let resp = self.http.get(self.url("/theses")).send().await?;
        let rows: Vec<Thesis> = data(resp).await?;
        Ok(to_views(&rows))
    }

    pub async fn search_theses(
        &self,
        filter: &ThesisFilter,
    ) -> Result<Vec<ThesisView>, ClientError> {
        let mut url = reqwest::Url::parse(&self.url("/theses/search"))
            .map_err(|e| ClientError::Parse(format!("invalid base url: {e}")))?;
        url.query_pairs_mut().extend_pairs(search_pairs(filter));

        let resp = self.http.get(url).send().await?;
        let rows: Vec<Thesis> = data(resp).await?;
        Ok(to_views(&rows))
    }

    /// The thesis with supervisors, topics, and keywords filled in.
    pub async fn get_thesis(&self, id: &str) -> Result<Option<ThesisView>, ClientError> {
        let resp = self
            .http
            .get(self.url(&format!("/theses/{id}")))
            .send()
            .await?;
        let detail: Option<ThesisDetail> = optional_data(resp).await?;
        Ok(detail.as_ref().map(ThesisView::from))
    }

    /// Create the thesis and its associations. Returns the bare-row view.
    pub async fn create_thesis(&self, view: &ThesisView) -> Result<ThesisView, ClientError> {
        let payload = NewThesis::try_from(view)?;
        let resp = self
            .http
            .post(self.url("/theses"))
            .json(&payload)
            .send()
            .await?;
        let row: Thesis = data(resp).await?;
        Ok(ThesisView::from(&row))
    }

    /// Replace every field and association of thesis `id` with the view's.
    pub async fn update_thesis(
        &self,
        id: &str,
        view: &ThesisView,
    ) -> Result<ThesisView, ClientError> {
        let payload = ThesisUpdate::try_from(view)?;
        let resp = self
            .http
            .put(self.url(&format!("/theses/{id}")))
            .json(&payload)
            .send()
            .await?;
        let row: Thesis = data(resp).await?;
        Ok(ThesisView::from(&row))
    }

    pub async fn delete_thesis(&self, id: &str) -> Result<(), ClientError> {
        let resp = self
            .http
            .delete(self.url(&format!("/theses/{id}")))
            .send()
            .await?;
        done(resp).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gts_core::enums::ThesisType;
    use pretty_assertions::assert_eq;

    #[test]
    fn search_pairs_skip_absent_filters() {
        let mut pairs = search_pairs(&ThesisFilter {
            query: Some("graph theory".into()),
            thesis_type: Some(ThesisType::ProficiencyInArt),
            year_from: Some(2001),
            ..ThesisFilter::default()
        });
        pairs.sort();
        assert_eq!(
            pairs,
            vec![
                ("query".to_string(), "graph theory".to_string()),
                ("type".to_string(), "Proficiency in Art".to_string()),
                ("year_from".to_string(), "2001".to_string()),
            ]
        );
        assert!(search_pairs(&ThesisFilter::default()).is_empty());
    }
}
