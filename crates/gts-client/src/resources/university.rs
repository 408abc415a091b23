use gts_core::entities::University;
use gts_core::inputs::NewUniversity;
use gts_core::views::UniversityView;

use crate::error::ClientError;
use crate::http::{data, done, optional_data};
use crate::GtsClient;

impl GtsClient {
    pub async fn list_universities(&self) -> Result<Vec<UniversityView>, ClientError> {
        let resp = self.http.get(self.url("/universities")).send().await?;
        let rows: Vec<University> = data(resp).await?;
        Ok(rows.iter().map(UniversityView::from).collect())
    }

    pub async fn get_university(&self, id: &str) -> Result<Option<UniversityView>, ClientError> {
        let resp = self
            .http
            .get(self.url(&format!("/universities/{id}")))
            .send()
            .await?;
        let row: Option<University> = optional_data(resp).await?;
        Ok(row.as_ref().map(UniversityView::from))
    }

    /// Create from a view; its `id` is ignored.
    pub async fn create_university(
        &self,
        view: &UniversityView,
    ) -> Result<UniversityView, ClientError> {
        let resp = self
            .http
            .post(self.url("/universities"))
            .json(&NewUniversity::from(view))
            .send()
            .await?;
        let row: University = data(resp).await?;
        Ok(UniversityView::from(&row))
    }

    /// Overwrite every field of university `id` with the view's values.
    pub async fn update_university(
        &self,
        id: &str,
        view: &UniversityView,
    ) -> Result<UniversityView, ClientError> {
        let resp = self
            .http
            .put(self.url(&format!("/universities/{id}")))
            .json(&NewUniversity::from(view))
            .send()
            .await?;
        let row: University = data(resp).await?;
        Ok(UniversityView::from(&row))
    }

    pub async fn delete_university(&self, id: &str) -> Result<(), ClientError> {
        let resp = self
            .http
            .delete(self.url(&format!("/universities/{id}")))
            .send()
            .await?;
        done(resp).await
    }
}
