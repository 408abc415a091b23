use gts_core::entities::Institute;
use gts_core::inputs::NewInstitute;
use gts_core::views::InstituteView;

use crate::error::ClientError;
use crate::http::{data, done, optional_data};
use crate::GtsClient;

fn to_views(rows: &[Institute]) -> Vec<InstituteView> {
    rows.iter().map(InstituteView::from).collect()
}

impl GtsClient {
    pub async fn list_institutes(&self) -> Result<Vec<InstituteView>, ClientError> {
        let resp = self.http.get(self.url("/institutes")).send().await?;
        let rows: Vec<Institute> = data(resp).await?;
        Ok(to_views(&rows))
    }

    pub async fn list_institutes_for_university(
        &self,
        university_id: &str,
    ) -> Result<Vec<InstituteView>, ClientError> {
        let resp = self
            .http
            .get(self.url(&format!("/institutes/university/{university_id}")))
            .send()
            .await?;
        let rows: Vec<Institute> = data(resp).await?;
        Ok(to_views(&rows))
    }

    pub async fn get_institute(&self, id: &str) -> Result<Option<InstituteView>, ClientError> {
        let resp = self
            .http
            .get(self.url(&format!("/institutes/{id}")))
            .send()
            .await?;
        let row: Option<Institute> = optional_data(resp).await?;
        Ok(row.as_ref().map(InstituteView::from))
    }

    /// Fails with [`ClientError::View`] if `university_id` is not numeric.
    pub async fn create_institute(
        &self,
        view: &InstituteView,
    ) -> Result<InstituteView, ClientError> {
        let payload = NewInstitute::try_from(view)?;
        let resp = self
            .http
            .post(self.url("/institutes"))
            .json(&payload)
            .send()
            .await?;
        let row: Institute = data(resp).await?;
        Ok(InstituteView::from(&row))
    }

    pub async fn update_institute(
        &self,
        id: &str,
        view: &InstituteView,
    ) -> Result<InstituteView, ClientError> {
        let payload = NewInstitute::try_from(view)?;
        let resp = self
            .http
            .put(self.url(&format!("/institutes/{id}")))
            .json(&payload)
            .send()
            .await?;
        let row: Institute = data(resp).await?;
        Ok(InstituteView::from(&row))
    }

    pub async fn delete_institute(&self, id: &str) -> Result<(), ClientError> {
        let resp = self
            .http
            .delete(self.url(&format!("/institutes/{id}")))
            .send()
            .await?;
        done(resp).await
    }
}
