use gts_core::entities::SubjectTopic;
use gts_core::inputs::NewSubjectTopic;
use gts_core::views::SubjectTopicView;

use crate::error::ClientError;
use crate::http::{data, done, optional_data};
use crate::GtsClient;

impl GtsClient {
    pub async fn list_subject_topics(&self) -> Result<Vec<SubjectTopicView>, ClientError> {
        let resp = self.http.get(self.url("/subject-topics")).send().await?;
        let rows: Vec<SubjectTopic> = data(resp).await?;
        Ok(rows.iter().map(SubjectTopicView::from).collect())
    }

    pub async fn get_subject_topic(
        &self,
        id: &str,
    ) -> Result<Option<SubjectTopicView>, ClientError> {
        let resp = self
            .http
            .get(self.url(&format!("/subject-topics/{id}")))
            .send()
            .await?;
        let row: Option<SubjectTopic> = optional_data(resp).await?;
        Ok(row.as_ref().map(SubjectTopicView::from))
    }

    /// Create from a view; its `id` is ignored.
    pub async fn create_subject_topic(
        &self,
        view: &SubjectTopicView,
    ) -> Result<SubjectTopicView, ClientError> {
        let resp = self
            .http
            .post(self.url("/subject-topics"))
            .json(&NewSubjectTopic::from(view))
            .send()
            .await?;
        let row: SubjectTopic = data(resp).await?;
        Ok(SubjectTopicView::from(&row))
    }

    /// Overwrite every field of subject topic `id` with the view's values.
    pub async fn update_subject_topic(
        &self,
        id: &str,
        view: &SubjectTopicView,
    ) -> Result<SubjectTopicView, ClientError> {
        let resp = self
            .http
            .put(self.url(&format!("/subject-topics/{id}")))
            .json(&NewSubjectTopic::from(view))
            .send()
            .await?;
        let row: SubjectTopic = data(resp).await?;
        Ok(SubjectTopicView::from(&row))
    }

    pub async fn delete_subject_topic(&self, id: &str) -> Result<(), ClientError> {
        let resp = self
            .http
            .delete(self.url(&format!("/subject-topics/{id}")))
            .send()
            .await?;
        done(resp).await
    }
}
