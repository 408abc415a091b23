use gts_core::entities::Person;
use gts_core::inputs::NewPerson;
use gts_core::views::PersonView;

use crate::error::ClientError;
use crate::http::{data, done, optional_data};
use crate::GtsClient;

impl GtsClient {
    pub async fn list_people(&self) -> Result<Vec<PersonView>, ClientError> {
        let resp = self.http.get(self.url("/people")).send().await?;
        let rows: Vec<Person> = data(resp).await?;
        Ok(rows.iter().map(PersonView::from).collect())
    }

    pub async fn get_person(&self, id: &str) -> Result<Option<PersonView>, ClientError> {
        let resp = self
            .http
            .get(self.url(&format!("/people/{id}")))
            .send()
            .await?;
        let row: Option<Person> = optional_data(resp).await?;
        Ok(row.as_ref().map(PersonView::from))
    }

    /// Create from a view; its `id` is ignored.
    pub async fn create_person(
        &self,
        view: &PersonView,
    ) -> Result<PersonView, ClientError> {
        let resp = self
            .http
            .post(self.url("/people"))
            .json(&NewPerson::from(view))
            .send()
            .await?;
        let row: Person = data(resp).await?;
        Ok(PersonView::from(&row))
    }

    /// Overwrite every field of person `id` with the view's values.
    pub async fn update_person(
        &self,
        id: &str,
        view: &PersonView,
    ) -> Result<PersonView, ClientError> {
        let resp = self
            .http
            .put(self.url(&format!("/people/{id}")))
            .json(&NewPerson::from(view))
            .send()
            .await?;
        let row: Person = data(resp).await?;
        Ok(PersonView::from(&row))
    }

    pub async fn delete_person(&self, id: &str) -> Result<(), ClientError> {
        let resp = self
            .http
            .delete(self.url(&format!("/people/{id}")))
            .send()
            .await?;
        done(resp).await
    }
}
