//! Person update builder.

use gts_core::inputs::PersonUpdate;

pub struct PersonUpdateBuilder(PersonUpdate);

impl PersonUpdateBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self(PersonUpdate::default())
    }

    #[must_use]
    pub fn first_name(mut self, first_name: impl Into<String>) -> Self {
        self.0.first_name = Some(first_name.into());
        self
    }

    #[must_use]
    pub fn last_name(mut self, last_name: impl Into<String>) -> Self {
        self.0.last_name = Some(last_name.into());
        self
    }

    #[must_use]
    pub fn email(mut self, email: impl Into<String>) -> Self {
        self.0.email = Some(email.into());
        self
    }

    /// `None` clears the stored affiliation.
    #[must_use]
    pub fn affiliation(mut self, affiliation: Option<String>) -> Self {
        self.0.affiliation = Some(affiliation);
        self
    }

    #[must_use]
    pub fn build(self) -> PersonUpdate {
        self.0
    }
}
