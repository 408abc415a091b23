//! University update builder.

use gts_core::inputs::UniversityUpdate;

pub struct UniversityUpdateBuilder(UniversityUpdate);

impl UniversityUpdateBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self(UniversityUpdate::default())
    }

    #[must_use]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.0.name = Some(name.into());
        self
    }

    #[must_use]
    pub fn country(mut self, country: impl Into<String>) -> Self {
        self.0.country = Some(country.into());
        self
    }

    #[must_use]
    pub fn city(mut self, city: impl Into<String>) -> Self {
        self.0.city = Some(city.into());
        self
    }

    #[must_use]
    pub fn build(self) -> UniversityUpdate {
        self.0
    }
}
