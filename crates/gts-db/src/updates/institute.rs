//! Institute update builder.

use gts_core::inputs::InstituteUpdate;

pub struct InstituteUpdateBuilder(InstituteUpdate);

impl InstituteUpdateBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self(InstituteUpdate::default())
    }

    #[must_use]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.0.name = Some(name.into());
        self
    }

    /// Move the institute to another university.
    #[must_use]
    pub fn university_id(mut self, university_id: i64) -> Self {
        self.0.university_id = Some(university_id);
        self
    }

    #[must_use]
    pub fn build(self) -> InstituteUpdate {
        self.0
    }
}
