//! Thesis update builder.
//!
//! Association setters replace the whole set on write: passing
//! `supervisor_ids(vec![a])` leaves `a` as the only supervisor.

use gts_core::enums::ThesisType;
use gts_core::inputs::ThesisUpdate;

pub struct ThesisUpdateBuilder(ThesisUpdate);

impl ThesisUpdateBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self(ThesisUpdate::default())
    }

    #[must_use]
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.0.title = Some(title.into());
        self
    }

    #[must_use]
    pub fn abstract_text(mut self, abstract_text: impl Into<String>) -> Self {
        self.0.abstract_text = Some(abstract_text.into());
        self
    }

    #[must_use]
    pub fn author_id(mut self, author_id: i64) -> Self {
        self.0.author_id = Some(author_id);
        self
    }

    #[must_use]
    pub fn year(mut self, year: i32) -> Self {
        self.0.year = Some(year);
        self
    }

    #[must_use]
    pub fn thesis_type(mut self, thesis_type: ThesisType) -> Self {
        self.0.thesis_type = Some(thesis_type);
        self
    }

    #[must_use]
    pub fn university_id(mut self, university_id: i64) -> Self {
        self.0.university_id = Some(university_id);
        self
    }

    #[must_use]
    pub fn institute_id(mut self, institute_id: i64) -> Self {
        self.0.institute_id = Some(institute_id);
        self
    }

    #[must_use]
    pub fn num_pages(mut self, num_pages: i32) -> Self {
        self.0.num_pages = Some(num_pages);
        self
    }

    #[must_use]
    pub fn language(mut self, language: impl Into<String>) -> Self {
        self.0.language = Some(language.into());
        self
    }

    /// `YYYY-MM-DD`.
    #[must_use]
    pub fn submission_date(mut self, submission_date: impl Into<String>) -> Self {
        self.0.submission_date = Some(submission_date.into());
        self
    }

    #[must_use]
    pub fn supervisor_ids(mut self, supervisor_ids: Vec<i64>) -> Self {
        self.0.supervisor_ids = Some(supervisor_ids);
        self
    }

    /// `None` removes the co-supervisor.
    #[must_use]
    pub fn co_supervisor_id(mut self, co_supervisor_id: Option<i64>) -> Self {
        self.0.co_supervisor_id = Some(co_supervisor_id);
        self
    }

    #[must_use]
    pub fn subject_topic_ids(mut self, subject_topic_ids: Vec<i64>) -> Self {
        self.0.subject_topic_ids = Some(subject_topic_ids);
        self
    }

    #[must_use]
    pub fn keywords(mut self, keywords: Vec<String>) -> Self {
        self.0.keywords = Some(keywords);
        self
    }

    #[must_use]
    pub fn build(self) -> ThesisUpdate {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn builder_only_sets_named_fields() {
        let update = ThesisUpdateBuilder::new()
            .title("Renamed")
            .co_supervisor_id(None)
            .build();
        assert_eq!(update.title.as_deref(), Some("Renamed"));
        assert_eq!(update.co_supervisor_id, Some(None));
        assert_eq!(update.supervisor_ids, None);
        assert!(update.has_scalar_changes());
    }

    #[test]
    fn association_only_update_has_no_scalar_changes() {
        let update = ThesisUpdateBuilder::new().keywords(vec!["x".into()]).build();
        assert!(!update.has_scalar_changes());
    }
}
