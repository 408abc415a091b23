//! Subject topic update builder.

use gts_core::inputs::SubjectTopicUpdate;

pub struct SubjectTopicUpdateBuilder(SubjectTopicUpdate);

impl SubjectTopicUpdateBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self(SubjectTopicUpdate::default())
    }

    #[must_use]
    pub fn topic_name(mut self, topic_name: impl Into<String>) -> Self {
        self.0.topic_name = Some(topic_name.into());
        self
    }

    #[must_use]
    pub fn build(self) -> SubjectTopicUpdate {
        self.0
    }
}
