use async_trait::async_trait;

use crate::topic::application::ports::{
    incoming::use_cases::{CreateTopicCommand, CreateTopicError, CreateTopicUseCase},
    outgoing::{CourseStore, NewTopic, TopicListCache, TopicStore, TopicView},
};

/// Resolves the course reference, persists the new topic and clears the list
/// cache before acknowledging success.
#[derive(Debug, Clone)]
pub struct CreateTopicService<S, C, L>
where
    S: TopicStore,
    C: CourseStore,
    L: TopicListCache,
{
    topics: S,
    courses: C,
    cache: L,
}

impl<S, C, L> CreateTopicService<S, C, L>
where
    S: TopicStore,
    C: CourseStore,
    L: TopicListCache,
{
    pub fn new(topics: S, courses: C, cache: L) -> Self {
        Self {
            topics,
            courses,
            cache,
        }
    }
}

#[async_trait]
impl<S, C, L> CreateTopicUseCase for CreateTopicService<S, C, L>
where
    S: TopicStore,
    C: CourseStore,
    L: TopicListCache,
{
    async fn execute(&self, command: CreateTopicCommand) -> Result<TopicView, CreateTopicError> {
        // Course existence is checked up front; nothing is persisted when the
        // reference is unknown.
        self.courses
            .find_by_id(command.course_id())
            .await
            .map_err(|e| CreateTopicError::RepositoryError(e.to_string()))?
            .ok_or(CreateTopicError::CourseNotFound)?;

        let created = self
            .topics
            .insert(NewTopic {
                title: command.title().to_string(),
                message: command.message().to_string(),
                course_id: command.course_id(),
            })
            .await
            .map_err(|e| CreateTopicError::RepositoryError(e.to_string()))?;

        // Stale pages must never outlive a mutation's acknowledgment.
        self.cache
            .invalidate_all()
            .await
            .map_err(|e| CreateTopicError::CacheError(e.to_string()))?;

        Ok(created)
    }
}
