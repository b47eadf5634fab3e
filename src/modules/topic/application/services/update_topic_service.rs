use async_trait::async_trait;

use crate::topic::application::ports::{
    incoming::use_cases::{UpdateTopicCommand, UpdateTopicError, UpdateTopicUseCase},
    outgoing::{TopicChanges, TopicListCache, TopicStore, TopicStoreError, TopicView},
};

/// Applies a title/message change to an existing topic and clears the list
/// cache before acknowledging success.
#[derive(Debug, Clone)]
pub struct UpdateTopicService<S, L>
where
    S: TopicStore,
    L: TopicListCache,
{
    store: S,
    cache: L,
}

impl<S, L> UpdateTopicService<S, L>
where
    S: TopicStore,
    L: TopicListCache,
{
    pub fn new(store: S, cache: L) -> Self {
        Self { store, cache }
    }
}

#[async_trait]
impl<S, L> UpdateTopicUseCase for UpdateTopicService<S, L>
where
    S: TopicStore,
    L: TopicListCache,
{
    async fn execute(&self, command: UpdateTopicCommand) -> Result<TopicView, UpdateTopicError> {
        let updated = self
            .store
            .update(
                command.id(),
                TopicChanges {
                    title: command.title().to_string(),
                    message: command.message().to_string(),
                },
            )
            .await
            .map_err(|e| match e {
                TopicStoreError::TopicNotFound => UpdateTopicError::TopicNotFound,
                other => UpdateTopicError::RepositoryError(other.to_string()),
            })?;

        self.cache
            .invalidate_all()
            .await
            .map_err(|e| UpdateTopicError::CacheError(e.to_string()))?;

        Ok(updated)
    }
}
