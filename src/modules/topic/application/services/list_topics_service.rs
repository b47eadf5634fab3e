use async_trait::async_trait;
use tracing::warn;

use crate::topic::application::ports::{
    incoming::use_cases::{ListTopicsError, ListTopicsQuery, ListTopicsUseCase},
    outgoing::{TopicListCache, TopicListKey, TopicPage, TopicStore},
};

/// Serves list queries through the cache: identical (filter, pagination,
/// sort) combinations are answered from the cached page until a mutation
/// clears the cache.
#[derive(Debug, Clone)]
pub struct ListTopicsService<S, C>
where
    S: TopicStore,
    C: TopicListCache,
{
    store: S,
    cache: C,
}

impl<S, C> ListTopicsService<S, C>
where
    S: TopicStore,
    C: TopicListCache,
{
    pub fn new(store: S, cache: C) -> Self {
        Self { store, cache }
    }
}

#[async_trait]
impl<S, C> ListTopicsUseCase for ListTopicsService<S, C>
where
    S: TopicStore,
    C: TopicListCache,
{
    async fn execute(&self, query: ListTopicsQuery) -> Result<TopicPage, ListTopicsError> {
        let key = TopicListKey::new(
            query.course_name().map(str::to_string),
            query.page(),
            query.sort(),
        );

        // A broken cache must not take reads down with it; fall through to
        // the store instead.
        match self.cache.get(&key).await {
            Ok(Some(page)) => return Ok(page),
            Ok(None) => {}
            Err(e) => warn!(key = %key.token(), error = %e, "list cache read failed"),
        }

        let page = self
            .store
            .list(query.course_name(), query.sort(), query.page())
            .await
            .map_err(|e| ListTopicsError::QueryFailed(e.to_string()))?;

        if let Err(e) = self.cache.put(&key, &page).await {
            warn!(key = %key.token(), error = %e, "list cache write failed");
        }

        Ok(page)
    }
}
