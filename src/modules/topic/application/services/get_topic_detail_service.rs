use async_trait::async_trait;

use crate::topic::application::ports::{
    incoming::use_cases::{GetTopicDetailError, GetTopicDetailUseCase},
    outgoing::{TopicDetailView, TopicStore},
};

/// Detail reads go straight to the store; they are never cached.
#[derive(Debug, Clone)]
pub struct GetTopicDetailService<S>
where
    S: TopicStore,
{
    store: S,
}

impl<S> GetTopicDetailService<S>
where
    S: TopicStore,
{
    pub fn new(store: S) -> Self {
        Self { store }
    }
}

#[async_trait]
impl<S> GetTopicDetailUseCase for GetTopicDetailService<S>
where
    S: TopicStore,
{
    async fn execute(&self, id: i64) -> Result<TopicDetailView, GetTopicDetailError> {
        self.store
            .find_detail(id)
            .await
            .map_err(|e| GetTopicDetailError::QueryFailed(e.to_string()))?
            .ok_or(GetTopicDetailError::TopicNotFound)
    }
}
