use async_trait::async_trait;

use crate::topic::application::ports::outgoing::TopicDetailView;

#[derive(Debug, Clone, thiserror::Error)]
pub enum GetTopicDetailError {
    #[error("Topic not found")]
    TopicNotFound,

    #[error("Failed to fetch topic: {0}")]
    QueryFailed(String),
}

#[async_trait]
pub trait GetTopicDetailUseCase: Send + Sync {
    async fn execute(&self, id: i64) -> Result<TopicDetailView, GetTopicDetailError>;
}
