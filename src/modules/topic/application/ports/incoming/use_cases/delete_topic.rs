use async_trait::async_trait;

#[derive(Debug, Clone, thiserror::Error)]
pub enum DeleteTopicError {
    #[error("Topic not found")]
    TopicNotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),

    #[error("Cache invalidation failed: {0}")]
    CacheError(String),
}

#[async_trait]
pub trait DeleteTopicUseCase: Send + Sync {
    async fn execute(&self, id: i64) -> Result<(), DeleteTopicError>;
}
